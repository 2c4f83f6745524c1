//! Printify catalog: blueprints, print providers, variants and shipping.
//!
//! **Feature flag:** `catalog` (enabled by default)
//!
//! A *blueprint* is a product template (a t-shirt model, a mug size) and a *print provider* is a
//! facility that prints it. Variants and shipping rates are specific to a blueprint and print
//! provider pair.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET catalog/blueprints.json` | List blueprints |
//! | `GET catalog/blueprints/{id}.json` | Get blueprint by ID |
//! | `GET catalog/blueprints/{id}/print_providers.json` | List print providers of a blueprint |
//! | `GET catalog/blueprints/{id}/print_providers/{id}/variants.json` | List variants |
//! | `GET catalog/blueprints/{id}/print_providers/{id}/shipping.json` | Get shipping rates |
//! | `GET catalog/print_providers.json` | List print providers |
//! | `GET catalog/print_providers/{id}.json` | Get print provider by ID |
//!
//! # Example
//!
//! ```no_run
//! use printify_client_sdk::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default().authenticate_from_env()?;
//!
//! let blueprint = client.catalog().blueprint(5).await?;
//! for provider in client.catalog().blueprint_print_providers(5).await? {
//!     let variants = client.catalog().variants(5, provider.id).await?;
//!     println!("{}: {} variants of {:?}", provider.title, variants.len(), blueprint);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Catalog;
