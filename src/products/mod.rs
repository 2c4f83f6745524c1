//! Products of a shop: listing, creation, updates and the publishing workflow.
//!
//! **Feature flag:** `products` (enabled by default)
//!
//! Publishing is a handshake between Printify and the sales channel. [`Products::publish`] asks
//! Printify to push a product to the channel and locks it; the integration then reports the
//! outcome with [`Products::publishing_succeeded`] or [`Products::publishing_failed`], which
//! unlocks it again.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET shops/{id}/products.json` | List products (paged) |
//! | `GET shops/{id}/products/{id}.json` | Get product by ID |
//! | `POST shops/{id}/products.json` | Create a product |
//! | `PUT shops/{id}/products/{id}.json` | Update a product |
//! | `DELETE shops/{id}/products/{id}.json` | Delete a product |
//! | `POST shops/{id}/products/{id}/publish.json` | Publish a product |
//! | `POST shops/{id}/products/{id}/publishing_succeeded.json` | Mark publishing as succeeded |
//! | `POST shops/{id}/products/{id}/publishing_failed.json` | Mark publishing as failed |
//! | `POST shops/{id}/products/{id}/unpublish.json` | Notify that a product was unpublished |
//!
//! # Example
//!
//! ```no_run
//! use printify_client_sdk::Client;
//! use printify_client_sdk::products::types::ProductsRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default().authenticate_from_env()?;
//!
//! let request = ProductsRequest::builder().limit(50).page(2).build();
//! for product in client.products().list(1_234_567, &request).await? {
//!     println!("{:?}: {}", product.id, product.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Products;
