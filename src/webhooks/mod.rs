//! Webhook subscriptions of a shop.
//!
//! **Feature flag:** `webhooks` (enabled by default, implies `events`)
//!
//! A webhook delivers [`crate::events::Event`]s of one [`crate::events::EventType`] to a URL.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET shops/{id}/webhooks.json` | List webhooks |
//! | `GET shops/{id}/webhooks/{id}.json` | Get webhook by ID |
//! | `POST shops/{id}/webhooks.json` | Create a webhook |
//! | `PUT shops/{id}/webhooks/{id}.json` | Change the URL of a webhook |
//! | `DELETE shops/{id}/webhooks/{id}.json` | Delete a webhook |
//!
//! # Example
//!
//! ```no_run
//! use printify_client_sdk::Client;
//! use printify_client_sdk::events::EventType;
//! use printify_client_sdk::types::Url;
//! use printify_client_sdk::webhooks::types::CreateWebhookRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default().authenticate_from_env()?;
//!
//! let request = CreateWebhookRequest::builder()
//!     .topic(EventType::OrderCreated)
//!     .url(Url::parse("https://example.com/webhooks/printify")?)
//!     .secret("shared-secret")
//!     .build();
//!
//! let webhook = client.webhooks().create(1_234_567, &request).await?;
//! println!("{webhook:?}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Webhooks;
