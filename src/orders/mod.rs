//! Orders of a shop.
//!
//! **Feature flag:** `orders` (enabled by default)
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET shops/{id}/orders.json` | List orders (paged, filterable by status) |
//! | `GET shops/{id}/orders/{id}.json` | Get order by ID |
//! | `POST shops/{id}/orders.json` | Submit an order |
//! | `POST shops/{id}/orders/shipping.json` | Calculate shipping cost |
//! | `POST shops/{id}/orders/{id}/send_to_production.json` | Send an order to production |
//! | `POST shops/{id}/orders/{id}/cancel.json` | Cancel an unpaid order |
//!
//! # Example
//!
//! ```no_run
//! use printify_client_sdk::Client;
//! use printify_client_sdk::orders::types::{OrderStatus, OrdersRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default().authenticate_from_env()?;
//!
//! let request = OrdersRequest::builder()
//!     .limit(20)
//!     .status(OrderStatus::OnHold)
//!     .build();
//!
//! for order in client.orders().list(1_234_567, &request).await? {
//!     println!("{} {} {}", order.id, order.status, order.total_price);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Orders;
