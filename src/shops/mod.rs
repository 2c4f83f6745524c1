//! Shops connected to the Printify account.
//!
//! **Feature flag:** `shops` (enabled by default)
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET shops.json` | List shops |
//! | `DELETE shops/{id}/connection.json` | Disconnect a shop |

pub mod client;
pub mod types;

pub use client::Shops;
