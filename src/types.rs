//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`. The shared [`Address`]
//! model lives here as well.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Date and time types for timestamps in API responses.
pub use chrono::{DateTime, Utc};
/// Arbitrary precision decimal type for catalog shipping costs.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use printify_client_sdk::types::dec;
/// let cost = dec!(4.99);
/// ```
pub use rust_decimal_macros::dec;
/// URL type used for image sources, webhook targets and tracking links.
pub use url::Url;
/// UUID type used for webhook event identifiers.
pub use uuid::Uuid;

/// A postal address.
///
/// Used both for print provider locations in the catalog and for the recipient of an order
/// (`address_to`). Recipient-only fields are optional.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(default)]
#[non_exhaustive]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Two-letter ISO country code.
    #[builder(default)]
    pub country: String,
    #[builder(default)]
    pub region: String,
    #[builder(default)]
    pub address1: String,
    pub address2: Option<String>,
    #[builder(default)]
    pub city: String,
    #[builder(default)]
    pub zip: String,
}
