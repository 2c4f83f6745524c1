//! Types for the order endpoints.
//!
//! Monetary amounts are integer cents of the shop currency.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

pub mod request;
pub mod response;

pub use request::{OrdersRequest, Submission, SubmissionLineItem};
pub use response::{
    LineItem, LineItemMetadata, Order, OrderMetadata, Shipment, ShippingCosts, SubmittedOrder,
};

/// Fulfillment status of an order or of one of its line items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum OrderStatus {
    Pending,
    OnHold,
    PaymentNotReceived,
    CheckingQuality,
    QualityDeclined,
    QualityApproved,
    ReadyForProduction,
    SendingToProduction,
    InProduction,
    HasIssues,
    Cancelled,
    PartiallyFulfilled,
    Fulfilled,
    CallbackReceived,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

/// Shipping speed of an order, encoded as an integer on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize_repr,
    Deserialize_repr,
    strum_macros::Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum ShippingMethod {
    #[default]
    Standard = 1,
    Express = 2,
}
