#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{OrderStatus, ShippingMethod};
use crate::types::Address;

/// Query of [`crate::orders::Orders::list`].
///
/// Parameters are sent in the order `limit`, `page`, `status`; a `limit` equal to the API default
/// of 10 is not sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct OrdersRequest {
    #[serde(skip_serializing_if = "crate::pagination::is_default_limit")]
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub status: Option<OrderStatus>,
}

/// Body of [`crate::orders::Orders::submit`] and [`crate::orders::Orders::calculate_shipping`].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Submission {
    /// Identifier of the order in the caller's system.
    pub external_id: String,
    /// Shown to the customer; defaults to `external_id` on Printify's side.
    pub label: Option<String>,
    pub line_items: Vec<SubmissionLineItem>,
    #[serde(default)]
    #[builder(default)]
    pub shipping_method: ShippingMethod,
    #[serde(default)]
    #[builder(default)]
    pub send_shipping_notification: bool,
    pub address_to: Address,
}

/// A line of a [`Submission`], referencing either an existing product variant or a SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum SubmissionLineItem {
    Product {
        product_id: String,
        variant_id: u32,
        quantity: u32,
    },
    Sku {
        sku: String,
        quantity: u32,
    },
}

impl SubmissionLineItem {
    /// A line item for a variant of an existing product.
    #[must_use]
    pub fn product<S: Into<String>>(product_id: S, variant_id: u32, quantity: u32) -> Self {
        Self::Product {
            product_id: product_id.into(),
            variant_id,
            quantity,
        }
    }

    /// A line item identified by the SKU of a product variant.
    #[must_use]
    pub fn sku<S: Into<String>>(sku: S, quantity: u32) -> Self {
        Self::Sku {
            sku: sku.into(),
            quantity,
        }
    }
}
