use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::{OrderStatus, ShippingMethod};
use crate::serde_helpers::{StringFromAny, Timestamp};
use crate::types::{Address, DateTime, Url, Utc};

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Order {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde(default)]
    #[builder(default)]
    pub address_to: Address,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub line_items: Vec<LineItem>,
    pub metadata: Option<OrderMetadata>,
    #[serde(default)]
    #[builder(default)]
    pub total_price: u32,
    #[serde(default)]
    #[builder(default)]
    pub total_shipping: u32,
    #[serde(default)]
    #[builder(default)]
    pub total_tax: u32,
    /// [`OrderStatus::Unknown`] with an empty value when the API leaves it out.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub status: OrderStatus,
    #[serde(default)]
    #[builder(default)]
    pub shipping_method: ShippingMethod,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub shipments: Vec<Shipment>,
    #[serde_as(as = "Option<Timestamp>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Timestamp>")]
    pub sent_to_production_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Timestamp>")]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct OrderMetadata {
    /// `external`, `manual`, `sample`, ...
    pub order_type: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub shop_order_id: Option<String>,
    pub shop_order_label: Option<String>,
    #[serde_as(as = "Option<Timestamp>")]
    pub shop_fulfilled_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct LineItem {
    pub product_id: String,
    pub variant_id: u32,
    pub quantity: u32,
    pub print_provider_id: Option<u32>,
    pub cost: Option<u32>,
    pub shipping_cost: Option<u32>,
    pub status: Option<OrderStatus>,
    pub metadata: Option<LineItemMetadata>,
    #[serde_as(as = "Option<Timestamp>")]
    pub sent_to_production_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Timestamp>")]
    pub fulfilled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct LineItemMetadata {
    pub title: Option<String>,
    pub price: Option<u32>,
    pub variant_label: Option<String>,
    pub sku: Option<String>,
    pub country: Option<String>,
}

/// A tracked parcel of an order.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Shipment {
    pub carrier: String,
    /// Tracking number.
    pub number: String,
    pub url: Option<Url>,
    #[serde_as(as = "Option<Timestamp>")]
    pub delivered_at: Option<DateTime<Utc>>,
}

/// Shipping quote returned by [`crate::orders::Orders::calculate_shipping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ShippingCosts {
    pub standard: u32,
    pub express: u32,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct SubmittedOrder {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
}
