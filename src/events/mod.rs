//! Notifications Printify sends to webhook URLs.
//!
//! **Feature flag:** `events` (enabled by default)
//!
//! Printify `POST`s an [`Event`] to every webhook subscribed to its [`EventType`]. This module
//! only parses the payload; receiving the request and checking its signature is left to the
//! caller's HTTP server.
//!
//! ```
//! use printify_client_sdk::events::{Event, EventType};
//!
//! let body = r#"{
//!     "id": "653b6be8-2ff7-4ab5-a7a6-6889a8b3bbf5",
//!     "type": "order:created",
//!     "created_at": "2022-05-17 15:00:00+00:00",
//!     "resource": {
//!         "id": "5a96f649b2439217d070f507",
//!         "type": "order",
//!         "data": {"shop_id": 815256, "status": "pending"}
//!     }
//! }"#;
//!
//! let event = Event::from_json(body)?;
//! assert_eq!(event.kind, EventType::OrderCreated);
//! assert_eq!(event.resource.data["shop_id"], 815256);
//! # Ok::<(), printify_client_sdk::error::Error>(())
//! ```

use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::Result;
use crate::client::JsonMode;
use crate::serde_helpers::{StringFromAny, Timestamp};
use crate::types::{DateTime, Utc, Uuid};

/// Topic of an [`Event`], also used to subscribe webhooks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum EventType {
    #[serde(rename = "order:created")]
    #[strum(serialize = "order:created")]
    OrderCreated,
    #[serde(rename = "order:updated")]
    #[strum(serialize = "order:updated")]
    OrderUpdated,
    #[serde(rename = "order:sent-to-production")]
    #[strum(serialize = "order:sent-to-production")]
    OrderSentToProduction,
    #[serde(rename = "order:shipment:created")]
    #[strum(serialize = "order:shipment:created")]
    OrderShipmentCreated,
    #[serde(rename = "order:shipment:delivered")]
    #[strum(serialize = "order:shipment:delivered")]
    OrderShipmentDelivered,
    #[serde(rename = "product:deleted")]
    #[strum(serialize = "product:deleted")]
    ProductDeleted,
    #[serde(rename = "product:publish:started")]
    #[strum(serialize = "product:publish:started")]
    ProductPublishStarted,
    #[serde(rename = "shop:disconnected")]
    #[strum(serialize = "shop:disconnected")]
    ShopDisconnected,
    /// Unknown event type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// A webhook notification.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Event {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde_as(as = "Option<Timestamp>")]
    pub created_at: Option<DateTime<Utc>>,
    pub resource: Resource,
}

impl Event {
    /// Parses the body of a webhook request.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Internal`] error if `body` is not a valid event.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;

        crate::serde_helpers::decode(&value, JsonMode::default())
    }
}

/// The record an [`Event`] is about.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Resource {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    /// `order`, `product` or `shop`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Topic specific payload.
    #[serde(default)]
    #[builder(default)]
    pub data: serde_json::Value,
}

impl Resource {
    /// Maps [`Self::data`] onto a typed model.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Internal`] error if the payload does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        crate::serde_helpers::decode(&self.data, JsonMode::default())
    }
}
