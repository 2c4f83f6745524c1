#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::events::EventType;
use crate::types::Url;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[non_exhaustive]
pub struct CreateWebhookRequest {
    pub topic: EventType,
    pub url: Url,
    /// Used by Printify to sign deliveries.
    #[builder(into)]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[non_exhaustive]
pub struct ModifyWebhookRequest {
    pub url: Url,
}
