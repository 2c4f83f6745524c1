use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::events::EventType;
use crate::serde_helpers::StringFromAny;
use crate::types::Url;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Webhook {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub topic: EventType,
    pub url: Url,
    #[serde_as(as = "StringFromAny")]
    pub shop_id: String,
    pub secret: Option<String>,
}
