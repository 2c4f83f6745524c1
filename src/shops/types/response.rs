use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Shop {
    pub id: u64,
    #[serde(default)]
    #[builder(default)]
    pub title: String,
    /// `etsy`, `shopify`, `disconnected`, `custom_integration`, ...
    #[serde(default)]
    #[builder(default)]
    pub sales_channel: String,
}
