#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::External;

/// Query of [`crate::products::Products::list`].
///
/// A `limit` equal to the API default of 10 is not sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ProductsRequest {
    #[serde(skip_serializing_if = "crate::pagination::is_default_limit")]
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Which parts of a product are pushed to the sales channel on publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PublishingProperties {
    #[builder(default = true)]
    pub title: bool,
    #[builder(default = true)]
    pub description: bool,
    #[builder(default = true)]
    pub images: bool,
    #[builder(default = true)]
    pub variants: bool,
    #[builder(default = true)]
    pub tags: bool,
}

impl Default for PublishingProperties {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PublishingSucceededRequest<'req> {
    pub external: &'req External,
}

#[derive(Debug, Serialize)]
pub(crate) struct PublishingFailedRequest<'req> {
    pub reason: &'req str,
}
