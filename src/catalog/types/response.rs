use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::types::{Address, Decimal, Url};

/// A product template such as a specific t-shirt or mug model.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Blueprint {
    pub id: u32,
    #[serde(default)]
    #[builder(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub brand: String,
    #[serde(default)]
    #[builder(default)]
    pub model: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub images: Vec<Url>,
}

/// A facility that prints and ships blueprints.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PrintProvider {
    pub id: u32,
    #[serde(default)]
    #[builder(default)]
    pub title: String,
    pub location: Option<Address>,
    /// Only present on [`crate::catalog::Catalog::print_provider`].
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub blueprints: Vec<Blueprint>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Variant {
    pub id: u32,
    #[serde(default)]
    #[builder(default)]
    pub title: String,
    #[serde(default)]
    #[builder(default)]
    pub options: VariantOptions,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub placeholders: Vec<Placeholder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct VariantOptions {
    pub color: Option<String>,
    pub size: Option<String>,
}

/// A printable area of a variant, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Placeholder {
    /// `front`, `back`, `sleeve_left`, ...
    pub position: String,
    pub height: u32,
    pub width: u32,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Shipping {
    pub handling_time: ShippingHandlingTime,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub profiles: Vec<ShippingProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ShippingHandlingTime {
    pub value: u32,
    /// Usually `day`.
    pub unit: String,
}

/// Rates for a set of variants shipped to a set of countries.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ShippingProfile {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub variant_ids: Vec<u32>,
    pub first_item: ShippingProfileItem,
    pub additional_items: ShippingProfileItem,
    /// ISO country codes, or `REST_OF_THE_WORLD`.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ShippingProfileItem {
    /// In cents of `currency`.
    pub cost: Decimal,
    pub currency: String,
}
