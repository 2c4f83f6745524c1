use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::serde_helpers::Timestamp;
use crate::types::{DateTime, Url, Utc};

/// A product of a shop.
///
/// Prices and costs are in cents of the shop currency.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Product {
    /// Hex identifier assigned by Printify; unset when creating.
    pub id: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub title: String,
    /// May contain HTML.
    #[serde(default)]
    #[builder(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub tags: Vec<String>,
    /// Read-only; up to three options such as colors and sizes.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub options: Vec<ProductOption>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub variants: Vec<ProductVariant>,
    /// Read-only mock-up images grouped by variant and position.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub images: Vec<MockupImage>,
    #[serde_as(as = "Option<Timestamp>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<Timestamp>")]
    #[serde(alias = "update_at")]
    pub updated_at: Option<DateTime<Utc>>,
    pub visible: Option<bool>,
    /// Set while the product is being published; locked products cannot be updated.
    pub is_locked: Option<bool>,
    /// Required on create, read-only afterwards.
    pub blueprint_id: Option<u32>,
    pub user_id: Option<u64>,
    pub shop_id: Option<u64>,
    /// Required on create, read-only afterwards.
    pub print_provider_id: Option<u32>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub print_areas: Vec<PrintArea>,
    pub print_details: Option<PrintDetails>,
    /// Channel specific attributes; `null` or empty for custom integrations.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub sales_channel_properties: Vec<serde_json::Value>,
    /// References in the sales channel, set through publishing succeeded.
    pub external: Option<External>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ProductOption {
    pub name: String,
    /// `color`, `size`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub values: Vec<OptionValue>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct OptionValue {
    pub id: u32,
    pub title: String,
    /// Hex codes, only for color options.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub colors: Vec<String>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct ProductVariant {
    /// Catalog variant id.
    pub id: u32,
    pub sku: Option<String>,
    pub cost: Option<u32>,
    pub price: u32,
    pub title: Option<String>,
    pub grams: Option<u32>,
    pub is_enabled: Option<bool>,
    pub is_default: Option<bool>,
    pub is_available: Option<bool>,
    /// Ids of the [`OptionValue`]s making up this variant.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub options: Vec<u32>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct MockupImage {
    pub src: Url,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub variant_ids: Vec<u32>,
    pub position: String,
    #[serde(default)]
    #[builder(default)]
    pub is_default: bool,
}

/// Artwork for a set of variants.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PrintArea {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub variant_ids: Vec<u32>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub placeholders: Vec<PrintAreaPlaceholder>,
    /// Hex background color, e.g. `#ffffff`.
    pub background: Option<String>,
}

/// Images placed on one printable position (front, back, ...).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PrintAreaPlaceholder {
    pub position: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub images: Vec<PrintImage>,
}

/// An uploaded image positioned on a placeholder.
///
/// `x` and `y` are relative to the placeholder (0.5 centers the image), `scale` is relative to the
/// placeholder width and `angle` is in degrees.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PrintImage {
    /// Id of an image from [`crate::uploads`].
    pub id: String,
    pub name: Option<String>,
    /// MIME type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub angle: f64,
}

/// Print settings of some blueprints. The API sends `[]` when there are none.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[serde(default)]
#[non_exhaustive]
pub struct PrintDetails {
    pub print_on_side: Option<String>,
    pub separator_type: Option<String>,
    pub separator_color: Option<String>,
}

/// A product's references in the sales channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct External {
    pub id: String,
    /// URL path or handle of the product in the channel.
    pub handle: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_print_details_array_should_be_default() -> anyhow::Result<()> {
        let details: PrintDetails = serde_json::from_value(json!([]))?;
        let filled: PrintDetails = serde_json::from_value(json!({"print_on_side": "mirror"}))?;

        assert_eq!(details, PrintDetails::default());
        assert_eq!(filled.print_on_side.as_deref(), Some("mirror"));
        Ok(())
    }

    #[test]
    fn product_should_skip_read_only_fields_when_unset() -> anyhow::Result<()> {
        let product = Product::builder().title("Tee").build();

        assert_eq!(
            serde_json::to_value(&product)?,
            json!({
                "title": "Tee",
                "description": "",
                "tags": [],
                "variants": [],
                "print_areas": []
            })
        );
        Ok(())
    }
}
