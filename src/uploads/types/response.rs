use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::serde_helpers::{StringFromAny, Timestamp};
use crate::types::{DateTime, Url, Utc};

/// An image in the account's library.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Image {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    #[builder(default)]
    pub height: u32,
    #[serde(default)]
    #[builder(default)]
    pub width: u32,
    /// In bytes.
    #[serde(default)]
    #[builder(default)]
    pub size: u64,
    pub mime_type: Option<String>,
    pub preview_url: Option<Url>,
    #[serde_as(as = "Option<Timestamp>")]
    pub upload_time: Option<DateTime<Utc>>,
}

/// One page of [`Image`]s.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct PagedImages {
    #[serde(default = "first_page")]
    #[builder(default = 1)]
    pub current_page: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub data: Vec<Image>,
    pub first_page_url: Option<String>,
    pub from: Option<u32>,
    #[serde(default = "first_page")]
    #[builder(default = 1)]
    pub last_page: u32,
    pub last_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub path: Option<String>,
    pub per_page: Option<u32>,
    pub prev_page_url: Option<String>,
    pub to: Option<u32>,
    #[serde(default)]
    #[builder(default)]
    pub total: u32,
}

impl PagedImages {
    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some() || self.current_page < self.last_page
    }
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn paged_images_with_null_data_should_be_empty() -> anyhow::Result<()> {
        let page: PagedImages = serde_json::from_value(json!({
            "current_page": 2,
            "data": null,
            "last_page": 2,
            "next_page_url": null,
            "total": 0
        }))?;

        assert!(page.data.is_empty());
        assert!(!page.has_next_page());
        Ok(())
    }

    #[test]
    fn image_should_accept_printify_timestamps() -> anyhow::Result<()> {
        let image: Image = serde_json::from_value(json!({
            "id": "5e16d66791287a0006e522b2",
            "file_name": "png-images-logo-1.jpg",
            "height": 5979,
            "width": 17045,
            "size": 1_138_575,
            "mime_type": "image/png",
            "preview_url": "https://example.com/image-storage/uuid1",
            "upload_time": "2020-01-09 07:29:43"
        }))?;

        assert_eq!(image.size, 1_138_575);
        assert_eq!(image.mime_type.as_deref(), Some("image/png"));
        assert_eq!(
            image.upload_time.map(|t| t.to_rfc3339()),
            Some("2020-01-09T07:29:43+00:00".to_owned())
        );
        Ok(())
    }
}
