#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::Url;

/// Query of [`crate::uploads::Uploads::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct UploadsRequest {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

/// Body of [`crate::uploads::Uploads::upload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum UploadImageRequest {
    /// Printify downloads the image from `url`.
    Url { file_name: String, url: Url },
    /// The image is sent inline, base64 encoded.
    Contents { file_name: String, contents: String },
}

impl UploadImageRequest {
    #[must_use]
    pub fn from_url<S: Into<String>>(file_name: S, url: Url) -> Self {
        Self::Url {
            file_name: file_name.into(),
            url,
        }
    }

    /// Wraps contents that are already base64 encoded.
    #[must_use]
    pub fn from_base64<S: Into<String>, C: Into<String>>(file_name: S, contents: C) -> Self {
        Self::Contents {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Base64 encodes `bytes` with the standard alphabet.
    #[must_use]
    pub fn from_bytes<S: Into<String>>(file_name: S, bytes: &[u8]) -> Self {
        Self::from_base64(file_name, STANDARD.encode(bytes))
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Url { file_name, .. } | Self::Contents { file_name, .. } => file_name,
        }
    }
}
