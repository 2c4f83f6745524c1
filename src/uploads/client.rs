use reqwest::Method;

use super::types::{Image, PagedImages, UploadImageRequest, UploadsRequest};
use crate::auth::state::{State, Unauthenticated};
use crate::client::{Client, path_segment};
use crate::pagination::validate_limit;
use crate::{Result, ToQueryParams as _};

/// Upload endpoints, borrowed from a [`Client`] through [`Client::uploads`].
#[derive(Debug)]
pub struct Uploads<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Uploads<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Lists one page of uploaded images.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Kind::Validation`], without sending anything, when
    /// `request.limit` is above [`crate::pagination::MAX_LIMIT`].
    pub async fn list(&self, request: &UploadsRequest) -> Result<Option<PagedImages>> {
        validate_limit(request.limit)?;
        let query = request.query_params()?;

        self.client.get("uploads.json", &query).await
    }

    pub async fn image(&self, image_id: &str) -> Result<Option<Image>> {
        let image_id = path_segment(image_id)?;

        self.client
            .get(&format!("uploads/{image_id}.json"), "")
            .await
    }

    pub async fn upload(&self, request: &UploadImageRequest) -> Result<Option<Image>> {
        self.client
            .send_json(Method::POST, "uploads/images.json", request)
            .await
    }

    /// Archives an image; archived images are hidden from [`Self::list`].
    pub async fn archive(&self, image_id: &str) -> Result<()> {
        let image_id = path_segment(image_id)?;

        self.client
            .execute(Method::POST, &format!("uploads/{image_id}/archive.json"))
            .await
    }
}
