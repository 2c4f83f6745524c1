use reqwest::Method;

use super::types::request::{PublishingFailedRequest, PublishingSucceededRequest};
use super::types::{External, Product, ProductsRequest, PublishingProperties};
use crate::auth::state::{State, Unauthenticated};
use crate::client::{Client, path_segment};
use crate::error::Error;
use crate::pagination::validate_limit;
use crate::{Result, ToQueryParams as _};

/// Product endpoints, borrowed from a [`Client`] through [`Client::products`].
#[derive(Debug)]
pub struct Products<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Products<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Lists one page of products of a shop.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Kind::Validation`], without sending anything, when
    /// `request.limit` is above [`crate::pagination::MAX_LIMIT`].
    pub async fn list(&self, shop_id: u64, request: &ProductsRequest) -> Result<Vec<Product>> {
        validate_limit(request.limit)?;
        let query = request.query_params()?;

        self.client
            .get_list(&format!("shops/{shop_id}/products.json"), &query, &["data"])
            .await
    }

    pub async fn product(&self, shop_id: u64, product_id: &str) -> Result<Option<Product>> {
        let product_id = path_segment(product_id)?;

        self.client
            .get(&format!("shops/{shop_id}/products/{product_id}.json"), "")
            .await
    }

    /// Creates a product. `blueprint_id`, `print_provider_id`, `variants` and `print_areas` are
    /// required by the API.
    pub async fn create(&self, shop_id: u64, product: &Product) -> Result<Option<Product>> {
        self.client
            .send_json(
                Method::POST,
                &format!("shops/{shop_id}/products.json"),
                product,
            )
            .await
    }

    /// Updates the product identified by `product.id`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Kind::Validation`] when `product.id` is missing or blank.
    pub async fn update(&self, shop_id: u64, product: &Product) -> Result<Option<Product>> {
        let product_id = match product.id.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(Error::validation("product id is required to update a product")),
        };
        let product_id = path_segment(product_id)?;

        self.client
            .send_json(
                Method::PUT,
                &format!("shops/{shop_id}/products/{product_id}.json"),
                product,
            )
            .await
    }

    pub async fn delete(&self, shop_id: u64, product_id: &str) -> Result<()> {
        let product_id = path_segment(product_id)?;

        self.client
            .execute(
                Method::DELETE,
                &format!("shops/{shop_id}/products/{product_id}.json"),
            )
            .await
    }

    /// Starts publishing a product to the shop's sales channel. `properties` selects which parts
    /// of the product are pushed.
    pub async fn publish(
        &self,
        shop_id: u64,
        product_id: &str,
        properties: &PublishingProperties,
    ) -> Result<()> {
        let product_id = path_segment(product_id)?;

        self.client
            .execute_json(
                Method::POST,
                &format!("shops/{shop_id}/products/{product_id}/publish.json"),
                properties,
            )
            .await
    }

    /// Reports that publishing succeeded and records the sales channel's references.
    pub async fn publishing_succeeded(
        &self,
        shop_id: u64,
        product_id: &str,
        external: &External,
    ) -> Result<()> {
        let product_id = path_segment(product_id)?;

        self.client
            .execute_json(
                Method::POST,
                &format!("shops/{shop_id}/products/{product_id}/publishing_succeeded.json"),
                &PublishingSucceededRequest { external },
            )
            .await
    }

    /// Reports that publishing failed, unlocking the product.
    pub async fn publishing_failed(
        &self,
        shop_id: u64,
        product_id: &str,
        reason: &str,
    ) -> Result<()> {
        let product_id = path_segment(product_id)?;

        self.client
            .execute_json(
                Method::POST,
                &format!("shops/{shop_id}/products/{product_id}/publishing_failed.json"),
                &PublishingFailedRequest { reason },
            )
            .await
    }

    /// Notifies Printify that a product was removed from the sales channel.
    pub async fn unpublish(&self, shop_id: u64, product_id: &str) -> Result<()> {
        let product_id = path_segment(product_id)?;

        self.client
            .execute(
                Method::POST,
                &format!("shops/{shop_id}/products/{product_id}/unpublish.json"),
            )
            .await
    }
}
