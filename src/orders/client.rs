use reqwest::Method;

use super::types::{Order, OrdersRequest, ShippingCosts, Submission, SubmittedOrder};
use crate::auth::state::{State, Unauthenticated};
use crate::client::{Client, path_segment};
use crate::pagination::validate_limit;
use crate::{Result, ToQueryParams as _};

/// Order endpoints, borrowed from a [`Client`] through [`Client::orders`].
#[derive(Debug)]
pub struct Orders<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Orders<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Lists one page of orders of a shop, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::error::Kind::Validation`], without sending anything, when
    /// `request.limit` is above [`crate::pagination::MAX_LIMIT`].
    pub async fn list(&self, shop_id: u64, request: &OrdersRequest) -> Result<Vec<Order>> {
        validate_limit(request.limit)?;
        let query = request.query_params()?;

        self.client
            .get_list(&format!("shops/{shop_id}/orders.json"), &query, &["data"])
            .await
    }

    pub async fn order(&self, shop_id: u64, order_id: &str) -> Result<Option<Order>> {
        let order_id = path_segment(order_id)?;

        self.client
            .get(&format!("shops/{shop_id}/orders/{order_id}.json"), "")
            .await
    }

    /// Submits a new order and returns its id.
    pub async fn submit(
        &self,
        shop_id: u64,
        submission: &Submission,
    ) -> Result<Option<SubmittedOrder>> {
        self.client
            .send_json(
                Method::POST,
                &format!("shops/{shop_id}/orders.json"),
                submission,
            )
            .await
    }

    /// Quotes standard and express shipping for the line items and address of `submission`.
    pub async fn calculate_shipping(
        &self,
        shop_id: u64,
        submission: &Submission,
    ) -> Result<Option<ShippingCosts>> {
        self.client
            .send_json(
                Method::POST,
                &format!("shops/{shop_id}/orders/shipping.json"),
                submission,
            )
            .await
    }

    /// Sends an on-hold order to production.
    pub async fn send_to_production(&self, shop_id: u64, order_id: &str) -> Result<Option<Order>> {
        let order_id = path_segment(order_id)?;

        self.client
            .send_empty(
                Method::POST,
                &format!("shops/{shop_id}/orders/{order_id}/send_to_production.json"),
            )
            .await
    }

    /// Cancels an order that has not been paid yet.
    pub async fn cancel(&self, shop_id: u64, order_id: &str) -> Result<Option<Order>> {
        let order_id = path_segment(order_id)?;

        self.client
            .send_empty(
                Method::POST,
                &format!("shops/{shop_id}/orders/{order_id}/cancel.json"),
            )
            .await
    }
}
