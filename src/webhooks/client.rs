use reqwest::Method;

use super::types::{CreateWebhookRequest, ModifyWebhookRequest, Webhook};
use crate::Result;
use crate::auth::state::{State, Unauthenticated};
use crate::client::{Client, path_segment};

/// Webhook endpoints, borrowed from a [`Client`] through [`Client::webhooks`].
#[derive(Debug)]
pub struct Webhooks<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Webhooks<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self, shop_id: u64) -> Result<Vec<Webhook>> {
        self.client
            .get_list(&format!("shops/{shop_id}/webhooks.json"), "", &[])
            .await
    }

    pub async fn webhook(&self, shop_id: u64, webhook_id: &str) -> Result<Option<Webhook>> {
        let webhook_id = path_segment(webhook_id)?;

        self.client
            .get(&format!("shops/{shop_id}/webhooks/{webhook_id}.json"), "")
            .await
    }

    pub async fn create(
        &self,
        shop_id: u64,
        request: &CreateWebhookRequest,
    ) -> Result<Option<Webhook>> {
        self.client
            .send_json(
                Method::POST,
                &format!("shops/{shop_id}/webhooks.json"),
                request,
            )
            .await
    }

    /// Points an existing webhook at a new URL.
    pub async fn modify(
        &self,
        shop_id: u64,
        webhook_id: &str,
        request: &ModifyWebhookRequest,
    ) -> Result<Option<Webhook>> {
        let webhook_id = path_segment(webhook_id)?;

        self.client
            .send_json(
                Method::PUT,
                &format!("shops/{shop_id}/webhooks/{webhook_id}.json"),
                request,
            )
            .await
    }

    pub async fn delete(&self, shop_id: u64, webhook_id: &str) -> Result<()> {
        let webhook_id = path_segment(webhook_id)?;

        self.client
            .execute(
                Method::DELETE,
                &format!("shops/{shop_id}/webhooks/{webhook_id}.json"),
            )
            .await
    }
}
