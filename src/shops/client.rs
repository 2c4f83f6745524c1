use reqwest::Method;

use super::types::Shop;
use crate::Result;
use crate::auth::state::{State, Unauthenticated};
use crate::client::Client;

/// Shop endpoints, borrowed from a [`Client`] through [`Client::shops`].
#[derive(Debug)]
pub struct Shops<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Shops<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Lists the shops of the account.
    pub async fn list(&self) -> Result<Vec<Shop>> {
        self.client.get_list("shops.json", "", &[]).await
    }

    /// Disconnects a shop from Printify.
    pub async fn disconnect(&self, shop_id: u64) -> Result<()> {
        self.client
            .execute(Method::DELETE, &format!("shops/{shop_id}/connection.json"))
            .await
    }
}
