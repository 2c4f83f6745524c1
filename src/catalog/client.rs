use super::types::{Blueprint, PrintProvider, Shipping, Variant};
use crate::Result;
use crate::auth::state::{State, Unauthenticated};
use crate::client::Client;

/// Catalog endpoints, borrowed from a [`Client`] through [`Client::catalog`].
#[derive(Debug)]
pub struct Catalog<'client, S: State = Unauthenticated> {
    client: &'client Client<S>,
}

impl<'client, S: State> Catalog<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Lists every blueprint in the catalog.
    pub async fn blueprints(&self) -> Result<Vec<Blueprint>> {
        self.client
            .get_list("catalog/blueprints.json", "", &[])
            .await
    }

    /// Gets a single blueprint.
    pub async fn blueprint(&self, blueprint_id: u32) -> Result<Option<Blueprint>> {
        self.client
            .get(&format!("catalog/blueprints/{blueprint_id}.json"), "")
            .await
    }

    /// Lists every print provider.
    pub async fn print_providers(&self) -> Result<Vec<PrintProvider>> {
        self.client
            .get_list("catalog/print_providers.json", "", &[])
            .await
    }

    /// Gets a single print provider, including the blueprints it offers.
    pub async fn print_provider(&self, print_provider_id: u32) -> Result<Option<PrintProvider>> {
        self.client
            .get(
                &format!("catalog/print_providers/{print_provider_id}.json"),
                "",
            )
            .await
    }

    /// Lists the print providers that can print `blueprint_id`.
    pub async fn blueprint_print_providers(
        &self,
        blueprint_id: u32,
    ) -> Result<Vec<PrintProvider>> {
        self.client
            .get_list(
                &format!("catalog/blueprints/{blueprint_id}/print_providers.json"),
                "",
                &[],
            )
            .await
    }

    /// Lists the variants of a blueprint offered by a print provider.
    ///
    /// Accepts both a bare array and the `{"variants": [...]}` envelope.
    pub async fn variants(&self, blueprint_id: u32, print_provider_id: u32) -> Result<Vec<Variant>> {
        self.client
            .get_list(
                &format!(
                    "catalog/blueprints/{blueprint_id}/print_providers/{print_provider_id}/variants.json"
                ),
                "",
                &["variants"],
            )
            .await
    }

    /// Gets the shipping rates of a blueprint offered by a print provider.
    pub async fn shipping(
        &self,
        blueprint_id: u32,
        print_provider_id: u32,
    ) -> Result<Option<Shipping>> {
        self.client
            .get(
                &format!(
                    "catalog/blueprints/{blueprint_id}/print_providers/{print_provider_id}/shipping.json"
                ),
                "",
            )
            .await
    }
}
