#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use httpmock::MockServer;
use printify_client_sdk::auth::state::Authenticated;
use printify_client_sdk::{Client, Config};

pub const TOKEN: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test";
pub const BEARER: &str = "Bearer eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9.test";

pub const SHOP_ID: u64 = 815_256;
pub const PRODUCT_ID: &str = "5d39b159e7c48c000728c89f";
pub const ORDER_ID: &str = "5a96f649b2439217d070f507";
pub const IMAGE_ID: &str = "5e16d66791287a0006e522b2";
pub const WEBHOOK_ID: &str = "5cb87a8cd490a2ccb256cec4";

pub type TestClient = Client<Authenticated>;

/// Base URL of the mock server, mounted like the real API under `/v1`.
#[must_use]
pub fn host(server: &MockServer) -> String {
    server.url("/v1")
}

pub fn create_unauthenticated(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::new(&host(server), Config::default())?)
}

pub fn create_authenticated(server: &MockServer) -> anyhow::Result<TestClient> {
    Ok(create_unauthenticated(server)?.authenticate(TOKEN)?)
}
