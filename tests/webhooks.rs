#![cfg(feature = "webhooks")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the webhook endpoints.

mod common;

use httpmock::{Method::DELETE, Method::GET, Method::POST, Method::PUT, MockServer};
use printify_client_sdk::events::EventType;
use printify_client_sdk::types::Url;
use printify_client_sdk::webhooks::types::{CreateWebhookRequest, ModifyWebhookRequest};
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{BEARER, SHOP_ID, WEBHOOK_ID, create_authenticated};

fn webhook_json(topic: &str, url: &str) -> serde_json::Value {
    json!({
        "id": "5cb87a8cd490a2ccb256cec4",
        "topic": topic,
        "url": url,
        "shop_id": "815256",
        "secret": null
    })
}

#[tokio::test]
async fn list_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/shops/{SHOP_ID}/webhooks.json"))
            .header("authorization", BEARER);
        then.status(StatusCode::OK).json_body(json!([
            webhook_json("order:created", "https://example.com/webhooks/order/created"),
            {
                "id": "5cb87a8cd490a2ccb256cec5",
                "topic": "order:updated",
                "url": "https://example.com/webhooks/order/updated",
                "shop_id": 815_256
            }
        ]));
    });

    let webhooks = client.webhooks().list(SHOP_ID).await?;

    assert_eq!(webhooks.len(), 2);
    assert_eq!(webhooks[0].topic, EventType::OrderCreated);
    assert_eq!(webhooks[0].shop_id, "815256");
    assert_eq!(webhooks[1].topic, EventType::OrderUpdated);
    assert_eq!(webhooks[1].shop_id, "815256");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn webhook_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/shops/{SHOP_ID}/webhooks/{WEBHOOK_ID}.json"));
        then.status(StatusCode::OK).json_body(webhook_json(
            "shop:disconnected",
            "https://example.com/webhooks/shop",
        ));
    });

    let webhook = client
        .webhooks()
        .webhook(SHOP_ID, WEBHOOK_ID)
        .await?
        .unwrap();

    assert_eq!(webhook.id, WEBHOOK_ID);
    assert_eq!(webhook.topic, EventType::ShopDisconnected);
    assert_eq!(webhook.secret, None);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn create_should_send_request() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1/shops/{SHOP_ID}/webhooks.json"))
            .json_body(json!({
                "topic": "order:created",
                "url": "https://example.com/webhooks/order/created",
                "secret": "shared-secret"
            }));
        then.status(StatusCode::OK).json_body(webhook_json(
            "order:created",
            "https://example.com/webhooks/order/created",
        ));
    });

    let request = CreateWebhookRequest::builder()
        .topic(EventType::OrderCreated)
        .url(Url::parse("https://example.com/webhooks/order/created")?)
        .secret("shared-secret")
        .build();
    let webhook = client
        .webhooks()
        .create(SHOP_ID, &request)
        .await?
        .unwrap();

    assert_eq!(webhook.id, WEBHOOK_ID);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn modify_should_put_new_url() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path(format!("/v1/shops/{SHOP_ID}/webhooks/{WEBHOOK_ID}.json"))
            .json_body(json!({"url": "https://example.com/webhooks/v2"}));
        then.status(StatusCode::OK).json_body(webhook_json(
            "order:created",
            "https://example.com/webhooks/v2",
        ));
    });

    let request = ModifyWebhookRequest::builder()
        .url(Url::parse("https://example.com/webhooks/v2")?)
        .build();
    let webhook = client
        .webhooks()
        .modify(SHOP_ID, WEBHOOK_ID, &request)
        .await?
        .unwrap();

    assert_eq!(webhook.url.as_str(), "https://example.com/webhooks/v2");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn delete_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path(format!("/v1/shops/{SHOP_ID}/webhooks/{WEBHOOK_ID}.json"));
        then.status(StatusCode::OK).json_body(json!({"id": WEBHOOK_ID}));
    });

    client.webhooks().delete(SHOP_ID, WEBHOOK_ID).await?;

    mock.assert();
    Ok(())
}
