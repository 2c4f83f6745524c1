#![cfg(feature = "uploads")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the upload endpoints.

mod common;

use httpmock::{Method::GET, Method::POST, MockServer};
use printify_client_sdk::error::Kind;
use printify_client_sdk::types::Url;
use printify_client_sdk::uploads::types::{UploadImageRequest, UploadsRequest};
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{BEARER, IMAGE_ID, create_authenticated};

fn image_json() -> serde_json::Value {
    json!({
        "id": "5e16d66791287a0006e522b2",
        "file_name": "png-images-logo-1.jpg",
        "height": 5979,
        "width": 17045,
        "size": 1_138_575,
        "mime_type": "image/png",
        "preview_url": "https://example.com/image-storage/uuid1",
        "upload_time": "2020-01-09 07:29:43"
    })
}

#[tokio::test]
async fn list_should_return_page() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/uploads.json")
            .header("authorization", BEARER)
            .query_param("limit", "2")
            .query_param("page", "1");
        then.status(StatusCode::OK).json_body(json!({
            "current_page": 1,
            "data": [image_json()],
            "first_page_url": "/?page=1",
            "from": 1,
            "last_page": 2,
            "last_page_url": "/?page=2",
            "next_page_url": "/?page=2",
            "path": "/",
            "per_page": 2,
            "prev_page_url": null,
            "to": 2,
            "total": 3
        }));
    });

    let request = UploadsRequest::builder().limit(2).page(1).build();
    let page = client.uploads().list(&request).await?.unwrap();

    assert_eq!(page.current_page, 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].width, 17045);
    assert!(page.has_next_page());
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn list_with_limit_above_max_should_not_send() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/uploads.json");
        then.status(StatusCode::OK).json_body(json!({}));
    });

    let request = UploadsRequest::builder().limit(101).build();
    let err = client.uploads().list(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);
    mock.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn image_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(GET).path(format!("/v1/uploads/{IMAGE_ID}.json"));
        then.status(StatusCode::OK).json_body(image_json());
    });

    let image = client.uploads().image(IMAGE_ID).await?.unwrap();

    assert_eq!(image.id, IMAGE_ID);
    assert_eq!(image.file_name, "png-images-logo-1.jpg");
    assert_eq!(
        image.preview_url.as_ref().map(Url::as_str),
        Some("https://example.com/image-storage/uuid1")
    );
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn upload_by_url_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/uploads/images.json").json_body(json!({
            "file_name": "1x1-ff00007f.png",
            "url": "http://png-pixel.com/1x1-ff00007f.png"
        }));
        then.status(StatusCode::OK).json_body(image_json());
    });

    let request = UploadImageRequest::from_url(
        "1x1-ff00007f.png",
        Url::parse("http://png-pixel.com/1x1-ff00007f.png")?,
    );
    let image = client.uploads().upload(&request).await?.unwrap();

    assert_eq!(image.id, IMAGE_ID);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn upload_by_contents_should_send_base64() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/uploads/images.json").json_body(json!({
            "file_name": "image.png",
            "contents": "iVBORw0KGgo="
        }));
        then.status(StatusCode::OK).json_body(image_json());
    });

    let png_signature = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    let request = UploadImageRequest::from_bytes("image.png", &png_signature);
    client.uploads().upload(&request).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn archive_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server)?;

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(format!("/v1/uploads/{IMAGE_ID}/archive.json"));
        then.status(StatusCode::OK).body("");
    });

    client.uploads().archive(IMAGE_ID).await?;

    mock.assert();
    Ok(())
}
