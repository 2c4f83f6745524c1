#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
#[cfg(feature = "catalog")]
pub mod catalog;
pub mod client;
pub mod error;
#[cfg(feature = "events")]
pub mod events;
#[cfg(feature = "orders")]
pub mod orders;
#[cfg(any(feature = "products", feature = "orders", feature = "uploads"))]
pub mod pagination;
#[cfg(feature = "products")]
pub mod products;
pub(crate) mod serde_helpers;
#[cfg(feature = "shops")]
pub mod shops;
pub mod types;
#[cfg(feature = "uploads")]
pub mod uploads;
#[cfg(feature = "webhooks")]
pub mod webhooks;

use reqwest::Request;
use reqwest::header::HeaderMap;
use serde::Serialize;

pub use crate::client::{Client, Config, JsonMode};
use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the public Printify API.
pub const DEFAULT_HOST: &str = "https://api.printify.com/v1/";

/// Environment variable read by [`Client::authenticate_from_env`].
pub const TOKEN_VAR: &str = "PRINTIFY_API_TOKEN";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string, keeping the
/// declaration order of the fields.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> Result<String> {
        let params = serde_html_form::to_string(self)?;

        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{params}"))
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes `request` and returns the parsed (not yet typed) response body.
///
/// Non-success statuses are turned into [`error::Kind::Status`] errors carrying the response text.
/// A blank success body is returned as [`serde_json::Value::Null`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers, json_mode),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
    json_mode: JsonMode,
) -> Result<serde_json::Value> {
    let method = request.method().clone();
    let path = match request.url().query() {
        Some(query) => format!("{}?{query}", request.url().path()),
        None => request.url().path().to_owned(),
    };

    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("{method}: {path}");

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let body = response.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(body = %body, "API response");

    serde_helpers::parse_body(&body, json_mode)
}
