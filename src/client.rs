//! The shared Printify client.
//!
//! A [`Client`] owns the base URL, the underlying [`reqwest::Client`] and the configured JSON
//! handling. The resource groups ([`crate::catalog`], [`crate::shops`], ...) are thin borrowed
//! handles over it, so every group sees the same host and the same bearer token.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::auth::state::{Authenticated, State, Unauthenticated};
use crate::auth::{self, ExposeSecret as _};
use crate::error::Error;

/// How response bodies are parsed.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonMode {
    /// Standard JSON; property names must match exactly.
    Strict,
    /// Accepts trailing commas and comments, and matches property names case-insensitively.
    #[default]
    Tolerant,
}

/// Configuration for [`Client`]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Value of the `User-Agent` header. Defaults to `printify_client_sdk`.
    #[builder(into)]
    user_agent: Option<String>,
    /// Total request timeout applied by the HTTP transport. Unset by default.
    timeout: Option<Duration>,
    /// How response bodies are parsed. Defaults to [`JsonMode::Tolerant`].
    #[builder(default)]
    json_mode: JsonMode,
}

impl Config {
    #[must_use]
    pub fn json_mode(&self) -> JsonMode {
        self.json_mode
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const DEFAULT_USER_AGENT: &str = "printify_client_sdk";

/// Percent-encodes a caller supplied id so it stays a single path segment.
///
/// `/`, `?` and `#` are escaped. Blank ids and the dot segments `.` and `..` are rejected with a
/// [`crate::error::Kind::Validation`] error since they would resolve to a different resource.
pub(crate) fn path_segment(id: &str) -> Result<Cow<'_, str>> {
    if id.trim().is_empty() || matches!(id, "." | "..") {
        return Err(Error::validation(format!("invalid resource id: {id:?}")));
    }

    Ok(urlencoding::encode(id))
}

/// Client for the Printify REST API.
///
/// The client starts out [`Unauthenticated`] and is promoted with [`Client::authenticate`]. Both
/// states expose the same resource groups; the only difference is that the authenticated client
/// attaches `Authorization: Bearer <token>` to every request.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use printify_client_sdk::{Client, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("https://api.printify.com/v1/", Config::default())?
///     .authenticate("my-personal-access-token")?;
///
/// for shop in client.shops().list().await? {
///     println!("{}: {}", shop.id, shop.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S: State = Unauthenticated> {
    inner: Arc<ClientInner<S>>,
}

#[derive(Debug)]
struct ClientInner<S: State> {
    config: Config,
    /// The current [`State`] of this client
    state: S,
    /// The [`Url`] against which `client` is making requests.
    host: Url,
    /// The inner [`ReqwestClient`] used to make requests to `host`.
    client: ReqwestClient,
}

impl Default for Client<Unauthenticated> {
    fn default() -> Self {
        Client::new(crate::DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client<Unauthenticated> {
    /// Creates a new unauthenticated client.
    ///
    /// A host without a trailing slash gets one appended so that relative endpoint paths resolve
    /// beneath it (`https://api.printify.com/v1` behaves like `https://api.printify.com/v1/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot be initialized.
    pub fn new(host: &str, config: Config) -> Result<Client<Unauthenticated>> {
        let mut headers = HeaderMap::new();

        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        headers.insert("User-Agent", HeaderValue::from_str(user_agent)?);
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/json;charset=utf-8"),
        );

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                state: Unauthenticated,
                host,
                client,
            }),
        })
    }

    /// Promotes this client to an authenticated one that sends `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if `token` is empty or whitespace.
    pub fn authenticate<T: Into<String>>(self, token: T) -> Result<Client<Authenticated>> {
        let state = auth::authenticated(token.into())?;

        Ok(self.with_state(state))
    }

    /// Like [`Self::authenticate`], reading the token from [`crate::TOKEN_VAR`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if the variable is unset or blank.
    pub fn authenticate_from_env(self) -> Result<Client<Authenticated>> {
        let token = std::env::var(crate::TOKEN_VAR).map_err(|e| {
            Error::validation(format!("unable to read {}: {e}", crate::TOKEN_VAR))
        })?;

        self.authenticate(token)
    }
}

impl Client<Authenticated> {
    /// Demotes this client back to [`Unauthenticated`], dropping the token.
    #[must_use]
    pub fn deauthenticate(self) -> Client<Unauthenticated> {
        self.with_state(Unauthenticated)
    }

    /// Replaces the bearer token.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error if `token` is empty or whitespace.
    pub fn reauthenticate<T: Into<String>>(self, token: T) -> Result<Client<Authenticated>> {
        let state = auth::authenticated(token.into())?;

        Ok(self.with_state(state))
    }

    /// Returns `true` when `token` is the one this client authenticates with.
    #[must_use]
    pub fn uses_token(&self, token: &str) -> bool {
        self.inner.state.token().expose_secret() == token
    }
}

impl<S: State> Client<S> {
    /// Returns the API base URL.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    /// Returns the configuration this client was created with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns a reference to the current state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.inner.state
    }

    /// Catalog endpoints: blueprints, print providers, variants and shipping.
    #[cfg(feature = "catalog")]
    #[must_use]
    pub fn catalog(&self) -> crate::catalog::Catalog<'_, S> {
        crate::catalog::Catalog::new(self)
    }

    /// Shop endpoints.
    #[cfg(feature = "shops")]
    #[must_use]
    pub fn shops(&self) -> crate::shops::Shops<'_, S> {
        crate::shops::Shops::new(self)
    }

    /// Product endpoints.
    #[cfg(feature = "products")]
    #[must_use]
    pub fn products(&self) -> crate::products::Products<'_, S> {
        crate::products::Products::new(self)
    }

    /// Order endpoints.
    #[cfg(feature = "orders")]
    #[must_use]
    pub fn orders(&self) -> crate::orders::Orders<'_, S> {
        crate::orders::Orders::new(self)
    }

    /// Upload endpoints.
    #[cfg(feature = "uploads")]
    #[must_use]
    pub fn uploads(&self) -> crate::uploads::Uploads<'_, S> {
        crate::uploads::Uploads::new(self)
    }

    /// Webhook endpoints.
    #[cfg(feature = "webhooks")]
    #[must_use]
    pub fn webhooks(&self) -> crate::webhooks::Webhooks<'_, S> {
        crate::webhooks::Webhooks::new(self)
    }

    fn with_state<T: State>(self, state: T) -> Client<T> {
        // Other clones keep their own `Arc`, so the inner values are cloned rather than moved.
        let inner = &self.inner;

        Client {
            inner: Arc::new(ClientInner {
                config: inner.config.clone(),
                state,
                host: inner.host.clone(),
                client: inner.client.clone(),
            }),
        }
    }

    fn build(&self, method: Method, path: &str, query: &str) -> Result<Request> {
        let url = self.inner.host.join(path)?;
        let url = format!("{url}{query}");

        Ok(self.inner.client.request(method, url).build()?)
    }

    fn build_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Request> {
        let url = self.inner.host.join(path)?;

        Ok(self.inner.client.request(method, url).json(body).build()?)
    }

    async fn send(&self, request: Request) -> Result<serde_json::Value> {
        let headers = self.inner.state.headers()?;

        crate::request(
            &self.inner.client,
            request,
            headers,
            self.inner.config.json_mode,
        )
        .await
    }

    /// `GET` returning a list; `null`, a blank body and a missing envelope key all yield an empty
    /// list.
    pub(crate) async fn get_list<Res: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        envelope_keys: &[&str],
    ) -> Result<Vec<Res>> {
        let request = self.build(Method::GET, path, query)?;
        let value = self.send(request).await?;
        let value = crate::serde_helpers::unwrap_list(value, envelope_keys);

        let list: Option<Vec<Res>> =
            crate::serde_helpers::decode(&value, self.inner.config.json_mode)?;
        Ok(list.unwrap_or_default())
    }

    /// `GET` returning a single resource; `null` or a blank body yield `None`.
    pub(crate) async fn get<Res: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<Option<Res>> {
        let request = self.build(Method::GET, path, query)?;
        let value = self.send(request).await?;

        crate::serde_helpers::decode(&value, self.inner.config.json_mode)
    }

    /// Sends `body` as JSON with `method` and maps the response onto `Res`.
    pub(crate) async fn send_json<B: Serialize + ?Sized, Res: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<Res>> {
        let request = self.build_json(method, path, body)?;
        let value = self.send(request).await?;

        crate::serde_helpers::decode(&value, self.inner.config.json_mode)
    }

    /// Sends a bodyless request with `method` and maps the response onto `Res`.
    pub(crate) async fn send_empty<Res: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<Option<Res>> {
        let request = self.build(method, path, "")?;
        let value = self.send(request).await?;

        crate::serde_helpers::decode(&value, self.inner.config.json_mode)
    }

    /// Sends a bodyless request whose response body, if any, is not meaningful.
    pub(crate) async fn execute(&self, method: Method, path: &str) -> Result<()> {
        let request = self.build(method, path, "")?;
        self.send(request).await?;

        Ok(())
    }

    /// Sends `body` as JSON, discarding the response body.
    pub(crate) async fn execute_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let request = self.build_json(method, path, body)?;
        self.send(request).await?;

        Ok(())
    }
}
