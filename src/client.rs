//! Emailable async client implementation.

use crate::models::settle;
use crate::{Error, Result, Verification};
use reqwest::header::ACCEPT;
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.emailable.com/v1/";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT_VALUE: &str = concat!("emailable-client/", env!("CARGO_PKG_VERSION"));
pub(crate) const ACCEPT_VALUE: &str = "application/json";

/// Async client for the Emailable verification API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] to override the
/// endpoint, timeout, proxy or user agent.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client with the default endpoint and a 30 second timeout.
    ///
    /// No request is made; a wrong key only shows up as failed verifications.
    ///
    /// # Examples
    /// ```no_run
    /// # use emailable_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), emailable_client::Error> {
    /// let client = Client::new("live_xxx")?;
    /// if !client.is_deliverable("someone@example.com").await {
    ///     println!("rejected");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// The resolved `verify` endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the address may receive mail.
    ///
    /// Returns `false` only when the service explicitly answers
    /// `undeliverable`. Network errors, error statuses and unreadable payloads
    /// all count as deliverable.
    pub async fn is_deliverable(&self, email: &str) -> bool {
        self.verify(email).await.is_deliverable()
    }

    /// Whether the address belongs to a throwaway provider.
    ///
    /// Returns `true` only when the service flags it; any failure counts as
    /// not disposable.
    pub async fn is_disposable(&self, email: &str) -> bool {
        self.verify(email).await.is_disposable()
    }

    /// Verify an address once and keep the whole payload.
    ///
    /// Failures yield an empty [`Verification`], so both verdicts fall back to
    /// their defaults.
    ///
    /// # Examples
    /// ```no_run
    /// # use emailable_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), emailable_client::Error> {
    /// let client = Client::new("live_xxx")?;
    /// let result = client.verify("someone@example.com").await;
    /// println!("{:?} disposable={}", result.state(), result.is_disposable());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn verify(&self, email: &str) -> Verification {
        settle(email, self.try_verify(email).await)
    }

    /// Verify an address, surfacing transport and decoding errors.
    ///
    /// An empty 2xx body is not an error and decodes to an empty payload.
    pub async fn try_verify(&self, email: &str) -> Result<Verification> {
        debug!(email, endpoint = %self.endpoint, "requesting verification");

        let body = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, ACCEPT_VALUE)
            .form(&params(&self.api_key, email))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Verification::from_json(&body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Form fields of a verification request.
pub(crate) fn params<'a>(api_key: &'a str, email: &'a str) -> [(&'static str, &'a str); 2] {
    [("api_key", api_key), ("email", email)]
}

/// Resolve `<base_url>verify`, tolerating a missing trailing slash.
fn verify_url(base_url: &str) -> Result<String> {
    let base = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };

    reqwest::Url::parse(&base)
        .and_then(|url| url.join("verify"))
        .map(|url| url.to_string())
        .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))
}

/// Settings shared by the async and blocking clients.
pub(crate) struct Config {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) proxy: Option<reqwest::Proxy>,
    pub(crate) user_agent: String,
}

/// Builder for configuring an Emailable client.
///
/// Start with [`Client::builder`] to override defaults. The blocking
/// counterpart is [`blocking::ClientBuilder`](crate::blocking::ClientBuilder).
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    user_agent: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `https://api.emailable.com/v1/`
    /// - 30 second request timeout
    /// - No proxy
    /// - `emailable-client/<version>` user agent
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Override the API root the `verify` endpoint is resolved against.
    ///
    /// Useful for testing against a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the async client.
    ///
    /// Fails on a blank API key, an unparsable base URL or proxy, or when the
    /// TLS backend cannot be initialised.
    pub fn build(self) -> Result<Client> {
        let config = self.into_config()?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent);
        if let Some(proxy) = config.proxy {
            builder = builder.proxy(proxy);
        }

        Ok(Client {
            http: builder.build()?,
            api_key: config.api_key,
            endpoint: config.endpoint,
        })
    }

    pub(crate) fn into_config(self) -> Result<Config> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let proxy = self
            .proxy
            .as_deref()
            .map(reqwest::Proxy::all)
            .transpose()?;

        Ok(Config {
            endpoint: verify_url(&self.base_url)?,
            api_key: self.api_key,
            timeout: self.timeout,
            proxy,
            user_agent: self.user_agent,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
