//! Synchronous Emailable client.
//!
//! Each call performs one blocking round trip on the calling thread and
//! returns once it completes or the timeout expires. Do not use it from
//! inside an async runtime; use [`crate::Client`] there.

use crate::client::{ACCEPT_VALUE, Config, params};
use crate::models::settle;
use crate::{Result, Verification};
use reqwest::header::ACCEPT;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Blocking client for the Emailable verification API.
///
/// Mirrors [`crate::Client`] operation for operation.
pub struct Client {
    http: reqwest::blocking::Client,
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
    /// # Examples
    /// ```no_run
    /// # fn main() -> Result<(), emailable_client::Error> {
    /// let client = emailable_client::blocking::Client::new("live_xxx")?;
    /// if client.is_disposable("someone@example.com") {
    ///     println!("throwaway address");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    fn from_config(config: Config) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent);
        if let Some(proxy) = config.proxy {
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key,
            endpoint: config.endpoint,
        })
    }

    /// The resolved `verify` endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the address may receive mail; `false` only on `undeliverable`.
    pub fn is_deliverable(&self, email: &str) -> bool {
        self.verify(email).is_deliverable()
    }

    /// Whether the service flags the address as disposable; `false` on failure.
    pub fn is_disposable(&self, email: &str) -> bool {
        self.verify(email).is_disposable()
    }

    /// Verify an address once, falling back to an empty payload on failure.
    pub fn verify(&self, email: &str) -> Verification {
        settle(email, self.try_verify(email))
    }

    /// Verify an address, surfacing transport and decoding errors.
    pub fn try_verify(&self, email: &str) -> Result<Verification> {
        debug!(email, endpoint = %self.endpoint, "requesting verification");

        let body = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, ACCEPT_VALUE)
            .form(&params(&self.api_key, email))
            .send()?
            .error_for_status()?
            .text()?;

        Verification::from_json(&body)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("blocking::Client")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Builder for configuring a blocking Emailable client.
///
/// Takes the same settings and defaults as [`crate::ClientBuilder`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    inner: crate::ClientBuilder,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            inner: crate::ClientBuilder::new(api_key),
        }
    }

    /// Override the API root the `verify` endpoint is resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:1080").
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.inner = self.inner.proxy(proxy);
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Build the blocking client.
    ///
    /// Must not be called from within an async runtime.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.inner.into_config()?)
    }
}
