//! # Emailable Client
//! Thin wrapper around the [Emailable](https://emailable.com) verification API that answers two questions about an address: can it receive mail ([`Client::is_deliverable`]) and is it a throwaway ([`Client::is_disposable`]).
//!
//! ## Audience and uses
//! For sign-up and contact forms that want to reject dead or disposable addresses without ever blocking a real user because the verification service is slow or down. Build a [`Client`] (or [`blocking::Client`]) with an API key, then call the checks per address.
//!
//! ## Failure policy
//! The boolean checks never return errors. Network failures, error statuses and unreadable payloads are logged through `tracing` and resolve to "deliverable" and "not disposable". Only an explicit `undeliverable` verdict or a truthy `disposable` flag change the answers. Use [`Client::try_verify`] when the failure itself matters.
//!
//! ## Out of scope
//! No format checks, caching, batching or retries: every verdict comes from one request to the remote service.
//!
//! ## Errors
//! Construction fails with [`Error::MissingApiKey`], [`Error::InvalidBaseUrl`] or [`Error::Request`]. [`Client::try_verify`] reports transport and non-2xx statuses as [`Error::Request`] and non-object payloads as [`Error::Json`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use emailable_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), emailable_client::Error> {
//!     let client = Client::new("live_xxx")?;
//!
//!     let result = client.verify("someone@example.com").await;
//!     println!(
//!         "deliverable={} disposable={}",
//!         result.is_deliverable(),
//!         result.is_disposable()
//!     );
//!     Ok(())
//! }
//! ```

pub mod blocking;
mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{Verification, is_absent};

/// Result type alias for Emailable operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
