//! Decoded verification payloads.

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const STATE: &str = "state";
const DISPOSABLE: &str = "disposable";
const UNDELIVERABLE: &str = "undeliverable";

/// Fields returned by the `verify` endpoint for a single address.
///
/// Only `state` and `disposable` drive the verdicts; every other field is kept
/// as-is and can be read with [`Verification::get`]. The default value is the
/// empty payload, which answers "deliverable" and "not disposable".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verification {
    fields: Map<String, Value>,
}

impl Verification {
    /// Decode a raw response body.
    ///
    /// A blank body decodes to the empty payload. Anything that is not a JSON
    /// object is an [`Error::Json`](crate::Error::Json).
    pub fn from_json(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(body)?)
    }

    /// Look up a field, treating absent values (see [`is_absent`]) as missing.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !is_absent(value))
    }

    /// The service verdict: `deliverable`, `undeliverable`, `risky` or `unknown`.
    pub fn state(&self) -> Option<&str> {
        self.get(STATE).and_then(Value::as_str)
    }

    /// `false` only for an explicit `undeliverable` state.
    pub fn is_deliverable(&self) -> bool {
        self.state() != Some(UNDELIVERABLE)
    }

    /// `true` only when the `disposable` flag is present and truthy.
    pub fn is_disposable(&self) -> bool {
        self.get(DISPOSABLE).is_some()
    }

    /// All decoded fields, including absent-valued ones.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Whether no fields were decoded at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Verification {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Whether a JSON value carries no information.
///
/// `null`, `false`, zero, the empty string, `"0"` and empty arrays or objects
/// are all absent, whatever field they appear in.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Collapse a request outcome into a payload, absorbing any failure.
pub(crate) fn settle(email: &str, outcome: Result<Verification>) -> Verification {
    match outcome {
        Ok(verification) => {
            debug!(email, state = verification.state(), "verification decoded");
            verification
        }
        Err(err) => {
            debug!(email, "verification request failed");
            warn!(error = %err, "verification unavailable, using defaults");
            Verification::default()
        }
    }
}
