//! Request and response payloads for the prediction endpoint, and the
//! per-session history entry built from them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the form at submission time.
///
/// One entry per registry field, in registry order, values verbatim as
/// captured from input (numeric fields as stringified numbers or the
/// empty string, enumerated fields as domain tokens). Serializes
/// transparently as the JSON object sent as the `/predict` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRequest(IndexMap<String, String>);

impl PredictionRequest {
    /// Wraps an ordered name→value mapping. The form layer guarantees
    /// the key set equals the registry's key set; this type does not
    /// re-check it.
    pub fn new(values: IndexMap<String, String>) -> Self {
        Self(values)
    }

    /// Returns the captured value for a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the snapshot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Scalar salary prediction parsed from the service response.
///
/// `value` keeps the service's full precision; only the `Display`
/// rendering rounds. A missing or non-finite payload field never
/// produces this type — it fails at the client instead of being
/// coerced to zero.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub value: f64,
}

impl PredictionResult {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// Renders the prediction for display: rupee sign, two decimal places.
impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.value)
    }
}

/// One past submission retained for the session: the input snapshot and
/// the full-precision predicted salary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub inputs: PredictionRequest,
    pub salary: f64,
}
