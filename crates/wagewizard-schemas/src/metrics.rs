//! Aggregate model-quality metrics fetched from the metrics endpoint.

use serde::{Deserialize, Serialize};

/// Model-quality summary: scalar error statistics plus the held-out
/// actual/predicted sample sequences used to derive charts.
///
/// `actuals` and `predictions` are ordered and index-aligned: index `i`
/// in both sequences refers to the same held-out sample. The fetch
/// boundary rejects payloads where the lengths differ; chart
/// derivations additionally guard so a misaligned value can never cause
/// an out-of-range access.
///
/// Fetched once per session and replaced wholesale — there is no
/// incremental merge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Root mean squared error.
    pub rmse: f64,
    /// Goodness of fit, carried unrounded at the data layer.
    pub r2_score: f64,
    /// Held-out actual salaries.
    pub actuals: Vec<f64>,
    /// Model predictions for the same samples, index-aligned.
    pub predictions: Vec<f64>,
}

impl ModelMetrics {
    /// Returns `true` when the two sample sequences are index-aligned
    /// (equal length) — the defining invariant of this type.
    pub fn is_aligned(&self) -> bool {
        self.actuals.len() == self.predictions.len()
    }

    /// Number of held-out samples, per the `actuals` sequence.
    pub fn sample_count(&self) -> usize {
        self.actuals.len()
    }
}
