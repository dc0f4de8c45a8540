//! Chart dataset types serialized to JSON for the rendering layer.
//!
//! These structs are the renderer's whole input: the chart library
//! consumes them as one JSON payload, so field names are chosen for JS
//! ergonomics and TypeScript bindings are exported alongside.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One labeled scalar in the error-metric bar chart.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ErrorBar {
    /// Bar label, e.g. `"MAE"`.
    pub label: String,
    pub value: f64,
}

/// Error-metric bars: exactly two entries, ordered MAE then RMSE.
///
/// Order is significant for consistent display and testing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ErrorBarSet {
    pub bars: Vec<ErrorBar>,
}

/// Actual-vs-predicted trend: two index-aligned sequences with one
/// generated label per held-out sample.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    /// Per-sample labels `"Employee 1"` … `"Employee N"`.
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
}

impl TrendSeries {
    /// Returns `true` for the empty series produced from misaligned
    /// metrics.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One predicted-vs-actual point.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ScatterPoint {
    /// Actual salary for the sample.
    pub x: f64,
    /// Predicted salary for the same sample.
    pub y: f64,
}

/// Predicted-vs-actual scatter. Point order carries no meaning for
/// rendering, but every point preserves the 1:1 sample correspondence.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ScatterSet {
    pub points: Vec<ScatterPoint>,
}

/// Everything the rendering layer needs in one serializable payload:
/// the three derived datasets plus the unrounded goodness-of-fit.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, TS)]
#[ts(export)]
pub struct ChartBundle {
    pub error_bars: ErrorBarSet,
    pub trend: TrendSeries,
    pub scatter: ScatterSet,
    /// Unrounded; the display layer rounds to 4 decimal places.
    pub r2_score: f64,
}
