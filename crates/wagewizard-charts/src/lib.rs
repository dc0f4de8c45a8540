//! Chart-ready projections of the model-quality metrics.
//!
//! Every function here is a pure, side-effect-free projection of a
//! [`ModelMetrics`] value: error-metric bars, the actual/predicted
//! trend, the predicted-vs-actual scatter, and the goodness-of-fit
//! passthrough. Nothing is cached — callers recompute whenever the
//! metrics value changes, and a metrics fetch failure simply means none
//! of these run (the rendering layer shows its unavailable state
//! instead).

mod data;

#[doc(inline)]
pub use data::*;

use wagewizard_schemas::ModelMetrics;

/// Derives the error-metric bars: exactly two entries, MAE first, RMSE
/// second.
pub fn error_bars(metrics: &ModelMetrics) -> ErrorBarSet {
    ErrorBarSet {
        bars: vec![
            ErrorBar {
                label: "MAE".to_string(),
                value: metrics.mae,
            },
            ErrorBar {
                label: "RMSE".to_string(),
                value: metrics.rmse,
            },
        ],
    }
}

/// Derives the actual-vs-predicted trend with labels `"Employee 1"` …
/// `"Employee N"` for `N = actuals.len()`.
///
/// Index alignment is the defining invariant: if the two sequences'
/// lengths differ the derivation returns an empty series rather than
/// guessing a pairing.
pub fn trend(metrics: &ModelMetrics) -> TrendSeries {
    if !metrics.is_aligned() {
        return TrendSeries::default();
    }

    TrendSeries {
        labels: (1..=metrics.actuals.len())
            .map(|i| format!("Employee {i}"))
            .collect(),
        actual: metrics.actuals.clone(),
        predicted: metrics.predictions.clone(),
    }
}

/// Derives the predicted-vs-actual scatter: point `i` is
/// `(x: actuals[i], y: predictions[i])` for every sample.
///
/// Misaligned metrics produce an empty set — never a truncated pairing
/// and never an out-of-range access.
pub fn scatter(metrics: &ModelMetrics) -> ScatterSet {
    if !metrics.is_aligned() {
        return ScatterSet::default();
    }

    ScatterSet {
        points: metrics
            .actuals
            .iter()
            .zip(&metrics.predictions)
            .map(|(&actual, &predicted)| ScatterPoint {
                x: actual,
                y: predicted,
            })
            .collect(),
    }
}

/// Goodness of fit, passed through unrounded. Rounding to 4 decimal
/// places for display is the presentation layer's concern.
pub fn goodness_of_fit(metrics: &ModelMetrics) -> f64 {
    metrics.r2_score
}

/// Bundles all three derived datasets plus the goodness-of-fit into the
/// single payload the rendering layer consumes.
pub fn chart_bundle(metrics: &ModelMetrics) -> ChartBundle {
    ChartBundle {
        error_bars: error_bars(metrics),
        trend: trend(metrics),
        scatter: scatter(metrics),
        r2_score: goodness_of_fit(metrics),
    }
}
