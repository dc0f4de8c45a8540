//! Async client for the two service endpoints.

use tracing::debug;
use wagewizard_schemas::{ModelMetrics, PredictionRequest, PredictionResult};

use crate::error::ServiceError;

/// The JSON field carrying the scalar prediction in `/predict` responses.
const PREDICTED_SALARY: &str = "predicted_salary";

/// Client for the prediction and metrics endpoints at one base address.
///
/// One in-flight request per call, no retry, no timeout, no
/// cancellation: a hung request blocks only its own feature. The two
/// operations are fully independent.
#[derive(Clone, Debug)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Creates a client for the given base address, e.g.
    /// `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Submits one form snapshot and returns the predicted salary.
    ///
    /// Sends the full field-keyed mapping as the JSON body and extracts
    /// the numeric `predicted_salary` from the response. Network
    /// failure, a non-2xx status, unparseable JSON, or a missing or
    /// non-finite payload all fail with a [`ServiceError`]; a failed
    /// call must leave the caller's displayed prediction and history
    /// untouched (the session only applies successful results).
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ServiceError> {
        let url = self.url("/predict");
        debug!(%url, fields = request.len(), "submitting prediction request");

        let response = self.http.post(url).json(request).send().await?;
        let body = Self::success_body(response).await?;

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        let salary = value
            .get(PREDICTED_SALARY)
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| ServiceError::payload(PREDICTED_SALARY, "missing from response"))?;
        if !salary.is_finite() {
            return Err(ServiceError::payload(PREDICTED_SALARY, "not a finite number"));
        }

        debug!(salary, "prediction received");
        Ok(PredictionResult::new(salary))
    }

    /// Fetches the aggregate model-quality metrics.
    ///
    /// A single idempotent GET, consumed once per session; the returned
    /// value replaces any prior one wholesale. Payloads whose
    /// `actuals`/`predictions` sequences differ in length are rejected
    /// here with a shape error, so downstream derivations only ever see
    /// aligned metrics. Callers degrade to a "data unavailable" state on
    /// failure rather than crashing anything.
    pub async fn fetch_metrics(&self) -> Result<ModelMetrics, ServiceError> {
        let url = self.url("/metrics");
        debug!(%url, "fetching model metrics");

        let response = self.http.get(url).send().await?;
        let body = Self::success_body(response).await?;

        let metrics: ModelMetrics = serde_json::from_slice(&body)?;
        if !metrics.is_aligned() {
            return Err(ServiceError::shape(
                metrics.actuals.len(),
                metrics.predictions.len(),
            ));
        }

        debug!(samples = metrics.sample_count(), "metrics received");
        Ok(metrics)
    }

    /// Resolves a response to its body bytes, turning any non-2xx
    /// status into an error carrying the body text.
    async fn success_body(response: reqwest::Response) -> Result<Vec<u8>, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status.as_u16(), body));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ServiceClient::new("http://localhost:8000");
        assert_eq!(client.url("/predict"), "http://localhost:8000/predict");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = ServiceClient::new("http://localhost:8000/");
        assert_eq!(client.url("/metrics"), "http://localhost:8000/metrics");
    }
}
