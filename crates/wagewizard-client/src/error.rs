//! Error types for the wagewizard-client crate.

use std::backtrace::Backtrace;
use std::fmt;

/// Error type for prediction and metrics service calls.
///
/// Covers the full failure taxonomy of the two HTTP contracts: the
/// request never completing (transport), the service answering with a
/// non-2xx status, the body failing to parse as JSON, the parsed body
/// lacking the expected payload (or carrying a non-finite number), and
/// a metrics payload whose sample sequences are misaligned.
#[derive(Debug)]
pub struct ServiceError {
    kind: ServiceErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods instead.
#[derive(Debug)]
pub(crate) enum ServiceErrorKind {
    /// The request failed below the HTTP layer (connect, send, read).
    Transport(reqwest::Error),
    /// The service answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The response body was not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// The body parsed but the expected payload was missing or unusable.
    Payload { field: &'static str, detail: String },
    /// Metrics payload with mismatched sequence lengths.
    Shape { actuals: usize, predictions: usize },
}

impl ServiceError {
    /// Creates an error from an error kind, capturing a backtrace.
    pub(crate) fn new(kind: ServiceErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    pub(crate) fn status(status: u16, body: String) -> Self {
        Self::new(ServiceErrorKind::Status { status, body })
    }

    pub(crate) fn payload(field: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::Payload {
            field,
            detail: detail.into(),
        })
    }

    pub(crate) fn shape(actuals: usize, predictions: usize) -> Self {
        Self::new(ServiceErrorKind::Shape {
            actuals,
            predictions,
        })
    }

    /// Returns true if the request failed below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Transport(_))
    }

    /// Returns true if the service answered with a non-2xx status.
    pub fn is_status(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Status { .. })
    }

    /// Returns true if the response body was not parseable JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Parse(_))
    }

    /// Returns true if the body parsed but lacked a usable payload.
    pub fn is_payload(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Payload { .. })
    }

    /// Returns true if the metrics sequences had mismatched lengths.
    pub fn is_shape(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Shape { .. })
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::Transport(err) => {
                write!(f, "request failed: {err}")
            }
            ServiceErrorKind::Status { status, body } => {
                write!(f, "service answered {status}: {body}")
            }
            ServiceErrorKind::Parse(err) => {
                write!(f, "failed to parse response: {err}")
            }
            ServiceErrorKind::Payload { field, detail } => {
                write!(f, "unusable {field} payload: {detail}")
            }
            ServiceErrorKind::Shape {
                actuals,
                predictions,
            } => {
                write!(
                    f,
                    "misaligned metrics sequences: {actuals} actuals vs \
                     {predictions} predictions"
                )
            }
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ServiceErrorKind::Transport(err) => Some(err),
            ServiceErrorKind::Parse(err) => Some(err),
            ServiceErrorKind::Status { .. }
            | ServiceErrorKind::Payload { .. }
            | ServiceErrorKind::Shape { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(ServiceErrorKind::Transport(err))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ServiceErrorKind::Parse(err))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_status() {
        let err = ServiceError::status(503, "unavailable".to_string());

        assert!(err.is_status());
        assert!(!err.is_transport());
        assert!(!err.is_parse());
        assert!(!err.is_payload());
        assert!(!err.is_shape());

        assert!(err.to_string().contains("503"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_from() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err = ServiceError::from(json_err);

        assert!(err.is_parse());
        assert!(!err.is_status());

        assert!(err.to_string().contains("failed to parse response"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_payload() {
        let err = ServiceError::payload("predicted_salary", "missing from response");

        assert!(err.is_payload());
        assert!(err.to_string().contains("predicted_salary"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_shape() {
        let err = ServiceError::shape(3, 2);

        assert!(err.is_shape());
        assert!(err.to_string().contains("3 actuals vs 2 predictions"));
    }

    #[test]
    fn test_backtrace_captured() {
        let err = ServiceError::shape(1, 0);
        // Just verify we can call backtrace() - the actual content depends
        // on RUST_BACKTRACE being set.
        let _ = err.backtrace();
    }
}
