//! Form state manager: current raw values for every schema field.

use std::fmt;

use indexmap::IndexMap;
use wagewizard_schemas::{PredictionRequest, field, registry};

/// Rejection at the form boundary. Unknown field names never reach the
/// network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// The named field does not exist in the schema registry.
    UnknownField(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => {
                write!(f, "unknown form field: {name:?}")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Mapping from field name to current raw string value.
///
/// Total over the registry's key set: initialized from every field's
/// default and never missing a field. Iteration order equals registry
/// order. Mutated only through [`FormState::set_field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    values: IndexMap<&'static str, String>,
}

impl FormState {
    /// Builds the initial state from the registry defaults.
    pub fn new() -> Self {
        let values = registry()
            .iter()
            .map(|f| (f.name, f.default.to_string()))
            .collect();
        Self { values }
    }

    /// Replaces the value for `name`.
    ///
    /// Fails, leaving the field unchanged, when `name` is not in the
    /// schema. Enumerated values are not re-validated against their
    /// domain here: the choice surface already restricts input to the
    /// domain, so membership is a closed invariant at that boundary.
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        let field = field(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.values.insert(field.name, raw.into());
        Ok(())
    }

    /// Returns the current raw value for a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Immutable snapshot of all current values, keyed by field name in
    /// registry order, suitable for transmission. Values pass through
    /// verbatim — no transformation, coercion, or trimming. A numeric
    /// field left at its initial empty value is sent as the empty
    /// string; the service, not this layer, rejects malformed numeric
    /// input.
    pub fn to_request(&self) -> PredictionRequest {
        let snapshot = self
            .values
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();
        PredictionRequest::new(snapshot)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialized_from_registry_defaults() {
        let form = FormState::new();
        assert_eq!(form.get("Attrition"), Some("No"));
        assert_eq!(form.get("Department"), Some("Research & Development"));
        assert_eq!(form.get("StandardHours"), Some("80"));
        // Age starts out blank and stays submittable that way.
        assert_eq!(form.get("Age"), Some(""));
    }

    #[test]
    fn set_field_replaces_value() {
        let mut form = FormState::new();
        form.set_field("Age", "35").expect("Age is a schema field");
        assert_eq!(form.get("Age"), Some("35"));
    }

    #[test]
    fn set_field_rejects_unknown_name() {
        let mut form = FormState::new();
        let before = form.clone();

        let err = form
            .set_field("MonthlyIncome", "9000")
            .expect_err("MonthlyIncome is not in the schema");
        assert_eq!(err, FormError::UnknownField("MonthlyIncome".to_string()));
        assert_eq!(form, before, "rejected edits must leave state unchanged");
    }

    /// Enumerated out-of-domain values are not rejected here — the
    /// choice surface owns that boundary.
    #[test]
    fn set_field_accepts_out_of_domain_enumerated_value() {
        let mut form = FormState::new();
        form.set_field("Gender", "Other").expect("no runtime domain check");
        assert_eq!(form.get("Gender"), Some("Other"));
    }

    #[test]
    fn to_request_key_set_equals_registry_in_order() {
        let form = FormState::new();
        let request = form.to_request();

        let request_keys: Vec<&str> = request.iter().map(|(k, _)| k).collect();
        let registry_keys: Vec<&str> =
            wagewizard_schemas::registry().iter().map(|f| f.name).collect();
        assert_eq!(request_keys, registry_keys);
        assert_eq!(request.len(), 25);
    }

    #[test]
    fn to_request_passes_values_verbatim() {
        let mut form = FormState::new();
        form.set_field("Age", " 41 ").unwrap();
        let request = form.to_request();
        assert_eq!(request.get("Age"), Some(" 41 "));
        // Empty numeric value goes out as an empty string.
        assert_eq!(FormState::new().to_request().get("Age"), Some(""));
    }

    #[test]
    fn to_request_is_a_snapshot() {
        let mut form = FormState::new();
        let request = form.to_request();
        form.set_field("Age", "64").unwrap();
        assert_eq!(request.get("Age"), Some(""), "later edits must not leak in");
    }
}
