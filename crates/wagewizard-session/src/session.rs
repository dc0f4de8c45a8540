//! Session container tying form, history, and the displayed prediction
//! together behind pure transition functions.

use wagewizard_schemas::{PredictionRequest, PredictionResult};

use crate::form::FormState;
use crate::history::PredictionHistory;

/// All mutable UI-facing state for one page session.
///
/// Transitions run single-threaded, in response to completed events:
/// a successful prediction is applied through [`Session::apply_prediction`],
/// a failed one is simply never applied, so prior displayed state and
/// history survive failures untouched. When two submissions overlap,
/// transitions apply in completion order and the last one wins — the
/// race is accepted, not corrected.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub form: FormState,
    history: PredictionHistory,
    displayed: Option<f64>,
}

impl Session {
    /// Fresh session: registry-default form, empty history, nothing
    /// displayed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one completed prediction: the full-precision value
    /// becomes the displayed prediction and the (inputs, value) pair is
    /// appended to history. Callers invoke this only on client success.
    pub fn apply_prediction(&mut self, inputs: PredictionRequest, result: PredictionResult) {
        self.displayed = Some(result.value);
        self.history.record(inputs, result.value);
    }

    /// Currently displayed prediction, full precision.
    pub fn displayed(&self) -> Option<f64> {
        self.displayed
    }

    /// Read access to the session's history log.
    pub fn history(&self) -> &PredictionHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_blank() {
        let session = Session::new();
        assert_eq!(session.displayed(), None);
        assert!(session.history().is_empty());
        assert_eq!(session.form.get("Attrition"), Some("No"));
    }

    #[test]
    fn apply_prediction_updates_display_and_history() {
        let mut session = Session::new();
        let inputs = session.form.to_request();

        session.apply_prediction(inputs.clone(), PredictionResult::new(54321.987));

        assert_eq!(session.displayed(), Some(54321.987));
        let all = session.history().all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].inputs, inputs);
        assert_eq!(all[0].salary, 54321.987, "history keeps full precision");
    }

    /// Overlapping submissions resolve in completion order: the last
    /// applied result overwrites the displayed value, and both land in
    /// history in completion order.
    #[test]
    fn last_completed_prediction_wins() {
        let mut session = Session::new();
        let inputs = session.form.to_request();

        session.apply_prediction(inputs.clone(), PredictionResult::new(50000.0));
        session.apply_prediction(inputs, PredictionResult::new(61000.0));

        assert_eq!(session.displayed(), Some(61000.0));
        assert_eq!(session.history().len(), 2);
    }

    /// A failed predict call is modeled by never calling
    /// `apply_prediction`: everything stays as it was.
    #[test]
    fn failure_leaves_prior_state_untouched() {
        let mut session = Session::new();
        let inputs = session.form.to_request();
        session.apply_prediction(inputs, PredictionResult::new(50000.0));

        let displayed_before = session.displayed();
        let history_before = session.history().all();

        // No transition ran for the failed submission.

        assert_eq!(session.displayed(), displayed_before);
        assert_eq!(session.history().all(), history_before);
    }
}
