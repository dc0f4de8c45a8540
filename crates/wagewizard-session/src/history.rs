//! Append-only journal of (input snapshot, predicted salary) pairs.

use wagewizard_schemas::{HistoryEntry, PredictionRequest};

/// In-memory ordered sequence of predictions made during this session.
///
/// A journal, not a set: duplicate identical entries are allowed, no
/// entry is ever removed or reordered, and ordering is submission
/// order. Cleared only by dropping the session. Its sole purpose is to
/// feed downstream trend visualization keyed on submission order.
#[derive(Clone, Debug, Default)]
pub struct PredictionHistory {
    entries: Vec<HistoryEntry>,
}

impl PredictionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry. `salary` is the full-precision predicted
    /// value, not the rounded display rendering.
    pub fn record(&mut self, inputs: PredictionRequest, salary: f64) {
        self.entries.push(HistoryEntry { inputs, salary });
    }

    /// Returns the entries so far, oldest first, as a new snapshot.
    /// Callers cannot mutate the log through the returned value.
    pub fn all(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn request(age: &str) -> PredictionRequest {
        let mut values = IndexMap::new();
        values.insert("Age".to_string(), age.to_string());
        PredictionRequest::new(values)
    }

    #[test]
    fn record_appends_in_call_order() {
        let mut history = PredictionHistory::new();
        history.record(request("30"), 50000.0);
        history.record(request("40"), 65000.5);

        let all = history.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].inputs.get("Age"), Some("30"));
        assert_eq!(all[0].salary, 50000.0);
        assert_eq!(all[1].inputs.get("Age"), Some("40"));
        assert_eq!(all[1].salary, 65000.5);
    }

    #[test]
    fn duplicate_entries_are_allowed() {
        let mut history = PredictionHistory::new();
        history.record(request("30"), 50000.0);
        history.record(request("30"), 50000.0);
        assert_eq!(history.len(), 2, "the log is a journal, not a set");
    }

    #[test]
    fn earlier_entries_survive_later_records_unchanged() {
        let mut history = PredictionHistory::new();
        history.record(request("30"), 50000.0);
        let first_snapshot = history.all();

        history.record(request("55"), 90000.0);
        assert_eq!(history.all()[0], first_snapshot[0]);
    }

    #[test]
    fn snapshot_mutation_does_not_touch_the_log() {
        let mut history = PredictionHistory::new();
        history.record(request("30"), 50000.0);

        let mut snapshot = history.all();
        snapshot.clear();
        assert_eq!(history.len(), 1);
    }
}
