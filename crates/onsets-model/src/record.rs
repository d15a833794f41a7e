//! Per-condition onset records.

use serde::{Deserialize, Serialize};

/// A parametric modulator attached to one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricModulator {
    /// Modulator name as it appears in the output structure.
    pub name: String,
    /// Polynomial expansion order, >= 1. Serialized as a numeric scalar.
    pub poly: u32,
    /// Per-trial values, in row order of the parent condition's onsets.
    pub param: Vec<f64>,
}

/// Extracted onsets for one (run, condition) pair.
///
/// Invariant: `durations.len() == onsets.len()`, or `durations.len() == 1`
/// (a single value broadcast across all onsets). A degenerate record from
/// the `ignore` short-condition policy has both vectors empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// Condition label.
    pub name: String,
    /// Onset times, in row order.
    pub onsets: Vec<f64>,
    /// Durations, same length as `onsets` or a single broadcast element.
    pub durations: Vec<f64>,
    /// Attached modulators, possibly empty.
    pub pmods: Vec<ParametricModulator>,
}

impl ConditionRecord {
    /// Degenerate record: the condition is kept as a slot with no data.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            onsets: Vec::new(),
            durations: Vec::new(),
            pmods: Vec::new(),
        }
    }

    /// True when the durations vector neither matches the onsets length nor
    /// is a single broadcast element.
    #[must_use]
    pub fn has_length_mismatch(&self) -> bool {
        !self.onsets.is_empty()
            && self.durations.len() != self.onsets.len()
            && self.durations.len() != 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_data() {
        let record = ConditionRecord::empty("face");
        assert_eq!(record.name, "face");
        assert!(record.onsets.is_empty());
        assert!(record.durations.is_empty());
        assert!(record.pmods.is_empty());
        assert!(!record.has_length_mismatch());
    }

    #[test]
    fn broadcast_durations_are_not_a_mismatch() {
        let record = ConditionRecord {
            name: "face".to_string(),
            onsets: vec![1.0, 3.0, 5.0],
            durations: vec![0.0],
            pmods: Vec::new(),
        };
        assert!(!record.has_length_mismatch());

        let mismatched = ConditionRecord {
            durations: vec![0.0, 1.0],
            ..record
        };
        assert!(mismatched.has_length_mismatch());
    }
}
