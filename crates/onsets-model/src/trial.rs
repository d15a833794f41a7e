//! Typed design-table records.
//!
//! A design table is the long-format concatenation of one or more input
//! files: one [`Trial`] per row, tagged with its run number and source file.
//! Column roles are resolved once at load time, so downstream code never
//! looks values up by column name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the design table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Run (scanning session) this trial belongs to.
    pub run: u32,
    /// Trial start time, in seconds or scan-relative units. Null cells stay null.
    pub onset: Option<f64>,
    /// Trial duration. `Some(0.0)` when the input had no duration column.
    pub duration: Option<f64>,
    /// Condition label. Rows without one are dropped at load.
    pub condition: String,
    /// Modulator values, parallel to [`DesignTable::modulators`].
    pub values: Vec<Option<f64>>,
    /// Source file the row came from.
    pub filename: String,
}

/// The concatenated long-format design table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignTable {
    /// All trials, in input-file order then within-file order.
    pub trials: Vec<Trial>,
    /// Display names of the resolved modulator columns.
    pub modulators: Vec<String>,
}

impl DesignTable {
    /// Number of trials in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// True when the table holds no trials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Partition trials by run, ascending by run number.
    #[must_use]
    pub fn runs(&self) -> Vec<(u32, Vec<&Trial>)> {
        let mut by_run: BTreeMap<u32, Vec<&Trial>> = BTreeMap::new();
        for trial in &self.trials {
            by_run.entry(trial.run).or_default().push(trial);
        }
        by_run.into_iter().collect()
    }

    /// Distinct condition labels in first-appearance order.
    #[must_use]
    pub fn observed_conditions(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for trial in &self.trials {
            if !seen.iter().any(|label: &String| label == &trial.condition) {
                seen.push(trial.condition.clone());
            }
        }
        seen
    }

    /// Source filename of the first trial matching `condition` in `run`,
    /// falling back to the run's first trial. Used for error attribution.
    #[must_use]
    pub fn provenance(&self, run: u32, condition: &str) -> String {
        self.trials
            .iter()
            .find(|t| t.run == run && t.condition == condition)
            .or_else(|| self.trials.iter().find(|t| t.run == run))
            .map(|t| t.filename.clone())
            .unwrap_or_default()
    }
}
