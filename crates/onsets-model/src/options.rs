//! Configuration options for loading and extraction.

use serde::{Deserialize, Serialize};

/// Policy for a condition that yields zero onsets in a run where an explicit
/// condition list says it must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortConditionPolicy {
    /// Fail the invocation, naming the condition, run, and source file.
    #[default]
    Raise,
    /// Drop the condition's slot from that run's output.
    Remove,
    /// Keep a degenerate empty slot and continue.
    Ignore,
}

/// Policy for an onset vector whose sum is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NanPolicy {
    /// Fail the invocation, naming the condition, run, and source file.
    #[default]
    Raise,
    /// Log a warning and keep the condition in the output.
    Ignore,
}

/// Column-role mapping for input files.
///
/// Unmapped roles fall back to the canonical headers `onset`, `condition`,
/// `duration` and `run` — unless any explicit mapping is present and
/// `drop_existing` is set, in which case pre-named canonical columns are
/// discarded to avoid collisions with the remapped ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Header of the onset column.
    pub onset: Option<String>,
    /// Header of the duration column.
    pub duration: Option<String>,
    /// Header of the condition-label column.
    pub condition: Option<String>,
    /// Header of the run-number column.
    pub run: Option<String>,
    /// Headers of parametric-modulator columns.
    pub modulators: Vec<String>,
    /// Discard pre-named canonical columns when an explicit mapping is given.
    pub drop_existing: bool,
}

impl ColumnMap {
    /// True when any explicit column mapping was supplied.
    #[must_use]
    pub fn has_mapping(&self) -> bool {
        self.onset.is_some()
            || self.duration.is_some()
            || self.condition.is_some()
            || self.run.is_some()
            || !self.modulators.is_empty()
    }
}

/// Options for the design-table loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Column-role mapping.
    pub columns: ColumnMap,
    /// Name given to the auto-detected `value`/`amplitude` modulator column.
    pub pmod_name: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: ColumnMap {
                drop_existing: true,
                ..ColumnMap::default()
            },
            pmod_name: "pmod".to_string(),
        }
    }
}

/// Options for per-run condition extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Explicit condition list. Empty means discover from the table.
    pub conditions: Vec<String>,
    /// Handling of mandatory conditions with no data.
    pub short_condition: ShortConditionPolicy,
    /// Handling of NaN onsets.
    pub nan: NanPolicy,
}

impl ExtractionOptions {
    /// True when an explicit condition list makes presence mandatory.
    #[must_use]
    pub fn conditions_are_mandatory(&self) -> bool {
        !self.conditions.is_empty()
    }
}
