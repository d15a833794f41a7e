//! Per-condition onset extraction.

use tracing::{debug, warn};

use onsets_model::{
    ConditionRecord, DesignError, DesignTable, ExtractionOptions, NanPolicy, ParametricModulator,
    ShortConditionPolicy, Trial,
};

/// Extract one condition's record from a single run's trials.
///
/// Returns `None` when no trial of the condition has a non-null onset — the
/// condition is absent from this run and gets no slot unless an explicit
/// condition list makes it mandatory (see [`extract_run`]).
///
/// Durations come from the non-null duration cells; when every duration is
/// null a single zero is broadcast across all onsets. Each modulator column
/// with at least one non-null value *and* more than one distinct value
/// attaches a first-order modulator; a constant column conveys no contrast
/// and attaches nothing.
#[must_use]
pub fn condition_record(
    label: &str,
    trials: &[&Trial],
    modulators: &[String],
) -> Option<ConditionRecord> {
    let rows: Vec<&&Trial> = trials
        .iter()
        .filter(|trial| trial.condition == label)
        .collect();

    let onsets: Vec<f64> = rows.iter().filter_map(|trial| trial.onset).collect();
    if onsets.is_empty() {
        return None;
    }

    let durations: Vec<f64> = rows.iter().filter_map(|trial| trial.duration).collect();
    let durations = if durations.is_empty() {
        vec![0.0]
    } else {
        durations
    };

    let mut pmods = Vec::new();
    for (index, name) in modulators.iter().enumerate() {
        let param: Vec<f64> = rows
            .iter()
            .filter_map(|trial| trial.values.get(index).copied().flatten())
            .collect();
        if param.is_empty() {
            continue;
        }
        let varies = param
            .iter()
            .any(|value| value.to_bits() != param[0].to_bits());
        if !varies {
            debug!(condition = label, modulator = %name, "constant modulator column ignored");
            continue;
        }
        pmods.push(ParametricModulator {
            name: name.clone(),
            poly: 1,
            param,
        });
    }

    Some(ConditionRecord {
        name: label.to_string(),
        onsets,
        durations,
        pmods,
    })
}

/// Extract the surviving condition records for one run, applying the
/// short-condition and NaN policies.
pub fn extract_run(
    table: &DesignTable,
    run: u32,
    trials: &[&Trial],
    conditions: &[String],
    options: &ExtractionOptions,
) -> Result<Vec<ConditionRecord>, DesignError> {
    let mandatory = options.conditions_are_mandatory();
    let mut records = Vec::with_capacity(conditions.len());

    for label in conditions {
        match condition_record(label, trials, &table.modulators) {
            Some(record) => {
                if record.onsets.iter().sum::<f64>().is_nan() {
                    match options.nan {
                        NanPolicy::Raise => {
                            return Err(DesignError::nan_onsets(
                                label.clone(),
                                run,
                                table.provenance(run, label),
                            ));
                        }
                        NanPolicy::Ignore => {
                            warn!(condition = %label, run, "onsets contain NaN, keeping condition");
                        }
                    }
                }
                if record.has_length_mismatch() {
                    warn!(
                        condition = %label,
                        run,
                        onsets = record.onsets.len(),
                        durations = record.durations.len(),
                        "onset/duration length mismatch"
                    );
                }
                records.push(record);
            }
            None if mandatory => match options.short_condition {
                ShortConditionPolicy::Raise => {
                    return Err(DesignError::short_condition(
                        label.clone(),
                        run,
                        table.provenance(run, label),
                    ));
                }
                ShortConditionPolicy::Remove => {
                    warn!(condition = %label, run, "condition has no onsets, removing its slot");
                }
                ShortConditionPolicy::Ignore => {
                    warn!(condition = %label, run, "condition has no onsets, keeping empty slot");
                    records.push(ConditionRecord::empty(label.clone()));
                }
            },
            // Discovered conditions absent from this run are a structural
            // skip, never an error.
            None => debug!(condition = %label, run, "condition absent, no slot emitted"),
        }
    }

    Ok(records)
}
