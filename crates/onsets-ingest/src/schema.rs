//! Column-role resolution.
//!
//! Roles are negotiated once per input file against its header row; after
//! this step every row is parsed straight into a typed trial and no code
//! downstream looks anything up by column name.

use std::path::Path;

use onsets_model::LoadOptions;

use crate::error::{LoadError, Result};

/// Canonical header names recognized without an explicit mapping.
const CANONICAL_ONSET: &str = "onset";
const CANONICAL_CONDITION: &str = "condition";
const CANONICAL_DURATION: &str = "duration";
const CANONICAL_RUN: &str = "run";

/// Headers auto-detected as the single canonical modulator column.
const CANONICAL_VALUE_HEADERS: [&str; 2] = ["value", "amplitude"];

/// A resolved modulator column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulatorColumn {
    /// Index into the file's header row.
    pub index: usize,
    /// Display name used for the emitted modulator.
    pub name: String,
}

/// Column roles resolved for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub onset: usize,
    pub condition: usize,
    pub duration: Option<usize>,
    pub run: Option<usize>,
    pub modulators: Vec<ModulatorColumn>,
}

fn position(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn require(
    headers: &[String],
    name: &str,
    role: &'static str,
    path: &Path,
) -> Result<usize> {
    position(headers, name).ok_or_else(|| LoadError::missing_column(path, role, name))
}

/// Resolve column roles for one file's header row.
///
/// Explicitly mapped headers must exist. Unmapped roles fall back to the
/// canonical names, except that an explicit mapping combined with
/// `drop_existing` discards the pre-named canonical columns entirely (the
/// historical collision-avoidance behavior). The `value`/`amplitude`
/// modulator column is only auto-detected when no mapping is in play.
pub fn resolve_schema(
    headers: &[String],
    options: &LoadOptions,
    path: &Path,
) -> Result<ResolvedSchema> {
    let map = &options.columns;
    let canonical_hidden = map.has_mapping() && map.drop_existing;

    let lookup = |explicit: &Option<String>,
                  canonical: &'static str,
                  role: &'static str|
     -> Result<Option<usize>> {
        match explicit {
            Some(name) => require(headers, name, role, path).map(Some),
            None if canonical_hidden => Ok(None),
            None => Ok(position(headers, canonical)),
        }
    };

    let onset = lookup(&map.onset, CANONICAL_ONSET, "onset")?
        .ok_or_else(|| LoadError::missing_column(path, "onset", CANONICAL_ONSET))?;
    let condition = lookup(&map.condition, CANONICAL_CONDITION, "condition")?
        .ok_or_else(|| LoadError::missing_column(path, "condition", CANONICAL_CONDITION))?;
    let duration = lookup(&map.duration, CANONICAL_DURATION, "duration")?;
    let run = lookup(&map.run, CANONICAL_RUN, "run")?;

    let mut modulators = Vec::new();
    if map.modulators.is_empty() {
        if !map.has_mapping() {
            for header in CANONICAL_VALUE_HEADERS {
                if let Some(index) = position(headers, header) {
                    modulators.push(ModulatorColumn {
                        index,
                        name: options.pmod_name.clone(),
                    });
                    break;
                }
            }
        }
    } else {
        for name in &map.modulators {
            let index = require(headers, name, "modulator", path)?;
            modulators.push(ModulatorColumn {
                index,
                name: name.clone(),
            });
        }
    }

    Ok(ResolvedSchema {
        onset,
        condition,
        duration,
        run,
        modulators,
    })
}
