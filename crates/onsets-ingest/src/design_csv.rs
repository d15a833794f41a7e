//! Long-format design CSV export.
//!
//! Writes the concatenated table back out as one flat file, one trial per
//! row — the hand-off format for downstream modeling configs. Columns that
//! are entirely null are omitted.

use std::path::Path;

use onsets_model::DesignTable;

use crate::error::{LoadError, Result};

/// Write the table as a long-format CSV.
///
/// Column order: `run, onset, duration, condition, pmod-<name>…, filename`.
pub fn write_design_csv(table: &DesignTable, path: &Path) -> Result<()> {
    let include_onset = table.trials.iter().any(|t| t.onset.is_some());
    let include_duration = table.trials.iter().any(|t| t.duration.is_some());

    let mut writer = csv::Writer::from_path(path).map_err(|source| LoadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let mut header: Vec<String> = vec!["run".to_string()];
    if include_onset {
        header.push("onset".to_string());
    }
    if include_duration {
        header.push("duration".to_string());
    }
    header.push("condition".to_string());
    for name in &table.modulators {
        header.push(format!("pmod-{name}"));
    }
    header.push("filename".to_string());
    writer
        .write_record(&header)
        .map_err(|source| LoadError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    for trial in &table.trials {
        let mut record: Vec<String> = vec![trial.run.to_string()];
        if include_onset {
            record.push(format_cell(trial.onset));
        }
        if include_duration {
            record.push(format_cell(trial.duration));
        }
        record.push(trial.condition.clone());
        for value in &trial.values {
            record.push(format_cell(*value));
        }
        record.push(trial.filename.clone());
        writer
            .write_record(&record)
            .map_err(|source| LoadError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }

    writer.flush()?;
    Ok(())
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onsets_model::Trial;

    fn trial(run: u32, onset: Option<f64>, condition: &str, values: Vec<Option<f64>>) -> Trial {
        Trial {
            run,
            onset,
            duration: Some(0.0),
            condition: condition.to_string(),
            values,
            filename: "in.csv".to_string(),
        }
    }

    #[test]
    fn writes_long_format_with_modulator_columns() {
        let table = DesignTable {
            trials: vec![
                trial(1, Some(1.0), "face", vec![Some(0.5)]),
                trial(1, Some(3.0), "house", vec![None]),
            ],
            modulators: vec!["rt".to_string()],
        };
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("design.csv");
        write_design_csv(&table, &path).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("run,onset,duration,condition,pmod-rt,filename")
        );
        assert_eq!(lines.next(), Some("1,1,0,face,0.5,in.csv"));
        assert_eq!(lines.next(), Some("1,3,0,house,,in.csv"));
    }

    #[test]
    fn omits_all_null_onset_column() {
        let table = DesignTable {
            trials: vec![trial(1, None, "face", Vec::new())],
            modulators: Vec::new(),
        };
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("design.csv");
        write_design_csv(&table, &path).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.starts_with("run,duration,condition,filename"));
    }
}
