//! MAT document assembly.
//!
//! Lays the surviving condition records of one run out as the parallel
//! ragged arrays the modeling software expects: `names`, `durations` and
//! `onsets` cells, plus a `pmod` struct array that is only present when at
//! least one condition actually carries a modulator — readers distinguish
//! "no modulators in this design" from "zero-length modulators".

use onsets_mat::{MatDocument, MatStruct, MatValue};
use onsets_model::ConditionRecord;

const PMOD_FIELDS: [&str; 3] = ["name", "poly", "param"];

/// Build the per-run MAT document from the run's condition records.
#[must_use]
pub fn run_document(records: &[ConditionRecord]) -> MatDocument {
    let names: Vec<MatValue> = records
        .iter()
        .map(|record| MatValue::string(record.name.clone()))
        .collect();
    let durations: Vec<MatValue> = records
        .iter()
        .map(|record| MatValue::row(record.durations.clone()))
        .collect();
    let onsets: Vec<MatValue> = records
        .iter()
        .map(|record| MatValue::row(record.onsets.clone()))
        .collect();

    let mut document = MatDocument::new();
    document.push("names", MatValue::Cell(names));
    document.push("durations", MatValue::Cell(durations));
    document.push("onsets", MatValue::Cell(onsets));

    if records.iter().any(|record| !record.pmods.is_empty()) {
        document.push("pmod", pmod_struct(records));
    }
    document
}

/// The `pmod` struct array: one record per condition, each slot holding the
/// condition's modulators as parallel cells. A condition without modulators
/// keeps its slot, with every field empty.
fn pmod_struct(records: &[ConditionRecord]) -> MatValue {
    let structs: Vec<Vec<MatValue>> = records
        .iter()
        .map(|record| {
            if record.pmods.is_empty() {
                return vec![MatValue::empty(), MatValue::empty(), MatValue::empty()];
            }
            let names: Vec<MatValue> = record
                .pmods
                .iter()
                .map(|pmod| MatValue::string(pmod.name.clone()))
                .collect();
            // Polynomial order is an integer by meaning, numeric by format.
            let polys: Vec<MatValue> = record
                .pmods
                .iter()
                .map(|pmod| MatValue::scalar(f64::from(pmod.poly)))
                .collect();
            let params: Vec<MatValue> = record
                .pmods
                .iter()
                .map(|pmod| MatValue::row(pmod.param.clone()))
                .collect();
            vec![
                MatValue::Cell(names),
                MatValue::Cell(polys),
                MatValue::Cell(params),
            ]
        })
        .collect();

    MatValue::Struct(MatStruct {
        fields: PMOD_FIELDS.iter().map(|f| (*f).to_string()).collect(),
        records: structs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use onsets_model::ParametricModulator;

    fn record(name: &str, onsets: Vec<f64>) -> ConditionRecord {
        ConditionRecord {
            name: name.to_string(),
            onsets,
            durations: vec![0.0],
            pmods: Vec::new(),
        }
    }

    #[test]
    fn parallel_arrays_without_pmod_field() {
        let records = vec![
            record("A", vec![1.0, 3.0, 5.0]),
            record("B", vec![2.0, 4.0, 6.0]),
        ];
        let document = run_document(&records);

        assert_eq!(
            document.get("names"),
            Some(&MatValue::Cell(vec![
                MatValue::string("A"),
                MatValue::string("B")
            ]))
        );
        assert_eq!(
            document.get("onsets"),
            Some(&MatValue::Cell(vec![
                MatValue::row(vec![1.0, 3.0, 5.0]),
                MatValue::row(vec![2.0, 4.0, 6.0])
            ]))
        );
        assert_eq!(
            document.get("durations"),
            Some(&MatValue::Cell(vec![
                MatValue::row(vec![0.0]),
                MatValue::row(vec![0.0])
            ]))
        );
        // No modulators anywhere: the pmod variable is omitted entirely.
        assert_eq!(document.get("pmod"), None);
    }

    #[test]
    fn pmod_struct_keeps_slots_for_plain_conditions() {
        let mut with_pmod = record("A", vec![1.0, 3.0, 5.0]);
        with_pmod.pmods.push(ParametricModulator {
            name: "rt".to_string(),
            poly: 1,
            param: vec![42.0, 13.0, 666.0],
        });
        let records = vec![with_pmod, record("B", vec![2.0])];
        let document = run_document(&records);

        let Some(MatValue::Struct(pmod)) = document.get("pmod") else {
            panic!("expected pmod struct");
        };
        assert_eq!(pmod.fields, vec!["name", "poly", "param"]);
        assert_eq!(pmod.records.len(), 2);
        assert_eq!(
            pmod.records[0][1],
            MatValue::Cell(vec![MatValue::scalar(1.0)])
        );
        // The modulator-less condition still occupies a slot, all empty.
        assert_eq!(
            pmod.records[1],
            vec![MatValue::empty(), MatValue::empty(), MatValue::empty()]
        );
    }
}
