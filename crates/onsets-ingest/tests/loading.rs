use std::path::PathBuf;

use onsets_ingest::{load_design, write_design_csv};
use onsets_model::LoadOptions;
use tempfile::TempDir;

fn write_files(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut paths = Vec::new();
    for (name, contents) in files {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        paths.push(path);
    }
    (dir, paths)
}

#[test]
fn loads_mapped_fsl_style_onsets_across_files() {
    let (_dir, paths) = write_files(&[
        (
            "block1.txt",
            "StimOnset,TrialType,RT\n0.5,face,420\n2.5,house,515\n",
        ),
        (
            "block2.txt",
            "StimOnset,TrialType,RT\n1.0,face,388\n3.0,house,\n",
        ),
    ]);

    let mut options = LoadOptions::default();
    options.columns.onset = Some("StimOnset".to_string());
    options.columns.condition = Some("TrialType".to_string());
    options.columns.modulators = vec!["RT".to_string()];

    let table = load_design(&paths, &options).expect("load");
    assert_eq!(table.trials.len(), 4);
    assert_eq!(table.modulators, vec!["RT".to_string()]);

    // Run numbers come from file order when no run column is mapped.
    let runs: Vec<u32> = table.trials.iter().map(|t| t.run).collect();
    assert_eq!(runs, vec![1, 1, 2, 2]);

    // No duration column: defaulted to zero everywhere.
    assert!(table.trials.iter().all(|t| t.duration == Some(0.0)));

    // Provenance survives concatenation.
    assert!(table.trials[0].filename.ends_with("block1.txt"));
    assert!(table.trials[3].filename.ends_with("block2.txt"));
}

#[test]
fn design_csv_roundtrips_through_canonical_columns() {
    let (_dir, paths) = write_files(&[(
        "design.csv",
        "run,onset,duration,condition,value\n1,1.0,0.5,face,1\n1,3.0,0.5,house,2\n2,2.0,0.5,face,3\n",
    )]);
    let table = load_design(&paths, &LoadOptions::default()).expect("load");

    let out_dir = tempfile::tempdir().expect("tempdir");
    let out = out_dir.path().join("long.csv");
    write_design_csv(&table, &out).expect("export");

    // The exported long format is itself loadable with default options.
    let round = load_design(&[out], &LoadOptions::default()).expect("reload");
    assert_eq!(round.trials.len(), 3);
    assert_eq!(round.trials[2].run, 2);
    assert_eq!(round.trials[1].condition, "house");
    assert_eq!(round.trials[1].duration, Some(0.5));
}
