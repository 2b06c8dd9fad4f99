//! Integration tests for the analyze command.

use std::fs;

use mtx_cli::cli::{AnalyzeArgs, ThresholdArgs};
use mtx_cli::commands::run_analyze;

fn default_thresholds() -> ThresholdArgs {
    ThresholdArgs {
        start_threshold: 20.0,
        first_sample_hour: 23.0,
        confidence_bound: 4.0,
        dme_threshold: 0.2,
    }
}

/// One positive patient (P1 holds 0.5 µM at the 42h checkpoint) and one that
/// clears normally.
const SAMPLES_CSV: &str = "\
Patient_id,Sample_time,Sample_type,Result
P1,2024-03-01 08:00:00,Dose_MTX,5000
P1,2024-03-01 08:00:00,Level_MTX,120
P1,2024-03-02 03:00:00,Level_MTX,0.5
P1,2024-03-02 05:00:00,Level_MTX,<0.05
P2,2024-03-01 09:00:00,Level_MTX,100
P2,2024-03-02 04:00:00,Level_MTX,0.1
";

#[test]
fn test_analyze_detects_and_exports() {
    let dir = tempfile::tempdir().expect("temp dir");
    let samples_path = dir.path().join("samples.csv");
    fs::write(&samples_path, SAMPLES_CSV).expect("write samples");
    let output_dir = dir.path().join("out");

    let args = AnalyzeArgs {
        samples: samples_path,
        thresholds: default_thresholds(),
        output_dir: Some(output_dir.clone()),
        dry_run: false,
    };
    let result = run_analyze(&args).expect("analyze");

    assert_eq!(result.output.patient_count, 2);
    assert_eq!(result.output.dme_patients, vec!["P1".to_string()]);
    assert_eq!(result.written.len(), 2);

    let patient_list =
        fs::read_to_string(output_dir.join("dme_patients.csv")).expect("patient list");
    assert_eq!(patient_list, "Patient_id\nP1\n");
    let annotated =
        fs::read_to_string(output_dir.join("annotated_samples.csv")).expect("annotated");
    assert!(annotated.starts_with("Patient_id;Sample_time;"));
    // 3 P1 level rows + 2 P2 level rows, plus the header
    assert_eq!(annotated.lines().count(), 6);
}

#[test]
fn test_analyze_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let samples_path = dir.path().join("samples.csv");
    fs::write(&samples_path, SAMPLES_CSV).expect("write samples");

    let args = AnalyzeArgs {
        samples: samples_path,
        thresholds: default_thresholds(),
        output_dir: Some(dir.path().join("out")),
        dry_run: true,
    };
    let result = run_analyze(&args).expect("analyze");

    assert!(result.written.is_empty());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_single_episode_dme_patient_is_flagged_for_review() {
    let dir = tempfile::tempdir().expect("temp dir");
    let samples_path = dir.path().join("samples.csv");
    fs::write(&samples_path, SAMPLES_CSV).expect("write samples");

    let args = AnalyzeArgs {
        samples: samples_path,
        thresholds: default_thresholds(),
        output_dir: None,
        dry_run: true,
    };
    let result = run_analyze(&args).expect("analyze");

    // P1's three samples segment into a single episode, so its detection
    // carries the mixed-treatments caveat
    let p1 = result
        .patients
        .iter()
        .find(|p| p.patient_id == "P1")
        .expect("P1 summary");
    assert_eq!(p1.episode_count, 1);
    assert_eq!(p1.dme_episode_count, 1);
    assert!(p1.needs_single_episode_warning());

    let p2 = result
        .patients
        .iter()
        .find(|p| p.patient_id == "P2")
        .expect("P2 summary");
    assert!(!p2.needs_single_episode_warning());
}

#[test]
fn test_missing_samples_file_is_an_error() {
    let args = AnalyzeArgs {
        samples: "no_such_file.csv".into(),
        thresholds: default_thresholds(),
        output_dir: None,
        dry_run: true,
    };
    assert!(run_analyze(&args).is_err());
}

#[test]
fn test_raised_threshold_reports_no_detections() {
    let dir = tempfile::tempdir().expect("temp dir");
    let samples_path = dir.path().join("samples.csv");
    fs::write(&samples_path, SAMPLES_CSV).expect("write samples");

    let mut thresholds = default_thresholds();
    thresholds.dme_threshold = 1.0;
    let args = AnalyzeArgs {
        samples: samples_path,
        thresholds,
        output_dir: None,
        dry_run: true,
    };
    let result = run_analyze(&args).expect("analyze");
    assert!(!result.output.has_detections());
}
