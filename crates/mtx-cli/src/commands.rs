use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info_span, trace, warn};

use mtx_ingest::read_samples_csv;
use mtx_model::PipelineOutput;
use mtx_report::{write_annotated_samples_csv, write_dme_patients_csv};
use mtx_transform::run_pipeline;

use crate::cli::{AnalyzeArgs, PreviewArgs};
use crate::logging::redact_value;
use crate::summary::print_preview;
use crate::types::{AnalyzeResult, PatientSummary};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("analyze", samples_file = %args.samples.display());
    let _guard = span.enter();

    let samples = read_samples_csv(&args.samples)
        .with_context(|| format!("read samples file {}", args.samples.display()))?;
    let config = args.thresholds.to_config();
    let output = run_pipeline(&samples, &config);
    let patients = summarize_patients(&output);
    for patient in &patients {
        if patient.needs_single_episode_warning() {
            warn!(
                patient_id = redact_value(&patient.patient_id),
                "DME patient has one long episode; it may be an unsegmented mix of treatments"
            );
        }
    }

    let mut written = Vec::new();
    if !args.dry_run {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.samples));
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;

        let patients_path = output_dir.join("dme_patients.csv");
        write_dme_patients_csv(&patients_path, &output.dme_patients)
            .context("write DME patient list")?;
        written.push(patients_path);

        let annotated_path = output_dir.join("annotated_samples.csv");
        write_annotated_samples_csv(&annotated_path, &output.samples)
            .context("write annotated samples")?;
        written.push(annotated_path);
    }

    Ok(AnalyzeResult {
        output,
        patients,
        written,
    })
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let samples = read_samples_csv(&args.samples)
        .with_context(|| format!("read samples file {}", args.samples.display()))?;
    let output = run_pipeline(&samples, &args.thresholds.to_config());
    print_preview(&output.samples, args.rows);
    Ok(())
}

fn default_output_dir(samples_path: &Path) -> PathBuf {
    samples_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

fn summarize_patients(output: &PipelineOutput) -> Vec<PatientSummary> {
    let mut sample_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut episode_ids: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
    let mut dme_episode_ids: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
    for sample in &output.samples {
        let patient = sample.patient_id.as_str();
        *sample_counts.entry(patient).or_insert(0) += 1;
        episode_ids.entry(patient).or_default().insert(sample.episode_id);
        if sample.dme_positive {
            dme_episode_ids
                .entry(patient)
                .or_default()
                .insert(sample.episode_id);
        }
        trace!(
            patient_id = redact_value(patient),
            episode_id = sample.episode_id,
            hour_offset = sample.hour_offset,
            "annotated row"
        );
    }
    sample_counts
        .into_iter()
        .map(|(patient_id, sample_count)| {
            let summary = PatientSummary {
                patient_id: patient_id.to_string(),
                sample_count,
                episode_count: episode_ids.get(patient_id).map_or(0, BTreeSet::len),
                dme_episode_count: dme_episode_ids.get(patient_id).map_or(0, BTreeSet::len),
            };
            debug!(
                patient_id = redact_value(patient_id),
                episodes = summary.episode_count,
                dme_episodes = summary.dme_episode_count,
                "patient summary"
            );
            summary
        })
        .collect()
}
