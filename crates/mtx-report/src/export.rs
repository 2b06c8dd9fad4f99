//! Semicolon-delimited exports of pipeline output.
//!
//! The download consumers of the original tooling expect `;`-separated
//! text, so both writers use that delimiter.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use mtx_model::{AnnotatedSample, Result};

const ANNOTATED_HEADER: [&str; 6] = [
    "Patient_id",
    "Sample_time",
    "Episode_id",
    "Hour_offset",
    "Result",
    "Dme_positive",
];

/// Writes the DME-positive patient list, one id per record, preserving the
/// pipeline's descending flagged-measurement-count order. An empty list writes the
/// header only; "no detections" is a valid export.
pub fn write_dme_patients<W: Write>(writer: W, patients: &[String]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().delimiter(b';').from_writer(writer);
    csv_writer.write_record(["Patient_id"])?;
    for patient in patients {
        csv_writer.write_record([patient.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the DME-positive patient list to a file.
pub fn write_dme_patients_csv(path: &Path, patients: &[String]) -> Result<()> {
    write_dme_patients(File::create(path)?, patients)?;
    info!(path = %path.display(), patients = patients.len(), "wrote DME patient list");
    Ok(())
}

/// Writes the full annotated sample table for downstream charting.
///
/// The header is written explicitly so that an empty table still produces a
/// valid export, matching the patient-list writer.
pub fn write_annotated_samples<W: Write>(writer: W, samples: &[AnnotatedSample]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(ANNOTATED_HEADER)?;
    for sample in samples {
        csv_writer.serialize(sample)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the annotated sample table to a file.
pub fn write_annotated_samples_csv(path: &Path, samples: &[AnnotatedSample]) -> Result<()> {
    write_annotated_samples(File::create(path)?, samples)?;
    info!(path = %path.display(), rows = samples.len(), "wrote annotated samples");
    Ok(())
}
