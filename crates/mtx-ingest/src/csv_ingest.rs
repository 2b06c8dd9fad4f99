//! CSV loading of the lab sample export.
//!
//! The core pipeline consumes an already-materialized sequence of
//! [`Sample`] records; this module is the loader collaborator that produces
//! it from a delimited export of the lab system. Malformed input (missing
//! required column, unparsable timestamp) is fatal for the whole run and
//! returns no partial results. Censored result strings are NOT handled
//! here: the raw `Result` text travels into the pipeline untouched and the
//! value normalizer floors it there.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use tracing::{debug, info};

use mtx_model::{AssayType, MtxError, Result, Sample};

const COLUMN_PATIENT_ID: &str = "Patient_id";
const COLUMN_SAMPLE_TIME: &str = "Sample_time";
const COLUMN_SAMPLE_TYPE: &str = "Sample_type";
const COLUMN_RESULT: &str = "Result";

/// Accepted `Sample_time` formats. A bare date is taken as midnight.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Reads the sample table from a CSV file.
pub fn read_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    debug!(path = %path.display(), "reading samples file");
    let file = File::open(path)?;
    let samples = read_samples(file)?;
    info!(path = %path.display(), samples = samples.len(), "loaded samples");
    Ok(samples)
}

/// Reads the sample table from any reader. Rows come back in file order;
/// sorting is the pipeline's concern.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let patient_idx = require_column(&headers, COLUMN_PATIENT_ID)?;
    let time_idx = require_column(&headers, COLUMN_SAMPLE_TIME)?;
    let type_idx = require_column(&headers, COLUMN_SAMPLE_TYPE)?;
    let result_idx = require_column(&headers, COLUMN_RESULT)?;

    let mut samples = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Data rows start at line 2; the header is line 1
        let row = index + 2;
        let time_value = record.get(time_idx).unwrap_or("");
        let sample_time = parse_timestamp(time_value).ok_or_else(|| MtxError::Timestamp {
            row,
            value: time_value.to_string(),
        })?;
        samples.push(Sample {
            patient_id: record.get(patient_idx).unwrap_or("").to_string(),
            sample_time,
            assay_type: AssayType::from_code(record.get(type_idx).unwrap_or("")),
            raw_result: record.get(result_idx).unwrap_or("").to_string(),
        });
    }
    Ok(samples)
}

fn require_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_header(header) == name)
        .ok_or_else(|| MtxError::MissingColumn(name.to_string()))
}

/// Trims whitespace and a UTF-8 BOM from a header cell.
fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
