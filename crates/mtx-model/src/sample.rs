//! Lab sample records at each stage of the pipeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Assay type of a lab sample.
///
/// The lab export carries these as free-text `Sample_type` codes; only the
/// dose-confirmation and concentration-level assays participate in DME
/// analysis. Any other assay is mapped to [`AssayType::Other`] and dropped by
/// the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssayType {
    /// Dose confirmation draw (`Dose_MTX`), taken at administration.
    DoseConfirmation,
    /// Serum concentration level (`Level_MTX`), the DME analysis input.
    ConcentrationLevel,
    /// Any other assay; retained for raw display only.
    Other,
}

impl AssayType {
    /// Maps a `Sample_type` code from the lab export.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "Dose_MTX" => AssayType::DoseConfirmation,
            "Level_MTX" => AssayType::ConcentrationLevel,
            _ => AssayType::Other,
        }
    }
}

/// One lab measurement as loaded from the source table. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub patient_id: String,
    pub sample_time: NaiveDateTime,
    pub assay_type: AssayType,
    /// Raw result string, possibly a censored literal such as `"<0.05"`.
    /// Numeric coercion is the value normalizer's concern, not ingest's.
    pub raw_result: String,
}

/// A sample whose result has been coerced to a number.
///
/// Censored and otherwise unparsable results are floored to 0.0. That floor
/// is a documented coercion, not a missing-value sentinel: downstream
/// threshold comparisons see the 0.0 like any measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSample {
    pub patient_id: String,
    pub sample_time: NaiveDateTime,
    pub result: f64,
}

/// Final output row: a normalized concentration sample annotated with its
/// inferred treatment episode, normalized hour offset, and the episode's
/// DME flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSample {
    #[serde(rename = "Patient_id")]
    pub patient_id: String,
    #[serde(rename = "Sample_time")]
    pub sample_time: NaiveDateTime,
    #[serde(rename = "Episode_id")]
    pub episode_id: u32,
    /// Hours since the episode's inferred infusion start.
    #[serde(rename = "Hour_offset")]
    pub hour_offset: f64,
    #[serde(rename = "Result")]
    pub result: f64,
    /// Propagated from the owning episode; identical on every row of it.
    #[serde(rename = "Dme_positive")]
    pub dme_positive: bool,
}
