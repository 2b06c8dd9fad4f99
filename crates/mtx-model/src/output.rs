//! Pipeline output types.

use serde::{Deserialize, Serialize};

use crate::sample::{AnnotatedSample, NormalizedSample};

/// Result of one full pipeline run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Annotated concentration samples, sorted by `(patient_id, sample_time)`.
    pub samples: Vec<AnnotatedSample>,
    /// Normalized dose-confirmation samples, retained for raw display.
    pub dose_samples: Vec<NormalizedSample>,
    /// Distinct patients with at least one concentration sample.
    pub patient_count: usize,
    /// Patients with at least one DME-positive episode, ordered by
    /// descending count of measurements in their flagged episodes
    /// (patient id breaks ties). Empty means "no detections", a valid
    /// outcome distinct from failure.
    pub dme_patients: Vec<String>,
}

impl PipelineOutput {
    /// Whether any episode in the run was classified DME-positive.
    pub fn has_detections(&self) -> bool {
        !self.dme_patients.is_empty()
    }
}
