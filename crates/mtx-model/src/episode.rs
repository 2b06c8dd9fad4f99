//! Treatment episodes inferred from concentration timelines.

use serde::{Deserialize, Serialize};

use crate::sample::NormalizedSample;

/// A maximal contiguous run of one patient's concentration samples belonging
/// to a single treatment administration.
///
/// The source data carries no episode markers; boundaries are inferred by the
/// segmenter from the pharmacokinetic signature (a measured spike followed by
/// decline). Episode ids are unique per patient and assigned in chronological
/// order of episode start, beginning at 0 for samples that precede the first
/// detected start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub patient_id: String,
    pub episode_id: u32,
    /// Samples sorted ascending by `sample_time`. Every concentration sample
    /// of the patient belongs to exactly one episode.
    pub samples: Vec<NormalizedSample>,
    /// Computed by the classifier; false until classification runs.
    pub dme_positive: bool,
}

impl Episode {
    pub fn new(patient_id: impl Into<String>, episode_id: u32) -> Self {
        Self {
            patient_id: patient_id.into(),
            episode_id,
            samples: Vec::new(),
            dme_positive: false,
        }
    }
}
