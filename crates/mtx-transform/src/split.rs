//! Assay-type splitting.

use mtx_model::{AssayType, NormalizedSample, Sample};
use tracing::debug;

use crate::normalize::normalize_sample;

/// The two sample streams the DME pipeline operates on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitSamples {
    /// Dose-confirmation samples, sorted by `(patient_id, sample_time)`.
    pub dose: Vec<NormalizedSample>,
    /// Concentration-level samples, sorted by `(patient_id, sample_time)`.
    pub level: Vec<NormalizedSample>,
}

/// Partitions raw samples by assay type into normalized dose and level
/// streams.
///
/// Assays other than dose confirmation and concentration level are dropped
/// here; they never reach segmentation. Both outputs are sorted by
/// `(patient_id, sample_time)` ascending, which segmentation relies on.
pub fn split_by_assay(samples: &[Sample]) -> SplitSamples {
    let mut split = SplitSamples::default();
    let mut dropped = 0usize;
    for sample in samples {
        match sample.assay_type {
            AssayType::DoseConfirmation => split.dose.push(normalize_sample(sample)),
            AssayType::ConcentrationLevel => split.level.push(normalize_sample(sample)),
            AssayType::Other => dropped += 1,
        }
    }
    sort_by_patient_and_time(&mut split.dose);
    sort_by_patient_and_time(&mut split.level);
    debug!(
        dose = split.dose.len(),
        level = split.level.len(),
        dropped,
        "split samples by assay type"
    );
    split
}

fn sort_by_patient_and_time(samples: &mut [NormalizedSample]) {
    samples.sort_by(|a, b| {
        a.patient_id
            .cmp(&b.patient_id)
            .then(a.sample_time.cmp(&b.sample_time))
    });
}
