//! Treatment-episode segmentation.
//!
//! The source data carries no episode markers, so episode boundaries are
//! inferred from the pharmacokinetic signature: a fresh infusion shows up as
//! a high first measurement that the following sample does not exceed. The
//! lookahead is an explicit pairwise scan over each patient's chronologically
//! sorted samples.

use mtx_model::{Episode, NormalizedSample};
use tracing::debug;

/// Segments the sorted concentration-level stream into per-patient episodes.
///
/// Expects `level_samples` sorted by `(patient_id, sample_time)` as produced
/// by the splitter. Patients with zero samples simply yield no episodes.
pub fn segment_episodes(
    level_samples: &[NormalizedSample],
    start_treatment_threshold: f64,
) -> Vec<Episode> {
    let mut episodes = Vec::new();
    for patient_samples in level_samples.chunk_by(|a, b| a.patient_id == b.patient_id) {
        let patient_episodes = segment_patient(patient_samples, start_treatment_threshold);
        debug!(
            patient_id = %patient_samples[0].patient_id,
            samples = patient_samples.len(),
            episodes = patient_episodes.len(),
            "segmented patient"
        );
        episodes.extend(patient_episodes);
    }
    episodes
}

/// Segments one patient's chronologically sorted samples.
///
/// A sample opens a new episode when its result exceeds
/// `start_treatment_threshold` (strict) and is not exceeded by the next
/// sample (non-strict): already past its peak, consistent with the first
/// measurement after a fresh infusion. The patient's last sample has no
/// successor and never opens an episode; it attaches to whatever episode
/// precedes it. The episode id of a sample is the running count of episode
/// starts at or before it, so samples before the first detected start form
/// an implicit episode 0 and a start sample belongs to the episode it opens.
///
/// A patient whose levels only ever decline from the very first sample never
/// satisfies the start rule and stays one unsegmented episode 0. That
/// mirrors the source rule exactly (no episode without a detected rise) and
/// is kept as documented behavior.
pub fn segment_patient(
    samples: &[NormalizedSample],
    start_treatment_threshold: f64,
) -> Vec<Episode> {
    let mut episodes: Vec<Episode> = Vec::new();
    let mut episode_id: u32 = 0;
    for (i, sample) in samples.iter().enumerate() {
        let starts_episode = match samples.get(i + 1) {
            Some(next) => {
                sample.result > start_treatment_threshold && sample.result >= next.result
            }
            None => false,
        };
        if starts_episode {
            episode_id += 1;
        }
        match episodes.last_mut() {
            Some(episode) if episode.episode_id == episode_id => {
                episode.samples.push(sample.clone());
            }
            _ => {
                let mut episode = Episode::new(sample.patient_id.clone(), episode_id);
                episode.samples.push(sample.clone());
                episodes.push(episode);
            }
        }
    }
    episodes
}
