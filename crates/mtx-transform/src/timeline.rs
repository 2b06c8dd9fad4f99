//! Timeline normalization.

use chrono::NaiveDateTime;
use mtx_model::Episode;

/// Hours since an episode's inferred infusion start, one per sample.
///
/// Offsets are computed against the episode's earliest sample time, then
/// shifted by `hour_first_sample_treatment`: start detection is anchored to
/// the first *measured* sample, which is drawn a known number of hours after
/// the true infusion start. Each episode is normalized independently;
/// offsets never cross episode boundaries.
pub fn episode_hour_offsets(episode: &Episode, hour_first_sample_treatment: f64) -> Vec<f64> {
    let Some(start) = episode.samples.iter().map(|s| s.sample_time).min() else {
        return Vec::new();
    };
    episode
        .samples
        .iter()
        .map(|s| hours_between(s.sample_time, start) + hour_first_sample_treatment)
        .collect()
}

/// Fractional hours elapsed from `earlier` to `later`.
fn hours_between(later: NaiveDateTime, earlier: NaiveDateTime) -> f64 {
    (later - earlier).num_seconds() as f64 / 3600.0
}
