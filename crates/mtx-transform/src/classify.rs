//! DME classification.

use mtx_model::{DME_WINDOW_START_HOUR, Episode};

/// Classifies one episode against the DME checkpoint window.
///
/// `hour_offsets` must be aligned with `episode.samples` (see
/// [`crate::timeline::episode_hour_offsets`]). The episode is DME-positive
/// if any single sample falls inside `[42, 42 + hour_confidence_bound)` with
/// a result at or above `dme_hour_42_threshold` — one qualifying sample
/// flags the whole episode. An episode with no samples in the window is
/// negative by definition.
pub fn classify_episode(
    episode: &Episode,
    hour_offsets: &[f64],
    hour_confidence_bound: f64,
    dme_hour_42_threshold: f64,
) -> bool {
    episode
        .samples
        .iter()
        .zip(hour_offsets)
        .any(|(sample, &hour_offset)| {
            hour_offset >= DME_WINDOW_START_HOUR
                && hour_offset < DME_WINDOW_START_HOUR + hour_confidence_bound
                && sample.result >= dme_hour_42_threshold
        })
}
