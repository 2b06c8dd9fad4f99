//! Tests for treatment-episode segmentation.

use chrono::{NaiveDate, NaiveDateTime};
use mtx_model::NormalizedSample;
use mtx_transform::{segment_episodes, segment_patient};

fn at_hour(hour: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + chrono::Duration::hours(hour)
}

/// Builds a patient's sorted level stream from hourly results.
fn patient(patient_id: &str, results: &[f64]) -> Vec<NormalizedSample> {
    results
        .iter()
        .enumerate()
        .map(|(i, &result)| NormalizedSample {
            patient_id: patient_id.to_string(),
            sample_time: at_hour(i as i64),
            result,
        })
        .collect()
}

fn episode_ids_per_sample(episodes: &[mtx_model::Episode]) -> Vec<u32> {
    episodes
        .iter()
        .flat_map(|e| e.samples.iter().map(move |_| e.episode_id))
        .collect()
}

#[test]
fn test_boundaries_at_past_peak_samples_above_threshold() {
    // Starts where result > 20 and result >= next: indices 1, 2, 4, 5
    let samples = patient("A", &[10.0, 30.0, 25.0, 15.0, 40.0, 38.0, 20.0]);
    let episodes = segment_patient(&samples, 20.0);

    assert_eq!(episode_ids_per_sample(&episodes), vec![0, 1, 2, 2, 3, 4, 4]);
    let results: Vec<Vec<f64>> = episodes
        .iter()
        .map(|e| e.samples.iter().map(|s| s.result).collect())
        .collect();
    assert_eq!(
        results,
        vec![
            vec![10.0],
            vec![30.0],
            vec![25.0, 15.0],
            vec![40.0],
            vec![38.0, 20.0],
        ]
    );
}

#[test]
fn test_episode_ids_are_a_non_decreasing_step_function() {
    let samples = patient("A", &[10.0, 30.0, 25.0, 15.0, 40.0, 38.0, 20.0]);
    let ids = episode_ids_per_sample(&segment_patient(&samples, 20.0));
    for pair in ids.windows(2) {
        assert!(pair[1] >= pair[0]);
        assert!(pair[1] - pair[0] <= 1);
    }
}

#[test]
fn test_single_sample_patient_yields_episode_zero() {
    // No successor to compare against, so never a start
    let samples = patient("A", &[150.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].episode_id, 0);
    assert_eq!(episodes[0].samples.len(), 1);
}

#[test]
fn test_low_monotonic_decline_stays_one_episode() {
    // Never crosses the start threshold: one unsegmented episode 0
    let samples = patient("A", &[15.0, 12.0, 10.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episodes.len(), 1);
    assert_eq!(episodes[0].episode_id, 0);
    assert_eq!(episodes[0].samples.len(), 3);
}

#[test]
fn test_high_decline_opens_episode_per_qualifying_sample() {
    // Each above-threshold sample not exceeded by its successor is a start
    let samples = patient("A", &[50.0, 40.0, 30.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episode_ids_per_sample(&episodes), vec![1, 2, 2]);
}

#[test]
fn test_threshold_comparison_is_strict() {
    // Exactly at the threshold does not open an episode
    let samples = patient("A", &[20.0, 10.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episode_ids_per_sample(&episodes), vec![0, 0]);
}

#[test]
fn test_streak_comparison_is_non_strict() {
    // Equal successive results count as past peak
    let samples = patient("A", &[30.0, 30.0, 5.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episode_ids_per_sample(&episodes), vec![1, 2, 2]);
}

#[test]
fn test_last_sample_attaches_to_preceding_episode() {
    // 90.0 is above threshold but has no successor
    let samples = patient("A", &[10.0, 30.0, 5.0, 90.0]);
    let episodes = segment_patient(&samples, 20.0);
    assert_eq!(episode_ids_per_sample(&episodes), vec![0, 1, 1, 1]);
}

#[test]
fn test_segmentation_never_crosses_patients() {
    let mut samples = patient("A", &[30.0, 5.0]);
    samples.extend(patient("B", &[40.0, 8.0]));
    let episodes = segment_episodes(&samples, 20.0);

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].patient_id, "A");
    assert_eq!(episodes[0].episode_id, 1);
    assert_eq!(episodes[1].patient_id, "B");
    assert_eq!(episodes[1].episode_id, 1);
}

#[test]
fn test_empty_stream_yields_no_episodes() {
    assert!(segment_episodes(&[], 20.0).is_empty());
}
