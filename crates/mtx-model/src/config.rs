//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Hour at which the DME checkpoint window opens, counted from the inferred
/// infusion start. A clinical constant of the protocol, not a tuning knob.
pub const DME_WINDOW_START_HOUR: f64 = 42.0;

/// Threshold parameters for segmentation and DME classification.
///
/// These are supplied by an external settings collaborator (CLI flags, a
/// config file); the pipeline itself only reads the materialized struct.
/// Re-running the pipeline with changed parameters recomputes everything
/// from the original samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// A concentration above this (strict) can open a new treatment episode.
    pub start_treatment_threshold: f64,
    /// Assumed hours between the actual infusion start and the first drawn
    /// sample of an episode; added to every hour offset.
    pub hour_first_sample_treatment: f64,
    /// Width in hours of the DME checkpoint window starting at hour 42.
    pub hour_confidence_bound: f64,
    /// Concentration (µM) at or above which a sample inside the checkpoint
    /// window flags the episode as DME-positive.
    pub dme_hour_42_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_treatment_threshold: 20.0,
            hour_first_sample_treatment: 23.0,
            hour_confidence_bound: 4.0,
            dme_hour_42_threshold: 0.2,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_treatment_threshold(mut self, value: f64) -> Self {
        self.start_treatment_threshold = value;
        self
    }

    #[must_use]
    pub fn with_hour_first_sample_treatment(mut self, value: f64) -> Self {
        self.hour_first_sample_treatment = value;
        self
    }

    #[must_use]
    pub fn with_hour_confidence_bound(mut self, value: f64) -> Self {
        self.hour_confidence_bound = value;
        self
    }

    #[must_use]
    pub fn with_dme_hour_42_threshold(mut self, value: f64) -> Self {
        self.dme_hour_42_threshold = value;
        self
    }
}
