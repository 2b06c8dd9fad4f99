//! Result-value normalization.

use mtx_model::{NormalizedSample, Sample};

/// Coerces a raw lab result string into a concentration value.
///
/// Lab systems report results below the detection limit as censored text
/// (e.g. `"<0.05"`); those and any other non-numeric strings are floored to
/// 0.0. Total over all inputs, never fails. Negative numeric strings parse
/// through unclamped: only parse failures are floored.
pub fn normalize_result(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Applies [`normalize_result`] to one sample.
pub fn normalize_sample(sample: &Sample) -> NormalizedSample {
    NormalizedSample {
        patient_id: sample.patient_id.clone(),
        sample_time: sample.sample_time,
        result: normalize_result(&sample.raw_result),
    }
}
