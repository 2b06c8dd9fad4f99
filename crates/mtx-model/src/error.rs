use thiserror::Error;

/// Fatal pipeline errors.
///
/// Censored or otherwise unparsable result strings are NOT represented here:
/// the value normalizer recovers them to 0.0 locally. Likewise a patient with
/// no concentration samples, or a run with no DME detections, is a valid
/// outcome carried in the output value. Only malformed input is fatal, and a
/// fatal error never returns partial results.
#[derive(Debug, Error)]
pub enum MtxError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(String),
    #[error("row {row}: unparsable timestamp `{value}`")]
    Timestamp { row: usize, value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, MtxError>;
