pub mod config;
pub mod episode;
pub mod error;
pub mod output;
pub mod sample;

pub use config::{DME_WINDOW_START_HOUR, PipelineConfig};
pub use episode::Episode;
pub use error::{MtxError, Result};
pub use output::PipelineOutput;
pub use sample::{AnnotatedSample, AssayType, NormalizedSample, Sample};
