pub mod classify;
pub mod normalize;
pub mod pipeline;
pub mod segment;
pub mod split;
pub mod timeline;

pub use classify::classify_episode;
pub use normalize::{normalize_result, normalize_sample};
pub use pipeline::run_pipeline;
pub use segment::{segment_episodes, segment_patient};
pub use split::{SplitSamples, split_by_assay};
pub use timeline::episode_hour_offsets;
