use std::path::PathBuf;

use mtx_model::PipelineOutput;

#[derive(Debug)]
pub struct AnalyzeResult {
    pub output: PipelineOutput,
    pub patients: Vec<PatientSummary>,
    /// Export files written (empty on --dry-run).
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PatientSummary {
    pub patient_id: String,
    pub sample_count: usize,
    pub episode_count: usize,
    pub dme_episode_count: usize,
}

impl PatientSummary {
    /// A DME-positive patient whose samples form one long episode may
    /// actually be an unsegmented mix of treatments.
    pub fn needs_single_episode_warning(&self) -> bool {
        self.dme_episode_count > 0 && self.episode_count == 1
    }
}
