//! CLI argument definitions for the DME analyzer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mtx-dme",
    version,
    about = "Delayed Methotrexate Elimination detection",
    long_about = "Detect Delayed Methotrexate Elimination (DME) in longitudinal\n\
                  drug-concentration lab samples.\n\n\
                  Segments each patient's concentration timeline into treatment\n\
                  episodes, normalizes it to hours since infusion start, and flags\n\
                  episodes whose concentration stays high at the 42-hour checkpoint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-level values in trace logs (PHI; redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the DME pipeline over a samples file and report detections.
    Analyze(AnalyzeArgs),

    /// Print the first rows of the annotated sample table.
    Preview(PreviewArgs),
}

/// Threshold parameters, mirroring the pipeline configuration surface.
#[derive(Args)]
pub struct ThresholdArgs {
    /// Concentration above which a past-peak sample opens a new episode.
    #[arg(long = "start-threshold", value_name = "CONC", default_value_t = 20.0)]
    pub start_threshold: f64,

    /// Assumed hours between infusion start and the first drawn sample.
    #[arg(long = "first-sample-hour", value_name = "HOURS", default_value_t = 23.0)]
    pub first_sample_hour: f64,

    /// Width in hours of the DME checkpoint window starting at hour 42.
    #[arg(long = "confidence-bound", value_name = "HOURS", default_value_t = 4.0)]
    pub confidence_bound: f64,

    /// Concentration (µM) at or above which a window sample flags DME.
    #[arg(long = "dme-threshold", value_name = "CONC", default_value_t = 0.2)]
    pub dme_threshold: f64,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the samples CSV (Patient_id, Sample_time, Sample_type, Result).
    #[arg(value_name = "SAMPLES_CSV")]
    pub samples: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Directory for exported files (default: <SAMPLES_CSV dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Analyze and report without writing export files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the samples CSV (Patient_id, Sample_time, Sample_type, Result).
    #[arg(value_name = "SAMPLES_CSV")]
    pub samples: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    /// Number of annotated rows to print.
    #[arg(long = "rows", value_name = "N", default_value_t = 20)]
    pub rows: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl ThresholdArgs {
    /// Materializes the pipeline configuration from the CLI flags.
    pub fn to_config(&self) -> mtx_model::PipelineConfig {
        mtx_model::PipelineConfig::new()
            .with_start_treatment_threshold(self.start_threshold)
            .with_hour_first_sample_treatment(self.first_sample_hour)
            .with_hour_confidence_bound(self.confidence_bound)
            .with_dme_hour_42_threshold(self.dme_threshold)
    }
}
