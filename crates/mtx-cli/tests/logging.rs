//! Tests for log output of the analyze command.
//!
//! The global tracing subscriber can be installed once per process, so this
//! file holds the single test that needs it.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use mtx_cli::cli::{AnalyzeArgs, ThresholdArgs};
use mtx_cli::commands::run_analyze;
use mtx_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};

#[derive(Clone, Default)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl BufferWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("buffer lock")).into_owned()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_single_episode_detection_logs_redacted_warning() {
    let writer = BufferWriter::default();
    let config = LogConfig {
        level_filter: LevelFilter::WARN,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, writer.clone());

    let dir = tempfile::tempdir().expect("temp dir");
    let samples_path = dir.path().join("samples.csv");
    fs::write(
        &samples_path,
        "Patient_id,Sample_time,Sample_type,Result\n\
         P1,2024-03-01 08:00:00,Level_MTX,120\n\
         P1,2024-03-02 03:00:00,Level_MTX,0.5\n",
    )
    .expect("write samples");

    let args = AnalyzeArgs {
        samples: samples_path,
        thresholds: ThresholdArgs {
            start_threshold: 20.0,
            first_sample_hour: 23.0,
            confidence_bound: 4.0,
            dme_threshold: 0.2,
        },
        output_dir: None,
        dry_run: true,
    };
    let result = run_analyze(&args).expect("analyze");
    assert_eq!(result.output.dme_patients, vec!["P1".to_string()]);

    let log = writer.contents();
    assert!(log.contains("one long episode"), "missing warning in: {log}");
    // PHI stays redacted unless --log-data is passed
    assert!(log.contains("[REDACTED]"), "patient id not redacted in: {log}");
    assert!(!log.contains("P1"), "patient id leaked into logs: {log}");
}
