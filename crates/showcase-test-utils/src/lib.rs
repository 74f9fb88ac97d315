//! Testing utilities for the showcase workspace
//!
//! Shared fixtures: throwaway configs rooted in a temp directory, helpers
//! that capture a run's output as text, and an in-memory log sink.

#![allow(missing_docs)]

use showcase_core::{RunSummary, Showcase, ShowcaseConfig, ShowcaseError};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink shared between clones; usable both as a `Write` target
/// for program output and as a `MakeWriter` for a tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Config whose temp file lives under `dir` and whose latencies are zero
pub fn config_in(dir: &TempDir) -> ShowcaseConfig {
    ShowcaseConfig::new()
        .with_temp_path(dir.path().join("temp.txt"))
        .without_delays()
}

/// Fresh temp directory plus a config rooted in it
pub fn setup_test_config() -> (TempDir, ShowcaseConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    (dir, config)
}

/// Temp file path a config rooted in `dir` will use
pub fn temp_path_in(dir: &TempDir) -> PathBuf {
    dir.path().join("temp.txt")
}

/// Run `config` and return the summary together with the printed lines
pub async fn capture_run(
    config: ShowcaseConfig,
) -> Result<(RunSummary, Vec<String>), ShowcaseError> {
    let mut out = Vec::new();
    let summary = Showcase::new(config).run(&mut out).await?;
    let text = String::from_utf8(out).unwrap();
    Ok((summary, text.lines().map(str::to_string).collect()))
}

/// Lines a default run prints for the given temp file path
pub fn expected_default_lines(temp_path: &std::path::Path) -> Vec<String> {
    vec![
        "Area is 19.6349375".to_string(),
        "one => 1".to_string(),
        "two => 2".to_string(),
        "Factorial of 5 is 120".to_string(),
        "Container [point] holds Point(x=1.5, y=2.5)".to_string(),
        "Container length: 1".to_string(),
        "Rendering Circle of kind 2D".to_string(),
        "Async task result: [0, 2, 4, 6, 8]".to_string(),
        format!("Temp file {} exists: true", temp_path.display()),
        format!("Temp file {} removed: true", temp_path.display()),
        "Using resource demo-resource".to_string(),
        "Countdown: 3".to_string(),
        "Countdown: 2".to_string(),
        "Countdown: 1".to_string(),
        "RED is warm".to_string(),
        "GREEN is neutral".to_string(),
        "BLUE is cool".to_string(),
    ]
}
