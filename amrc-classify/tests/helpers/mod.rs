//! Test Helper Utilities
//!
//! Shared utilities for testing amrc-classify

#![allow(dead_code)]

pub mod log_capture;

use amrc_classify::batch::BatchReport;
use std::path::PathBuf;

// Re-export commonly used items
pub use log_capture::{with_captured_logs, LogCapture};

/// Path of a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Sample reports shipped with the test fixtures
pub fn sample_reports() -> Vec<BatchReport> {
    let content = std::fs::read_to_string(fixture_path("sample_reports.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}
