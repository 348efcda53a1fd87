//! Pipeline orchestration for JSON comparisons.
//!
//! This module provides the shared load → diff → report workflow used by
//! the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{load_json_with_context, LoadedDocument};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a JSON document
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Diff computation failed
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no differences (or failure flags not set)
    pub const SUCCESS: i32 = 0;
    /// Differences were detected with --fail-on-change
    pub const CHANGES_DETECTED: i32 = 1;
    /// Critical differences were detected with --fail-on-critical
    pub const CRITICAL_DIFFS: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
