//! Report type definitions.

use crate::diff::Severity;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Brief colored summary with a difference listing
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum differences listed by text reports
    pub max_items: Option<usize>,
    /// Severity floor applied before reporting, echoed in the metadata
    pub min_severity: Option<Severity>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a config carrying the compared document names.
    pub fn for_documents(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                left_path: Some(left.into()),
                right_path: Some(right.into()),
                ..ReportMetadata::new()
            },
            ..Default::default()
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Left document path
    pub left_path: Option<String>,
    /// Right document path
    pub right_path: Option<String>,
    /// JSON Pointer the comparison was narrowed to
    pub pointer: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Custom properties
    pub custom: std::collections::BTreeMap<String, String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
