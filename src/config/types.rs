//! Configuration types for jsondiff-tools operations.
//!
//! Provides structured configuration for diff and score operations.

use crate::diff::Severity;
use crate::matching::{ArrayMatchConfig, AssignmentMethod};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override values loaded from a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Matching configuration (array mode, thresholds, presets)
    pub matching: MatchingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Compare arrays positionally.
    pub const fn order_sensitive(mut self, order_sensitive: bool) -> Self {
        self.config.matching.order_sensitive = order_sensitive;
        self
    }

    /// Set the matching preset.
    pub fn matching_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = preset.into();
        self
    }

    /// Set the acceptance threshold.
    pub const fn matching_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = Some(threshold);
        self
    }

    /// Set the array assignment method.
    pub const fn assignment(mut self, assignment: AssignmentMethod) -> Self {
        self.config.matching.assignment = assignment;
        self
    }

    /// Set the maximum comparison depth.
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.config.matching.max_depth = max_depth;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the minimum reported severity.
    pub const fn min_severity(mut self, severity: Option<Severity>) -> Self {
        self.config.filtering.min_severity = severity;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable fail-on-critical mode.
    pub const fn fail_on_critical(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_critical = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Documents to compare
    pub paths: DiffPaths,
    /// JSON Pointer selecting the compared sub-document on both sides
    pub pointer: Option<String>,
    /// Output configuration
    pub output: OutputConfig,
    /// Matching configuration
    pub matching: MatchingConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for diff operation. `-` reads from stdin.
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the left (baseline) document
    pub left: PathBuf,
    /// Path to the right (candidate) document
    pub right: PathBuf,
}

/// Configuration for score operations
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Documents to score
    pub paths: DiffPaths,
    /// JSON Pointer selecting the scored sub-document on both sides
    pub pointer: Option<String>,
    /// Print the per-key score breakdown
    pub explain: bool,
    /// Print the result as JSON
    pub json: bool,
    /// Matching configuration (scorer weights)
    pub matching: MatchingConfig,
    /// Suppress progress logging
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Pretty-print JSON reports
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            pretty: true,
        }
    }
}

/// Matching and comparison configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Compare arrays positionally instead of pairing elements by content
    pub order_sensitive: bool,
    /// Matching preset name: "balanced", "strict" or "lenient"
    pub preset: String,
    /// Custom acceptance threshold (overrides preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: Option<f64>,
    /// Array element assignment method
    pub assignment: AssignmentMethod,
    /// Descend into pairings whose similarity saturates at 1.0
    pub descend_saturated_matches: bool,
    /// Maximum nesting depth to compare (None for unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub max_depth: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            order_sensitive: false,
            preset: "balanced".to_string(),
            threshold: None,
            assignment: AssignmentMethod::Greedy,
            descend_saturated_matches: false,
            max_depth: None,
        }
    }
}

impl MatchingConfig {
    /// Convert preset name to `ArrayMatchConfig`
    #[must_use]
    pub fn to_array_match_config(&self) -> ArrayMatchConfig {
        let mut config = ArrayMatchConfig::from_preset(&self.preset).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown matching preset '{}', using 'balanced'. Valid: strict, balanced, lenient",
                self.preset
            );
            ArrayMatchConfig::balanced()
        });

        // Apply custom threshold if specified
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }

        config.assignment = self.assignment;
        config.descend_saturated_matches = self.descend_saturated_matches;
        config
    }
}

/// Filtering options for diff results
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Write no report when the documents are identical
    pub only_changes: bool,
    /// Minimum severity of reported differences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any difference is reported
    pub fail_on_change: bool,
    /// Exit with code 2 if a critical difference is reported
    pub fail_on_critical: bool,
    /// Suppress progress logging
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    pointer: Option<String>,
    output: OutputConfig,
    matching: MatchingConfig,
    filtering: FilterConfig,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the sections of an application config.
    #[must_use]
    pub fn from_app_config(config: AppConfig) -> Self {
        Self {
            output: config.output,
            matching: config.matching,
            filtering: config.filtering,
            behavior: config.behavior,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn left_path(mut self, path: PathBuf) -> Self {
        self.left = Some(path);
        self
    }

    #[must_use]
    pub fn right_path(mut self, path: PathBuf) -> Self {
        self.right = Some(path);
        self
    }

    #[must_use]
    pub fn pointer(mut self, pointer: Option<String>) -> Self {
        self.pointer = pointer;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn order_sensitive(mut self, order_sensitive: bool) -> Self {
        self.matching.order_sensitive = order_sensitive;
        self
    }

    #[must_use]
    pub fn matching_preset(mut self, preset: String) -> Self {
        self.matching.preset = preset;
        self
    }

    #[must_use]
    pub const fn matching_threshold(mut self, threshold: Option<f64>) -> Self {
        self.matching.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn assignment(mut self, assignment: AssignmentMethod) -> Self {
        self.matching.assignment = assignment;
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.matching.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn only_changes(mut self, only: bool) -> Self {
        self.filtering.only_changes = only;
        self
    }

    #[must_use]
    pub const fn min_severity(mut self, severity: Option<Severity>) -> Self {
        self.filtering.min_severity = severity;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn fail_on_critical(mut self, fail: bool) -> Self {
        self.behavior.fail_on_critical = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let left = self
            .left
            .ok_or_else(|| anyhow::anyhow!("left path is required"))?;
        let right = self
            .right
            .ok_or_else(|| anyhow::anyhow!("right path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { left, right },
            pointer: self.pointer,
            output: self.output,
            matching: self.matching,
            filtering: self.filtering,
            behavior: self.behavior,
        })
    }
}
