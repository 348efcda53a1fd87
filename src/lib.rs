//! **Semantic comparison of JSON documents.**
//!
//! `jsondiff-tools` compares two JSON values structurally and reports every
//! difference with a path, a kind and a business-impact severity. Arrays can
//! be compared positionally or by content: in content mode each element of
//! the left array is paired with the most similar element of the right array,
//! so reordered lists compare equal and edited records show up as field-level
//! changes instead of a removal plus an addition.
//!
//! It powers both the `jsondiff` command-line tool and a library for
//! programmatic use, for example in API regression tests.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: Home of the [`DiffEngine`], the [`ComparisonResult`] it
//!   produces, the severity classifier and the summary aggregator.
//! - **[`matching`]**: The [`ValueScorer`] trait, the default
//!   [`HeuristicScorer`] and the [`ArrayMatchConfig`] thresholds that decide
//!   which array elements are paired.
//! - **[`model`]**: Runtime types, structural equality and path helpers.
//! - **[`parsers`]**: Loading documents from files, readers and strings.
//! - **[`config`]**, **[`reports`]**, **[`pipeline`]**, **[`cli`]**: the
//!   layers behind the `jsondiff` binary.
//!
//! ## Getting Started
//!
//! ```
//! use jsondiff_tools::{compare_json_data, DiffType, Severity};
//! use serde_json::json;
//!
//! let left = json!({"items": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]});
//! let right = json!({"items": [{"id": 2, "name": "B"}, {"id": 1, "name": "Ax"}]});
//!
//! let result = compare_json_data(&left, &right, false);
//! assert_eq!(result.differences.len(), 1);
//!
//! let diff = &result.differences[0];
//! assert_eq!(diff.path, "items[0].name");
//! assert_eq!(diff.diff_type, DiffType::Changed);
//! assert_eq!(diff.severity, Severity::Low);
//! ```
//!
//! ### Configuring the Engine
//!
//! ```
//! use jsondiff_tools::{ArrayMatchConfig, AssignmentMethod, DiffEngine};
//! use serde_json::json;
//!
//! let engine = DiffEngine::new()
//!     .with_matching_config(ArrayMatchConfig::strict().with_assignment(AssignmentMethod::Optimal))
//!     .with_max_depth(64);
//!
//! let result = engine.compare(&json!({"status": 200}), &json!({"status": 500}))?;
//! assert!(result.has_changes());
//! # Ok::<(), jsondiff_tools::JsonDiffError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `jsondiff` binary wraps
//! it with config files, reports and CI exit codes; run `jsondiff --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Similarity math converts key counts to f64; counts are far below 2^52
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // Variable names like `left`/`right` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, FilterConfig, MatchingConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, ScoreConfig};
pub use diff::{
    aggregate, classify_severity, compare_json_data, ComparisonResult, DiffEngine, DiffItem,
    DiffSummary, DiffType, Severity,
};
pub use error::{ErrorContext, JsonDiffError, OptionContext, Result};
pub use matching::{
    similarity, ArrayMatchConfig, AssignmentMethod, HeuristicScorer, MatchExplanation,
    MatchStrength, ValueScorer,
};
pub use model::{RuntimeType, ValueKind};
pub use parsers::{parse_json_file, parse_json_str};
pub use reports::{ReportFormat, ReportGenerator};
