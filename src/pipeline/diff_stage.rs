//! Diff computation stage.
//!
//! Encapsulates the core diff logic: building the engine, running the
//! comparison, and post-processing (severity filtering).

use crate::config::DiffConfig;
use crate::diff::{ComparisonResult, DiffEngine};
use anyhow::{Context, Result};
use serde_json::Value;

/// Run the core comparison between two documents.
///
/// This builds the diff engine with the configured options, runs the diff,
/// and applies the severity filter.
pub fn compute_diff(config: &DiffConfig, left: &Value, right: &Value) -> Result<ComparisonResult> {
    let quiet = config.behavior.quiet;
    let matching = config.matching.to_array_match_config();

    if !quiet {
        tracing::info!(
            "Computing semantic diff ({} arrays, {} assignment)...",
            if config.matching.order_sensitive {
                "positional"
            } else {
                "content-matched"
            },
            matching.assignment.name()
        );
    }

    let mut engine = DiffEngine::new()
        .order_sensitive(config.matching.order_sensitive)
        .with_matching_config(matching);
    if let Some(max_depth) = config.matching.max_depth {
        engine = engine.with_max_depth(max_depth);
    }

    let mut result = engine
        .compare(left, right)
        .context("Failed to compute diff")?;

    if let Some(min_severity) = config.filtering.min_severity {
        result.filter_by_severity(min_severity);
        if !quiet {
            tracing::info!("Filtered differences to severity >= {}", min_severity);
        }
    }

    if !quiet {
        tracing::info!(
            "Diff complete: {} differences ({} critical, {} high)",
            result.summary.total_diffs(),
            result.summary.critical_diffs,
            result.summary.high_diffs
        );
    }

    Ok(result)
}
