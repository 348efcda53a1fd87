//! Report output stage.
//!
//! Handles generating and writing diff reports.

use crate::config::DiffConfig;
use crate::diff::ComparisonResult;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Output a diff report to the configured destination.
///
/// Resolves the `auto` format, renders the report and writes it to the
/// configured file or stdout. With `only_changes` set, identical documents
/// produce no output at all.
pub fn output_report(
    config: &DiffConfig,
    result: &ComparisonResult,
    left_origin: &str,
    right_origin: &str,
) -> Result<()> {
    if config.filtering.only_changes && result.identical {
        if !config.behavior.quiet {
            tracing::info!("Documents are identical; no report written");
        }
        return Ok(());
    }

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let use_color = should_use_color(config.output.no_color, &output_target);

    let report_config = ReportConfig {
        min_severity: config.filtering.min_severity,
        metadata: ReportMetadata {
            left_path: Some(left_origin.to_string()),
            right_path: Some(right_origin.to_string()),
            pointer: config.pointer.clone(),
            ..ReportMetadata::new()
        },
        ..ReportConfig::default()
    };

    let reporter = create_reporter_with_options(effective_output, use_color, config.output.pretty);
    let report = reporter
        .generate_diff_report(result, &report_config)
        .with_context(|| format!("Failed to generate {effective_output} report"))?;

    write_output(&report, &output_target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::diff::compare_json_data;
    use crate::reports::ReportFormat;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_with_output(file: PathBuf, only_changes: bool) -> DiffConfig {
        DiffConfigBuilder::new()
            .left_path(PathBuf::from("left.json"))
            .right_path(PathBuf::from("right.json"))
            .output_format(ReportFormat::Json)
            .output_file(Some(file))
            .only_changes(only_changes)
            .quiet(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_output_json_report_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = config_with_output(path.clone(), false);
        let result = compare_json_data(&json!({"a": 1}), &json!({"a": 2}), false);

        output_report(&config, &result, "left.json", "right.json").unwrap();

        let report: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(report["metadata"]["right"], "right.json");
        assert_eq!(report["differences"][0]["path"], "a");
    }

    #[test]
    fn test_only_changes_skips_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let config = config_with_output(path.clone(), true);
        let result = compare_json_data(&json!([1, 2]), &json!([2, 1]), false);

        output_report(&config, &result, "left.json", "right.json").unwrap();
        assert!(!path.exists());
    }
}
