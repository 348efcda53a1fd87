//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two JSON documents.

use crate::config::{DiffConfig, Validatable};
use crate::diff::ComparisonResult;
use crate::pipeline::{compute_diff, exit_codes, load_json_with_context, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let problems = config.validate();
    if let Some(first) = problems.first() {
        for problem in &problems[1..] {
            tracing::warn!("Invalid configuration: {}", problem);
        }
        anyhow::bail!("Invalid configuration: {first}");
    }

    let pointer = config.pointer.as_deref();
    let left = load_json_with_context(&config.paths.left, pointer, quiet)?;
    let right = load_json_with_context(&config.paths.right, pointer, quiet)?;

    let result = compute_diff(&config, &left.value, &right.value)?;
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result, &left.origin, &right.origin)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &ComparisonResult) -> i32 {
    if config.behavior.fail_on_critical && result.summary.critical_diffs > 0 {
        return exit_codes::CRITICAL_DIFFS;
    }
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::diff::compare_json_data;
    use serde_json::json;
    use std::path::PathBuf;

    fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder::new()
            .left_path(PathBuf::from("left.json"))
            .right_path(PathBuf::from("right.json"))
    }

    #[test]
    fn test_exit_code_defaults_to_success() {
        let config = builder().build().unwrap();
        let result = compare_json_data(&json!({"id": 1}), &json!({"id": 2}), false);
        assert_eq!(determine_exit_code(&config, &result), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_fail_on_change() {
        let config = builder().fail_on_change(true).build().unwrap();
        let changed = compare_json_data(&json!({"title": "a"}), &json!({"title": "b"}), false);
        let same = compare_json_data(&json!({"title": "a"}), &json!({"title": "a"}), false);
        assert_eq!(determine_exit_code(&config, &changed), exit_codes::CHANGES_DETECTED);
        assert_eq!(determine_exit_code(&config, &same), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_critical_wins() {
        let config = builder()
            .fail_on_change(true)
            .fail_on_critical(true)
            .build()
            .unwrap();
        let critical = compare_json_data(&json!({"status": 200}), &json!({"status": 500}), false);
        let minor = compare_json_data(&json!({"title": "a"}), &json!({"title": "b"}), false);
        assert_eq!(determine_exit_code(&config, &critical), exit_codes::CRITICAL_DIFFS);
        assert_eq!(determine_exit_code(&config, &minor), exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_run_diff_rejects_missing_files() {
        let config = builder()
            .left_path(PathBuf::from("/nonexistent/left.json"))
            .quiet(true)
            .build()
            .unwrap();
        let err = run_diff(config).unwrap_err();
        assert!(err.to_string().contains("paths.left"));
    }
}
