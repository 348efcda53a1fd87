//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → diff → report pipeline,
//! error handling paths, and CLI command handlers with real fixture files.

use jsondiff_tools::cli::run_diff;
use jsondiff_tools::config::{load_config_file, DiffConfigBuilder, Validatable};
use jsondiff_tools::pipeline::{
    auto_detect_format, compute_diff, exit_codes, load_json_with_context, output_report,
    write_output, OutputTarget, PipelineError,
};
use jsondiff_tools::reports::ReportFormat;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn read_report(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("report written");
    serde_json::from_str(&text).expect("report is JSON")
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_fixture() {
        let path = fixture_path("api/users_left.json");
        let doc = load_json_with_context(&path, None, true).expect("load should succeed");

        assert_eq!(doc.origin, path.display().to_string());
        assert_eq!(doc.value["meta"]["count"], 3);
    }

    #[test]
    fn load_with_pointer() {
        let path = fixture_path("api/users_left.json");
        let doc = load_json_with_context(&path, Some("/data/users/0"), true)
            .expect("pointer should resolve");
        assert_eq!(doc.value["name"], "Ada");
    }

    #[test]
    fn load_truncated_fixture_fails() {
        let path = fixture_path("api/truncated.json");
        let err = load_json_with_context(&path, None, true).unwrap_err();
        assert!(format!("{err:#}").contains("truncated.json"));
    }

    #[test]
    fn load_missing_file_fails() {
        let result = load_json_with_context(Path::new("/nonexistent/doc.json"), None, true);
        assert!(result.is_err());
    }
}

// ============================================================================
// Diff Stage Tests
// ============================================================================

mod diff_stage {
    use super::*;

    #[test]
    fn compute_diff_with_file_config() {
        let app_config = load_config_file(&fixture_path("config/ci.yaml")).expect("config loads");
        assert!(app_config.is_valid());

        let config = DiffConfigBuilder::from_app_config(app_config)
            .left_path(fixture_path("api/users_left.json"))
            .right_path(fixture_path("api/users_right.json"))
            .build()
            .expect("paths set");

        let left = load_json_with_context(&config.paths.left, None, true).unwrap();
        let right = load_json_with_context(&config.paths.right, None, true).unwrap();
        let result = compute_diff(&config, &left.value, &right.value).expect("diff succeeds");

        let paths: Vec<_> = result.differences.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "data.users[0].email",
                "data.users[2]",
                "data.users[2]",
                "meta.page"
            ]
        );
    }

    #[test]
    fn compute_diff_on_pointed_sub_documents() {
        let config = DiffConfigBuilder::new()
            .left_path(fixture_path("api/users_left.json"))
            .right_path(fixture_path("api/users_right.json"))
            .pointer(Some("/meta".to_string()))
            .quiet(true)
            .build()
            .unwrap();

        let pointer = config.pointer.as_deref();
        let left = load_json_with_context(&config.paths.left, pointer, true).unwrap();
        let right = load_json_with_context(&config.paths.right, pointer, true).unwrap();
        let result = compute_diff(&config, &left.value, &right.value).unwrap();

        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].path, "page");
    }
}

// ============================================================================
// Output and Report Stage Tests
// ============================================================================

mod output_stage {
    use super::*;

    #[test]
    fn auto_format_for_files_is_json() {
        let target = OutputTarget::File(PathBuf::from("report.out"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &target),
            ReportFormat::Json
        );
    }

    #[test]
    fn write_output_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        write_output("hello", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn output_report_summary_to_file_has_no_ansi() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("summary.txt");
        let config = DiffConfigBuilder::new()
            .left_path(fixture_path("api/items_left.json"))
            .right_path(fixture_path("api/items_right.json"))
            .output_format(ReportFormat::Summary)
            .output_file(Some(report_path.clone()))
            .quiet(true)
            .build()
            .unwrap();

        let left = load_json_with_context(&config.paths.left, None, true).unwrap();
        let right = load_json_with_context(&config.paths.right, None, true).unwrap();
        let result = compute_diff(&config, &left.value, &right.value).unwrap();
        output_report(&config, &result, &left.origin, &right.origin).unwrap();

        let text = std::fs::read_to_string(report_path).unwrap();
        assert!(text.contains("items[0].name"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn pipeline_error_wraps_source() {
        let err = PipelineError::DiffFailed {
            source: anyhow::anyhow!("depth limit"),
        };
        assert_eq!(err.to_string(), "Diff failed: depth limit");
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    fn builder(left: &str, right: &str, report: &Path) -> DiffConfigBuilder {
        DiffConfigBuilder::new()
            .left_path(fixture_path(left))
            .right_path(fixture_path(right))
            .output_format(ReportFormat::Json)
            .output_file(Some(report.to_path_buf()))
            .quiet(true)
    }

    #[test]
    fn run_diff_end_to_end_report() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("report.json");
        let config = builder("api/items_left.json", "api/items_right.json", &report_path)
            .fail_on_change(true)
            .build()
            .unwrap();

        let code = run_diff(config).expect("diff runs");
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let report = read_report(&report_path);
        assert_eq!(report["identical"], false);
        assert_eq!(report["summary"]["differentFields"], 1);
        let differences = report["differences"].as_array().expect("differences listed");
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0]["path"], "items[0].name");
        assert_eq!(differences[0]["type"], "changed");
        assert_eq!(differences[0]["severity"], "low");
    }

    #[test]
    fn run_diff_fail_on_critical() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("report.json");
        let config = builder("api/users_left.json", "api/status_error.json", &report_path)
            .fail_on_critical(true)
            .build()
            .unwrap();

        assert_eq!(run_diff(config).unwrap(), exit_codes::CRITICAL_DIFFS);
    }

    #[test]
    fn run_diff_identical_documents_succeed() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("report.json");
        let config = builder("api/users_left.json", "api/users_left.json", &report_path)
            .fail_on_change(true)
            .fail_on_critical(true)
            .only_changes(true)
            .build()
            .unwrap();

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
        assert!(!report_path.exists());
    }

    #[test]
    fn run_diff_severity_filter() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("report.json");
        let config = builder("api/users_left.json", "api/users_right.json", &report_path)
            .min_severity(Some(jsondiff_tools::Severity::High))
            .build()
            .unwrap();

        run_diff(config).unwrap();
        let report = read_report(&report_path);
        assert_eq!(report["metadata"]["minSeverity"], "high");
        assert_eq!(report["summary"]["mediumDiffs"], 0);
        assert_eq!(report["differences"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn run_diff_bad_pointer_is_error() {
        let tmp = TempDir::new().unwrap();
        let report_path = tmp.path().join("report.json");
        let config = builder("api/items_left.json", "api/items_right.json", &report_path)
            .pointer(Some("/nope".to_string()))
            .build()
            .unwrap();

        assert!(run_diff(config).is_err());
        assert!(!report_path.exists());
    }
}
