//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonResult, DiffItem, DiffType, Severity};
use crate::model::display_path;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "magenta",
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "dim",
    }
}

const fn diff_marker(diff_type: DiffType) -> (&'static str, &'static str) {
    match diff_type {
        DiffType::Extra => ("+", "green"),
        DiffType::Missing => ("-", "red"),
        DiffType::Changed => ("~", "yellow"),
        DiffType::TypeChanged => ("!", "red"),
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn count_line(&self, count: usize, marker: &str, color: &str, label: &str) -> Option<String> {
        (count > 0).then(|| {
            format!(
                "  {} {label}",
                self.color(&format!("{marker}{count}"), color)
            )
        })
    }

    fn diff_line(&self, item: &DiffItem) -> String {
        let (marker, color) = diff_marker(item.diff_type);
        format!(
            "  {} {} {}  {}",
            self.color(marker, color),
            self.color(
                &format!("[{}]", item.severity),
                severity_color(item.severity)
            ),
            display_path(&item.path),
            item.description
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        // Header
        let title = config.title.as_deref().unwrap_or("JSON Diff Summary");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // File info
        let left = config.metadata.left_path.as_deref().unwrap_or("left");
        let right = config.metadata.right_path.as_deref().unwrap_or("right");
        lines.push(format!("{}  {left} → {right}", self.color("Files:", "cyan")));
        if let Some(pointer) = config.metadata.pointer.as_deref() {
            lines.push(format!("{}  {pointer}", self.color("Pointer:", "cyan")));
        }
        lines.push(format!(
            "{}  {} total, {} identical",
            self.color("Fields:", "cyan"),
            summary.total_fields,
            summary.identical_fields
        ));

        lines.push(String::new());

        // Changes
        lines.push(self.color("Changes:", "bold"));
        if result.identical {
            lines.push(format!("  {}", self.color("No differences", "dim")));
            return Ok(lines.join("\n"));
        }

        lines.extend(
            [
                self.count_line(summary.extra_fields, "+", "green", "extra"),
                self.count_line(summary.missing_fields, "-", "red", "missing"),
                self.count_line(summary.different_fields, "~", "yellow", "changed"),
            ]
            .into_iter()
            .flatten(),
        );

        // Severity
        lines.push(String::new());
        lines.push(self.color("Severity:", "bold"));
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            let count = summary.count_for(severity);
            if count > 0 {
                let label = format!("{}: {count}", capitalize(severity.as_str()));
                lines.push(format!("  {}", self.color(&label, severity_color(severity))));
            }
        }

        // Differences
        lines.push(String::new());
        lines.push(self.color("Differences:", "bold"));
        let limit = config.max_items.unwrap_or(usize::MAX);
        lines.extend(
            result
                .differences
                .iter()
                .take(limit)
                .map(|item| self.diff_line(item)),
        );
        let hidden = result.differences.len().saturating_sub(limit);
        if hidden > 0 {
            lines.push(format!(
                "  {}",
                self.color(&format!("... and {hidden} more"), "dim")
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare_json_data;
    use serde_json::json;

    fn plain_report(result: &ComparisonResult, config: &ReportConfig) -> String {
        SummaryReporter::new()
            .no_color()
            .generate_diff_report(result, config)
            .unwrap()
    }

    #[test]
    fn test_identical_summary() {
        let result = compare_json_data(&json!({"a": 1}), &json!({"a": 1}), false);
        let report = plain_report(&result, &ReportConfig::default());
        assert!(report.contains("No differences"));
        assert!(!report.contains("Severity:"));
    }

    #[test]
    fn test_summary_lists_differences() {
        let result = compare_json_data(
            &json!({"user": {"id": 1}, "title": "a"}),
            &json!({"user": {"id": 2}, "extra": true}),
            false,
        );
        let report = plain_report(&result, &ReportConfig::for_documents("a.json", "b.json"));

        assert!(report.contains("a.json → b.json"));
        assert!(report.contains("Critical: 1"));
        assert!(report.contains("~ [critical] user.id  Value changed from '1' to '2'"));
        assert!(report.contains("- [low] title"));
        assert!(report.contains("+ [low] extra"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_root_path_label() {
        let result = compare_json_data(&json!(5), &json!("5"), false);
        let report = plain_report(&result, &ReportConfig::default());
        assert!(report.contains("! [high] (root)"));
    }

    #[test]
    fn test_max_items() {
        let result = compare_json_data(&json!([1, 2, 3]), &json!([4, 5, 6]), true);
        let config = ReportConfig {
            max_items: Some(1),
            ..ReportConfig::default()
        };
        let report = plain_report(&result, &config);
        assert!(report.contains("... and 2 more"));
    }

    #[test]
    fn test_colored_output() {
        let result = compare_json_data(&json!({"a": 1}), &json!({"a": 2}), false);
        let report = SummaryReporter::new()
            .generate_diff_report(&result, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("\x1b[1m"));
    }
}
