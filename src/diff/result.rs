//! Diff result structures.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::severity::classify_severity;
use crate::model::{display_value, ValueKind};

/// Kind of a single reported difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffType {
    /// Present on the left, absent on the right
    Missing,
    /// Absent on the left, present on the right
    Extra,
    /// Same runtime type, different value
    Changed,
    /// Different runtime types
    TypeChanged,
}

impl DiffType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Extra => "extra",
            Self::Changed => "changed",
            Self::TypeChanged => "type-changed",
        }
    }

    /// Whether this diff counts towards `differentFields`.
    #[must_use]
    pub const fn is_value_change(&self) -> bool {
        matches!(self, Self::Changed | Self::TypeChanged)
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business-impact tier of a difference, ordered from least to most severe.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parse a severity name, ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported difference between two JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffItem {
    /// Location of the difference (`""` for the root)
    pub path: String,
    #[serde(rename = "type")]
    pub diff_type: DiffType,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
    pub description: String,
}

impl DiffItem {
    fn new(
        path: String,
        diff_type: DiffType,
        old_value: Option<Value>,
        new_value: Option<Value>,
        description: String,
    ) -> Self {
        let severity = classify_severity(&path, diff_type);
        Self {
            path,
            diff_type,
            severity,
            old_value,
            new_value,
            description,
        }
    }

    /// A value present only on the left.
    pub fn missing(path: String, old: &Value, description: impl Into<String>) -> Self {
        Self::new(
            path,
            DiffType::Missing,
            Some(old.clone()),
            None,
            description.into(),
        )
    }

    /// A value present only on the right.
    pub fn extra(path: String, new: &Value, description: impl Into<String>) -> Self {
        Self::new(
            path,
            DiffType::Extra,
            None,
            Some(new.clone()),
            description.into(),
        )
    }

    /// Two unequal values of the same runtime type.
    pub fn changed(path: String, old: &Value, new: &Value) -> Self {
        let description = format!(
            "Value changed from '{}' to '{}'",
            display_value(old),
            display_value(new)
        );
        Self::new(
            path,
            DiffType::Changed,
            Some(old.clone()),
            Some(new.clone()),
            description,
        )
    }

    /// Two values of different runtime types.
    pub fn type_changed(path: String, old: &Value, new: &Value) -> Self {
        let description = format!(
            "Type changed from {} to {}",
            ValueKind::of(old),
            ValueKind::of(new)
        );
        Self::new(
            path,
            DiffType::TypeChanged,
            Some(old.clone()),
            Some(new.clone()),
            description,
        )
    }
}

/// Summary statistics for a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    /// Leaf fields on both sides combined
    pub total_fields: usize,
    /// `total_fields - differences`, floored at zero (an approximation: one
    /// structural difference can cover many leaf fields)
    pub identical_fields: usize,
    /// `changed` plus `type-changed` differences
    pub different_fields: usize,
    pub missing_fields: usize,
    pub extra_fields: usize,
    pub critical_diffs: usize,
    pub high_diffs: usize,
    pub medium_diffs: usize,
    pub low_diffs: usize,
}

impl DiffSummary {
    /// Tally `differences` against a known field total.
    #[must_use]
    pub fn from_differences(total_fields: usize, differences: &[DiffItem]) -> Self {
        let mut summary = Self {
            total_fields,
            identical_fields: total_fields.saturating_sub(differences.len()),
            ..Self::default()
        };

        for item in differences {
            match item.diff_type {
                DiffType::Changed | DiffType::TypeChanged => summary.different_fields += 1,
                DiffType::Missing => summary.missing_fields += 1,
                DiffType::Extra => summary.extra_fields += 1,
            }
            match item.severity {
                Severity::Critical => summary.critical_diffs += 1,
                Severity::High => summary.high_diffs += 1,
                Severity::Medium => summary.medium_diffs += 1,
                Severity::Low => summary.low_diffs += 1,
            }
        }

        summary
    }

    /// Total number of differences.
    #[must_use]
    pub const fn total_diffs(&self) -> usize {
        self.different_fields + self.missing_fields + self.extra_fields
    }

    /// Number of differences at the given severity.
    #[must_use]
    pub const fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_diffs,
            Severity::High => self.high_diffs,
            Severity::Medium => self.medium_diffs,
            Severity::Low => self.low_diffs,
        }
    }
}

/// Complete result of a JSON comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct ComparisonResult {
    /// `true` exactly when `differences` is empty
    pub identical: bool,
    /// Differences in traversal order
    pub differences: Vec<DiffItem>,
    pub summary: DiffSummary,
}

impl ComparisonResult {
    /// Build a result from collected differences and a precomputed summary.
    pub fn new(differences: Vec<DiffItem>, summary: DiffSummary) -> Self {
        Self {
            identical: differences.is_empty(),
            differences,
            summary,
        }
    }

    /// Check if there are any differences
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.differences.is_empty()
    }

    /// Highest severity among the differences, if any
    #[must_use]
    pub fn max_severity(&self) -> Option<Severity> {
        self.differences.iter().map(|d| d.severity).max()
    }

    /// Differences of one kind
    pub fn of_type(&self, diff_type: DiffType) -> impl Iterator<Item = &DiffItem> {
        self.differences
            .iter()
            .filter(move |d| d.diff_type == diff_type)
    }

    /// Differences at or above a severity
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &DiffItem> {
        self.differences
            .iter()
            .filter(move |d| d.severity >= severity)
    }

    /// Drop differences below `min_severity` and recalculate the summary.
    ///
    /// `totalFields` is kept; the remaining counters describe the retained
    /// differences.
    pub fn filter_by_severity(&mut self, min_severity: Severity) {
        self.differences.retain(|d| d.severity >= min_severity);
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.summary = DiffSummary::from_differences(self.summary.total_fields, &self.differences);
        self.identical = self.differences.is_empty();
    }
}
