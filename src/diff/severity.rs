//! Keyword-based severity classification.
//!
//! Tiers are tested in order and the first match wins. Keyword tests are
//! case-sensitive substring tests on the full path, so `address.zipcode`
//! is critical through `code` and `valid` through `id`.

use super::result::{DiffType, Severity};

const CRITICAL_KEYWORDS: &[&str] = &["id", "status", "error", "code"];
const HIGH_KEYWORDS: &[&str] = &["data", "result", "response"];
const MEDIUM_KEYWORDS: &[&str] = &["timestamp", "count", "total", "meta"];

/// Map a difference to its business-impact tier.
#[must_use]
pub fn classify_severity(path: &str, diff_type: DiffType) -> Severity {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| path.contains(k));

    if contains_any(CRITICAL_KEYWORDS) {
        Severity::Critical
    } else if contains_any(HIGH_KEYWORDS) || diff_type == DiffType::TypeChanged {
        Severity::High
    } else if contains_any(MEDIUM_KEYWORDS) {
        Severity::Medium
    } else {
        Severity::Low
    }
}
