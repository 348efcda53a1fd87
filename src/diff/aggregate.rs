//! Result aggregation.

use serde_json::Value;

use super::result::{DiffItem, DiffSummary};
use crate::model::count_fields;

/// Summarize the differences collected for two root values.
#[must_use]
pub fn aggregate(left: &Value, right: &Value, differences: &[DiffItem]) -> DiffSummary {
    let total_fields = count_fields(left) + count_fields(right);
    DiffSummary::from_differences(total_fields, differences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_documents() {
        let doc = json!({"a": 1, "b": [true, null, "x"]});
        let summary = aggregate(&doc, &doc, &[]);
        assert_eq!(summary.total_fields, 6);
        assert_eq!(summary.identical_fields, 6);
        assert_eq!(summary.total_diffs(), 0);
    }

    #[test]
    fn test_identical_fields_is_floored() {
        // One missing subtree hides several leaf fields, and every diff
        // counts once against the total.
        let left = json!({"a": {"x": 1, "y": 2, "z": 3}});
        let right = json!({});
        let diffs = vec![DiffItem::missing(
            "a".to_string(),
            &left["a"],
            "Missing field 'a' in right",
        )];
        let summary = aggregate(&left, &right, &diffs);
        assert_eq!(summary.total_fields, 3);
        assert_eq!(summary.identical_fields, 2);
        assert_eq!(summary.missing_fields, 1);

        let diffs = vec![
            DiffItem::extra("p".to_string(), &json!(null), "Extra field 'p' in right"),
            DiffItem::extra("q".to_string(), &json!(null), "Extra field 'q' in right"),
        ];
        let summary = aggregate(&json!({}), &json!({"p": null, "q": null}), &diffs);
        assert_eq!(summary.total_fields, 0);
        assert_eq!(summary.identical_fields, 0);
    }
}
