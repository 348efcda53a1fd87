//! Helpers over `serde_json::Value` shared by the comparator, the scorer and
//! the aggregator.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

use super::path::{join_index, join_key};

/// Runtime type of a JSON value.
///
/// Grouped the way JSON hosts report `typeof`: `null`, arrays and objects all
/// share [`RuntimeType::Object`]. Two values of different runtime types are
/// reported as a type change instead of being compared further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Boolean,
    Number,
    String,
    Object,
}

impl RuntimeType {
    /// Classify a value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fine-grained kind of a JSON value, used in human-readable descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact numeric equality.
///
/// Integers compare exactly; anything involving a float compares as `f64`,
/// so `1` and `1.0` are equal. No tolerance is applied.
#[must_use]
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Structural equality of two JSON values.
///
/// Object members are compared by key regardless of their order; array
/// elements are compared positionally. Walks an explicit stack, so nesting
/// depth is limited only by memory.
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    let mut stack = vec![(a, b)];
    while let Some(pair) = stack.pop() {
        match pair {
            (Value::Null, Value::Null) => {}
            (Value::Bool(x), Value::Bool(y)) if x == y => {}
            (Value::Number(x), Value::Number(y)) if numbers_equal(x, y) => {}
            (Value::String(x), Value::String(y)) if x == y => {}
            (Value::Array(x), Value::Array(y)) if x.len() == y.len() => {
                stack.extend(x.iter().zip(y));
            }
            (Value::Object(x), Value::Object(y)) if x.len() == y.len() => {
                for (key, left) in x {
                    match y.get(key) {
                        Some(right) => stack.push((left, right)),
                        None => return false,
                    }
                }
            }
            _ => return false,
        }
    }
    true
}

/// First value nested deeper than `limit`, as `(depth, path)`.
///
/// The root is depth 0 and every member or element adds one level. Values
/// are visited in document order and the walk never goes below `limit + 1`,
/// so it is cheap for shallow limits on huge documents.
#[must_use]
pub fn find_deeper_than(value: &Value, limit: usize) -> Option<(usize, String)> {
    let mut stack = vec![(value, 0usize, String::new())];
    while let Some((current, depth, path)) = stack.pop() {
        if depth > limit {
            return Some((depth, path));
        }
        match current {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate().rev() {
                    stack.push((item, depth + 1, join_index(&path, index)));
                }
            }
            Value::Object(map) => {
                for (key, member) in map.iter().rev() {
                    stack.push((member, depth + 1, join_key(&path, key)));
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
    None
}

/// Count the leaf fields of a value.
///
/// `null` counts as 0, any other primitive as 1, and containers as the sum of
/// their children (so an empty container is 0).
#[must_use]
pub fn count_fields(value: &Value) -> usize {
    let mut count = 0;
    let mut stack = vec![value];
    while let Some(current) = stack.pop() {
        match current {
            Value::Null => {}
            Value::Array(items) => stack.extend(items.iter()),
            Value::Object(map) => stack.extend(map.values()),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => count += 1,
        }
    }
    count
}

/// Render a value for a diff description.
///
/// Strings are shown without quotes; everything else uses compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runtime_type_groups_containers() {
        assert_eq!(RuntimeType::of(&json!(null)), RuntimeType::Object);
        assert_eq!(RuntimeType::of(&json!([])), RuntimeType::Object);
        assert_eq!(RuntimeType::of(&json!({})), RuntimeType::Object);
        assert_eq!(RuntimeType::of(&json!(5)), RuntimeType::Number);
        assert_eq!(RuntimeType::of(&json!("5")), RuntimeType::String);
        assert_eq!(RuntimeType::of(&json!(true)), RuntimeType::Boolean);
    }

    #[test]
    fn test_numbers_equal_across_representations() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(values_equal(&json!(-3), &json!(-3)));
        assert!(!values_equal(&json!(1), &json!(1.0000001)));
        assert!(!values_equal(&json!(u64::MAX), &json!(-1)));
    }

    #[test]
    fn test_values_equal_ignores_key_order() {
        let a = json!({"a": 1, "b": [1, 2]});
        let b = json!({"b": [1, 2], "a": 1});
        assert!(values_equal(&a, &b));
        assert!(!values_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": null})));
    }

    #[test]
    fn test_values_equal_on_deep_nesting() {
        let mut left = json!(1);
        let mut right = json!(1);
        for _ in 0..50_000 {
            left = Value::Array(vec![left]);
            right = Value::Array(vec![right]);
        }
        assert!(values_equal(&left, &right));
        // serde_json drops recursively
        std::mem::forget(left);
        std::mem::forget(right);
    }

    #[test]
    fn test_find_deeper_than() {
        let doc = json!({"a": {"b": {"c": 1}}, "d": [[2]]});
        assert_eq!(find_deeper_than(&doc, 3), None);
        assert_eq!(find_deeper_than(&doc, 2), Some((3, "a.b.c".to_string())));
        assert_eq!(find_deeper_than(&json!({"a": 1, "d": [[2]]}), 2), Some((3, "d[0][0]".to_string())));
        assert_eq!(find_deeper_than(&json!(5), 0), None);
        assert_eq!(find_deeper_than(&json!([]), 0), None);
    }

    #[test]
    fn test_count_fields() {
        assert_eq!(count_fields(&json!(null)), 0);
        assert_eq!(count_fields(&json!("x")), 1);
        assert_eq!(count_fields(&json!({})), 0);
        assert_eq!(count_fields(&json!([])), 0);
        assert_eq!(count_fields(&json!({"a": 1, "b": {"c": [1, 2, null]}})), 3);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("A")), "A");
        assert_eq!(display_value(&json!(3)), "3");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
