//! Content hashing utilities.

use serde_json::{Map, Value};
use xxhash_rust::xxh3::{xxh3_64, Xxh3};

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_NUMBER: u8 = 2;
const TAG_STRING: u8 = 3;
const TAG_ARRAY: u8 = 4;
const TAG_OBJECT: u8 = 5;

/// Compute a structural fingerprint of a JSON value.
///
/// Consistent with [`values_equal`](crate::model::values_equal): equal values
/// always hash equal. Numbers are hashed through their `f64` value and object
/// members are combined order-independently. Containers are hashed bottom-up
/// from an explicit stack, so deep nesting cannot exhaust the call stack.
#[must_use]
pub fn structural_hash(value: &Value) -> u64 {
    enum Frame<'a> {
        Visit(&'a Value),
        Array(usize),
        Object(&'a Map<String, Value>),
    }

    let mut frames = vec![Frame::Visit(value)];
    let mut digests: Vec<u64> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Visit(Value::Array(items)) => {
                frames.push(Frame::Array(items.len()));
                frames.extend(items.iter().rev().map(Frame::Visit));
            }
            Frame::Visit(Value::Object(map)) => {
                frames.push(Frame::Object(map));
                frames.extend(map.values().rev().map(Frame::Visit));
            }
            Frame::Visit(leaf) => digests.push(leaf_hash(leaf)),
            Frame::Array(len) => {
                let children = digests.split_off(digests.len().saturating_sub(len));
                let mut hasher = Xxh3::new();
                hasher.update(&[TAG_ARRAY]);
                hasher.update(&(len as u64).to_le_bytes());
                for child in children {
                    hasher.update(&child.to_le_bytes());
                }
                digests.push(hasher.digest());
            }
            Frame::Object(map) => {
                let children = digests.split_off(digests.len().saturating_sub(map.len()));
                let combined = map.keys().zip(children).fold(0u64, |acc, (key, child)| {
                    let mut entry = Vec::with_capacity(key.len() + 8);
                    entry.extend_from_slice(key.as_bytes());
                    entry.extend_from_slice(&child.to_le_bytes());
                    acc.wrapping_add(xxh3_64(&entry))
                });
                let mut hasher = Xxh3::new();
                hasher.update(&[TAG_OBJECT]);
                hasher.update(&(map.len() as u64).to_le_bytes());
                hasher.update(&combined.to_le_bytes());
                digests.push(hasher.digest());
            }
        }
    }

    digests.pop().unwrap_or_default()
}

fn leaf_hash(value: &Value) -> u64 {
    let mut hasher = Xxh3::new();
    match value {
        Value::Null => hasher.update(&[TAG_NULL]),
        Value::Bool(b) => hasher.update(&[TAG_BOOL, u8::from(*b)]),
        Value::Number(n) => {
            hasher.update(&[TAG_NUMBER]);
            // -0.0 == 0.0, so both must share a fingerprint
            let float = n.as_f64().map_or(0.0, |f| if f == 0.0 { 0.0 } else { f });
            hasher.update(&float.to_bits().to_le_bytes());
        }
        Value::String(s) => {
            hasher.update(&[TAG_STRING]);
            hasher.update(&(s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        Value::Array(_) | Value::Object(_) => {}
    }
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_hash_is_stable() {
        let value = json!({"id": 1, "tags": ["a", "b"]});
        assert_eq!(structural_hash(&value), structural_hash(&value.clone()));
        assert_ne!(structural_hash(&value), 0);
    }

    #[test]
    fn test_structural_hash_matches_equality() {
        assert_eq!(
            structural_hash(&json!({"a": 1, "b": 2})),
            structural_hash(&json!({"b": 2, "a": 1.0}))
        );
        assert_eq!(structural_hash(&json!(0.0)), structural_hash(&json!(-0.0)));
    }

    #[test]
    fn test_structural_hash_distinguishes_values() {
        assert_ne!(structural_hash(&json!([1, 2])), structural_hash(&json!([2, 1])));
        assert_ne!(structural_hash(&json!("1")), structural_hash(&json!(1)));
        assert_ne!(structural_hash(&json!(null)), structural_hash(&json!({})));
        assert_ne!(
            structural_hash(&json!({"a": 1})),
            structural_hash(&json!({"a": 2}))
        );
    }

    #[test]
    fn test_structural_hash_on_deep_nesting() {
        let mut left = json!({"v": 1});
        let mut right = json!({"v": 1.0});
        for _ in 0..50_000 {
            left = Value::Array(vec![left]);
            right = Value::Array(vec![right]);
        }
        assert_eq!(structural_hash(&left), structural_hash(&right));
        // serde_json drops recursively
        std::mem::forget(left);
        std::mem::forget(right);
    }
}
