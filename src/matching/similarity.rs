//! Heuristic similarity between JSON values.
//!
//! Scores are only meaningful for pairing array elements: they are not a
//! metric. Equal values score 1.0, values of different runtime types 0.0,
//! and objects score higher the more keys (and identifier values) they share.

use serde_json::{Map, Value};

use super::config::{ArrayMatchConfig, DEFAULT_ID_MATCH_BONUS, DEFAULT_NESTED_WEIGHT};
use super::traits::{MatchExplanation, ScoreComponent, ValueScorer};
use crate::model::{values_equal, RuntimeType};

/// The key/identifier heuristic used for array element matching.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer {
    id_match_bonus: f64,
    nested_weight: f64,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self {
            id_match_bonus: DEFAULT_ID_MATCH_BONUS,
            nested_weight: DEFAULT_NESTED_WEIGHT,
        }
    }
}

impl HeuristicScorer {
    #[must_use]
    pub const fn new(id_match_bonus: f64, nested_weight: f64) -> Self {
        Self {
            id_match_bonus,
            nested_weight,
        }
    }

    /// Scorer using the weights of a matching configuration.
    #[must_use]
    pub const fn from_config(config: &ArrayMatchConfig) -> Self {
        Self::new(config.id_match_bonus, config.nested_weight)
    }

    fn score_objects(&self, a: &Map<String, Value>, b: &Map<String, Value>) -> f64 {
        let shared = a.keys().filter(|key| b.contains_key(*key)).count();
        let union = a.len() + b.len() - shared;
        if union == 0 {
            return 1.0;
        }

        let accumulator: f64 = a
            .iter()
            .filter_map(|(key, left)| {
                b.get(key)
                    .map(|right| self.key_contribution(key, left, right).1)
            })
            .sum();
        let key_overlap = shared as f64 / union as f64;

        ((accumulator + key_overlap) / 2.0).min(1.0)
    }

    /// Raw score and weighted contribution of one shared key.
    fn key_contribution(&self, key: &str, left: &Value, right: &Value) -> (f64, f64) {
        if is_identifier_key(key) && values_equal(left, right) {
            (1.0, self.id_match_bonus)
        } else {
            let raw = self.score(left, right);
            (raw, raw * self.nested_weight)
        }
    }
}

impl ValueScorer for HeuristicScorer {
    fn score(&self, a: &Value, b: &Value) -> f64 {
        if values_equal(a, b) {
            return 1.0;
        }
        if RuntimeType::of(a) != RuntimeType::of(b) {
            return 0.0;
        }
        match (a, b) {
            (Value::Object(left), Value::Object(right)) => self.score_objects(left, right),
            _ => 0.0,
        }
    }

    fn explain(&self, a: &Value, b: &Value) -> MatchExplanation {
        if values_equal(a, b) {
            return MatchExplanation::new(1.0, "values are equal");
        }
        let (left_type, right_type) = (RuntimeType::of(a), RuntimeType::of(b));
        if left_type != right_type {
            return MatchExplanation::new(
                0.0,
                format!("runtime types differ ({left_type} vs {right_type})"),
            );
        }
        let (Value::Object(left), Value::Object(right)) = (a, b) else {
            return MatchExplanation::new(0.0, "unequal values that are not both objects");
        };

        let shared = left.keys().filter(|key| right.contains_key(*key)).count();
        let union = left.len() + right.len() - shared;
        let key_overlap = if union == 0 {
            1.0
        } else {
            shared as f64 / union as f64
        };
        let mut explanation = MatchExplanation::new(
            self.score_objects(left, right),
            format!("{shared} of {union} keys shared"),
        )
        .with_key_overlap(key_overlap);

        for (key, left_value) in left {
            let Some(right_value) = right.get(key) else {
                continue;
            };
            let (raw_score, weighted_score) = self.key_contribution(key, left_value, right_value);
            let identifier = is_identifier_key(key) && values_equal(left_value, right_value);
            explanation = explanation.with_score_component(ScoreComponent {
                key: key.clone(),
                weight: if identifier {
                    self.id_match_bonus
                } else {
                    self.nested_weight
                },
                raw_score,
                weighted_score,
                description: if identifier {
                    "matching identifier".to_string()
                } else {
                    "nested similarity".to_string()
                },
            });
        }

        explanation
    }

    fn name(&self) -> &'static str {
        "HeuristicScorer"
    }
}

/// Whether a key names an identifier (contains "id", case-insensitively).
///
/// Plain substring test: `valid`, `width` and `hidden` qualify too.
#[must_use]
pub fn is_identifier_key(key: &str) -> bool {
    key.to_lowercase().contains("id")
}

/// Similarity of two values under the default weights.
#[must_use]
pub fn similarity(a: &Value, b: &Value) -> f64 {
    HeuristicScorer::default().score(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_values_score_one() {
        assert_eq!(similarity(&json!(5), &json!(5)), 1.0);
        assert_eq!(similarity(&json!(null), &json!(null)), 1.0);
        assert_eq!(similarity(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})), 1.0);
        assert_eq!(similarity(&json!({}), &json!({})), 1.0);
    }

    #[test]
    fn test_type_mismatch_scores_zero() {
        assert_eq!(similarity(&json!(5), &json!("5")), 0.0);
        assert_eq!(similarity(&json!(true), &json!({"a": 1})), 0.0);
    }

    #[test]
    fn test_same_type_non_objects_score_zero() {
        assert_eq!(similarity(&json!("a"), &json!("b")), 0.0);
        assert_eq!(similarity(&json!([1, 2]), &json!([1, 3])), 0.0);
        assert_eq!(similarity(&json!(null), &json!({"a": 1})), 0.0);
        assert_eq!(similarity(&json!([]), &json!({})), 0.0);
    }

    #[test]
    fn test_shared_identifier_scores_high() {
        let score = similarity(&json!({"id": 1, "name": "A"}), &json!({"id": 1, "name": "B"}));
        assert!((score - 0.9).abs() < 1e-9);
        assert!(score >= 0.8);
    }

    #[test]
    fn test_identifier_key_is_case_insensitive_substring() {
        assert!(is_identifier_key("userId"));
        assert!(is_identifier_key("ID"));
        assert!(is_identifier_key("valid"));
        assert!(!is_identifier_key("name"));

        let score = similarity(
            &json!({"UserID": 7, "name": "A"}),
            &json!({"UserID": 7, "name": "B"}),
        );
        assert!(score >= 0.8);
    }

    #[test]
    fn test_disjoint_keys_score_low() {
        let score = similarity(&json!({"a": 1}), &json!({"b": 1}));
        assert_eq!(score, 0.0);
        assert!(score < 0.5);
    }

    #[test]
    fn test_more_matching_keys_score_higher() {
        let base = json!({"id": 1, "a": 1});
        let partial_overlap = similarity(&base, &json!({"id": 2, "b": 1}));
        let shared_value = similarity(&base, &json!({"id": 2, "a": 1}));
        let shared_id = similarity(&base, &json!({"id": 1, "a": 2}));
        assert!(partial_overlap < shared_value);
        assert!(shared_value < shared_id);
    }

    #[test]
    fn test_score_saturates_at_one_for_unequal_values() {
        let score = similarity(&json!({"id": 1, "a": 1, "b": 2}), &json!({"id": 1, "a": 1, "b": 3}));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = HeuristicScorer::new(0.2, 0.1);
        let score = scorer.score(&json!({"id": 1, "name": "A"}), &json!({"id": 1, "name": "B"}));
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_explain_breakdown() {
        let scorer = HeuristicScorer::default();
        let explanation = scorer.explain(
            &json!({"id": 1, "name": "A", "only_left": true}),
            &json!({"id": 1, "name": "B"}),
        );
        assert_eq!(explanation.score_breakdown.len(), 2);
        assert_eq!(explanation.score_breakdown[0].key, "id");
        assert_eq!(explanation.score_breakdown[0].weighted_score, 0.8);
        assert_eq!(explanation.reason, "2 of 3 keys shared");
        let expected = scorer.score(
            &json!({"id": 1, "name": "A", "only_left": true}),
            &json!({"id": 1, "name": "B"}),
        );
        assert_eq!(explanation.score, expected);

        let mismatch = scorer.explain(&json!(1), &json!("1"));
        assert_eq!(mismatch.score, 0.0);
        assert!(mismatch.reason.contains("number vs string"));
    }
}
