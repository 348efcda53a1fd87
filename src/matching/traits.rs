//! Trait definitions for value scoring strategies.
//!
//! The array matcher only needs a likeness score between two values; this
//! module defines that seam so alternative scorers can be plugged into the
//! engine, plus the candidate and explanation types shared by them.

use serde::Serialize;
use serde_json::Value;

use super::config::ArrayMatchConfig;

/// How strongly a candidate matched its left-hand element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    /// Structurally equal values
    Exact,
    /// Similarity at or above the strong-match threshold
    Strong,
    /// Similarity above the acceptance threshold only
    Partial,
    /// Not acceptable as a pairing
    None,
}

impl MatchStrength {
    /// Classify a similarity score against the configured thresholds.
    #[must_use]
    pub fn classify(similarity: f64, config: &ArrayMatchConfig) -> Self {
        if similarity >= config.strong_match_threshold {
            Self::Strong
        } else if similarity > config.acceptance_threshold {
            Self::Partial
        } else {
            Self::None
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A right-array element selected for a left-array element.
///
/// Scoped to a single array comparison.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct MatchCandidate<'a> {
    /// The matched right-array element
    pub value: &'a Value,
    /// Its index in the right array
    pub index: usize,
    /// Similarity to the left element (0.0 - 1.0)
    pub similarity: f64,
    /// Whether the pairing came from the exact-match short-circuit
    pub exact: bool,
}

impl<'a> MatchCandidate<'a> {
    /// Candidate found by structural equality.
    pub const fn exact(value: &'a Value, index: usize) -> Self {
        Self {
            value,
            index,
            similarity: 1.0,
            exact: true,
        }
    }

    /// Candidate found by similarity scoring.
    pub const fn scored(value: &'a Value, index: usize, similarity: f64) -> Self {
        Self {
            value,
            index,
            similarity,
            exact: false,
        }
    }

    /// Strength of this candidate under `config`.
    #[must_use]
    pub fn strength(&self, config: &ArrayMatchConfig) -> MatchStrength {
        if self.exact {
            MatchStrength::Exact
        } else {
            MatchStrength::classify(self.similarity, config)
        }
    }
}

/// Contribution of one shared object key to a similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreComponent {
    /// The shared key
    pub key: String,
    /// Weight applied to the raw score (or the bonus, for identifier keys)
    pub weight: f64,
    /// Raw score before weighting
    pub raw_score: f64,
    /// Weighted contribution to the accumulator
    pub weighted_score: f64,
    /// What produced the contribution
    pub description: String,
}

/// Human-readable breakdown of a similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct MatchExplanation {
    /// The final score
    pub score: f64,
    /// Why the score is what it is
    pub reason: String,
    /// Fraction of the key union present on both sides, for objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_overlap: Option<f64>,
    /// Per-key contributions, for objects
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub score_breakdown: Vec<ScoreComponent>,
}

impl MatchExplanation {
    pub fn new(score: f64, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
            key_overlap: None,
            score_breakdown: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_key_overlap(mut self, overlap: f64) -> Self {
        self.key_overlap = Some(overlap);
        self
    }

    #[must_use]
    pub fn with_score_component(mut self, component: ScoreComponent) -> Self {
        self.score_breakdown.push(component);
        self
    }

    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{:.0}% similar: {}", self.score * 100.0, self.reason)
    }

    /// Multi-line explanation including the per-key breakdown.
    #[must_use]
    pub fn detailed(&self) -> String {
        let mut lines = vec![self.summary()];

        if let Some(overlap) = self.key_overlap {
            lines.push(format!("Key overlap: {overlap:.2}"));
        }

        if !self.score_breakdown.is_empty() {
            lines.push("Score breakdown:".to_string());
            for component in &self.score_breakdown {
                lines.push(format!(
                    "  - {}: {:.2} x {:.2} = {:.2} ({})",
                    component.key,
                    component.raw_score,
                    component.weight,
                    component.weighted_score,
                    component.description
                ));
            }
        }

        lines.join("\n")
    }
}

impl std::fmt::Display for MatchExplanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Trait for value similarity strategies.
///
/// Implementors return a heuristic likeness in `[0.0, 1.0]`. The only
/// contract relied upon by the array matcher: equal values score 1.0 and
/// values of different runtime types score 0.0.
///
/// # Example
///
/// ```ignore
/// use jsondiff_tools::matching::{HeuristicScorer, ValueScorer};
///
/// let scorer = HeuristicScorer::default();
/// let score = scorer.score(&left_item, &right_item);
/// ```
pub trait ValueScorer: Send + Sync {
    /// Compute a similarity score between two values.
    fn score(&self, a: &Value, b: &Value) -> f64;

    /// Explain how the score of two values was reached.
    fn explain(&self, a: &Value, b: &Value) -> MatchExplanation {
        MatchExplanation::new(self.score(a, b), format!("scored by {}", self.name()))
    }

    /// Get the name of this scorer for logging/debugging.
    fn name(&self) -> &'static str {
        "ValueScorer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ConstantScorer(f64);

    impl ValueScorer for ConstantScorer {
        fn score(&self, _a: &Value, _b: &Value) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_strength_classification() {
        let config = ArrayMatchConfig::default();
        assert_eq!(MatchStrength::classify(0.7, &config), MatchStrength::None);
        assert_eq!(MatchStrength::classify(0.71, &config), MatchStrength::Partial);
        assert_eq!(MatchStrength::classify(0.95, &config), MatchStrength::Strong);
        assert_eq!(MatchStrength::classify(1.0, &config), MatchStrength::Strong);
        assert!(!MatchStrength::None.is_match());
    }

    #[test]
    fn test_candidate_strength() {
        let config = ArrayMatchConfig::default();
        let value = json!({"id": 1});
        assert_eq!(
            MatchCandidate::exact(&value, 0).strength(&config),
            MatchStrength::Exact
        );
        assert_eq!(
            MatchCandidate::scored(&value, 3, 0.9).strength(&config),
            MatchStrength::Partial
        );
    }

    #[test]
    fn test_default_explanation() {
        let scorer = ConstantScorer(0.25);
        let explanation = scorer.explain(&json!(1), &json!(2));
        assert_eq!(explanation.score, 0.25);
        assert!(explanation.summary().starts_with("25% similar"));
        assert!(explanation.detailed().contains("ValueScorer"));
    }
}
