//! Array matching configuration.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum similarity (exclusive) for two array elements to be paired.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.7;
/// Similarity from which a pairing counts as a strong match.
pub const DEFAULT_STRONG_MATCH_THRESHOLD: f64 = 0.95;
/// Score added for an identifier-like key holding equal values.
pub const DEFAULT_ID_MATCH_BONUS: f64 = 0.8;
/// Weight applied to the similarity of other shared keys.
pub const DEFAULT_NESTED_WEIGHT: f64 = 0.5;

/// Strategy used to pair elements of two arrays in order-insensitive mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentMethod {
    /// Left-to-right greedy claiming: exact match first, otherwise the first
    /// highest-scoring unclaimed candidate above the acceptance threshold.
    #[default]
    Greedy,
    /// Globally optimal pairing (Kuhn-Munkres) over the acceptable candidates.
    ///
    /// Produces different pairings than `Greedy` on contested arrays.
    Optimal,
}

impl AssignmentMethod {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Optimal => "optimal",
        }
    }
}

/// Configuration for similarity scoring and array element matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayMatchConfig {
    /// Candidates must score strictly above this to be paired (0.0 - 1.0)
    pub acceptance_threshold: f64,
    /// Pairings at or above this score are strong matches (0.0 - 1.0)
    pub strong_match_threshold: f64,
    /// Bonus for an identifier-like key (name contains "id") with equal values
    pub id_match_bonus: f64,
    /// Weight for the recursive similarity of other shared keys
    pub nested_weight: f64,
    /// How elements are paired
    pub assignment: AssignmentMethod,
    /// Descend into pairings whose clamped score is exactly 1.0 even though
    /// the elements are not equal. Off by default: such pairings are treated
    /// as identical and report nothing.
    #[serde(default)]
    pub descend_saturated_matches: bool,
    /// Right-array size from which candidate scores are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for ArrayMatchConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

impl ArrayMatchConfig {
    /// Standard thresholds and weights.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            strong_match_threshold: DEFAULT_STRONG_MATCH_THRESHOLD,
            id_match_bonus: DEFAULT_ID_MATCH_BONUS,
            nested_weight: DEFAULT_NESTED_WEIGHT,
            assignment: AssignmentMethod::Greedy,
            descend_saturated_matches: false,
            parallel_threshold: 50,
        }
    }

    /// Only pair near-identical elements; everything else is missing/extra.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            acceptance_threshold: 0.85,
            ..Self::balanced()
        }
    }

    /// Pair loosely related elements (e.g. same shape, different values).
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            acceptance_threshold: 0.5,
            ..Self::balanced()
        }
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "balanced" | "default" => Some(Self::balanced()),
            "strict" => Some(Self::strict()),
            "lenient" | "permissive" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Override the acceptance threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    /// Override the assignment method.
    #[must_use]
    pub const fn with_assignment(mut self, assignment: AssignmentMethod) -> Self {
        self.assignment = assignment;
        self
    }

    /// Return the first out-of-range threshold, if any.
    #[must_use]
    pub fn invalid_threshold(&self) -> Option<(&'static str, f64)> {
        [
            ("acceptance_threshold", self.acceptance_threshold),
            ("strong_match_threshold", self.strong_match_threshold),
        ]
        .into_iter()
        .find(|(_, value)| !(0.0..=1.0).contains(value))
    }
}
