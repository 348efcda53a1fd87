//! Similarity scoring for array element matching.
//!
//! # Architecture
//!
//! Matching is built on the [`ValueScorer`] trait, which provides a
//! pluggable likeness score between two JSON values:
//!
//! - [`HeuristicScorer`]: key overlap plus identifier bonus (default)
//!
//! [`ArrayMatchConfig`] holds the thresholds and weights, and selects
//! between greedy and optimal pairing.
//!
//! # Example
//!
//! ```ignore
//! use jsondiff_tools::matching::{similarity, HeuristicScorer, ValueScorer};
//!
//! let score = similarity(&json!({"id": 1, "name": "A"}), &json!({"id": 1, "name": "B"}));
//! assert!(score >= 0.8);
//!
//! let explanation = HeuristicScorer::default().explain(&a, &b);
//! println!("{}", explanation.detailed());
//! ```

mod config;
mod similarity;
mod traits;

pub use config::{
    ArrayMatchConfig, AssignmentMethod, DEFAULT_ACCEPTANCE_THRESHOLD, DEFAULT_ID_MATCH_BONUS,
    DEFAULT_NESTED_WEIGHT, DEFAULT_STRONG_MATCH_THRESHOLD,
};
pub use similarity::{is_identifier_key, similarity, HeuristicScorer};
pub use traits::{MatchCandidate, MatchExplanation, MatchStrength, ScoreComponent, ValueScorer};
