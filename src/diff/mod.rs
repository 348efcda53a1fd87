//! Semantic diff engine for JSON documents.
//!
//! The engine walks two values in parallel and reports differences at the
//! paths where they occur:
//!
//! - objects are compared member by member (left keys first, then keys
//!   that only exist on the right);
//! - arrays are compared either positionally or, by default, by pairing
//!   elements on content similarity so reordered items are not reported;
//! - values of different runtime types produce a single `type-changed`
//!   difference and are not descended into.
//!
//! Every difference carries a severity derived from keywords in its path,
//! and the collected list is summarized into field counts.
//!
//! # Example
//!
//! ```ignore
//! use jsondiff_tools::diff::{compare_json_data, DiffEngine};
//!
//! let result = compare_json_data(&left, &right, false);
//! assert_eq!(result.identical, result.differences.is_empty());
//!
//! // With a depth limit and optimal array assignment:
//! let engine = DiffEngine::new()
//!     .with_max_depth(64)
//!     .with_matching_config(ArrayMatchConfig::balanced().with_assignment(AssignmentMethod::Optimal));
//! let result = engine.compare(&left, &right)?;
//! ```

mod aggregate;
mod comparator;
mod engine;
mod engine_matching;
mod result;
mod severity;

pub use aggregate::aggregate;
pub use engine::{compare_json_data, DiffEngine};
pub use engine_matching::{ArrayAlignment, ArrayMatcher, MatchedPair};
pub use result::{ComparisonResult, DiffItem, DiffSummary, DiffType, Severity};
pub use severity::classify_severity;
