//! Semantic diff engine implementation.

use serde_json::Value;
use std::convert::Infallible;

use super::aggregate::aggregate;
use super::comparator::Comparator;
use super::engine_matching::ArrayMatcher;
use super::result::ComparisonResult;
use crate::error::{DiffErrorKind, JsonDiffError, Result};
use crate::matching::{ArrayMatchConfig, HeuristicScorer, ValueScorer};
use crate::model::{find_deeper_than, values_equal};

/// Semantic diff engine for comparing JSON documents.
pub struct DiffEngine {
    matching: ArrayMatchConfig,
    order_sensitive: bool,
    max_depth: Option<usize>,
    custom_scorer: Option<Box<dyn ValueScorer>>,
}

impl DiffEngine {
    /// Create a new diff engine with default settings (order-insensitive
    /// arrays, balanced matching, no depth limit)
    pub fn new() -> Self {
        Self {
            matching: ArrayMatchConfig::balanced(),
            order_sensitive: false,
            max_depth: None,
            custom_scorer: None,
        }
    }

    /// Compare arrays positionally instead of by content
    pub fn order_sensitive(mut self, order_sensitive: bool) -> Self {
        self.order_sensitive = order_sensitive;
        self
    }

    /// Set array matching configuration
    pub fn with_matching_config(mut self, config: ArrayMatchConfig) -> Self {
        self.matching = config;
        self
    }

    /// Abort comparisons that nest deeper than `max_depth` levels below the root
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set a custom similarity scorer for array element matching.
    pub fn with_scorer(mut self, scorer: Box<dyn ValueScorer>) -> Self {
        self.custom_scorer = Some(scorer);
        self
    }

    /// Get the matching configuration.
    pub fn matching_config(&self) -> &ArrayMatchConfig {
        &self.matching
    }

    /// Check if arrays are compared positionally
    pub fn is_order_sensitive(&self) -> bool {
        self.order_sensitive
    }

    /// Check if a custom scorer is configured
    pub fn has_custom_scorer(&self) -> bool {
        self.custom_scorer.is_some()
    }

    /// Compare two documents.
    ///
    /// Fails only for an invalid matching configuration or when the
    /// configured depth limit is exceeded; no partial result is returned.
    pub fn compare(&self, left: &Value, right: &Value) -> Result<ComparisonResult> {
        if let Some((name, value)) = self.matching.invalid_threshold() {
            return Err(JsonDiffError::diff(
                "matching configuration",
                DiffErrorKind::InvalidThreshold { name, value },
            ));
        }

        match self.max_depth {
            Some(limit) => {
                // Must precede the equality fast path and array scoring, which recurse
                for document in [left, right] {
                    if let Some((depth, path)) = find_deeper_than(document, limit) {
                        tracing::debug!(depth, limit, "Document exceeds depth limit");
                        return Err(JsonDiffError::depth_limit(depth, limit, path));
                    }
                }
                self.run(left, right, |depth, path| {
                    if depth > limit {
                        Err(JsonDiffError::depth_limit(depth, limit, path))
                    } else {
                        Ok(())
                    }
                })
            }
            None => Ok(self.compare_unbounded(left, right)),
        }
    }

    /// Compare two documents without a depth limit. Never fails.
    pub fn compare_unbounded(&self, left: &Value, right: &Value) -> ComparisonResult {
        match self.run(left, right, |_, _| Ok::<(), Infallible>(())) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    fn run<E>(
        &self,
        left: &Value,
        right: &Value,
        guard: impl FnMut(usize, &str) -> std::result::Result<(), E>,
    ) -> std::result::Result<ComparisonResult, E> {
        if values_equal(left, right) {
            tracing::debug!("Documents are structurally equal");
            return Ok(ComparisonResult::new(Vec::new(), aggregate(left, right, &[])));
        }

        let default_scorer;
        let scorer: &dyn ValueScorer = match &self.custom_scorer {
            Some(s) => s.as_ref(),
            None => {
                default_scorer = HeuristicScorer::from_config(&self.matching);
                &default_scorer
            }
        };

        tracing::debug!(
            order_sensitive = self.order_sensitive,
            scorer = scorer.name(),
            "Comparing documents"
        );

        let matcher = ArrayMatcher::new(scorer, &self.matching);
        let comparator = Comparator::new(matcher, &self.matching, self.order_sensitive);
        let differences = comparator.run(left, right, guard)?;
        let summary = aggregate(left, right, &differences);

        tracing::debug!(differences = differences.len(), "Comparison complete");
        Ok(ComparisonResult::new(differences, summary))
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two documents with default matching settings.
///
/// `order_sensitive` selects positional array comparison; otherwise array
/// elements are paired by content.
pub fn compare_json_data(left: &Value, right: &Value, order_sensitive: bool) -> ComparisonResult {
    DiffEngine::new()
        .order_sensitive(order_sensitive)
        .compare_unbounded(left, right)
}
