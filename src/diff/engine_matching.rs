//! Array element matching for order-insensitive comparison.
//!
//! Elements of the left array are paired with elements of the right array
//! by content. Each right element is claimed at most once. Unpaired left
//! elements are reported as missing, unclaimed right elements as extra.

use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;
use rayon::prelude::*;
use serde_json::Value;

use crate::matching::{ArrayMatchConfig, AssignmentMethod, MatchCandidate, ValueScorer};
use crate::model::values_equal;
use crate::utils::structural_hash;

/// A left element paired with a right element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair {
    pub left: usize,
    pub right: usize,
    pub similarity: f64,
    /// Paired through structural equality
    pub exact: bool,
}

impl MatchedPair {
    /// Whether the pair must be compared to surface nested differences.
    #[must_use]
    pub fn needs_descent(&self, config: &ArrayMatchConfig) -> bool {
        !self.exact && (self.similarity < 1.0 || config.descend_saturated_matches)
    }
}

/// Outcome of pairing two arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayAlignment {
    /// Pairs in left-index order
    pub matched: Vec<MatchedPair>,
    /// Unpaired left indices, ascending
    pub missing: Vec<usize>,
    /// Unclaimed right indices, ascending
    pub extra: Vec<usize>,
}

/// Pairs array elements using a scorer and matching configuration.
pub struct ArrayMatcher<'s> {
    scorer: &'s dyn ValueScorer,
    config: &'s ArrayMatchConfig,
}

impl<'s> ArrayMatcher<'s> {
    pub fn new(scorer: &'s dyn ValueScorer, config: &'s ArrayMatchConfig) -> Self {
        Self { scorer, config }
    }

    /// Pair the elements of `left` and `right` by content.
    #[must_use]
    pub fn align(&self, left: &[Value], right: &[Value]) -> ArrayAlignment {
        let fingerprints: Vec<u64> = right.iter().map(structural_hash).collect();
        let alignment = match self.config.assignment {
            AssignmentMethod::Greedy => self.greedy_alignment(left, right, &fingerprints),
            AssignmentMethod::Optimal => self.optimal_alignment(left, right, &fingerprints),
        };
        tracing::debug!(
            method = self.config.assignment.name(),
            left = left.len(),
            right = right.len(),
            matched = alignment.matched.len(),
            missing = alignment.missing.len(),
            extra = alignment.extra.len(),
            "Aligned arrays by content"
        );
        alignment
    }

    /// Left-to-right claiming: an exact match wins immediately, otherwise the
    /// first candidate with the highest score above the threshold.
    fn greedy_alignment(
        &self,
        left: &[Value],
        right: &[Value],
        fingerprints: &[u64],
    ) -> ArrayAlignment {
        let mut claimed = vec![false; right.len()];
        let mut alignment = ArrayAlignment::default();

        for (i, item) in left.iter().enumerate() {
            match self.best_candidate(item, right, fingerprints, &claimed) {
                Some(candidate) => {
                    tracing::trace!(
                        left = i,
                        right = candidate.index,
                        similarity = candidate.similarity,
                        strength = ?candidate.strength(self.config),
                        "Claimed array element"
                    );
                    claimed[candidate.index] = true;
                    alignment.matched.push(MatchedPair {
                        left: i,
                        right: candidate.index,
                        similarity: candidate.similarity,
                        exact: candidate.exact,
                    });
                }
                None => alignment.missing.push(i),
            }
        }

        alignment.extra = unclaimed(&claimed);
        alignment
    }

    /// Best unclaimed right element for `item`, if any is acceptable.
    pub fn best_candidate<'v>(
        &self,
        item: &Value,
        right: &'v [Value],
        fingerprints: &[u64],
        claimed: &[bool],
    ) -> Option<MatchCandidate<'v>> {
        let fingerprint = structural_hash(item);
        let exact = (0..right.len()).find(|&j| {
            !claimed[j] && fingerprints[j] == fingerprint && values_equal(item, &right[j])
        });
        if let Some(j) = exact {
            return Some(MatchCandidate::exact(&right[j], j));
        }

        let scores = self.score_row(item, right, claimed);
        let mut best: Option<MatchCandidate<'v>> = None;
        let mut best_score = self.config.acceptance_threshold;
        for (j, score) in scores.into_iter().enumerate() {
            if let Some(score) = score {
                if score > best_score {
                    best_score = score;
                    best = Some(MatchCandidate::scored(&right[j], j, score));
                }
            }
        }
        best
    }

    /// Scores of `item` against every unclaimed right element, in index order.
    fn score_row(&self, item: &Value, right: &[Value], claimed: &[bool]) -> Vec<Option<f64>> {
        let score = |(j, candidate): (usize, &Value)| {
            (!claimed[j]).then(|| self.scorer.score(item, candidate))
        };
        if right.len() >= self.config.parallel_threshold {
            right.par_iter().enumerate().map(score).collect()
        } else {
            right.iter().enumerate().map(score).collect()
        }
    }

    /// Globally optimal pairing maximizing the total similarity of accepted
    /// pairs. Only pairs the greedy policy would accept are eligible.
    fn optimal_alignment(
        &self,
        left: &[Value],
        right: &[Value],
        fingerprints: &[u64],
    ) -> ArrayAlignment {
        if left.is_empty() || right.is_empty() {
            return ArrayAlignment {
                matched: Vec::new(),
                missing: (0..left.len()).collect(),
                extra: (0..right.len()).collect(),
            };
        }

        let edges = self.candidate_matrix(left, right, fingerprints);

        let n = left.len().max(right.len());
        let scale = 1_000_000f64;
        let weights: Vec<Vec<i64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| match edges.get(i).and_then(|row| row.get(j)).copied().flatten() {
                        // Negate for minimization; non-edges and padding are neutral
                        Some((score, _)) => -((score * scale) as i64),
                        None => 0,
                    })
                    .collect()
            })
            .collect();

        let matrix = match Matrix::from_rows(weights) {
            Ok(matrix) => matrix,
            Err(err) => {
                tracing::warn!("Optimal assignment unavailable ({err}), using greedy matching");
                return self.greedy_alignment(left, right, fingerprints);
            }
        };
        let (_, assignment) = kuhn_munkres_min(&matrix);

        let mut claimed = vec![false; right.len()];
        let mut alignment = ArrayAlignment::default();
        for (i, row) in edges.iter().enumerate() {
            let paired = assignment
                .get(i)
                .and_then(|&j| row.get(j).copied().flatten().map(|edge| (j, edge)));
            match paired {
                Some((j, (similarity, exact))) => {
                    claimed[j] = true;
                    alignment.matched.push(MatchedPair {
                        left: i,
                        right: j,
                        similarity,
                        exact,
                    });
                }
                None => alignment.missing.push(i),
            }
        }

        alignment.extra = unclaimed(&claimed);
        alignment
    }

    /// Acceptable `(similarity, exact)` edges between every left/right pair.
    fn candidate_matrix(
        &self,
        left: &[Value],
        right: &[Value],
        fingerprints: &[u64],
    ) -> Vec<Vec<Option<(f64, bool)>>> {
        let row = |item: &Value| -> Vec<Option<(f64, bool)>> {
            let fingerprint = structural_hash(item);
            right
                .iter()
                .zip(fingerprints)
                .map(|(candidate, &hash)| {
                    if hash == fingerprint && values_equal(item, candidate) {
                        return Some((1.0, true));
                    }
                    let score = self.scorer.score(item, candidate);
                    (score > self.config.acceptance_threshold).then_some((score, false))
                })
                .collect()
        };

        if left.len() * right.len() >= self.config.parallel_threshold {
            left.par_iter().map(row).collect()
        } else {
            left.iter().map(row).collect()
        }
    }
}

fn unclaimed(claimed: &[bool]) -> Vec<usize> {
    claimed
        .iter()
        .enumerate()
        .filter_map(|(j, &used)| (!used).then_some(j))
        .collect()
}
