//! Score command handler.
//!
//! Implements the `score` subcommand, which prints the matching similarity
//! of two documents and optionally how it was derived.

use crate::config::{ScoreConfig, Validatable};
use crate::matching::{HeuristicScorer, MatchExplanation, MatchStrength, ValueScorer};
use crate::pipeline::{exit_codes, load_json_with_context};
use anyhow::{Context, Result};
use serde_json::json;

/// Run the score command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let problems = config.validate();
    if let Some(first) = problems.first() {
        for problem in &problems[1..] {
            tracing::warn!("Invalid configuration: {}", problem);
        }
        anyhow::bail!("Invalid configuration: {first}");
    }

    let pointer = config.pointer.as_deref();
    let left = load_json_with_context(&config.paths.left, pointer, config.quiet)?;
    let right = load_json_with_context(&config.paths.right, pointer, config.quiet)?;

    let matching = config.matching.to_array_match_config();
    let scorer = HeuristicScorer::from_config(&matching);
    let explanation = scorer.explain(&left.value, &right.value);
    let strength = MatchStrength::classify(explanation.score, &matching);

    println!("{}", render(&explanation, strength, &config)?);
    Ok(exit_codes::SUCCESS)
}

/// Render a score as text or JSON.
fn render(explanation: &MatchExplanation, strength: MatchStrength, config: &ScoreConfig) -> Result<String> {
    if config.json {
        let mut value = json!({
            "score": explanation.score,
            "strength": strength,
            "reason": explanation.reason,
        });
        if config.explain {
            value["breakdown"] = serde_json::to_value(&explanation.score_breakdown)
                .context("failed to serialize score breakdown")?;
        }
        return serde_json::to_string_pretty(&value).context("failed to serialize score");
    }

    if config.explain {
        Ok(format!("{:.4} ({strength:?})\n{}", explanation.score, explanation.detailed()))
    } else {
        Ok(format!("{:.4}", explanation.score))
    }
}
