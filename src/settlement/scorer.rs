//! Strategy scoring against historical priors.
//!
//! Deliberately simple arithmetic: the interesting signals (equilibrium
//! and bargaining output, precedent win rates, judge statistics) are
//! computed elsewhere and folded in here as priors. Each candidate starts
//! at a 0.5 baseline, moves to `0.35 + 0.5 * match_rate` when historical
//! precedent matches are known for it, is dampened by
//! `1 - 0.1 * reversal_rate` when a judge prior is supplied, and is
//! clamped to [0, 1].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Historical priors feeding the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyPriors {
    /// Observed precedent match rate per strategy label, in [0, 1].
    ///
    /// Strategies with no entry keep the 0.5 baseline.
    #[serde(default)]
    pub precedent_match_rates: FxHashMap<String, f64>,

    /// Reversal rate of the presiding judge, in [0, 1], if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_reversal_rate: Option<f64>,
}

/// One scored strategy candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyScore {
    /// The strategy label as supplied by the caller.
    pub strategy: String,
    /// Score in [0, 1].
    pub score: f64,
    /// Human-readable account of the priors applied.
    pub rationale: String,
}

/// Score and rank candidate strategies.
///
/// Returns candidates sorted by descending score; ties keep their input
/// order (stable sort).
pub fn score_strategies(candidates: &[String], priors: &StrategyPriors) -> Vec<StrategyScore> {
    let mut scores: Vec<StrategyScore> = candidates
        .iter()
        .map(|strategy| {
            let mut rationale_parts = Vec::new();
            let mut score = 0.5;

            if let Some(rate) = priors.precedent_match_rates.get(strategy) {
                score = 0.35 + 0.5 * rate;
                rationale_parts.push(format!(
                    "Historical precedent match rate {:.2} for similar cases",
                    rate
                ));
            } else {
                rationale_parts.push("Baseline prior; no matching precedent outcomes".to_string());
            }

            if let Some(reversal_rate) = priors.judge_reversal_rate {
                score *= 1.0 - 0.1 * reversal_rate;
                rationale_parts.push(format!(
                    "Adjusted for judge reversal rate {:.2}",
                    reversal_rate
                ));
            }

            StrategyScore {
                strategy: strategy.clone(),
                score: score.clamp(0.0, 1.0),
                rationale: rationale_parts.join("; "),
            }
        })
        .collect();

    // Vec::sort_by is stable, so tied candidates keep input order.
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_baseline_score_without_priors() {
        let scores = score_strategies(&labels(&["settle", "trial"]), &StrategyPriors::default());

        assert_eq!(scores.len(), 2);
        for s in &scores {
            assert_eq!(s.score, 0.5);
        }
        // Tied scores keep input order.
        assert_eq!(scores[0].strategy, "settle");
        assert_eq!(scores[1].strategy, "trial");
    }

    #[test]
    fn test_precedent_match_rate_applied() {
        let mut priors = StrategyPriors::default();
        priors
            .precedent_match_rates
            .insert("trial".to_string(), 0.9);

        let scores = score_strategies(&labels(&["settle", "trial"]), &priors);

        // 0.35 + 0.5 * 0.9 = 0.8 beats the 0.5 baseline.
        assert_eq!(scores[0].strategy, "trial");
        assert!((scores[0].score - 0.8).abs() < 1e-12);
        assert!(scores[0].rationale.contains("precedent match rate"));
    }

    #[test]
    fn test_judge_reversal_dampening() {
        let mut priors = StrategyPriors::default();
        priors
            .precedent_match_rates
            .insert("trial".to_string(), 1.0);
        priors.judge_reversal_rate = Some(0.5);

        let scores = score_strategies(&labels(&["trial"]), &priors);

        // (0.35 + 0.5) * (1 - 0.05) = 0.8075
        assert!((scores[0].score - 0.8075).abs() < 1e-12);
        assert!(scores[0].rationale.contains("reversal rate"));
    }

    #[test]
    fn test_score_clamped_to_unit_interval() {
        let mut priors = StrategyPriors::default();
        // A caller-supplied rate above 1.0 must not escape the clamp.
        priors
            .precedent_match_rates
            .insert("trial".to_string(), 2.0);

        let scores = score_strategies(&labels(&["trial"]), &priors);
        assert_eq!(scores[0].score, 1.0);
    }

    #[test]
    fn test_ranking_is_descending() {
        let mut priors = StrategyPriors::default();
        priors.precedent_match_rates.insert("a".to_string(), 0.2);
        priors.precedent_match_rates.insert("b".to_string(), 0.8);
        priors.precedent_match_rates.insert("c".to_string(), 0.5);

        let scores = score_strategies(&labels(&["a", "b", "c"]), &priors);
        let order: Vec<&str> = scores.iter().map(|s| s.strategy.as_str()).collect();

        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
