// =============================================================================
// Weighted Ranking — composite scoring and selection of screened assets
// =============================================================================
//
// Downstream of the indicator engine, assets are compared with a weighted
// composite of their five scores:
//
//   1. Each indicator is min-max normalised to [0, 1] across the universe.
//   2. Indicators where "lower is better" (beta, P/E) are inverted.
//   3. Missing scores contribute 0 to the composite.
//   4. Assets are ordered best-first, then threshold filters mark each asset
//      selected or rejected with a reason.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::AssetScores;

/// Indicator names in report order.
const INDICATORS: [&str; 5] = ["liquidity", "beta", "sharpe", "pe_ratio", "momentum"];

/// Per-indicator weights for the composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingWeights {
    pub liquidity: f64,
    pub beta: f64,
    pub sharpe: f64,
    pub pe_ratio: f64,
    pub momentum: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            liquidity: 0.15,
            beta: 0.15,
            sharpe: 0.30,
            pe_ratio: 0.15,
            momentum: 0.25,
        }
    }
}

impl RankingWeights {
    fn get(&self, indicator: &str) -> f64 {
        match indicator {
            "liquidity" => self.liquidity,
            "beta" => self.beta,
            "sharpe" => self.sharpe,
            "pe_ratio" => self.pe_ratio,
            "momentum" => self.momentum,
            _ => 0.0,
        }
    }
}

/// Hard threshold filters applied after ranking.  `None` disables a filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionCriteria {
    /// Minimum trailing average daily volume.
    #[serde(default)]
    pub min_liquidity: Option<f64>,

    /// Maximum acceptable trailing P/E; assets without a P/E score pass.
    #[serde(default)]
    pub max_pe_ratio: Option<f64>,

    /// Minimum momentum (sum of daily returns) over the window.
    #[serde(default)]
    pub min_momentum: Option<f64>,

    /// Maximum beta against the benchmark.
    #[serde(default)]
    pub max_beta: Option<f64>,
}

impl SelectionCriteria {
    /// Evaluate all enabled filters. Returns `None` if every filter passes,
    /// or `Some(reason)` naming the first filter that blocks.
    pub fn check(&self, scores: &AssetScores) -> Option<String> {
        if let Some(min) = self.min_liquidity {
            match scores.liquidity {
                Some(v) if v >= min => {}
                Some(v) => return Some(format!("liquidity {v:.0} below minimum {min:.0}")),
                None => return Some("liquidity unavailable".to_string()),
            }
        }

        if let Some(max) = self.max_pe_ratio {
            // No P/E (missing or negative earnings) is not a P/E violation.
            if let Some(v) = scores.pe_ratio {
                if v > max {
                    return Some(format!("P/E {v:.2} above maximum {max:.2}"));
                }
            }
        }

        if let Some(min) = self.min_momentum {
            match scores.momentum {
                Some(v) if v >= min => {}
                Some(v) => return Some(format!("momentum {v:.4} below minimum {min:.4}")),
                None => return Some("momentum unavailable".to_string()),
            }
        }

        if let Some(max) = self.max_beta {
            if let Some(v) = scores.beta {
                if v > max {
                    return Some(format!("beta {v:.2} above maximum {max:.2}"));
                }
            }
        }

        None
    }
}

/// The contribution of one indicator to an asset's composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub indicator: String,
    /// Raw indicator value, if available.
    pub raw: Option<f64>,
    /// Universe-normalised value in [0, 1]; 0 when the raw score is missing.
    pub normalized: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// One asset's position in the ranked universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAsset {
    pub ticker: String,
    pub composite_score: f64,
    pub selected: bool,
    /// First filter that blocked this asset, if any.
    pub reject_reason: Option<String>,
    pub contributions: Vec<ScoreContribution>,
    pub scores: AssetScores,
}

/// Ranks a screened universe by weighted composite score.
pub struct AssetRanker {
    weights: RankingWeights,
    criteria: SelectionCriteria,
}

impl AssetRanker {
    pub fn new(weights: RankingWeights, criteria: SelectionCriteria) -> Self {
        Self { weights, criteria }
    }

    /// Rank all scored assets best-first and apply the selection filters.
    pub fn rank(&self, universe: HashMap<String, AssetScores>) -> Vec<RankedAsset> {
        let all: Vec<AssetScores> = universe.into_values().collect();

        // Min/max of each indicator across the universe, over available
        // scores only.
        let ranges: HashMap<&str, (f64, f64)> = INDICATORS
            .iter()
            .filter_map(|&name| {
                let values: Vec<f64> = all.iter().filter_map(|s| raw_score(s, name)).collect();
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                if values.is_empty() {
                    None
                } else {
                    Some((name, (min, max)))
                }
            })
            .collect();

        let mut ranked: Vec<RankedAsset> = all
            .into_iter()
            .map(|scores| self.rank_one(scores, &ranges))
            .collect();

        ranked.sort_by(|a, b| {
            b.composite_score
                .partial_cmp(&a.composite_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }

    fn rank_one(
        &self,
        scores: AssetScores,
        ranges: &HashMap<&str, (f64, f64)>,
    ) -> RankedAsset {
        let mut contributions = Vec::with_capacity(INDICATORS.len());
        let mut composite = 0.0;

        for &name in &INDICATORS {
            let raw = raw_score(&scores, name);
            let normalized = match (raw, ranges.get(name)) {
                (Some(value), Some(&(min, max))) => {
                    let scaled = if max > min {
                        (value - min) / (max - min)
                    } else {
                        // Whole universe agrees on this indicator.
                        0.5
                    };
                    // Lower beta / lower P/E ranks higher.
                    if lower_is_better(name) {
                        1.0 - scaled
                    } else {
                        scaled
                    }
                }
                _ => 0.0,
            };

            let weight = self.weights.get(name);
            let contribution = weight * normalized;
            composite += contribution;

            contributions.push(ScoreContribution {
                indicator: name.to_string(),
                raw,
                normalized,
                weight,
                contribution,
            });
        }

        let reject_reason = self.criteria.check(&scores);

        RankedAsset {
            ticker: scores.ticker.clone(),
            composite_score: composite,
            selected: reject_reason.is_none(),
            reject_reason,
            contributions,
            scores,
        }
    }
}

fn raw_score(scores: &AssetScores, indicator: &str) -> Option<f64> {
    match indicator {
        "liquidity" => scores.liquidity,
        "beta" => scores.beta,
        "sharpe" => scores.sharpe,
        "pe_ratio" => scores.pe_ratio,
        "momentum" => scores.momentum,
        _ => None,
    }
}

fn lower_is_better(indicator: &str) -> bool {
    matches!(indicator, "beta" | "pe_ratio")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(ticker: &str, sharpe: Option<f64>, momentum: Option<f64>) -> AssetScores {
        AssetScores {
            ticker: ticker.into(),
            liquidity: Some(1_000.0),
            beta: Some(1.0),
            sharpe,
            pe_ratio: Some(15.0),
            momentum,
        }
    }

    fn universe(entries: Vec<AssetScores>) -> HashMap<String, AssetScores> {
        entries
            .into_iter()
            .map(|s| (s.ticker.clone(), s))
            .collect()
    }

    #[test]
    fn better_sharpe_and_momentum_ranks_first() {
        let ranker = AssetRanker::new(RankingWeights::default(), SelectionCriteria::default());
        let ranked = ranker.rank(universe(vec![
            scores("WEAK", Some(0.1), Some(0.01)),
            scores("STRG", Some(0.9), Some(0.20)),
        ]));
        assert_eq!(ranked[0].ticker, "STRG");
        assert!(ranked[0].composite_score > ranked[1].composite_score);
    }

    #[test]
    fn missing_scores_contribute_zero() {
        let ranker = AssetRanker::new(RankingWeights::default(), SelectionCriteria::default());
        let ranked = ranker.rank(universe(vec![
            scores("FULL", Some(0.5), Some(0.05)),
            scores("GAPS", None, None),
        ]));
        let gaps = ranked.iter().find(|r| r.ticker == "GAPS").unwrap();
        for c in &gaps.contributions {
            if c.indicator == "sharpe" || c.indicator == "momentum" {
                assert_eq!(c.contribution, 0.0);
            }
        }
    }

    #[test]
    fn min_liquidity_filter_rejects_with_reason() {
        let criteria = SelectionCriteria {
            min_liquidity: Some(5_000.0),
            ..Default::default()
        };
        let ranker = AssetRanker::new(RankingWeights::default(), criteria);
        let ranked = ranker.rank(universe(vec![scores("THIN", Some(0.5), Some(0.05))]));
        assert!(!ranked[0].selected);
        assert!(ranked[0].reject_reason.as_deref().unwrap().contains("liquidity"));
    }

    #[test]
    fn missing_pe_passes_max_pe_filter() {
        let criteria = SelectionCriteria {
            max_pe_ratio: Some(10.0),
            ..Default::default()
        };
        let mut s = scores("NOPE", Some(0.5), Some(0.05));
        s.pe_ratio = None;
        let ranker = AssetRanker::new(RankingWeights::default(), criteria);
        let ranked = ranker.rank(universe(vec![s]));
        assert!(ranked[0].selected);
    }

    #[test]
    fn uniform_indicator_normalises_to_half() {
        // Both assets share every score; composite uses 0.5 for each present
        // indicator.
        let ranker = AssetRanker::new(RankingWeights::default(), SelectionCriteria::default());
        let ranked = ranker.rank(universe(vec![
            scores("AAAA", Some(0.5), Some(0.05)),
            scores("BBBB", Some(0.5), Some(0.05)),
        ]));
        // Weights sum to 1.0, so each composite is exactly 0.5.
        for r in &ranked {
            assert!((r.composite_score - 0.5).abs() < 1e-12);
        }
    }
}
