// =============================================================================
// Indicator Engine — per-asset evaluation and concurrent batch screening
// =============================================================================
//
// The engine binds the five pure indicator functions to a configuration
// (lookback window, risk-free rate) and one asset at a time.  Evaluation is
// stateless and side-effect-free, so the batch screener runs every asset in
// its own task with no coordination; results are aggregated keyed by ticker.
//
// Error policy for batch runs: a failed indicator is downgraded to a null
// score with a structured warning, and the remaining indicators still run.
// Callers who need errors propagated use the per-indicator functions in
// `crate::indicators` directly.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, warn};

use crate::align::aligned_closes;
use crate::error::IndicatorError;
use crate::indicators;
use crate::types::{AssetScores, AssetSeries, MarketSeries};
use crate::universe::Universe;

/// Stateless evaluator for the five screening indicators.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorEngine {
    /// Trailing window length for the liquidity average.
    lookback_days: usize,
    /// Annual risk-free rate, converted per-day inside the Sharpe function.
    annual_risk_free_rate: f64,
}

impl IndicatorEngine {
    pub fn new(lookback_days: usize, annual_risk_free_rate: f64) -> Self {
        Self {
            lookback_days,
            annual_risk_free_rate,
        }
    }

    /// Evaluate all five indicators for one asset against the benchmark.
    ///
    /// Every indicator sees only the trailing window: the most recent
    /// `lookback_days` observations (`lookback_days + 1` closes, so the
    /// window holds `lookback_days` returns).  Beta is windowed after date
    /// alignment.  A series shorter than the window is used in full —
    /// except for liquidity, which insists on a complete window.
    ///
    /// `trailing_eps` comes from an external fundamentals source; `None`
    /// (or EPS <= 0) simply leaves the P/E score empty.
    pub fn evaluate(
        &self,
        asset: &AssetSeries,
        market: &MarketSeries,
        trailing_eps: Option<f64>,
    ) -> AssetScores {
        let ticker = asset.ticker();
        let closes = asset.closes();
        let window = trailing(&closes, self.lookback_days + 1);
        let volumes = asset.volumes();

        let liquidity =
            self.score(ticker, "liquidity", indicators::average_volume(&volumes, self.lookback_days));

        let beta = self.score(
            ticker,
            "beta",
            aligned_closes(asset, market).and_then(|(a, m)| {
                indicators::beta(
                    trailing(&a, self.lookback_days + 1),
                    trailing(&m, self.lookback_days + 1),
                )
            }),
        );

        let sharpe = self.score(
            ticker,
            "sharpe",
            indicators::sharpe_ratio(window, self.annual_risk_free_rate),
        );

        let pe_ratio = trailing_eps.and_then(|eps| indicators::pe_ratio(asset.last_close(), eps));

        let momentum = self.score(ticker, "momentum", indicators::momentum(window));

        AssetScores {
            ticker: ticker.to_string(),
            liquidity,
            beta,
            sharpe,
            pe_ratio,
            momentum,
        }
    }

    /// Downgrade an indicator error to a null score with a warning.
    fn score(
        &self,
        ticker: &str,
        indicator: &'static str,
        result: Result<f64, IndicatorError>,
    ) -> Option<f64> {
        match result {
            Ok(value) if value.is_finite() => Some(value),
            Ok(value) => {
                warn!(ticker, indicator, value, "non-finite indicator value dropped");
                None
            }
            Err(e) => {
                warn!(ticker, indicator, error = %e, "indicator unavailable");
                None
            }
        }
    }
}

/// Most recent `max_len` observations; the whole slice when shorter.
fn trailing(xs: &[f64], max_len: usize) -> &[f64] {
    &xs[xs.len().saturating_sub(max_len)..]
}

/// Screen every asset in the universe concurrently.
///
/// One task per asset; there is no shared mutable state, so no locks and no
/// ordering guarantees — only the final aggregation is keyed by ticker.
pub async fn screen_universe(
    engine: IndicatorEngine,
    universe: Universe,
) -> HashMap<String, AssetScores> {
    let market = Arc::new(universe.market);
    let eps = Arc::new(universe.eps);

    let mut tasks = JoinSet::new();
    for asset in universe.assets {
        let market = Arc::clone(&market);
        let eps = Arc::clone(&eps);
        tasks.spawn(async move {
            let trailing_eps = eps.get(asset.ticker()).copied();
            engine.evaluate(&asset, &market, trailing_eps)
        });
    }

    let mut results = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(scores) => {
                if scores.available() < 5 {
                    tracing::debug!(
                        ticker = %scores.ticker,
                        available = scores.available(),
                        "partial scorecard"
                    );
                }
                results.insert(scores.ticker.clone(), scores);
            }
            Err(e) => error!(error = %e, "screening task failed"),
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::series;

    fn engine() -> IndicatorEngine {
        IndicatorEngine::new(4, 0.06)
    }

    #[test]
    fn evaluate_full_scorecard() {
        let asset = series("AAAA", &[100.0, 102.0, 101.0, 105.0], 40_000);
        let market = series("MRKT", &[50.0, 51.0, 50.5, 52.0], 1);

        let scores = engine().evaluate(&asset, &market, Some(5.0));

        assert_eq!(scores.liquidity, Some(40_000.0));
        assert!(scores.beta.is_some());
        assert!(scores.sharpe.is_some());
        assert_eq!(scores.pe_ratio, Some(21.0));
        let m = scores.momentum.unwrap();
        assert!((m - 0.0498).abs() < 1e-4);
    }

    #[test]
    fn self_benchmarked_asset_has_unit_beta() {
        let asset = series("SAME", &[100.0, 102.0, 99.0, 104.0], 1_000);
        let market = series("MRKT", &[100.0, 102.0, 99.0, 104.0], 1);
        let scores = engine().evaluate(&asset, &market, None);
        assert!((scores.beta.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flat_series_loses_sharpe_and_keeps_momentum_zero() {
        let asset = series("FLAT", &[75.0, 75.0, 75.0, 75.0], 900);
        let market = series("MRKT", &[50.0, 51.0, 50.5, 52.0], 1);
        let scores = engine().evaluate(&asset, &market, None);
        assert_eq!(scores.sharpe, None);
        assert_eq!(scores.momentum, Some(0.0));
        assert_eq!(scores.pe_ratio, None);
    }

    #[test]
    fn scores_ignore_history_older_than_the_window() {
        // 4 early up-moves, then a full flat 126-return window.  Every
        // windowed score must see only the flat stretch.
        let mut closes = vec![100.0, 105.0, 110.0, 115.0];
        closes.extend(std::iter::repeat(120.0).take(127));
        let asset = series("WNDW", &closes, 1_000);
        let market_closes: Vec<f64> =
            (0..closes.len()).map(|i| 50.0 + (i % 3) as f64).collect();
        let market = series("MRKT", &market_closes, 1);

        let engine = IndicatorEngine::new(126, 0.06);
        let scores = engine.evaluate(&asset, &market, None);

        assert_eq!(scores.momentum, Some(0.0));
        // Flat window: zero return volatility.
        assert_eq!(scores.sharpe, None);
        // Flat asset window against a moving benchmark.
        assert_eq!(scores.beta, Some(0.0));
        assert_eq!(scores.liquidity, Some(1_000.0));
    }

    #[test]
    fn trailing_keeps_short_slices_whole() {
        let xs = [1.0, 2.0, 3.0];
        assert_eq!(trailing(&xs, 5), &xs[..]);
        assert_eq!(trailing(&xs, 2), &[2.0, 3.0]);
    }

    #[test]
    fn short_series_loses_liquidity_only_scores_rest() {
        let engine = IndicatorEngine::new(126, 0.06);
        let asset = series("THIN", &[100.0, 102.0, 101.0, 105.0], 500);
        let market = series("MRKT", &[50.0, 51.0, 50.5, 52.0], 1);
        let scores = engine.evaluate(&asset, &market, None);
        assert_eq!(scores.liquidity, None);
        assert!(scores.momentum.is_some());
    }

    #[tokio::test]
    async fn screen_universe_aggregates_by_ticker() {
        let universe = Universe {
            assets: vec![
                series("AAAA", &[100.0, 102.0, 101.0, 105.0], 10_000),
                series("BBBB", &[20.0, 19.5, 21.0, 20.5], 2_000),
            ],
            market: series("MRKT", &[50.0, 51.0, 50.5, 52.0], 1),
            eps: [("AAAA".to_string(), 5.0)].into_iter().collect(),
        };

        let results = screen_universe(engine(), universe).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results["AAAA"].pe_ratio, Some(21.0));
        assert_eq!(results["BBBB"].pe_ratio, None);
        assert_eq!(results["BBBB"].liquidity, Some(2_000.0));
    }
}
