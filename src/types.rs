// =============================================================================
// Shared types for the Marketsift screener
// =============================================================================
//
// The data model is deliberately small: one daily bar shape, one immutable
// per-ticker series built from it, and one score record per screened asset.
// A benchmark index series has exactly the same shape as an asset series and
// only its derived return series is ever consumed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

/// A single end-of-day bar for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    /// Closing price; must be strictly positive.
    pub close: f64,
    /// Traded volume in shares/contracts.
    pub volume: u64,
}

/// An immutable daily price/volume series for one ticker, ordered
/// oldest-to-newest.
///
/// Construction validates the invariants every indicator relies on; once
/// built, the series exposes read-only views only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSeries {
    ticker: String,
    bars: Vec<DailyBar>,
}

/// Benchmark index series. Same shape as an asset series; used only for its
/// derived daily returns.
pub type MarketSeries = AssetSeries;

impl AssetSeries {
    /// Build a series, enforcing:
    /// - at least one bar,
    /// - strictly positive closes,
    /// - strictly ascending dates (no duplicates, no reordering).
    pub fn new(ticker: impl Into<String>, bars: Vec<DailyBar>) -> Result<Self, IndicatorError> {
        let ticker = ticker.into();

        if bars.is_empty() {
            return Err(IndicatorError::InvalidSeries {
                reason: format!("{ticker}: series contains no bars"),
            });
        }

        for bar in &bars {
            if !(bar.close.is_finite() && bar.close > 0.0) {
                return Err(IndicatorError::InvalidSeries {
                    reason: format!(
                        "{ticker}: non-positive close {} on {}",
                        bar.close, bar.date
                    ),
                });
            }
        }

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(IndicatorError::InvalidSeries {
                    reason: format!(
                        "{ticker}: dates not strictly ascending ({} then {})",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }

        Ok(Self { ticker, bars })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices, oldest-to-newest.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Daily volumes as floats, oldest-to-newest.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }

    /// Most recent closing price.
    pub fn last_close(&self) -> f64 {
        // Non-empty is a construction invariant.
        self.bars[self.bars.len() - 1].close
    }
}

impl std::fmt::Display for AssetSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} bars)", self.ticker, self.len())
    }
}

/// The five indicator scores for one asset.
///
/// `None` means "score unavailable" — insufficient data, a degenerate
/// denominator, or missing/non-positive EPS for the P/E ratio.  Serialized as
/// JSON `null` so downstream consumers see an explicit gap, never a fake 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetScores {
    pub ticker: String,
    pub liquidity: Option<f64>,
    pub beta: Option<f64>,
    pub sharpe: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub momentum: Option<f64>,
}

impl AssetScores {
    /// Number of indicators that produced a value.
    pub fn available(&self) -> usize {
        [
            self.liquidity,
            self.beta,
            self.sharpe,
            self.pe_ratio,
            self.momentum,
        ]
        .iter()
        .filter(|s| s.is_some())
        .count()
    }
}
