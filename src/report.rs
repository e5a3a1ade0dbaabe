// =============================================================================
// Screen Report — persisted ranked scores
// =============================================================================
//
// The report is the screener's only output artifact: every screened asset
// with its five scores, composite rank, and selection verdict, written as
// pretty JSON with the same atomic tmp + rename pattern the config uses.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ranking::RankedAsset;

/// One screening run, ranked best-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenReport {
    pub generated_at: DateTime<Utc>,
    pub benchmark: String,
    pub lookback_days: usize,
    pub annual_risk_free_rate: f64,
    pub assets_screened: usize,
    pub assets_selected: usize,
    pub assets: Vec<RankedAsset>,
}

impl ScreenReport {
    pub fn new(
        benchmark: impl Into<String>,
        lookback_days: usize,
        annual_risk_free_rate: f64,
        assets: Vec<RankedAsset>,
    ) -> Self {
        let assets_selected = assets.iter().filter(|a| a.selected).count();
        Self {
            generated_at: Utc::now(),
            benchmark: benchmark.into(),
            lookback_days,
            annual_risk_free_rate,
            assets_screened: assets.len(),
            assets_selected,
            assets,
        }
    }

    /// Write the report to `path` atomically (tmp + rename).
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("failed to serialise screen report")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp report to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp report to {}", path.display()))?;

        info!(
            path = %path.display(),
            screened = self.assets_screened,
            selected = self.assets_selected,
            "screen report written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetScores;

    fn ranked(ticker: &str, selected: bool) -> RankedAsset {
        RankedAsset {
            ticker: ticker.into(),
            composite_score: 0.5,
            selected,
            reject_reason: if selected {
                None
            } else {
                Some("liquidity unavailable".into())
            },
            contributions: vec![],
            scores: AssetScores {
                ticker: ticker.into(),
                liquidity: None,
                beta: None,
                sharpe: None,
                pe_ratio: None,
                momentum: None,
            },
        }
    }

    #[test]
    fn counts_selected_assets() {
        let report = ScreenReport::new("IBOV", 126, 0.06, vec![
            ranked("AAAA", true),
            ranked("BBBB", false),
            ranked("CCCC", true),
        ]);
        assert_eq!(report.assets_screened, 3);
        assert_eq!(report.assets_selected, 2);
    }

    #[test]
    fn write_produces_parseable_json() {
        let path = std::env::temp_dir().join("marketsift_report_test.json");
        let report = ScreenReport::new("IBOV", 126, 0.06, vec![ranked("AAAA", true)]);
        report.write(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ScreenReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.benchmark, "IBOV");
        assert_eq!(parsed.assets.len(), 1);

        std::fs::remove_file(&path).unwrap();
    }
}
