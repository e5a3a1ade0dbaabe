// =============================================================================
// Universe loading — per-ticker bar files, benchmark, EPS map
// =============================================================================
//
// The screener is fed by an external market-data collaborator as plain files:
//
//   <data_dir>/<TICKER>.json   — array of daily bars, oldest-to-newest
//   <benchmark_file>           — same shape, the index series
//   <eps_file>                 — { "TICKER": trailing_eps, ... }
//
// A ticker whose file cannot be read or validated is skipped with a warning;
// a missing EPS file only empties the P/E column.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::types::{AssetSeries, DailyBar, MarketSeries};

/// Everything the batch screener consumes for one run.
pub struct Universe {
    pub assets: Vec<AssetSeries>,
    pub market: MarketSeries,
    pub eps: HashMap<String, f64>,
}

/// Load a full universe from disk.
pub fn load_universe(
    data_dir: impl AsRef<Path>,
    benchmark_file: impl AsRef<Path>,
    eps_file: impl AsRef<Path>,
) -> Result<Universe> {
    let market = load_series(benchmark_file.as_ref(), "benchmark")
        .context("failed to load benchmark series")?;

    let assets = load_assets(data_dir.as_ref())?;
    if assets.is_empty() {
        bail!(
            "no loadable asset series in {}",
            data_dir.as_ref().display()
        );
    }

    let eps = load_eps(eps_file.as_ref());

    info!(
        assets = assets.len(),
        benchmark = %market.ticker(),
        eps_entries = eps.len(),
        "universe loaded"
    );

    Ok(Universe {
        assets,
        market,
        eps,
    })
}

/// One series from a JSON bar file; the ticker is the file stem.
fn load_series(path: &Path, fallback_ticker: &str) -> Result<AssetSeries> {
    let ticker = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fallback_ticker)
        .to_uppercase();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bar file {}", path.display()))?;

    let bars: Vec<DailyBar> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse bars from {}", path.display()))?;

    AssetSeries::new(ticker, bars)
        .map_err(|e| anyhow::anyhow!("{} failed validation: {e}", path.display()))
}

fn load_assets(data_dir: &Path) -> Result<Vec<AssetSeries>> {
    let entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("failed to read data dir {}", data_dir.display()))?;

    let mut assets = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match load_series(&path, "UNKNOWN") {
            Ok(series) => {
                tracing::debug!(ticker = series.ticker(), bars = series.len(), "asset series loaded");
                assets.push(series);
            }
            // One bad file must not sink the batch.
            Err(e) => warn!(path = %path.display(), error = %e, "skipping asset file"),
        }
    }

    // Deterministic processing order regardless of directory listing order.
    assets.sort_by(|a, b| a.ticker().cmp(b.ticker()));
    Ok(assets)
}

/// Trailing EPS per ticker. Missing or unreadable file yields an empty map.
fn load_eps(path: &Path) -> HashMap<String, f64> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "EPS file unavailable; P/E scores will be empty");
            return HashMap::new();
        }
    };

    match serde_json::from_str::<HashMap<String, f64>>(&content) {
        Ok(map) => map
            .into_iter()
            .map(|(ticker, eps)| (ticker.to_uppercase(), eps))
            .collect(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "EPS file unparsable; P/E scores will be empty");
            HashMap::new()
        }
    }
}
