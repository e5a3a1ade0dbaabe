// =============================================================================
// Marketsift — Batch Asset Screener — Main Entry Point
// =============================================================================
//
// One run: load config, load the universe from disk, score every asset
// concurrently against the benchmark, rank the results, write the report.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod align;
mod config;
mod engine;
mod error;
mod indicators;
mod ranking;
mod report;
mod types;
mod universe;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ScreenerConfig;
use crate::engine::IndicatorEngine;
use crate::ranking::AssetRanker;
use crate::report::ScreenReport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Marketsift batch screener starting");

    let config_path =
        std::env::var("SCREENER_CONFIG").unwrap_or_else(|_| "screener_config.json".to_string());

    let mut config = ScreenerConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ScreenerConfig::default()
    });
    config.apply_env_overrides();

    // First run: persist the defaults so there is a file to edit.
    if !std::path::Path::new(&config_path).exists() {
        if let Err(e) = config.save(&config_path) {
            warn!(error = %e, "could not write default config");
        }
    }

    info!(
        data_dir = %config.data_dir.display(),
        benchmark = %config.benchmark_file.display(),
        lookback_days = config.lookback_days,
        risk_free_rate = config.annual_risk_free_rate,
        "Configured screening run"
    );

    // ── 2. Load the universe ─────────────────────────────────────────────
    let universe = universe::load_universe(
        &config.data_dir,
        &config.benchmark_file,
        &config.eps_file,
    )
    .context("universe load failed")?;
    let benchmark_ticker = universe.market.ticker().to_string();

    // ── 3. Score every asset concurrently ────────────────────────────────
    let engine = IndicatorEngine::new(config.lookback_days, config.annual_risk_free_rate);
    let scores = engine::screen_universe(engine, universe).await;
    info!(assets = scores.len(), "indicator scores computed");

    // ── 4. Rank and filter ───────────────────────────────────────────────
    let ranker = AssetRanker::new(config.ranking_weights.clone(), config.selection.clone());
    let ranked = ranker.rank(scores);

    for asset in ranked.iter().take(10) {
        info!(
            ticker = %asset.ticker,
            score = asset.composite_score,
            selected = asset.selected,
            reason = asset.reject_reason.as_deref().unwrap_or("-"),
            "ranked"
        );
    }

    // ── 5. Write the report ──────────────────────────────────────────────
    let report = ScreenReport::new(
        benchmark_ticker,
        config.lookback_days,
        config.annual_risk_free_rate,
        ranked,
    );
    report.write(&config.report_path)?;

    info!(
        screened = report.assets_screened,
        selected = report.assets_selected,
        report = %config.report_path.display(),
        "screening run complete"
    );

    Ok(())
}
