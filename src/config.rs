// =============================================================================
// Screener Configuration — JSON settings with atomic save
// =============================================================================
//
// Every tunable of the screener lives here: input/output paths, the trailing
// lookback window, the risk-free rate, ranking weights, and selection
// thresholds.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ranking::{RankingWeights, SelectionCriteria};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/bars")
}

fn default_benchmark_file() -> PathBuf {
    PathBuf::from("data/benchmark.json")
}

fn default_eps_file() -> PathBuf {
    PathBuf::from("data/eps.json")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("screen_report.json")
}

fn default_lookback_days() -> usize {
    crate::indicators::DEFAULT_LOOKBACK_DAYS
}

fn default_annual_risk_free_rate() -> f64 {
    0.06
}

// =============================================================================
// ScreenerConfig
// =============================================================================

/// Top-level configuration for a screening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    // --- Inputs / outputs ----------------------------------------------------

    /// Directory of per-ticker JSON bar files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Benchmark index bar file.
    #[serde(default = "default_benchmark_file")]
    pub benchmark_file: PathBuf,

    /// Ticker -> trailing EPS map.
    #[serde(default = "default_eps_file")]
    pub eps_file: PathBuf,

    /// Where the ranked score report is written.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    // --- Indicator parameters ------------------------------------------------

    /// Trailing window for the liquidity average, in trading days.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: usize,

    /// Annual risk-free rate; converted to daily as rate / 252.
    #[serde(default = "default_annual_risk_free_rate")]
    pub annual_risk_free_rate: f64,

    // --- Ranking & selection -------------------------------------------------

    /// Per-indicator weights for the composite ranking score.
    #[serde(default)]
    pub ranking_weights: RankingWeights,

    /// Hard threshold filters applied after ranking.
    #[serde(default)]
    pub selection: SelectionCriteria,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            benchmark_file: default_benchmark_file(),
            eps_file: default_eps_file(),
            report_path: default_report_path(),
            lookback_days: default_lookback_days(),
            annual_risk_free_rate: default_annual_risk_free_rate(),
            ranking_weights: RankingWeights::default(),
            selection: SelectionCriteria::default(),
        }
    }
}

impl ScreenerConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read screener config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse screener config from {}", path.display()))?;

        info!(
            path = %path.display(),
            data_dir = %config.data_dir.display(),
            lookback_days = config.lookback_days,
            "screener config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise screener config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "screener config saved (atomic)");
        Ok(())
    }

    /// Apply `SCREENER_*` environment overrides on top of the loaded file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("SCREENER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(file) = std::env::var("SCREENER_BENCHMARK_FILE") {
            self.benchmark_file = PathBuf::from(file);
        }
        if let Ok(file) = std::env::var("SCREENER_EPS_FILE") {
            self.eps_file = PathBuf::from(file);
        }
        if let Ok(path) = std::env::var("SCREENER_REPORT_PATH") {
            self.report_path = PathBuf::from(path);
        }
        if let Ok(rate) = std::env::var("SCREENER_RISK_FREE_RATE") {
            match rate.parse::<f64>() {
                Ok(parsed) => self.annual_risk_free_rate = parsed,
                Err(_) => tracing::warn!(rate = %rate, "ignoring unparsable SCREENER_RISK_FREE_RATE"),
            }
        }
        if let Ok(days) = std::env::var("SCREENER_LOOKBACK_DAYS") {
            match days.parse::<usize>() {
                Ok(parsed) if parsed > 0 => self.lookback_days = parsed,
                _ => tracing::warn!(days = %days, "ignoring invalid SCREENER_LOOKBACK_DAYS"),
            }
        }
    }
}
