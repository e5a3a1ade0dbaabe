// =============================================================================
// Beta — Sensitivity to the Benchmark
// =============================================================================
//
//   beta = cov(r_asset, r_market) / var(r_market)
//
// computed on daily simple returns over date-aligned closes.  Both estimators
// are population (ddof 0), so an asset whose closes equal the benchmark's
// yields beta = 1 exactly.
//
//   beta > 1  =>  amplifies market moves
//   beta = 1  =>  moves with the market
//   beta < 1  =>  dampened relative to the market
//   beta < 0  =>  moves against the market

use crate::error::IndicatorError;
use crate::indicators::stats;

/// Beta of an asset against the benchmark.
///
/// Inputs are closing prices already restricted to common dates (see
/// [`crate::align::aligned_closes`]); the two slices must be equally long.
///
/// # Errors
/// - `InvalidSeries` when the slices differ in length.
/// - `InsufficientData` when fewer than 3 aligned closes are supplied (at
///   least two returns are needed for a meaningful variance).
/// - `DegenerateDenominator` when the benchmark variance is zero (constant
///   benchmark).
pub fn beta(asset_closes: &[f64], market_closes: &[f64]) -> Result<f64, IndicatorError> {
    if asset_closes.len() != market_closes.len() {
        return Err(IndicatorError::InvalidSeries {
            reason: format!(
                "aligned close lengths differ: asset {}, market {}",
                asset_closes.len(),
                market_closes.len()
            ),
        });
    }
    if asset_closes.len() < 3 {
        return Err(IndicatorError::InsufficientData {
            required: 3,
            actual: asset_closes.len(),
        });
    }

    let asset_returns = stats::simple_returns(asset_closes);
    let market_returns = stats::simple_returns(market_closes);

    // Lengths match by construction; slices are non-empty by the guard above.
    let cov = stats::covariance(&asset_returns, &market_returns).unwrap_or(0.0);
    let market_var = stats::variance(&market_returns).unwrap_or(0.0);

    if market_var == 0.0 {
        return Err(IndicatorError::DegenerateDenominator {
            what: "market variance",
        });
    }

    Ok(cov / market_var)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn asset_identical_to_market_has_beta_one() {
        let closes = [100.0, 102.0, 99.0, 104.0, 103.0, 108.0];
        let b = beta(&closes, &closes).unwrap();
        assert!((b - 1.0).abs() < TOL, "expected 1.0, got {b}");
    }

    #[test]
    fn doubled_returns_have_beta_two() {
        // Asset return is exactly twice the market return each day.
        let market = [100.0, 101.0, 103.0, 102.0, 104.0];
        let market_returns = crate::indicators::stats::simple_returns(&market);
        let mut asset = vec![100.0];
        for r in &market_returns {
            let prev = *asset.last().unwrap();
            asset.push(prev * (1.0 + 2.0 * r));
        }
        let b = beta(&asset, &market).unwrap();
        assert!((b - 2.0).abs() < 1e-9, "expected 2.0, got {b}");
    }

    #[test]
    fn inverse_asset_has_negative_beta() {
        let market = [100.0, 102.0, 101.0, 105.0];
        let market_returns = crate::indicators::stats::simple_returns(&market);
        let mut asset = vec![100.0];
        for r in &market_returns {
            let prev = *asset.last().unwrap();
            asset.push(prev * (1.0 - r));
        }
        assert!(beta(&asset, &market).unwrap() < 0.0);
    }

    #[test]
    fn constant_benchmark_is_degenerate() {
        let asset = [100.0, 101.0, 102.0, 103.0];
        let market = [50.0, 50.0, 50.0, 50.0];
        let err = beta(&asset, &market).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::DegenerateDenominator {
                what: "market variance"
            }
        );
    }

    #[test]
    fn too_few_closes_is_insufficient() {
        let err = beta(&[100.0, 101.0], &[50.0, 51.0]).unwrap_err();
        assert!(matches!(err, IndicatorError::InsufficientData { .. }));
    }

    #[test]
    fn length_mismatch_is_invalid() {
        let err = beta(&[100.0, 101.0, 102.0], &[50.0, 51.0]).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidSeries { .. }));
    }
}
