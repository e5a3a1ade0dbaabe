// =============================================================================
// Sharpe Ratio — Risk-Adjusted Daily Return
// =============================================================================
//
//   sharpe = (mean(r) - rf_daily) / std(r)
//
// over daily simple returns.  The annual risk-free rate is converted to a
// daily rate with the simple convention rf_daily = annual / 252; the
// compounding convention ((1 + annual)^(1/252) - 1) is deliberately not used.
// Volatility is the population standard deviation (ddof 0), the same
// estimator family beta uses.  The score is per-day, not annualised.

use crate::error::IndicatorError;
use crate::indicators::stats;

/// Trading days per year used for the risk-free rate conversion.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Sharpe ratio of a close series against an annual risk-free rate.
///
/// # Errors
/// - `InsufficientData` when fewer than 3 closes are supplied.
/// - `DegenerateDenominator` when the return standard deviation is zero
///   (constant-price series).
pub fn sharpe_ratio(closes: &[f64], annual_risk_free_rate: f64) -> Result<f64, IndicatorError> {
    if closes.len() < 3 {
        return Err(IndicatorError::InsufficientData {
            required: 3,
            actual: closes.len(),
        });
    }

    let returns = stats::simple_returns(closes);
    // Non-empty by the guard above.
    let avg = stats::mean(&returns).unwrap_or(0.0);
    let vol = stats::std_dev(&returns).unwrap_or(0.0);

    if vol == 0.0 {
        return Err(IndicatorError::DegenerateDenominator {
            what: "return standard deviation",
        });
    }

    let rf_daily = annual_risk_free_rate / TRADING_DAYS_PER_YEAR;
    Ok((avg - rf_daily) / vol)
}
