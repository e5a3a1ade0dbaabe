// =============================================================================
// Momentum — Sum of Daily Simple Returns
// =============================================================================
//
//   momentum = Σ r_t   where   r_t = (P_t - P_{t-1}) / P_{t-1}
//
// This is the plain SUM of daily percentage moves over the window, not the
// compounded total return Π(1 + r_t) - 1.  The sum definition is additive
// under window concatenation, which the compounded form is not; keep it that
// way.

use crate::error::IndicatorError;
use crate::indicators::stats;

/// Momentum of a close series: sum of its daily simple returns.
///
/// # Errors
/// `InsufficientData` when fewer than 2 closes are supplied (no return can
/// be formed).
pub fn momentum(closes: &[f64]) -> Result<f64, IndicatorError> {
    if closes.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: 2,
            actual: closes.len(),
        });
    }
    Ok(stats::simple_returns(closes).iter().sum())
}
