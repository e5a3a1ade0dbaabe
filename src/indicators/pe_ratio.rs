// =============================================================================
// P/E Ratio — Price over Trailing Earnings-per-Share
// =============================================================================
//
// EPS cannot be derived from price/volume series; it is supplied externally.
// Policy: EPS <= 0 produces NO score rather than an error — companies with
// negative or zero trailing earnings are a valid market state, and a P/E for
// them carries no information.

/// Trailing P/E ratio of `price` over `trailing_eps`.
///
/// Returns `None` when `trailing_eps <= 0`, or when either input is
/// non-finite.
pub fn pe_ratio(price: f64, trailing_eps: f64) -> Option<f64> {
    if !price.is_finite() || !trailing_eps.is_finite() || trailing_eps <= 0.0 {
        return None;
    }
    Some(price / trailing_eps)
}
