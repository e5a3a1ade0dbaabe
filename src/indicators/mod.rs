// =============================================================================
// Financial Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the five screening indicators:
// - Liquidity:  trailing average daily volume
// - Beta:       covariance of asset vs. benchmark returns over market variance
// - Sharpe:     excess mean daily return over return volatility
// - P/E ratio:  price over trailing earnings-per-share
// - Momentum:   sum of daily simple returns (NOT compounded)
//
// Each function returns `Result` (or `Option` where "no score" is a policy,
// not a failure) so callers are forced to handle insufficient-data and
// degenerate-denominator cases explicitly.

pub mod beta;
pub mod liquidity;
pub mod momentum;
pub mod pe_ratio;
pub mod sharpe;
pub mod stats;

pub use beta::beta;
pub use liquidity::{average_volume, DEFAULT_LOOKBACK_DAYS};
pub use momentum::momentum;
pub use pe_ratio::pe_ratio;
pub use sharpe::sharpe_ratio;
