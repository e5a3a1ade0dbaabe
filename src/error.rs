// =============================================================================
// Indicator computation errors
// =============================================================================
//
// Every failure an indicator can produce is a local, non-retryable computation
// error.  Callers either propagate it or downgrade it to a null score (the
// batch screener does the latter, with a structured warning).

use thiserror::Error;

/// Errors surfaced by the pure indicator functions and series constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The trailing window holds fewer observations than the indicator needs.
    /// Also raised when date-aligning an asset against the benchmark leaves
    /// no overlapping days.
    #[error("insufficient data: {required} observations required, {actual} available")]
    InsufficientData { required: usize, actual: usize },

    /// A denominator (market variance, return standard deviation) is zero.
    /// Never silently coerced to 0.0 or infinity.
    #[error("degenerate denominator: {what} is zero")]
    DegenerateDenominator { what: &'static str },

    /// A series failed construction-time validation.
    #[error("invalid series: {reason}")]
    InvalidSeries { reason: String },
}
