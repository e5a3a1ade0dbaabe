// =============================================================================
// Liquidity — Trailing Average Daily Volume
// =============================================================================
//
// Liquidity is the arithmetic mean of daily traded volume over the trailing
// window.  The default window is 126 trading days (~6 months); callers may
// relax it through configuration, but the series must cover at least the
// requested window or the score is refused outright — a thin series would
// otherwise report a misleadingly precise average.

use crate::error::IndicatorError;
use crate::indicators::stats;

/// Default trailing window: ~6 months of trading days.
pub const DEFAULT_LOOKBACK_DAYS: usize = 126;

/// Mean daily volume over the trailing `lookback` observations.
///
/// # Errors
/// `InsufficientData` when `lookback` is zero or `volumes` holds fewer than
/// `lookback` observations.
pub fn average_volume(volumes: &[f64], lookback: usize) -> Result<f64, IndicatorError> {
    if lookback == 0 || volumes.len() < lookback {
        return Err(IndicatorError::InsufficientData {
            required: lookback.max(1),
            actual: volumes.len(),
        });
    }

    let window = &volumes[volumes.len() - lookback..];
    // Window is non-empty by the guard above.
    Ok(stats::mean(window).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_volume_is_exact() {
        let volumes = vec![40_000.0; 126];
        let avg = average_volume(&volumes, DEFAULT_LOOKBACK_DAYS).unwrap();
        assert_eq!(avg, 40_000.0);
    }

    #[test]
    fn only_trailing_window_counts() {
        // 10 old days of volume 0, then 5 recent days of volume 100.
        let mut volumes = vec![0.0; 10];
        volumes.extend(vec![100.0; 5]);
        let avg = average_volume(&volumes, 5).unwrap();
        assert_eq!(avg, 100.0);
    }

    #[test]
    fn insufficient_data_reports_counts() {
        let volumes = vec![1.0; 40];
        let err = average_volume(&volumes, 126).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientData {
                required: 126,
                actual: 40
            }
        );
    }

    #[test]
    fn zero_lookback_is_rejected() {
        assert!(average_volume(&[1.0, 2.0], 0).is_err());
    }
}
