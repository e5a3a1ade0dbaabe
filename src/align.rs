// =============================================================================
// Date-intersection alignment of asset and benchmark series
// =============================================================================
//
// Beta compares asset returns against benchmark returns, so the two series
// must cover the same trading days.  Any day present in only one series is
// dropped from both before returns are computed.  Both series are sorted by
// construction, so the intersection is a single two-pointer merge.

use crate::error::IndicatorError;
use crate::types::{AssetSeries, MarketSeries};

/// Closing prices of `asset` and `market` restricted to their common dates.
///
/// Returns the paired close vectors (equal length, oldest-to-newest).
/// Fails with `InsufficientData` when the two series share no dates at all.
pub fn aligned_closes(
    asset: &AssetSeries,
    market: &MarketSeries,
) -> Result<(Vec<f64>, Vec<f64>), IndicatorError> {
    let a = asset.bars();
    let m = market.bars();

    let mut asset_closes = Vec::with_capacity(a.len().min(m.len()));
    let mut market_closes = Vec::with_capacity(a.len().min(m.len()));

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < m.len() {
        match a[i].date.cmp(&m[j].date) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                asset_closes.push(a[i].close);
                market_closes.push(m[j].close);
                i += 1;
                j += 1;
            }
        }
    }

    if asset_closes.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    Ok((asset_closes, market_closes))
}
