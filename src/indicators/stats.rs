// =============================================================================
// Basic statistics over return/price slices
// =============================================================================
//
// Population (ddof = 0) estimators throughout.  Using the same divisor for
// variance and covariance keeps their ratio consistent: an asset whose
// returns equal the benchmark's has beta exactly 1.

/// Daily simple returns: r_t = (P_t - P_{t-1}) / P_{t-1}.
///
/// Closes are strictly positive by series construction, so no divisor guard
/// is needed here.  One fewer element than `closes`.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Population variance. `None` for an empty slice.
pub fn variance(xs: &[f64]) -> Option<f64> {
    let m = mean(xs)?;
    Some(xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64)
}

/// Population standard deviation. `None` for an empty slice.
pub fn std_dev(xs: &[f64]) -> Option<f64> {
    variance(xs).map(f64::sqrt)
}

/// Population covariance of two equally long slices.
///
/// `None` when the slices are empty or of different lengths.
pub fn covariance(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let sum: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mx) * (y - my))
        .sum();
    Some(sum / xs.len() as f64)
}
