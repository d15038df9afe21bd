//! Missing-aware column statistics.

use std::cmp::Ordering;

/// Median of the non-missing values in a slice.
///
/// NaN entries are skipped. For an odd number of observed values the middle
/// value is returned; for an even number, the mean of the two middle values.
/// Returns NaN when no values are observed, so a fully missing column keeps
/// its missing sentinel instead of raising an error.
pub fn nan_median(values: &[f64]) -> f64 {
    let mut observed: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if observed.is_empty() {
        return f64::NAN;
    }

    observed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = observed.len() / 2;
    if observed.len() % 2 == 0 {
        (observed[mid - 1] + observed[mid]) / 2.0
    } else {
        observed[mid]
    }
}

/// Number of missing (NaN) entries in a slice.
pub fn nan_count(values: &[f64]) -> usize {
    values.iter().filter(|v| v.is_nan()).count()
}
