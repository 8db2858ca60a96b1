//! Windowed median filter.
//!
//! Smooths a cadence series by replacing each sample with the median of the
//! window centered on it. Window positions that fall outside the series
//! contribute 0.0, so the output is defined at every index and keeps the
//! input length. The middle rank is found with partition-exchange selection
//! rather than a per-window sort.

use crate::error::{Result, SearchError};

/// Apply a centered median filter to a cadence series.
///
/// An even `window_size` is coerced down to the nearest smaller odd value,
/// so the window is always symmetric about the output index. Positions
/// before the first sample or past the last contribute 0.0 to the window.
///
/// # Arguments
/// * `series` - Input cadence series
/// * `window_size` - Window length in cadences (coerced odd, must be >= 3
///   and < `series.len()` after coercion)
///
/// # Example
/// ```
/// use transit_search::filter::median_filter;
///
/// let series = vec![0.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let smoothed = median_filter(&series, 3).unwrap();
/// // An isolated single-cadence spike is removed outright.
/// assert_eq!(smoothed[4], 0.0);
/// ```
pub fn median_filter(series: &[f64], window_size: usize) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(SearchError::EmptyData);
    }

    let window = if window_size % 2 == 0 {
        window_size.saturating_sub(1)
    } else {
        window_size
    };
    if window < 3 {
        return Err(SearchError::InvalidParameter(format!(
            "median window must be at least 3, got {window_size}"
        )));
    }
    if window >= series.len() {
        return Err(SearchError::InsufficientData {
            needed: window + 1,
            got: series.len(),
        });
    }

    let n = series.len();
    let half = window / 2;
    let mut result = Vec::with_capacity(n);
    let mut gathered = vec![0.0; window];

    for i in 0..n {
        for (j, slot) in gathered.iter_mut().enumerate() {
            let pos = i as isize + j as isize - half as isize;
            *slot = if pos < 0 || pos >= n as isize {
                0.0
            } else {
                series[pos as usize]
            };
        }
        // Window length is odd, so rank `half` is the unique middle value.
        result.push(select_kth_in_place(&mut gathered, half));
    }

    Ok(result)
}

/// Select the element of rank `k` (zero-based, ascending) from `values`.
///
/// Classic partition-exchange selection: pick a pivot as the median of the
/// low, middle, and high elements of the active range, partition around it,
/// and descend into the side holding rank `k` until the range collapses.
/// Expected linear time in `values.len()`; the slice is reordered but not
/// fully sorted.
///
/// # Panics
///
/// Panics if `values` is empty or `k >= values.len()`.
pub fn select_kth_in_place(values: &mut [f64], k: usize) -> f64 {
    assert!(k < values.len(), "rank {k} out of range for {} values", values.len());

    let target = k as isize;
    let mut lo: isize = 0;
    let mut hi: isize = values.len() as isize - 1;

    while lo < hi {
        let pivot = median_of_three(values, lo as usize, hi as usize);
        let mut i = lo;
        let mut j = hi;

        while i <= j {
            while values[i as usize] < pivot {
                i += 1;
            }
            while values[j as usize] > pivot {
                j -= 1;
            }
            if i <= j {
                values.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
        }

        if target <= j {
            hi = j;
        } else if target >= i {
            lo = i;
        } else {
            break;
        }
    }

    values[k]
}

/// Order `values[lo]`, the middle element, and `values[hi]` in place and
/// return the middle one as the pivot. Also guarantees the partition scans
/// cannot run off either end of the range.
fn median_of_three(values: &mut [f64], lo: usize, hi: usize) -> f64 {
    let mid = lo + (hi - lo) / 2;
    if values[mid] < values[lo] {
        values.swap(mid, lo);
    }
    if values[hi] < values[lo] {
        values.swap(hi, lo);
    }
    if values[hi] < values[mid] {
        values.swap(hi, mid);
    }
    values[mid]
}
