//! Even subdivision of a numeric range.

use crate::errors::{GaugeError, Result};

/// Returns `n` values evenly dividing the range between `lo` and `hi`.
///
/// With `include_lo` the first value is exactly `lo`; with `include_hi` the
/// last value is exactly `hi`. An excluded endpoint still occupies a slot in
/// the spacing, so `divide_interval(0.0, 10.0, 1, false, false)` is `[5.0]`.
///
/// Fails with [`GaugeError::InvalidRange`] when `n` is zero, when a bound or
/// the span `hi - lo` is not finite, or when the range is too narrow for the
/// values to be strictly ordered. An excluded endpoint is therefore never
/// returned.
///
/// ```
/// use gaugeface::divide_interval;
///
/// assert_eq!(divide_interval(0.0, 5.0, 5, true, false).unwrap(), [0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(
///     divide_interval(0.0, 5.0, 6, true, true).unwrap(),
///     [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
/// );
/// ```
pub fn divide_interval(
    lo: f64,
    hi: f64,
    n: usize,
    include_lo: bool,
    include_hi: bool,
) -> Result<Vec<f64>> {
    let invalid = || GaugeError::InvalidRange { lo, hi, count: n };
    if n < 1 || !lo.is_finite() || !hi.is_finite() {
        return Err(invalid());
    }

    let slots = n + usize::from(!include_lo) + usize::from(!include_hi);
    if slots < 2 {
        return Err(invalid());
    }

    let span = hi - lo;
    if !span.is_finite() {
        return Err(invalid());
    }

    let last = slots - 1;
    let step = span / last as f64;
    let mut values: Vec<f64> = (0..slots)
        .map(|i| match i {
            0 => lo,
            i if i == last => hi,
            i => lo + i as f64 * step,
        })
        .collect();

    let ordered = values.windows(2).all(|pair| {
        if span > 0.0 {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        }
    });
    if !ordered {
        return Err(invalid());
    }

    if !include_hi {
        values.pop();
    }
    if !include_lo {
        values.remove(0);
    }
    Ok(values)
}
