use crate::error::{Error, Result};

/// Bracket `value` within an unsorted column.
///
/// Returns `(i, j)` where `column[i]` is the largest entry strictly below
/// `value` and `column[j]` the smallest entry strictly above it. Without an
/// entry below, `i` points at the column minimum; without one above, `j`
/// points at the maximum. Repeated values resolve to their first row.
///
/// # Example
/// ```rust
/// use protodisk::find_indices;
///
/// let column = [10.0, 100.0, 1.0, 1000.0];
/// assert_eq!(find_indices(&column, 50.0).unwrap(), (0, 1));
/// // Clamped to the maximum on both sides
/// assert_eq!(find_indices(&column, 1.0e6).unwrap(), (3, 3));
/// ```
pub fn find_indices(column: &[f64], value: f64) -> Result<(usize, usize)> {
    if column.is_empty() {
        return Err(Error::EmptyGrid);
    }

    let below = first_index_of(column, |v, best| v < value && v > best, f64::NEG_INFINITY)
        .or_else(|| first_index_of(column, |v, best| v < best, f64::INFINITY));
    let above = first_index_of(column, |v, best| v > value && v < best, f64::INFINITY)
        .or_else(|| first_index_of(column, |v, best| v > best, f64::NEG_INFINITY));

    // A column of NaN matches nothing; fall back to the first row
    Ok((below.unwrap_or(0), above.unwrap_or(0)))
}

/// First index whose value beats the running best under `better`.
///
/// Strict comparison keeps the earliest row among equal values.
fn first_index_of(column: &[f64], better: impl Fn(f64, f64) -> bool, start: f64) -> Option<usize> {
    let mut best = start;
    let mut index = None;
    for (i, &v) in column.iter().enumerate() {
        if better(v, best) {
            best = v;
            index = Some(i);
        }
    }
    index
}
