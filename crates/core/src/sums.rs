//! Sum arithmetic.
//!
//! Totals are computed in `i128`: the closed-form sum for the largest inputs
//! this service accepts (`n` around 10^10) exceeds both `i64` and `u64`.
//! Persisted per-chunk results stay within `i64` — the `result` column is a
//! 64-bit signed integer — so the narrowing happens at the worker boundary,
//! not here.

use crate::error::CoreError;

/// Validate the upper bound of a sum request.
///
/// `n` must be a positive integer. Callers run this before creating any job
/// or task so invalid input leaves no partial state behind.
pub fn validate_upper_bound(n: i64) -> Result<(), CoreError> {
    if n < 1 {
        return Err(CoreError::Validation(format!(
            "n must be a positive integer (n >= 1), got {n}"
        )));
    }
    Ok(())
}

/// Sum of `1..=n` via the closed form `n * (n + 1) / 2`.
pub fn direct_sum(n: i64) -> i128 {
    let n = n as i128;
    n * (n + 1) / 2
}

/// Sum of the inclusive range `start..=end` via the closed form
/// `(end - start + 1) * (start + end) / 2`.
///
/// Exact for all inputs: one of the two factors is always even. Callers
/// guarantee `start <= end`.
pub fn range_sum(start: i64, end: i64) -> i128 {
    debug_assert!(start <= end, "range_sum requires start <= end");
    let (start, end) = (start as i128, end as i128);
    (end - start + 1) * (start + end) / 2
}
