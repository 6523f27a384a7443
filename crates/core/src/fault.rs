//! Deliberately failing sum variant.
//!
//! This module is a fault-injection fixture: the service needs one task that
//! predictably fails partway through so the error-status path can be
//! exercised end to end. Nothing outside the faulty-task endpoint calls it,
//! and the production sum paths in [`crate::sums`] contain no equivalent
//! branch.

/// Loop index at which [`failing_sum`] gives up.
pub const FAULT_TRIGGER: i64 = 1_234_567;

/// Error raised by [`failing_sum`] once its loop reaches [`FAULT_TRIGGER`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Injected fault: iteration reached {trigger}")]
pub struct InjectedFault {
    pub trigger: i64,
}

/// Sum `1..=n` with an accumulating loop that fails when the loop variable
/// reaches [`FAULT_TRIGGER`].
///
/// For `n < FAULT_TRIGGER` the result matches
/// [`direct_sum`](crate::sums::direct_sum); for `n >= FAULT_TRIGGER` the call
/// always fails. The loop never executes more than `FAULT_TRIGGER`
/// iterations, so even enormous `n` fail quickly.
pub fn failing_sum(n: i64) -> Result<i128, InjectedFault> {
    let mut total: i128 = 0;
    for i in 1..=n {
        if i == FAULT_TRIGGER {
            return Err(InjectedFault {
                trigger: FAULT_TRIGGER,
            });
        }
        total += i as i128;
    }
    Ok(total)
}
