//! Allocation engine
//!
//! Pure projections over the bucket list: which buckets a paycheck funds,
//! how much of it they claim, and how far along each bucket is. Nothing here
//! mutates a bucket or touches storage; every function is a plain transform
//! of its inputs.

use crate::models::{Bucket, Money, PaycheckType};

/// The buckets funded by a paycheck cycle, preserving original order
pub fn buckets_for_paycheck(buckets: &[Bucket], paycheck_type: PaycheckType) -> Vec<&Bucket> {
    buckets
        .iter()
        .filter(|b| b.paycheck() == paycheck_type)
        .collect()
}

/// Sum of target amounts over the buckets a paycheck cycle funds
pub fn total_allocated(buckets: &[Bucket], paycheck_type: PaycheckType) -> Money {
    buckets_for_paycheck(buckets, paycheck_type)
        .into_iter()
        .map(|b| b.target_amount)
        .sum()
}

/// Sum of current amounts over the buckets a paycheck cycle funds
pub fn total_current(buckets: &[Bucket], paycheck_type: PaycheckType) -> Money {
    buckets_for_paycheck(buckets, paycheck_type)
        .into_iter()
        .map(|b| b.current_amount)
        .sum()
}

/// Funds left after allocation
///
/// Never clamped: a negative result signals over-allocation, which is a
/// legitimate, displayable state rather than an error.
pub fn remaining(paycheck_amount: Money, allocated: Money) -> Money {
    paycheck_amount - allocated
}

/// Progress toward a target, as a percentage clamped to [0, 100]
///
/// A zero target always reports 0, regardless of the current amount.
pub fn progress_percentage(current: Money, target: Money) -> f64 {
    if target.is_zero() {
        return 0.0;
    }
    let pct = current.cents() as f64 / target.cents() as f64 * 100.0;
    pct.min(100.0)
}
