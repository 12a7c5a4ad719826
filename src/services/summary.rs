//! Paycheck summary projection
//!
//! Rolls the allocation engine's numbers up into the per-paycheck view the
//! presentation layer renders: expected deposit, allocated and current
//! totals, remaining funds, and the buckets involved.

use crate::models::{Bucket, BudgetState, Money, PaycheckType};

use super::allocation;

/// Everything one paycheck cycle's view needs
#[derive(Debug, Clone)]
pub struct PaycheckSummary<'a> {
    /// The cycle being summarized
    pub paycheck_type: PaycheckType,

    /// Expected deposit for this cycle
    pub expected: Money,

    /// Sum of targets over this cycle's buckets
    pub allocated: Money,

    /// Sum of current amounts over this cycle's buckets
    pub current: Money,

    /// Expected minus allocated; negative means over-allocated
    pub remaining: Money,

    /// This cycle's buckets, in display order
    pub buckets: Vec<&'a Bucket>,
}

impl PaycheckSummary<'_> {
    /// Whether more is allocated than the expected deposit covers
    pub fn is_over_allocated(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Summarize one paycheck cycle of the budget state
pub fn summarize(state: &BudgetState, paycheck_type: PaycheckType) -> PaycheckSummary<'_> {
    let expected = state.expected_amount(paycheck_type);
    let allocated = allocation::total_allocated(&state.buckets, paycheck_type);

    PaycheckSummary {
        paycheck_type,
        expected,
        allocated,
        current: allocation::total_current(&state.buckets, paycheck_type),
        remaining: allocation::remaining(expected, allocated),
        buckets: allocation::buckets_for_paycheck(&state.buckets, paycheck_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bucket, BucketCategory};

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::new();
        state.add_bucket(
            Bucket::new("Rent", BucketCategory::EarlyBills, Money::from_dollars(1200))
                .with_current(Money::from_dollars(600)),
        );
        state.add_bucket(
            Bucket::new("Utilities", BucketCategory::LateBills, Money::from_dollars(300))
                .with_current(Money::from_dollars(150)),
        );
        state.add_bucket(
            Bucket::new("Fun", BucketCategory::Flexible, Money::from_dollars(250))
                .with_current(Money::from_dollars(50)),
        );
        state.set_expected_amount(PaycheckType::MidMonth, Money::from_dollars(2000));
        state.set_expected_amount(PaycheckType::EndOfMonth, Money::from_dollars(1000));
        state
    }

    #[test]
    fn test_summarize_mid_month() {
        let state = sample_state();
        let summary = summarize(&state, PaycheckType::MidMonth);

        assert_eq!(summary.expected, Money::from_dollars(2000));
        assert_eq!(summary.allocated, Money::from_dollars(550));
        assert_eq!(summary.current, Money::from_dollars(200));
        assert_eq!(summary.remaining, Money::from_dollars(1450));
        assert_eq!(summary.buckets.len(), 2);
        assert!(!summary.is_over_allocated());
    }

    #[test]
    fn test_summarize_over_allocated() {
        let state = sample_state();
        let summary = summarize(&state, PaycheckType::EndOfMonth);

        // Rent alone (1200) exceeds the expected 1000
        assert_eq!(summary.remaining, Money::from_dollars(-200));
        assert!(summary.is_over_allocated());
    }

    #[test]
    fn test_summarize_empty_state() {
        let state = BudgetState::new();
        let summary = summarize(&state, PaycheckType::MidMonth);

        assert!(summary.expected.is_zero());
        assert!(summary.allocated.is_zero());
        assert!(summary.remaining.is_zero());
        assert!(summary.buckets.is_empty());
    }
}
