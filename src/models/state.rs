//! Budget state aggregate
//!
//! `BudgetState` owns the full picture: the bucket list, the paycheck list,
//! and the expected deposit amount for each cycle. The caller (CLI layer)
//! mutates it through the helpers here; all budget math lives in the
//! service layer and only reads from it.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::bucket::Bucket;
use super::category::PaycheckType;
use super::ids::{BucketId, PaycheckId};
use super::money::Money;
use super::paycheck::Paycheck;

/// The aggregate root: everything the budget knows
///
/// Insertion order of `buckets` and `paychecks` is display order.
/// Uniqueness by id is the caller's invariant; it is not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    /// All buckets, in display order
    #[serde(default)]
    pub buckets: Vec<Bucket>,

    /// All recorded paycheck deposits, in display order
    #[serde(default)]
    pub paychecks: Vec<Paycheck>,

    /// Expected mid-month deposit, independent of the recorded list
    #[serde(default)]
    pub mid_month_paycheck_amount: Money,

    /// Expected end-of-month deposit, independent of the recorded list
    #[serde(default)]
    pub end_month_paycheck_amount: Money,
}

impl BudgetState {
    /// Create an empty budget state
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bucket
    pub fn add_bucket(&mut self, bucket: Bucket) {
        self.buckets.push(bucket);
    }

    /// Look up a bucket by id
    pub fn bucket(&self, id: &BucketId) -> Option<&Bucket> {
        self.buckets.iter().find(|b| &b.id == id)
    }

    /// Look up a bucket by id, mutably
    pub fn bucket_mut(&mut self, id: &BucketId) -> Option<&mut Bucket> {
        self.buckets.iter_mut().find(|b| &b.id == id)
    }

    /// Find a bucket by exact name (case-insensitive) or id
    pub fn find_bucket(&self, needle: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|b| b.id.as_str() == needle || b.name.eq_ignore_ascii_case(needle))
    }

    /// Find a bucket by exact name (case-insensitive) or id, mutably
    pub fn find_bucket_mut(&mut self, needle: &str) -> Option<&mut Bucket> {
        self.buckets
            .iter_mut()
            .find(|b| b.id.as_str() == needle || b.name.eq_ignore_ascii_case(needle))
    }

    /// Remove a bucket by id; returns whether anything was removed
    pub fn remove_bucket(&mut self, id: &BucketId) -> bool {
        let before = self.buckets.len();
        self.buckets.retain(|b| &b.id != id);
        self.buckets.len() != before
    }

    /// Append a paycheck
    pub fn add_paycheck(&mut self, paycheck: Paycheck) {
        self.paychecks.push(paycheck);
    }

    /// Look up a paycheck by id
    pub fn paycheck(&self, id: &PaycheckId) -> Option<&Paycheck> {
        self.paychecks.iter().find(|p| &p.id == id)
    }

    /// Remove a paycheck by id; returns whether anything was removed
    pub fn remove_paycheck(&mut self, id: &PaycheckId) -> bool {
        let before = self.paychecks.len();
        self.paychecks.retain(|p| &p.id != id);
        self.paychecks.len() != before
    }

    /// Expected deposit amount for a paycheck cycle
    pub fn expected_amount(&self, paycheck_type: PaycheckType) -> Money {
        match paycheck_type {
            PaycheckType::MidMonth => self.mid_month_paycheck_amount,
            PaycheckType::EndOfMonth => self.end_month_paycheck_amount,
        }
    }

    /// Set the expected deposit amount for a paycheck cycle
    pub fn set_expected_amount(&mut self, paycheck_type: PaycheckType, amount: Money) {
        match paycheck_type {
            PaycheckType::MidMonth => self.mid_month_paycheck_amount = amount,
            PaycheckType::EndOfMonth => self.end_month_paycheck_amount = amount,
        }
    }

    /// Validate the whole state (every bucket and paycheck)
    pub fn validate(&self) -> BudgetResult<()> {
        for bucket in &self.buckets {
            bucket.validate().map_err(|e| {
                BudgetError::Validation(format!("bucket '{}': {}", bucket.name, e))
            })?;
        }
        for paycheck in &self.paychecks {
            paycheck.validate().map_err(|e| {
                BudgetError::Validation(format!("paycheck {}: {}", paycheck.id, e))
            })?;
        }
        if self.mid_month_paycheck_amount.is_negative()
            || self.end_month_paycheck_amount.is_negative()
        {
            return Err(BudgetError::Validation(
                "expected paycheck amounts cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
