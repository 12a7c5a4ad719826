//! Paycheck model
//!
//! A dated income deposit of a given cycle and amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::PaycheckType;
use super::ids::PaycheckId;
use super::money::Money;

/// A dated income deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paycheck {
    /// Unique identifier
    pub id: PaycheckId,

    /// Which income cycle this deposit belongs to
    #[serde(rename = "type")]
    pub paycheck_type: PaycheckType,

    /// Deposited amount
    pub amount: Money,

    /// Deposit date (ISO-8601 date on the wire)
    pub date: NaiveDate,
}

impl Paycheck {
    /// Create a new paycheck with a freshly generated id
    pub fn new(paycheck_type: PaycheckType, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: PaycheckId::new(),
            paycheck_type,
            amount,
            date,
        }
    }

    /// Validate the paycheck
    pub fn validate(&self) -> Result<(), PaycheckValidationError> {
        if self.amount.is_negative() {
            return Err(PaycheckValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Paycheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.amount, self.paycheck_type)
    }
}

/// Validation errors for paychecks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaycheckValidationError {
    NegativeAmount,
}

impl fmt::Display for PaycheckValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Paycheck amount cannot be negative"),
        }
    }
}

impl std::error::Error for PaycheckValidationError {}
