//! Bucket model
//!
//! A bucket is a named spending or savings goal with a target amount,
//! belonging to exactly one category. The category decides which paycheck
//! funds the bucket; that association is never overridden per bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{BucketCategory, PaycheckType};
use super::ids::BucketId;
use super::money::Money;

/// A spending/savings goal funded by one paycheck cycle
///
/// Field names on the wire match the persisted budget-state format
/// (`targetAmount`, `currentAmount`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: BucketId,

    /// Free-text label (e.g., "Rent")
    pub name: String,

    /// Category, fixing which paycheck funds this bucket
    pub category: BucketCategory,

    /// The allocation goal
    pub target_amount: Money,

    /// Funds currently assigned; absent in older stored states, so it
    /// defaults to zero on load
    #[serde(default)]
    pub current_amount: Money,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Bucket {
    /// Create a new bucket with a freshly generated id and zero current amount
    pub fn new(name: impl Into<String>, category: BucketCategory, target_amount: Money) -> Self {
        Self {
            id: BucketId::new(),
            name: name.into(),
            category,
            target_amount,
            current_amount: Money::zero(),
            notes: None,
        }
    }

    /// Set the current amount (builder style)
    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Set notes (builder style)
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The paycheck cycle that funds this bucket
    pub fn paycheck(&self) -> PaycheckType {
        self.category.paycheck()
    }

    /// Validate the bucket
    pub fn validate(&self) -> Result<(), BucketValidationError> {
        if self.name.trim().is_empty() {
            return Err(BucketValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(BucketValidationError::NameTooLong(self.name.len()));
        }

        if self.target_amount.is_negative() {
            return Err(BucketValidationError::NegativeTarget);
        }

        if self.current_amount.is_negative() {
            return Err(BucketValidationError::NegativeCurrent);
        }

        Ok(())
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeTarget,
    NegativeCurrent,
}

impl fmt::Display for BucketValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bucket name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Bucket name too long ({} chars, max 100)", len)
            }
            Self::NegativeTarget => write!(f, "Target amount cannot be negative"),
            Self::NegativeCurrent => write!(f, "Current amount cannot be negative"),
        }
    }
}

impl std::error::Error for BucketValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bucket() {
        let bucket = Bucket::new("Rent", BucketCategory::EarlyBills, Money::from_dollars(1200));

        assert_eq!(bucket.name, "Rent");
        assert_eq!(bucket.category, BucketCategory::EarlyBills);
        assert_eq!(bucket.target_amount, Money::from_dollars(1200));
        assert!(bucket.current_amount.is_zero());
        assert!(bucket.notes.is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let bucket = Bucket::new("Fun", BucketCategory::Flexible, Money::from_dollars(250))
            .with_current(Money::from_dollars(50))
            .with_notes("movies, games");

        assert_eq!(bucket.current_amount, Money::from_dollars(50));
        assert_eq!(bucket.notes.as_deref(), Some("movies, games"));
    }

    #[test]
    fn test_paycheck_follows_category() {
        let bucket = Bucket::new("Utilities", BucketCategory::LateBills, Money::from_dollars(300));
        assert_eq!(bucket.paycheck(), PaycheckType::MidMonth);
    }

    #[test]
    fn test_validation() {
        let mut bucket = Bucket::new("Valid", BucketCategory::Savings, Money::from_dollars(500));
        assert!(bucket.validate().is_ok());

        bucket.name = String::new();
        assert_eq!(bucket.validate(), Err(BucketValidationError::EmptyName));

        bucket.name = "a".repeat(101);
        assert!(matches!(
            bucket.validate(),
            Err(BucketValidationError::NameTooLong(_))
        ));

        bucket.name = "Valid".to_string();
        bucket.target_amount = Money::from_cents(-1);
        assert_eq!(bucket.validate(), Err(BucketValidationError::NegativeTarget));

        bucket.target_amount = Money::zero();
        bucket.current_amount = Money::from_cents(-1);
        assert_eq!(bucket.validate(), Err(BucketValidationError::NegativeCurrent));
    }

    #[test]
    fn test_wire_field_names() {
        let bucket = Bucket::new("Rent", BucketCategory::EarlyBills, Money::from_dollars(1200));
        let json = serde_json::to_string(&bucket).unwrap();

        assert!(json.contains("\"targetAmount\":1200"));
        assert!(json.contains("\"currentAmount\":0"));
        assert!(json.contains("\"category\":\"early-bills\""));
        // absent notes are omitted entirely
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_missing_current_amount_defaults_to_zero() {
        let json = r#"{
            "id": "1700000000000-abc1234",
            "name": "Groceries",
            "category": "groceries",
            "targetAmount": 400
        }"#;

        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert!(bucket.current_amount.is_zero());
        assert_eq!(bucket.target_amount, Money::from_dollars(400));
    }
}
