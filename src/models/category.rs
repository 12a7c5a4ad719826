//! Bucket categories and paycheck cycles
//!
//! Every bucket belongs to exactly one category, and every category is funded
//! by exactly one of the two paycheck cycles. Both mappings are total matches
//! over closed enums, so adding a category without deciding its paycheck and
//! display label is a compile error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two income cycles the budget is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaycheckType {
    /// Deposited mid-month
    MidMonth,
    /// Deposited at the end of the month
    EndOfMonth,
}

impl PaycheckType {
    /// Both paycheck types, in display order
    pub fn all() -> &'static [Self] {
        &[Self::MidMonth, Self::EndOfMonth]
    }

    /// The other paycheck cycle
    pub fn other(&self) -> Self {
        match self {
            Self::MidMonth => Self::EndOfMonth,
            Self::EndOfMonth => Self::MidMonth,
        }
    }

    /// Display label for this paycheck type
    pub fn label(&self) -> &'static str {
        match self {
            Self::MidMonth => "Mid-Month",
            Self::EndOfMonth => "End-of-Month",
        }
    }

    /// Parse a paycheck type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mid-month" | "mid" | "midmonth" => Some(Self::MidMonth),
            "end-of-month" | "end" | "endofmonth" => Some(Self::EndOfMonth),
            _ => None,
        }
    }
}

impl fmt::Display for PaycheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classification of a bucket, determining which paycheck funds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketCategory {
    /// Bills due early in the month
    EarlyBills,
    /// Bills due late in the month
    LateBills,
    /// Grocery spending
    Groceries,
    /// Savings contributions
    Savings,
    /// Discretionary spending
    Flexible,
    /// Intentional buffer for variability
    Buffer,
}

impl BucketCategory {
    /// All categories, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::EarlyBills,
            Self::LateBills,
            Self::Groceries,
            Self::Savings,
            Self::Flexible,
            Self::Buffer,
        ]
    }

    /// The paycheck cycle that funds buckets of this category
    ///
    /// This mapping is a domain invariant, not configurable data.
    pub fn paycheck(&self) -> PaycheckType {
        match self {
            Self::LateBills | Self::Flexible => PaycheckType::MidMonth,
            Self::EarlyBills | Self::Groceries | Self::Savings | Self::Buffer => {
                PaycheckType::EndOfMonth
            }
        }
    }

    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::EarlyBills => "Early Bills",
            Self::LateBills => "Late Bills",
            Self::Groceries => "Groceries",
            Self::Savings => "Savings",
            Self::Flexible => "Flexible Spending",
            Self::Buffer => "Buffer",
        }
    }

    /// Parse a category from string (accepts the stored kebab-case form)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "early-bills" | "earlybills" => Some(Self::EarlyBills),
            "late-bills" | "latebills" => Some(Self::LateBills),
            "groceries" => Some(Self::Groceries),
            "savings" => Some(Self::Savings),
            "flexible" => Some(Self::Flexible),
            "buffer" => Some(Self::Buffer),
            _ => None,
        }
    }
}

impl fmt::Display for BucketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_paycheck_mapping() {
        let expected = [
            (BucketCategory::EarlyBills, PaycheckType::EndOfMonth),
            (BucketCategory::LateBills, PaycheckType::MidMonth),
            (BucketCategory::Groceries, PaycheckType::EndOfMonth),
            (BucketCategory::Savings, PaycheckType::EndOfMonth),
            (BucketCategory::Flexible, PaycheckType::MidMonth),
            (BucketCategory::Buffer, PaycheckType::EndOfMonth),
        ];

        assert_eq!(expected.len(), BucketCategory::all().len());
        for (category, paycheck) in expected {
            assert_eq!(category.paycheck(), paycheck);
        }
    }

    #[test]
    fn test_category_labels() {
        let expected = [
            (BucketCategory::EarlyBills, "Early Bills"),
            (BucketCategory::LateBills, "Late Bills"),
            (BucketCategory::Groceries, "Groceries"),
            (BucketCategory::Savings, "Savings"),
            (BucketCategory::Flexible, "Flexible Spending"),
            (BucketCategory::Buffer, "Buffer"),
        ];

        assert_eq!(expected.len(), BucketCategory::all().len());
        for (category, label) in expected {
            assert_eq!(category.label(), label);
            assert_eq!(category.to_string(), label);
        }
    }

    #[test]
    fn test_category_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BucketCategory::EarlyBills).unwrap(),
            "\"early-bills\""
        );
        assert_eq!(
            serde_json::from_str::<BucketCategory>("\"late-bills\"").unwrap(),
            BucketCategory::LateBills
        );
        assert!(serde_json::from_str::<BucketCategory>("\"rent\"").is_err());
    }

    #[test]
    fn test_category_parse() {
        for category in BucketCategory::all() {
            let stored = serde_json::to_string(category).unwrap();
            let stored = stored.trim_matches('"');
            assert_eq!(BucketCategory::parse(stored), Some(*category));
        }
        assert_eq!(BucketCategory::parse("unknown"), None);
    }

    #[test]
    fn test_paycheck_type_serde() {
        assert_eq!(
            serde_json::to_string(&PaycheckType::MidMonth).unwrap(),
            "\"mid-month\""
        );
        assert_eq!(
            serde_json::from_str::<PaycheckType>("\"end-of-month\"").unwrap(),
            PaycheckType::EndOfMonth
        );
    }

    #[test]
    fn test_paycheck_type_parse_and_other() {
        assert_eq!(PaycheckType::parse("mid-month"), Some(PaycheckType::MidMonth));
        assert_eq!(PaycheckType::parse("end"), Some(PaycheckType::EndOfMonth));
        assert_eq!(PaycheckType::parse("weekly"), None);

        assert_eq!(PaycheckType::MidMonth.other(), PaycheckType::EndOfMonth);
        assert_eq!(PaycheckType::EndOfMonth.other(), PaycheckType::MidMonth);
    }
}
