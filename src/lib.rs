//! Loon Budget - paycheck-cycle bucket budgeting
//!
//! This library provides the core functionality for the Loon Budget
//! application. Spending is organized into buckets, each belonging to a
//! category that fixes which of the two paycheck cycles (mid-month or
//! end-of-month) funds it; the allocation engine computes per-paycheck
//! totals, remaining funds, and progress, and the storage layer persists
//! the whole budget state to a single key-value slot.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (buckets, categories, paychecks, state)
//! - `services`: Pure budget math (allocation totals, summaries)
//! - `storage`: Key-value persistence with a file-backed store
//! - `display`: Terminal formatting for summaries and lists
//! - `cli`: Command handlers for the `loon` binary
//!
//! # Example
//!
//! ```rust
//! use loon_budget::models::{Bucket, BucketCategory, BudgetState, Money, PaycheckType};
//! use loon_budget::services::summarize;
//!
//! let mut state = BudgetState::new();
//! state.add_bucket(Bucket::new(
//!     "Rent",
//!     BucketCategory::EarlyBills,
//!     Money::from_dollars(1200),
//! ));
//! state.set_expected_amount(PaycheckType::EndOfMonth, Money::from_dollars(2500));
//!
//! let summary = summarize(&state, PaycheckType::EndOfMonth);
//! assert_eq!(summary.remaining, Money::from_dollars(1300));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
