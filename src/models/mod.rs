//! Core data models for loon-budget
//!
//! This module contains the data structures that represent the budgeting
//! domain: buckets, categories, paychecks, and the aggregate budget state.

pub mod bucket;
pub mod category;
pub mod ids;
pub mod money;
pub mod paycheck;
pub mod state;

pub use bucket::Bucket;
pub use category::{BucketCategory, PaycheckType};
pub use ids::{generate_id, BucketId, PaycheckId};
pub use money::Money;
pub use paycheck::Paycheck;
pub use state::BudgetState;
