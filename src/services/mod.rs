//! Service layer for loon-budget
//!
//! The service layer provides the budget math on top of the models:
//! paycheck filtering, allocation totals, and per-paycheck summaries.
//! Everything here is pure; persistence and presentation live elsewhere.

pub mod allocation;
pub mod summary;

pub use summary::{summarize, PaycheckSummary};
