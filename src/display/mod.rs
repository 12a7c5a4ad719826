//! Display formatting for terminal output
//!
//! Provides utilities for formatting buckets, paychecks, and per-paycheck
//! summaries for terminal display.

pub mod summary;

pub use summary::{
    format_bucket_list, format_budget_summary, format_income, format_paycheck_list,
    format_paycheck_summary, format_progress_bar,
};
