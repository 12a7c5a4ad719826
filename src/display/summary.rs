//! Summary and list formatting
//!
//! Renders buckets, paychecks, and per-paycheck summaries as fixed-width
//! tables for terminal output.

use crate::models::{Bucket, BudgetState, Paycheck, PaycheckType};
use crate::services::allocation::progress_percentage;
use crate::services::PaycheckSummary;

/// Render a progress bar like `[█████░░░░░] 50.0%`
pub fn format_progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!(
        "[{}{}] {}",
        "█".repeat(filled),
        "░".repeat(width - filled),
        format_percentage(clamped)
    )
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format one paycheck cycle's summary as a table with totals
pub fn format_paycheck_summary(summary: &PaycheckSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} Paycheck  (expected {})\n",
        summary.paycheck_type, summary.expected
    ));

    if summary.buckets.is_empty() {
        output.push_str("  No buckets assigned to this paycheck.\n");
        return output;
    }

    let name_width = summary
        .buckets
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "{:<name_width$}  {:<17}  {:>12}  {:>12}  Progress\n",
        "Name",
        "Category",
        "Target",
        "Current",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<17}  {:->12}  {:->12}  {:-<19}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for bucket in &summary.buckets {
        let progress = progress_percentage(bucket.current_amount, bucket.target_amount);
        output.push_str(&format!(
            "{:<name_width$}  {:<17}  {:>12}  {:>12}  {}\n",
            bucket.name,
            bucket.category.label(),
            bucket.target_amount.to_string(),
            bucket.current_amount.to_string(),
            format_progress_bar(progress, 10),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:-<17}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:<17}  {:>12}  {:>12}\n",
        "TOTAL",
        "",
        summary.allocated.to_string(),
        summary.current.to_string(),
        name_width = name_width,
    ));

    if summary.is_over_allocated() {
        output.push_str(&format!(
            "Remaining: {}  (over-allocated)\n",
            summary.remaining
        ));
    } else {
        output.push_str(&format!("Remaining: {}\n", summary.remaining));
    }

    output
}

/// Format the full budget summary: one section per paycheck cycle
pub fn format_budget_summary(state: &BudgetState, summaries: &[PaycheckSummary]) -> String {
    if state.buckets.is_empty() {
        return "No buckets yet. Add one with 'loon bucket add'.\n".to_string();
    }

    let mut output = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_paycheck_summary(summary));
    }
    output
}

/// Format a flat bucket list with ids
pub fn format_bucket_list(buckets: &[&Bucket]) -> String {
    if buckets.is_empty() {
        return "No buckets found.\n".to_string();
    }

    let name_width = buckets
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<17}  {:<12}  {:>12}  {:>12}  Id\n",
        "Name",
        "Category",
        "Paycheck",
        "Target",
        "Current",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<17}  {:-<12}  {:->12}  {:->12}  {:-<22}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for bucket in buckets {
        output.push_str(&format!(
            "{:<name_width$}  {:<17}  {:<12}  {:>12}  {:>12}  {}\n",
            bucket.name,
            bucket.category.label(),
            bucket.paycheck().label(),
            bucket.target_amount.to_string(),
            bucket.current_amount.to_string(),
            bucket.id,
            name_width = name_width,
        ));
    }

    output
}

/// Format the recorded paycheck deposits
pub fn format_paycheck_list(paychecks: &[Paycheck]) -> String {
    if paychecks.is_empty() {
        return "No paychecks recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<12}  {:>12}  Id\n",
        "Date", "Type", "Amount"
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<12}  {:->12}  {:-<22}\n",
        "", "", "", ""
    ));

    for paycheck in paychecks {
        output.push_str(&format!(
            "{:<12}  {:<12}  {:>12}  {}\n",
            paycheck.date.to_string(),
            paycheck.paycheck_type.label(),
            paycheck.amount.to_string(),
            paycheck.id,
        ));
    }

    let total: crate::models::Money = paychecks.iter().map(|p| p.amount).sum();
    output.push_str(&format!(
        "{:-<12}  {:-<12}  {:->12}\n",
        "", "", ""
    ));
    output.push_str(&format!("{:<12}  {:<12}  {:>12}\n", "TOTAL", "", total.to_string()));

    output
}

/// Render the expected income line for both cycles
pub fn format_income(state: &BudgetState) -> String {
    format!(
        "Expected income:  {} {}  /  {} {}\n",
        PaycheckType::MidMonth.label(),
        state.expected_amount(PaycheckType::MidMonth),
        PaycheckType::EndOfMonth.label(),
        state.expected_amount(PaycheckType::EndOfMonth),
    )
}
