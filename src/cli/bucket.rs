//! Bucket CLI commands
//!
//! Implements CLI commands for creating, listing, editing, and removing
//! buckets. Every mutation is persisted immediately after it is applied.

use clap::Subcommand;

use crate::display::format_bucket_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Bucket, BucketCategory, BudgetState, Money, PaycheckType};
use crate::services::allocation::buckets_for_paycheck;
use crate::storage::{KeyValueStore, StateStore};

/// Bucket subcommands
#[derive(Subcommand)]
pub enum BucketCommands {
    /// Add a new bucket
    Add {
        /// Bucket name
        name: String,
        /// Category: early-bills, late-bills, groceries, savings, flexible, buffer
        #[arg(short, long)]
        category: String,
        /// Target amount (e.g., "500" or "500.00")
        #[arg(short, long)]
        target: String,
        /// Currently assigned amount
        #[arg(long)]
        current: Option<String>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List buckets
    List {
        /// Only show buckets funded by this paycheck (mid-month or end-of-month)
        #[arg(short, long)]
        paycheck: Option<String>,
    },

    /// Edit a bucket
    Edit {
        /// Bucket name or id
        bucket: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New current amount
        #[arg(long)]
        current: Option<String>,
        /// New notes (replaces existing notes)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a bucket
    Remove {
        /// Bucket name or id
        bucket: String,
    },
}

/// Parse a CLI amount argument
fn parse_amount(s: &str) -> BudgetResult<Money> {
    Money::parse(s).map_err(|e| BudgetError::Validation(e.to_string()))
}

/// Parse a CLI category argument
fn parse_category(s: &str) -> BudgetResult<BucketCategory> {
    BucketCategory::parse(s).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Unknown category '{}' (expected one of: early-bills, late-bills, groceries, savings, flexible, buffer)",
            s
        ))
    })
}

/// Handle a bucket command
pub fn handle_bucket_command<S: KeyValueStore>(
    state: &mut BudgetState,
    store: &StateStore<S>,
    cmd: BucketCommands,
) -> BudgetResult<()> {
    match cmd {
        BucketCommands::Add {
            name,
            category,
            target,
            current,
            notes,
        } => {
            let category = parse_category(&category)?;
            let mut bucket = Bucket::new(name, category, parse_amount(&target)?);
            if let Some(current) = current {
                bucket = bucket.with_current(parse_amount(&current)?);
            }
            if let Some(notes) = notes {
                bucket = bucket.with_notes(notes);
            }
            bucket
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!(
                "Added bucket '{}' ({}, funded by {} paycheck)",
                bucket.name,
                bucket.category.label(),
                bucket.paycheck()
            );
            state.add_bucket(bucket);
            store.save(state);
        }

        BucketCommands::List { paycheck } => match paycheck {
            Some(paycheck) => {
                let paycheck_type = PaycheckType::parse(&paycheck).ok_or_else(|| {
                    BudgetError::Validation(format!(
                        "Unknown paycheck type '{}' (expected mid-month or end-of-month)",
                        paycheck
                    ))
                })?;
                let buckets = buckets_for_paycheck(&state.buckets, paycheck_type);
                print!("{}", format_bucket_list(&buckets));
            }
            None => {
                let buckets: Vec<&Bucket> = state.buckets.iter().collect();
                print!("{}", format_bucket_list(&buckets));
            }
        },

        BucketCommands::Edit {
            bucket,
            name,
            target,
            current,
            notes,
        } => {
            // Parse before borrowing the bucket mutably
            let target = target.map(|s| parse_amount(&s)).transpose()?;
            let current = current.map(|s| parse_amount(&s)).transpose()?;

            let entry = state
                .find_bucket_mut(&bucket)
                .ok_or_else(|| BudgetError::bucket_not_found(&bucket))?;

            if let Some(name) = name {
                entry.name = name;
            }
            if let Some(target) = target {
                entry.target_amount = target;
            }
            if let Some(current) = current {
                entry.current_amount = current;
            }
            if let Some(notes) = notes {
                entry.notes = Some(notes);
            }
            entry
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!("Updated bucket '{}'", entry.name);
            store.save(state);
        }

        BucketCommands::Remove { bucket } => {
            let id = state
                .find_bucket(&bucket)
                .map(|b| b.id.clone())
                .ok_or_else(|| BudgetError::bucket_not_found(&bucket))?;

            state.remove_bucket(&id);
            println!("Removed bucket '{}'", bucket);
            store.save(state);
        }
    }

    Ok(())
}
