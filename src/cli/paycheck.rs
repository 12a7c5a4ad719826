//! Paycheck CLI commands
//!
//! Implements CLI commands for recording, listing, and removing paycheck
//! deposits.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::format_paycheck_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Money, Paycheck, PaycheckId, PaycheckType};
use crate::storage::{KeyValueStore, StateStore};

/// Paycheck subcommands
#[derive(Subcommand)]
pub enum PaycheckCommands {
    /// Record a paycheck deposit
    Add {
        /// Paycheck type: mid-month or end-of-month
        paycheck_type: String,
        /// Deposited amount (e.g., "2000" or "2000.00")
        amount: String,
        /// Deposit date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded paychecks
    List,

    /// Remove a recorded paycheck
    Remove {
        /// Paycheck id
        id: String,
    },
}

/// Handle a paycheck command
pub fn handle_paycheck_command<S: KeyValueStore>(
    state: &mut BudgetState,
    store: &StateStore<S>,
    cmd: PaycheckCommands,
) -> BudgetResult<()> {
    match cmd {
        PaycheckCommands::Add {
            paycheck_type,
            amount,
            date,
        } => {
            let paycheck_type = PaycheckType::parse(&paycheck_type).ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Unknown paycheck type '{}' (expected mid-month or end-of-month)",
                    paycheck_type
                ))
            })?;
            let amount =
                Money::parse(&amount).map_err(|e| BudgetError::Validation(e.to_string()))?;
            let date = match date {
                Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
                    BudgetError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", date))
                })?,
                None => Local::now().date_naive(),
            };

            let paycheck = Paycheck::new(paycheck_type, amount, date);
            paycheck
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!(
                "Recorded {} paycheck of {} on {}",
                paycheck.paycheck_type, paycheck.amount, paycheck.date
            );
            state.add_paycheck(paycheck);
            store.save(state);
        }

        PaycheckCommands::List => {
            print!("{}", format_paycheck_list(&state.paychecks));
        }

        PaycheckCommands::Remove { id } => {
            let id = PaycheckId::from_string(id);
            if !state.remove_paycheck(&id) {
                return Err(BudgetError::paycheck_not_found(id.as_str()));
            }
            println!("Removed paycheck {}", id);
            store.save(state);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn setup() -> (BudgetState, StateStore<MemoryStore>) {
        (BudgetState::new(), StateStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_with_explicit_date() {
        let (mut state, store) = setup();

        handle_paycheck_command(
            &mut state,
            &store,
            PaycheckCommands::Add {
                paycheck_type: "mid-month".into(),
                amount: "2000".into(),
                date: Some("2025-01-15".into()),
            },
        )
        .unwrap();

        assert_eq!(state.paychecks.len(), 1);
        assert_eq!(
            state.paychecks[0].date,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );

        let persisted = store.load().unwrap();
        assert_eq!(persisted.paychecks.len(), 1);
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let (mut state, store) = setup();

        let err = handle_paycheck_command(
            &mut state,
            &store,
            PaycheckCommands::Add {
                paycheck_type: "mid-month".into(),
                amount: "2000".into(),
                date: Some("01/15/2025".into()),
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(state.paychecks.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let (mut state, store) = setup();
        let paycheck = Paycheck::new(
            PaycheckType::EndOfMonth,
            Money::from_dollars(2500),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        let id = paycheck.id.as_str().to_string();
        state.add_paycheck(paycheck);

        handle_paycheck_command(&mut state, &store, PaycheckCommands::Remove { id }).unwrap();
        assert!(state.paychecks.is_empty());
    }

    #[test]
    fn test_remove_missing_paycheck() {
        let (mut state, store) = setup();

        let err =
            handle_paycheck_command(&mut state, &store, PaycheckCommands::Remove { id: "x".into() })
                .unwrap_err();
        assert!(err.is_not_found());
    }
}
