//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bucket;
pub mod paycheck;

pub use bucket::{handle_bucket_command, BucketCommands};
pub use paycheck::{handle_paycheck_command, PaycheckCommands};
