//! Configuration module for loon-budget
//!
//! Provides XDG-compliant path resolution with an environment override for
//! tests and portable installs.

pub mod paths;

pub use paths::LoonPaths;
