//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. The underlying representation is the
//! timestamp-plus-suffix string the persisted state has always used:
//! `<unix-millis>-<7 lowercase base-36 chars>`.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const SUFFIX_LEN: usize = 7;
const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh opaque identifier: `<unix-millis>-<7 base-36 chars>`.
///
/// Uniqueness is probabilistic (timestamp plus random suffix), which is
/// sufficient for list membership within a single budget.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(generate_id())
            }

            /// Wrap an existing raw ID string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw ID string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(BucketId);
define_id!(PaycheckId);
