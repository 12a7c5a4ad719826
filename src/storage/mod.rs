//! Storage layer for loon-budget
//!
//! A narrow key-value abstraction, a file-backed implementation with atomic
//! writes, and the best-effort budget-state adapter on top.

pub mod file_store;
pub mod kv;
pub mod state;

pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use state::{StateStore, STATE_KEY};
