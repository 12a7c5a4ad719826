//! Budget state persistence adapter
//!
//! Serializes the whole `BudgetState` into a single fixed slot of a
//! key-value store. Persistence is best-effort: the in-memory state is the
//! source of truth for the session, and every storage failure is logged and
//! swallowed so the user is never blocked. `load` returns `None` (never an
//! error) when the backend is unavailable, the slot is unset, or the stored
//! value fails to parse.

use tracing::{debug, warn};

use crate::models::BudgetState;

use super::kv::KeyValueStore;

/// The single slot the budget state persists under
pub const STATE_KEY: &str = "loon-budget-state";

/// Best-effort persistence for the budget state
///
/// Wraps any [`KeyValueStore`]; an adapter constructed with
/// [`StateStore::unavailable`] models execution contexts with no storage
/// backend at all (every load is absent, every save is dropped).
#[derive(Debug)]
pub struct StateStore<S> {
    store: Option<S>,
}

impl<S: KeyValueStore> StateStore<S> {
    /// Create an adapter over a backing store
    pub fn new(store: S) -> Self {
        Self { store: Some(store) }
    }

    /// Create an adapter with no backing store
    pub fn unavailable() -> Self {
        Self { store: None }
    }

    /// Whether a backing store is present
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// Load the last saved state, or `None` if there is none to load
    ///
    /// Absence, an unavailable backend, and a corrupt slot value all land
    /// on the same `None` path; the caller never sees a fault.
    pub fn load(&self) -> Option<BudgetState> {
        let store = match &self.store {
            Some(store) => store,
            None => {
                debug!("No storage backend available; starting with empty state");
                return None;
            }
        };

        let raw = match store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read saved budget state: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Saved budget state is unreadable, treating as absent: {}", e);
                None
            }
        }
    }

    /// Persist the state, overwriting any prior value
    ///
    /// Failures are logged and discarded; the in-memory state remains the
    /// source of truth regardless of persistence success.
    pub fn save(&self, state: &BudgetState) {
        let store = match &self.store {
            Some(store) => store,
            None => {
                debug!("No storage backend available; changes stay in memory");
                return;
            }
        };

        let serialized = match serde_json::to_string(state) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Failed to serialize budget state: {}", e);
                return;
            }
        };

        if let Err(e) = store.set(STATE_KEY, &serialized) {
            warn!("Failed to save budget state: {}", e);
        }
    }

    /// Remove any persisted state; no-op on absence or unavailability
    pub fn clear(&self) {
        let store = match &self.store {
            Some(store) => store,
            None => return,
        };

        if let Err(e) = store.remove(STATE_KEY) {
            warn!("Failed to clear budget state: {}", e);
        }
    }
}
