//! In-memory application state snapshot
//!
//! `AppState` is a derived cache of the authoritative relational data
//! for the currently active user. It is rebuilt wholesale by
//! `SetItems`, patched incrementally by add/update/delete actions, and
//! discarded at process end, never persisted.

use serde::{Deserialize, Serialize};

use super::todo_item::ToDoItem;

/// Snapshot of the application state held by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Logged-in user id, `None` when no session is active
    pub current_user_id: Option<String>,
    /// Items of the active user, in reducer order
    pub to_do_items: Vec<ToDoItem>,
}

impl AppState {
    /// Creates the initial empty state
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = AppState::new();
        assert!(state.current_user_id.is_none());
        assert!(state.to_do_items.is_empty());
    }
}
