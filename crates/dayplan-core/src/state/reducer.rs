//! Pure state reducer
//!
//! `reduce` performs no I/O and never fails; persistence happens in the
//! effect executor before the reducer runs.

use crate::domain::AppState;

use super::action::Action;

/// Applies an action to a state snapshot, producing the next snapshot
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::SetUser(user_id) => {
            state.current_user_id = user_id.clone();
        }
        Action::SetItems(items) => {
            state.to_do_items = items.clone();
        }
        Action::AddItem(item) => {
            state.to_do_items.push(item.clone());
        }
        Action::UpdateItem(item) => {
            if let Some(entry) = state.to_do_items.iter_mut().find(|i| i.id == item.id) {
                *entry = item.clone();
            }
        }
        Action::DeleteItem(item) => {
            state.to_do_items.retain(|i| i.id != item.id);
        }
        // Handled entirely by the effect executor
        Action::LoadItems(_) => {}
    }

    state
}
