//! Actions accepted by the application state store

use crate::domain::ToDoItem;

/// A state transition request dispatched to the [`AppStore`](super::AppStore)
///
/// Every action passes through the effect executor first and is then
/// always forwarded to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replaces the current user id (None on logout)
    SetUser(Option<String>),
    /// Triggers a fetch of the user's items; the effect executor answers
    /// with a follow-up [`SetItems`](Action::SetItems)
    LoadItems(String),
    /// Replaces the full item list
    SetItems(Vec<ToDoItem>),
    /// Persists and appends a new item
    AddItem(ToDoItem),
    /// Persists and replaces the entry with the same id
    UpdateItem(ToDoItem),
    /// Persists the removal and drops the entry with the same id
    DeleteItem(ToDoItem),
}
