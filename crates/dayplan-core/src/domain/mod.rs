//! Domain entities and business logic
//!
//! This module contains the core domain types for dayplan:
//! - To-do items with their derived schedule status
//! - User credential records
//! - The in-memory application state snapshot
//! - Domain-specific error types

pub mod app_state;
pub mod errors;
pub mod todo_item;
pub mod user;

// Re-export commonly used types
pub use app_state::AppState;
pub use errors::DomainError;
pub use todo_item::{
    parse_item_date, sort_for_list, Priority, Status, ToDoItem, ITEM_DATE_FORMAT,
};
pub use user::User;
