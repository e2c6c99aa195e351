//! Use cases (interactors) for dayplan
//!
//! This module contains the application use cases that orchestrate
//! domain entities and port interfaces. Use cases are thin coordinators
//! that delegate business rules to domain methods and I/O to ports.
//!
//! Storage and mirror failures never escape this layer: every error is
//! logged and converted into a benign default (`false`, empty list,
//! `None`). Callers therefore cannot distinguish "no data" from
//! "storage failed".
//!
//! ## Use Cases
//!
//! - [`ItemUseCase`] - Item CRUD with relational/mirror dual-write sync
//! - [`UserUseCase`] - Registration, login, and session management

pub mod manage_items;
pub mod manage_user;

pub use manage_items::ItemUseCase;
pub use manage_user::UserUseCase;
