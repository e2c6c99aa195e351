//! dayplan Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `ToDoItem`, `User`, `AppState`
//! - **Use cases** - `ItemUseCase`, `UserUseCase`
//! - **Port definitions** - Traits for adapters: `ItemRepository`,
//!   `CredentialRepository`, `ItemMirror`, `SecretVerifier`
//! - **State store** - Action-driven `AppStore` with a pure reducer and
//!   a separate side-effect executor
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain entities through port interfaces, and the
//! state store drives use cases from dispatched actions.

pub mod config;
pub mod domain;
pub mod ports;
pub mod state;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;
