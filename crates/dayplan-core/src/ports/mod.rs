//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ItemRepository`] - Relational CRUD for to-do items, scoped by user
//! - [`CredentialRepository`] - User credential CRUD plus the session entry
//! - [`ItemMirror`] - Per-user document snapshot of the item list
//! - [`SecretVerifier`] - Pluggable login secret comparison

pub mod credential_repository;
pub mod item_mirror;
pub mod item_repository;
pub mod secret_verifier;

pub use credential_repository::CredentialRepository;
pub use item_mirror::ItemMirror;
pub use item_repository::ItemRepository;
pub use secret_verifier::{PlaintextVerifier, SecretVerifier};
