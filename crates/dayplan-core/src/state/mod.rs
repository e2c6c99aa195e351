//! Application state store
//!
//! A small action/reducer state container in three deliberately
//! separate pieces:
//!
//! - [`Action`] - the closed set of state transitions
//! - [`reduce`] - the pure transition function, no I/O
//! - [`ItemEffects`] - the side-effect executor that runs use-case
//!   operations for dispatched actions
//! - [`AppStore`] - glue: owns the snapshot, runs effects before the
//!   reducer, and notifies subscribers synchronously after every
//!   dispatch
//!
//! The store has exactly one owner (`dispatch` takes `&mut self`), so
//! actions are processed strictly in dispatch order, one at a time, and
//! a subscriber callback can never re-enter the reducer.

pub mod action;
pub mod effects;
pub mod reducer;
pub mod store;

pub use action::Action;
pub use effects::ItemEffects;
pub use reducer::reduce;
pub use store::AppStore;
