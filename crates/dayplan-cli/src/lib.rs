//! dayplan CLI - command implementations and composition root
//!
//! The binary in `main.rs` is a thin argument parser; everything it
//! wires lives here so integration tests can drive the same graph.

pub mod commands;
pub mod context;
pub mod output;
