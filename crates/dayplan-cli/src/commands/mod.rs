//! CLI command implementations

pub mod items;
pub mod user;
