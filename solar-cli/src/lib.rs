//! Command implementations and shared helpers for the solar estimator
//! CLI. The binary in `main.rs` only parses arguments and dispatches
//! here.

pub mod commands;
pub mod utils;
