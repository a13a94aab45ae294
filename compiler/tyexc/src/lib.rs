//! Tyex driver library.
//!
//! The `tyex` binary is a thin argv dispatcher over the commands here, so
//! each command writes to a caller-supplied writer and can be tested.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
