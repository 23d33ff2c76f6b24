//! Command implementations for the recibo CLI.

pub mod batch;
pub mod config;
pub mod process;
