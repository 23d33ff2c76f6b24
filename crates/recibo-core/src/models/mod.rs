//! Data models for expense records and pipeline configuration.

pub mod config;
pub mod expense;

pub use config::{ExtractionConfig, OutputConfig, ReciboConfig};
pub use expense::{Category, ExpenseRecord, PaymentMethod};
