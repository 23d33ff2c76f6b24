//! Core library for Brazilian receipt and invoice expense extraction.
//!
//! This crate provides:
//! - Rule-based field extraction from receipt text (dates, amounts,
//!   merchants, item descriptions, payment methods)
//! - Keyword categorization into a fixed set of expense categories
//! - An assembler that always produces a complete expense record,
//!   falling back to documented sentinel values instead of failing

pub mod error;
pub mod expense;
pub mod models;

pub use error::{ReciboError, Result};
pub use expense::{Clock, ExpenseParser, ExtractionResult, FixedClock, SystemClock};
pub use models::{Category, ExpenseRecord, ExtractionConfig, OutputConfig, PaymentMethod, ReciboConfig};
