//! Expense field extraction module.

mod parser;
pub mod rules;

pub use parser::{Clock, ExpenseParser, ExtractionResult, FixedClock, SystemClock};
