//! Rule-based field extractors for Brazilian receipts and invoices.

pub mod amounts;
pub mod category;
pub mod dates;
pub mod items;
pub mod merchant;
pub mod patterns;
pub mod payment;

pub use amounts::{extract_amount, format_brl_amount, parse_brl_amount, AmountExtractor};
pub use category::categorize;
pub use dates::{extract_date, DateExtractor};
pub use items::{extract_description, extract_description_with, ItemExtractor};
pub use merchant::extract_merchant;
pub use payment::extract_payment_method;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A candidate value with provenance: which pattern produced it and where.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Identifier of the pattern family that matched.
    pub pattern: &'static str,
    /// Byte offset of the match in the source text.
    pub position: usize,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, pattern: &'static str, position: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            pattern,
            position,
            source: source.into(),
        }
    }
}
