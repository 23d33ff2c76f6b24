//! Monetary amount extraction for Brazilian receipts.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT_CURRENCY, AMOUNT_GROUPED, AMOUNT_PLAIN, AMOUNT_TOTAL_LABEL};
use super::{ExtractionMatch, FieldExtractor};

/// Amounts at or above this are almost certainly CNPJ fragments, phone
/// numbers, or barcodes rather than a receipt total.
pub const DEFAULT_MAX_AMOUNT: u32 = 100_000;

/// Monetary amount extractor.
///
/// Scans four pattern families: `R$`-prefixed, total-keyword-prefixed
/// (`valor total`, `total`, `valor a pagar`, `valor pago`),
/// thousands-grouped decimal-comma, and bare decimal-comma numbers.
pub struct AmountExtractor {
    max_amount: Decimal,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            max_amount: Decimal::from(DEFAULT_MAX_AMOUNT),
        }
    }

    /// Set the upper bound above which candidates are discarded.
    pub fn with_max_amount(mut self, max_amount: Decimal) -> Self {
        self.max_amount = max_amount;
        self
    }

    fn accept(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount < self.max_amount
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// All valid candidates across the four families, in family order.
    /// The same printed number may surface once per family; selection is
    /// a reduction over the whole list, so duplicates are harmless.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AMOUNT_CURRENCY.captures_iter(text) {
            if let Some(amount) = parse_brl_amount(&caps[1]) {
                if self.accept(amount) {
                    let full_match = caps.get(0).unwrap();
                    results.push(ExtractionMatch::new(
                        amount,
                        "currency",
                        full_match.start(),
                        full_match.as_str(),
                    ));
                }
            }
        }

        for caps in AMOUNT_TOTAL_LABEL.captures_iter(text) {
            if let Some(amount) = parse_brl_amount(&caps[1]) {
                if self.accept(amount) {
                    let full_match = caps.get(0).unwrap();
                    results.push(ExtractionMatch::new(
                        amount,
                        "total_label",
                        full_match.start(),
                        full_match.as_str(),
                    ));
                }
            }
        }

        for m in AMOUNT_GROUPED.find_iter(text) {
            if let Some(amount) = parse_brl_amount(m.as_str()) {
                if self.accept(amount) {
                    results.push(ExtractionMatch::new(amount, "grouped", m.start(), m.as_str()));
                }
            }
        }

        for m in AMOUNT_PLAIN.find_iter(text) {
            if let Some(amount) = parse_brl_amount(m.as_str()) {
                if self.accept(amount) {
                    results.push(ExtractionMatch::new(amount, "plain", m.start(), m.as_str()));
                }
            }
        }

        results
    }
}

/// Extract the expense total from text.
///
/// The grand total is typically the largest number printed on a receipt,
/// so the maximum valid candidate wins. Returns zero when nothing
/// survives filtering; zero is the documented "no amount found" signal.
pub fn extract_amount(text: &str) -> Decimal {
    let candidates = AmountExtractor::new().extract_all(text);
    candidates
        .iter()
        .map(|c| c.value)
        .max()
        .map(|v| v.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a Brazilian-formatted amount (e.g., "1.234,56" or "R$ 12,34").
pub fn parse_brl_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    // "." groups thousands, "," is the decimal separator
    let normalized = cleaned.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in Brazilian style (1.234,56).
pub fn format_brl_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 2 {
        return s;
    }

    let integer_part = parts[0];
    let decimal_part = parts[1];

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && *c != '-' && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}
