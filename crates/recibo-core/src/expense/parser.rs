//! Expense parser assembling all field extractors into one record.

use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::expense::{ExpenseRecord, PaymentMethod};

use super::rules::{
    amounts::AmountExtractor,
    categorize,
    dates::DateExtractor,
    extract_merchant, extract_payment_method,
    items::{extract_description_with, DESCRIPTION_UNAVAILABLE},
    merchant::MERCHANT_NOT_IDENTIFIED,
    FieldExtractor,
};

/// Result of expense extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Assembled expense record. Every field is populated.
    pub record: ExpenseRecord,
    /// Warnings for fields that fell back to a sentinel value.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Source of "today" for the date fallback.
///
/// Injecting the clock keeps extraction deterministic under test: two
/// runs over the same text with the same clock produce identical records.
pub trait Clock {
    /// Current local date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Rule-based expense parser for Brazilian receipt and invoice text.
///
/// `parse` always returns a complete record: fields that cannot be
/// extracted are filled with documented sentinels and reported through
/// the result's warnings, never as errors.
pub struct ExpenseParser {
    config: ExtractionConfig,
    excerpt_limit: usize,
    clock: Box<dyn Clock + Send + Sync>,
}

impl ExpenseParser {
    /// Create a parser with default settings and the system clock.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            excerpt_limit: 500,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the clock used for the date fallback.
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set how many characters of source text the record excerpt keeps.
    pub fn with_excerpt_limit(mut self, limit: usize) -> Self {
        self.excerpt_limit = limit;
        self
    }

    /// Parse receipt text into a structured expense record.
    ///
    /// Never fails: missing fields degrade to sentinel values and a
    /// warning, so the caller always gets a record it can store.
    pub fn parse(&self, text: &str, user: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        debug!(chars = text.len(), user, "parsing expense text");

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let date = self.extract_date(text, &mut warnings);
        let amount = self.extract_amount(text, &mut warnings);

        let merchant = extract_merchant(text, &lines);
        if merchant == MERCHANT_NOT_IDENTIFIED {
            warnings.push("merchant not identified; using placeholder".to_string());
        }

        let description = extract_description_with(text, self.config.max_items);
        if description == DESCRIPTION_UNAVAILABLE {
            warnings.push("no item descriptions found; using placeholder".to_string());
        }

        let category = categorize(&merchant, &description, text);

        let payment_method = extract_payment_method(text);
        if payment_method == PaymentMethod::NotIdentified {
            warnings.push("payment method not identified; using placeholder".to_string());
        }

        let source_excerpt: String = text.chars().take(self.excerpt_limit).collect();

        let user = if user.trim().is_empty() {
            self.config.default_user.clone()
        } else {
            user.trim().to_string()
        };

        let record = ExpenseRecord {
            date,
            user,
            merchant,
            amount,
            category,
            description,
            payment_method,
            source_excerpt,
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            merchant = %record.merchant,
            amount = %record.amount,
            category = %record.category,
            elapsed_ms = processing_time_ms,
            "expense extracted"
        );

        ExtractionResult {
            record,
            warnings,
            processing_time_ms,
        }
    }

    fn extract_date(&self, text: &str, warnings: &mut Vec<String>) -> String {
        let extractor = DateExtractor::new()
            .with_year_window(self.config.min_year, self.config.max_year);

        let date = match extractor.extract(text) {
            Some(found) => found.value,
            None => {
                warnings.push("no valid date found; using today's date".to_string());
                self.clock.today()
            }
        };

        date.format("%d/%m/%Y").to_string()
    }

    fn extract_amount(&self, text: &str, warnings: &mut Vec<String>) -> Decimal {
        let extractor =
            AmountExtractor::new().with_max_amount(Decimal::from(self.config.max_amount));

        let amount = extractor
            .extract_all(text)
            .iter()
            .map(|c| c.value)
            .max()
            .map(|v| v.round_dp(2))
            .unwrap_or(Decimal::ZERO);

        // Zero is a valid record but almost always means a failed read,
        // so it is surfaced as a soft warning rather than an error.
        if amount.is_zero() {
            warnings.push("no plausible amount found; recorded as zero".to_string());
        }

        amount
    }
}

impl Default for ExpenseParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::{Category, PaymentMethod};
    use pretty_assertions::assert_eq;

    fn fixed_parser() -> ExpenseParser {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        ExpenseParser::new().with_clock(clock)
    }

    #[test]
    fn test_parse_supermarket_receipt() {
        let text = "SUPERMERCADO EXTRA\n\
                    CNPJ: 12.345.678/0001-90\n\
                    Data: 01/03/2024\n\
                    Total: R$ 152,30\n\
                    Pagamento: PIX";

        let result = fixed_parser().parse(text, "Ana");

        assert_eq!(result.record.date, "01/03/2024");
        assert_eq!(result.record.user, "Ana");
        assert_eq!(result.record.merchant, "SUPERMERCADO EXTRA");
        assert_eq!(result.record.amount, "152.30".parse().unwrap());
        assert_eq!(result.record.category, Category::Food);
        assert_eq!(result.record.payment_method, PaymentMethod::Pix);
    }

    #[test]
    fn test_empty_input_yields_sentinels() {
        let result = fixed_parser().parse("", "Ana");

        assert_eq!(result.record.date, "15/06/2024");
        assert_eq!(result.record.amount, Decimal::ZERO);
        assert_eq!(result.record.merchant, MERCHANT_NOT_IDENTIFIED);
        assert_eq!(result.record.description, DESCRIPTION_UNAVAILABLE);
        assert_eq!(result.record.category, Category::Other);
        assert_eq!(result.record.payment_method, PaymentMethod::NotIdentified);

        // One warning per fallback: date, amount, merchant, description,
        // payment method
        assert_eq!(result.warnings.len(), 5);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("payment method not identified")));
    }

    #[test]
    fn test_parse_is_idempotent_with_fixed_clock() {
        let text = "Farmácia São Paulo\nDipirona 500mg\nValor total: R$ 23,90\nDébito";
        let parser = fixed_parser();

        let first = parser.parse(text, "Bruno");
        let second = parser.parse(text, "Bruno");

        assert_eq!(first.record, second.record);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_blank_user_falls_back_to_default() {
        let result = fixed_parser().parse("Total: R$ 10,00", "   ");
        assert_eq!(result.record.user, "desconhecido");
    }

    #[test]
    fn test_excerpt_is_char_limited() {
        let text = format!("Total: R$ 10,00\n{}", "ção".repeat(400));
        let result = fixed_parser().with_excerpt_limit(500).parse(&text, "Ana");
        assert_eq!(result.record.source_excerpt.chars().count(), 500);
    }

    #[test]
    fn test_config_year_window_applies() {
        let mut config = ExtractionConfig::default();
        config.min_year = 2010;
        config.max_year = 2015;

        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let parser = ExpenseParser::new().with_config(config).with_clock(clock);

        let result = parser.parse("Data: 12/05/2012", "Ana");
        assert_eq!(result.record.date, "12/05/2012");
    }
}
