//! Date extraction for Brazilian receipts.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, DATE_LONG_PT, DATE_YMD};
use super::{ExtractionMatch, FieldExtractor};

/// Default plausible year window for receipt dates.
pub const DEFAULT_MIN_YEAR: i32 = 2020;
pub const DEFAULT_MAX_YEAR: i32 = 2030;

/// Date field extractor.
///
/// Scans three pattern families in fixed priority order: numeric
/// day-first (`01/03/2024`, `1-3-24`), written-out Portuguese
/// (`5 de março de 2024`), and ISO year-first (`2024-03-01`).
/// Candidates whose year falls outside the configured window are
/// skipped, as are impossible calendar dates.
pub struct DateExtractor {
    min_year: i32,
    max_year: i32,
}

impl DateExtractor {
    pub fn new() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }

    /// Set the accepted year window.
    pub fn with_year_window(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    fn accept(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if year < self.min_year || year > self.max_year {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// All valid candidates, in pattern-priority order and then
    /// left-to-right within each pattern.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // DD/MM/YYYY or DD-MM-YY
        for caps in DATE_DMY.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year = parse_year(&caps[3]);

            if let Some(date) = self.accept(year, month, day) {
                let full_match = caps.get(0).unwrap();
                results.push(ExtractionMatch::new(
                    date,
                    "numeric_dmy",
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        // "5 de março de 2024"
        for caps in DATE_LONG_PT.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month = portuguese_month_to_number(&caps[2]);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = self.accept(year, month, day) {
                let full_match = caps.get(0).unwrap();
                results.push(ExtractionMatch::new(
                    date,
                    "written_pt",
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        // YYYY-MM-DD or YYYY/MM/DD
        for caps in DATE_YMD.captures_iter(text) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = self.accept(year, month, day) {
                let full_match = caps.get(0).unwrap();
                results.push(ExtractionMatch::new(
                    date,
                    "iso_ymd",
                    full_match.start(),
                    full_match.as_str(),
                ));
            }
        }

        results
    }
}

/// Extract the receipt date from text, if any candidate validates.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    DateExtractor::new().extract(text).map(|m| m.value)
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    // Two-digit years are always 20YY on receipts
    if year < 100 { 2000 + year } else { year }
}

fn portuguese_month_to_number(month: &str) -> u32 {
    match month.to_lowercase().as_str() {
        "janeiro" => 1,
        "fevereiro" => 2,
        "março" => 3,
        "abril" => 4,
        "maio" => 5,
        "junho" => 6,
        "julho" => 7,
        "agosto" => 8,
        "setembro" => 9,
        "outubro" => 10,
        "novembro" => 11,
        "dezembro" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_numeric() {
        assert_eq!(
            extract_date("Compra em 01/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            extract_date("Data: 15-07-2025"),
            NaiveDate::from_ymd_opt(2025, 7, 15)
        );
    }

    #[test]
    fn test_extract_date_written_portuguese() {
        assert_eq!(
            extract_date("Venda em 05 de março de 2024"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(
            extract_date("1 de janeiro de 2023"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn test_extract_date_iso() {
        assert_eq!(
            extract_date("emitido 2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(
            extract_date("01/03/24"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_year_outside_window_is_skipped() {
        assert_eq!(extract_date("01/03/2019"), None);
        assert_eq!(extract_date("01/03/2031"), None);
        // Scanning continues past the rejected candidate
        assert_eq!(
            extract_date("01/03/2019 e 02/04/2024"),
            NaiveDate::from_ymd_opt(2024, 4, 2)
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_skipped() {
        assert_eq!(extract_date("01/13/2024"), None);
        assert_eq!(extract_date("30/02/2024"), None);
        assert_eq!(
            extract_date("30/02/2024 ... 28/02/2024"),
            NaiveDate::from_ymd_opt(2024, 2, 28)
        );
    }

    #[test]
    fn test_pattern_priority_order() {
        // Day-first wins over ISO even when ISO appears earlier in the text
        assert_eq!(
            extract_date("2024-06-10 pago em 01/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("CUPOM FISCAL sem data"), None);
        assert_eq!(extract_date(""), None);
    }

    #[test]
    fn test_extract_all_collects_candidates() {
        let extractor = DateExtractor::new();
        let results = extractor.extract_all("01/03/2024 e 2024-06-10");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].pattern, "numeric_dmy");
        assert_eq!(results[1].pattern, "iso_ymd");
    }

    #[test]
    fn test_custom_year_window() {
        let extractor = DateExtractor::new().with_year_window(2015, 2018);
        let result = extractor.extract("01/03/2016");
        assert_eq!(
            result.map(|m| m.value),
            NaiveDate::from_ymd_opt(2016, 3, 1)
        );
    }
}
