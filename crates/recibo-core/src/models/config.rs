//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the recibo pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReciboConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Default for ReciboConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Earliest year accepted for extracted dates (inclusive).
    pub min_year: i32,

    /// Latest year accepted for extracted dates (inclusive).
    pub max_year: i32,

    /// Amounts at or above this value are discarded as implausible.
    pub max_amount: u32,

    /// Maximum number of items joined into the description.
    pub max_items: usize,

    /// User assigned when the caller provides none.
    pub default_user: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_year: 2020,
            max_year: 2030,
            max_amount: 100_000,
            max_items: 3,
            default_user: "desconhecido".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Characters of source text kept in the record excerpt.
    pub excerpt_limit: usize,

    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            excerpt_limit: 500,
            pretty_json: true,
        }
    }
}

impl ReciboConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the configuration for values that would break extraction.
    ///
    /// Returns one message per problem found; an empty vector means the
    /// configuration is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.extraction.min_year > self.extraction.max_year {
            problems.push(format!(
                "extraction.min_year ({}) is greater than extraction.max_year ({}); no date would ever validate",
                self.extraction.min_year, self.extraction.max_year
            ));
        }
        if self.extraction.max_amount == 0 {
            problems.push(
                "extraction.max_amount is 0; every amount would be discarded".to_string(),
            );
        }
        if self.extraction.max_items == 0 {
            problems.push(
                "extraction.max_items is 0; descriptions would always be empty".to_string(),
            );
        }
        if self.extraction.default_user.trim().is_empty() {
            problems.push("extraction.default_user is blank".to_string());
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_year_window() {
        let config = ReciboConfig::default();
        assert_eq!(config.extraction.min_year, 2020);
        assert_eq!(config.extraction.max_year, 2030);
        assert_eq!(config.extraction.max_amount, 100_000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ReciboConfig =
            serde_json::from_str(r#"{"extraction": {"min_year": 2015}}"#).unwrap();
        assert_eq!(config.extraction.min_year, 2015);
        assert_eq!(config.extraction.max_year, 2030);
        assert_eq!(config.output.excerpt_limit, 500);
    }

    #[test]
    fn test_default_config_validates_clean() {
        assert!(ReciboConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_inverted_year_window() {
        let mut config = ReciboConfig::default();
        config.extraction.min_year = 2031;
        config.extraction.max_year = 2020;

        let problems = config.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("min_year"));
    }

    #[test]
    fn test_validate_flags_zeroed_limits() {
        let mut config = ReciboConfig::default();
        config.extraction.max_amount = 0;
        config.extraction.max_items = 0;
        config.extraction.default_user = "  ".to_string();

        assert_eq!(config.validate().len(), 3);
    }

    #[test]
    fn test_malformed_file_is_a_json_error() {
        let dir = std::env::temp_dir().join("recibo-config-bad-json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ReciboConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, crate::error::ReciboError::Json(_)));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let path = std::path::Path::new("/nonexistent/recibo/config.json");
        let err = ReciboConfig::from_file(path).unwrap_err();
        assert!(matches!(err, crate::error::ReciboError::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join("recibo-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let mut config = ReciboConfig::default();
        config.extraction.default_user = "ana".to_string();
        config.save(&path).unwrap();

        let loaded = ReciboConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.default_user, "ana");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
