//! Configuration for report assembly and validation.

use sectoral_core::{SectoralError, SectoralResult};
use serde::{Deserialize, Serialize};

/// Sector count of the standard ISIC breakdown.
pub const DEFAULT_EXPECTED_SECTOR_COUNT: usize = 17;

/// Number of leading sectors summarised in the aggregates.
pub const DEFAULT_TOP_N: usize = 3;

/// Configuration for assembling and validating a sectoral report.
///
/// Descriptive fields are copied into the report metadata verbatim; the
/// engine never interprets them. Every field has a default, so a partial
/// TOML or JSON document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Report title.
    pub title: String,

    /// Label of the current period.
    pub year: i32,

    /// Label of the comparison period.
    pub comparison_year: i32,

    /// Monetary unit of snapshot values (e.g. "Million AED").
    pub unit: String,

    /// Data source label.
    pub data_source: String,

    /// Price basis of the values (e.g. "Constant Prices").
    pub price_type: String,

    /// Base year of constant-price series.
    pub base_year: i32,

    /// Report schema version.
    pub version: String,

    /// Sector count the validator expects to see.
    /// A mismatch is a warning, since classifications evolve between dataset versions.
    pub expected_sector_count: usize,

    /// Number of leading sectors listed in the aggregates.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Sectoral Contribution Breakdown".to_string(),
            year: 2024,
            comparison_year: 2023,
            unit: "Million AED".to_string(),
            data_source: "FCSA,DF_NA_ISIC_CON,3.4.0+all.csv".to_string(),
            price_type: "Constant Prices".to_string(),
            base_year: 2018,
            version: "1.0".to_string(),
            expected_sector_count: DEFAULT_EXPECTED_SECTOR_COUNT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ReportConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current and comparison period labels.
    #[must_use]
    pub fn with_periods(mut self, year: i32, comparison_year: i32) -> Self {
        self.year = year;
        self.comparison_year = comparison_year;
        self
    }

    /// Sets the monetary unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the data source label.
    #[must_use]
    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = source.into();
        self
    }

    /// Sets the report title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the expected sector count.
    #[must_use]
    pub fn with_expected_sector_count(mut self, count: usize) -> Self {
        self.expected_sector_count = count;
        self
    }

    /// Sets the number of leading sectors to list.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Checks the config for internal consistency.
    ///
    /// Period fields are labels only and are not checked.
    pub fn validate(&self) -> SectoralResult<()> {
        if self.top_n == 0 {
            return Err(SectoralError::invalid_config("top_n must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ReportConfig::default();
        assert_eq!(config.expected_sector_count, 17);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.year, 2024);
        assert_eq!(config.comparison_year, 2023);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReportConfig::new()
            .with_periods(2025, 2024)
            .with_unit("Million USD")
            .with_top_n(5)
            .with_expected_sector_count(18);

        assert_eq!(config.year, 2025);
        assert_eq!(config.unit, "Million USD");
        assert_eq!(config.top_n, 5);
        assert_eq!(config.expected_sector_count, 18);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        assert_eq!(
            ReportConfig::new().with_top_n(0).validate(),
            Err(SectoralError::invalid_config("top_n must be at least 1"))
        );
    }

    #[test]
    fn test_period_labels_are_not_ordered() {
        // Restated comparisons may reuse or reverse period labels.
        assert!(ReportConfig::new().with_periods(2023, 2023).validate().is_ok());
        assert!(ReportConfig::new().with_periods(2023, 2024).validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: ReportConfig = toml::from_str(
            r#"
            year = 2025
            comparison_year = 2024
            expected_sector_count = 18
            "#,
        )
        .unwrap();

        assert_eq!(config.year, 2025);
        assert_eq!(config.expected_sector_count, 18);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.unit, "Million AED");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ReportConfig::new().with_title("Quarterly view");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
