//! Report assembly.
//!
//! [`assemble_report`] runs the whole pipeline: sector breakdown, insights and
//! metadata. Validation is separate: a report is always returned when the
//! snapshots are structurally usable, and callers inspect
//! [`Report::validate`] before treating the aggregates as authoritative.

use crate::aggregation::{build_sector_breakdown, AggregateRecord, SectorRecord, TopSector};
use crate::config::ReportConfig;
use crate::insights::{calculate_insights, Insights};
use crate::validation::{validate_report, ValidationReport};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sectoral_core::registry::SectorRegistry;
use sectoral_core::types::Snapshot;
use sectoral_core::SectoralResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Descriptive metadata of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Report title.
    pub title: String,
    /// Current period label.
    pub year: i32,
    /// Comparison period label.
    pub comparison_year: i32,
    /// Monetary unit.
    pub unit: String,
    /// Data source label.
    pub data_source: String,
    /// Price basis.
    pub price_type: String,
    /// Base year of constant-price series.
    pub base_year: i32,
    /// Reserved total of the current snapshot.
    pub total_value: Decimal,
    /// Reserved non-oil total of the current snapshot, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_oil_total: Option<Decimal>,
    /// Assembly timestamp.
    pub generated_at: DateTime<Utc>,
    /// Report schema version.
    pub version: String,
}

/// Oil / non-oil aggregates and leading sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    /// Oil sectors combined.
    pub oil: AggregateRecord,
    /// Everything else combined.
    pub non_oil: AggregateRecord,
    /// Leading sectors by value.
    #[serde(rename = "topThree")]
    pub top_sectors: Vec<TopSector>,
}

/// A complete sectoral breakdown report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Descriptive metadata.
    pub metadata: ReportMetadata,
    /// Sector records in rank order.
    pub sectors: Vec<SectorRecord>,
    /// Aggregates.
    pub aggregates: Aggregates,
    /// Derived insights.
    pub insights: Insights,
}

impl Report {
    /// Runs the validator against this report.
    #[must_use]
    pub fn validate(&self, config: &ReportConfig) -> ValidationReport {
        validate_report(self, config)
    }

    /// Looks up a sector record by code.
    #[must_use]
    pub fn sector(&self, code: &str) -> Option<&SectorRecord> {
        self.sectors.iter().find(|s| s.code == code)
    }
}

/// A report together with its validation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedReport {
    /// The assembled report.
    pub report: Report,
    /// Validation findings for the report.
    pub validation: ValidationReport,
}

impl ValidatedReport {
    /// True when validation found no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

/// Assembles a report against the standard ISIC registry, stamped with the current time.
///
/// # Errors
///
/// Structural failures from the aggregation stage, or `InvalidConfig`.
///
/// # Example
///
/// ```
/// use sectoral_analytics::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let current = Snapshot::new()
///     .with_value("A", dec!(100))
///     .with_value("B", dec!(300))
///     .with_value("_T", dec!(400));
/// let prior = Snapshot::new()
///     .with_value("A", dec!(80))
///     .with_value("B", dec!(300));
///
/// let report = assemble_report(&current, &prior, &ReportConfig::default()).unwrap();
/// assert_eq!(report.sectors[0].code, "B");
/// assert_eq!(report.insights.diversification_index, dec!(0.75));
/// ```
pub fn assemble_report(
    current: &Snapshot,
    prior: &Snapshot,
    config: &ReportConfig,
) -> SectoralResult<Report> {
    assemble_report_at(SectorRegistry::isic(), current, prior, config, Utc::now())
}

/// Assembles a report with an explicit registry and timestamp.
///
/// Identical inputs always produce identical reports.
pub fn assemble_report_at(
    registry: &SectorRegistry,
    current: &Snapshot,
    prior: &Snapshot,
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> SectoralResult<Report> {
    config.validate()?;

    let breakdown = build_sector_breakdown(registry, current, prior, config.top_n)?;
    let insights = calculate_insights(&breakdown.sectors);
    debug!(
        diversification_index = %insights.diversification_index,
        dominance = %insights.dominance_label,
        "Derived insights"
    );

    let metadata = ReportMetadata {
        title: config.title.clone(),
        year: config.year,
        comparison_year: config.comparison_year,
        unit: config.unit.clone(),
        data_source: config.data_source.clone(),
        price_type: config.price_type.clone(),
        base_year: config.base_year,
        total_value: breakdown.total,
        non_oil_total: breakdown.non_oil_total,
        generated_at,
        version: config.version.clone(),
    };

    Ok(Report {
        metadata,
        sectors: breakdown.sectors,
        aggregates: Aggregates {
            oil: breakdown.oil,
            non_oil: breakdown.non_oil,
            top_sectors: breakdown.top_sectors,
        },
        insights,
    })
}

/// Assembles a report and validates it in one call.
pub fn generate_report(
    current: &Snapshot,
    prior: &Snapshot,
    config: &ReportConfig,
) -> SectoralResult<ValidatedReport> {
    let report = assemble_report(current, prior, config)?;
    let validation = report.validate(config);

    info!(
        sectors = report.sectors.len(),
        valid = validation.is_valid(),
        errors = validation.errors().len(),
        warnings = validation.warnings().len(),
        "Assembled sectoral report"
    );

    Ok(ValidatedReport { report, validation })
}
