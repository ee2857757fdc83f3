//! Post-hoc consistency checks on an assembled report.
//!
//! Validation never blocks assembly. Each rule is evaluated independently and
//! every violation is reported, either as an error (the figures should not be
//! treated as authoritative) or as a warning (informational).

use crate::config::ReportConfig;
use crate::metrics::checked_sum;
use crate::report::Report;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sectoral_core::rounding::round_display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative tolerance between summed sector values and a reserved total.
pub const SUM_RELATIVE_TOLERANCE: Decimal = dec!(0.001);

/// Allowed distance of the percentage sum from 100, in percentage points.
pub const PERCENTAGE_SUM_TOLERANCE: Decimal = dec!(0.1);

/// Absolute growth rate, in percent, beyond which a sector is flagged.
pub const GROWTH_PLAUSIBILITY_BOUND: Decimal = dec!(50);

/// Validation rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Sector values sum to the reserved total.
    TotalSum,
    /// Sector percentages sum to roughly 100.
    PercentageSum,
    /// No negative values in either period.
    NonNegative,
    /// Sector count matches the configured expectation.
    SectorCount,
    /// Growth rates fall within a plausible band.
    GrowthPlausibility,
    /// Growth rate could not be computed.
    UndefinedGrowth,
    /// Non-oil aggregate agrees with the reserved non-oil total.
    NonOilTotal,
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationRule::TotalSum => "total-sum",
            ValidationRule::PercentageSum => "percentage-sum",
            ValidationRule::NonNegative => "non-negative",
            ValidationRule::SectorCount => "sector-count",
            ValidationRule::GrowthPlausibility => "growth-plausibility",
            ValidationRule::UndefinedGrowth => "undefined-growth",
            ValidationRule::NonOilTotal => "non-oil-total",
        };
        write!(f, "{name}")
    }
}

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks treating the report as authoritative.
    Error,
    /// Informational.
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Rule that produced the finding.
    pub rule: ValidationRule,
    /// Error or warning.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Offending sector, for per-sector rules.
    pub sector: Option<String>,
}

impl ValidationIssue {
    fn error(rule: ValidationRule, message: String) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message,
            sector: None,
        }
    }

    fn warning(rule: ValidationRule, message: String) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message,
            sector: None,
        }
    }

    fn for_sector(mut self, code: &str) -> Self {
        self.sector = Some(code.to_string());
        self
    }
}

/// Flat `{valid, errors, warnings}` view of a validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// True when there are no errors.
    pub valid: bool,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// Outcome of validating a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "ValidationSummary")]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// All findings in evaluation order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Error messages.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }

    /// Warning messages.
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warning)
    }

    /// Findings raised by `rule`.
    pub fn by_rule(&self, rule: ValidationRule) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.rule == rule)
    }

    /// Flattened summary.
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            valid: self.is_valid(),
            errors: self.errors().into_iter().map(String::from).collect(),
            warnings: self.warnings().into_iter().map(String::from).collect(),
        }
    }

    fn messages(&self, severity: Severity) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .map(|i| i.message.as_str())
            .collect()
    }
}

impl From<ValidationReport> for ValidationSummary {
    fn from(report: ValidationReport) -> Self {
        report.summary()
    }
}

/// Runs every validation rule against `report`.
#[must_use]
pub fn validate_report(report: &Report, config: &ReportConfig) -> ValidationReport {
    let mut issues = Vec::new();

    check_total_sum(report, &mut issues);
    check_percentage_sum(report, &mut issues);
    check_non_negative(report, &mut issues);
    check_sector_count(report, config.expected_sector_count, &mut issues);
    check_growth(report, &mut issues);
    check_non_oil_total(report, &mut issues);

    ValidationReport { issues }
}

fn outside_relative_tolerance(value: Decimal, reference: Decimal) -> bool {
    value
        .checked_sub(reference)
        .map_or(true, |diff| diff.abs() > (reference * SUM_RELATIVE_TOLERANCE).abs())
}

fn check_total_sum(report: &Report, issues: &mut Vec<ValidationIssue>) {
    let total = report.metadata.total_value;
    let Ok(sum) = checked_sum(report.sectors.iter().map(|s| s.value), "sector sum") else {
        issues.push(ValidationIssue::error(
            ValidationRule::TotalSum,
            format!(
                "Sum of sectors overflows and cannot equal total GDP ({:.2})",
                round_display(total)
            ),
        ));
        return;
    };

    if outside_relative_tolerance(sum, total) {
        issues.push(ValidationIssue::error(
            ValidationRule::TotalSum,
            format!(
                "Sum of sectors ({:.2}) does not equal total GDP ({:.2})",
                round_display(sum),
                round_display(total)
            ),
        ));
    }
}

fn check_percentage_sum(report: &Report, issues: &mut Vec<ValidationIssue>) {
    let Ok(sum) = checked_sum(report.sectors.iter().map(|s| s.percentage), "percentage sum")
    else {
        issues.push(ValidationIssue::warning(
            ValidationRule::PercentageSum,
            "Sector percentages overflow their sum, expected ~100%".to_string(),
        ));
        return;
    };

    let off_target = sum
        .checked_sub(Decimal::ONE_HUNDRED)
        .map_or(true, |diff| diff.abs() > PERCENTAGE_SUM_TOLERANCE);
    if off_target {
        issues.push(ValidationIssue::warning(
            ValidationRule::PercentageSum,
            format!("Sector percentages sum to {sum:.2}%, expected ~100%"),
        ));
    }
}

fn check_non_negative(report: &Report, issues: &mut Vec<ValidationIssue>) {
    for sector in &report.sectors {
        if sector.value < Decimal::ZERO || sector.value_prior < Decimal::ZERO {
            issues.push(
                ValidationIssue::error(
                    ValidationRule::NonNegative,
                    format!("Sector {} has negative values", sector.code),
                )
                .for_sector(&sector.code),
            );
        }
    }
}

fn check_sector_count(report: &Report, expected: usize, issues: &mut Vec<ValidationIssue>) {
    let found = report.sectors.len();
    if found != expected {
        issues.push(ValidationIssue::warning(
            ValidationRule::SectorCount,
            format!("Expected {expected} sectors, found {found}"),
        ));
    }
}

fn check_growth(report: &Report, issues: &mut Vec<ValidationIssue>) {
    for sector in &report.sectors {
        match sector.yoy_growth {
            Some(growth) if growth.abs() > GROWTH_PLAUSIBILITY_BOUND => {
                issues.push(
                    ValidationIssue::warning(
                        ValidationRule::GrowthPlausibility,
                        format!("Sector {} has unusual growth rate: {growth:.2}%", sector.code),
                    )
                    .for_sector(&sector.code),
                );
            }
            Some(_) => {}
            None => {
                issues.push(
                    ValidationIssue::warning(
                        ValidationRule::UndefinedGrowth,
                        format!(
                            "Sector {} has undefined growth: comparison value is zero or too small",
                            sector.code
                        ),
                    )
                    .for_sector(&sector.code),
                );
            }
        }
    }
}

fn check_non_oil_total(report: &Report, issues: &mut Vec<ValidationIssue>) {
    let Some(reported) = report.metadata.non_oil_total else {
        return;
    };
    let computed = report.aggregates.non_oil.value;

    if outside_relative_tolerance(computed, reported) {
        issues.push(ValidationIssue::warning(
            ValidationRule::NonOilTotal,
            format!(
                "Non-oil sectors sum to {:.2}, reported non-oil total is {:.2}",
                round_display(computed),
                round_display(reported)
            ),
        ));
    }
}
