//! Integration tests for sectoral-analytics.
//!
//! These tests run the full pipeline over the 2023/2024 national accounts
//! fixture (17 ISIC sectors, constant prices).

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use sectoral_analytics::prelude::*;
use sectoral_analytics::{assemble_report_at, growth_comparison, ValidationRule, KEY_SECTORS};

// =============================================================================
// TEST FIXTURES
// =============================================================================

const SECTORS_2024: [(&str, Decimal); 17] = [
    ("A", dec!(19234.56)),
    ("B", dec!(405678.90)),
    ("C", dec!(225026.94)),
    ("DE", dec!(35890.45)),
    ("F", dec!(192876.34)),
    ("G", dec!(232456.78)),
    ("H", dec!(102345.89)),
    ("I", dec!(47890.12)),
    ("J", dec!(81234.56)),
    ("K", dec!(118765.43)),
    ("L", dec!(166543.21)),
    ("MN", dec!(72345.67)),
    ("O", dec!(92456.78)),
    ("P", dec!(56789.34)),
    ("Q", dec!(45678.90)),
    ("RS", dec!(24567.89)),
    ("T", dec!(13456.78)),
];

const SECTORS_2023: [(&str, Decimal); 17] = [
    ("A", dec!(18450.32)),
    ("B", dec!(398245.67)),
    ("C", dec!(217853.04)),
    ("DE", dec!(34562.18)),
    ("F", dec!(186234.55)),
    ("G", dec!(225026.94)),
    ("H", dec!(98234.76)),
    ("I", dec!(45678.23)),
    ("J", dec!(76543.89)),
    ("K", dec!(112345.67)),
    ("L", dec!(156789.34)),
    ("MN", dec!(67890.12)),
    ("O", dec!(89012.45)),
    ("P", dec!(54321.78)),
    ("Q", dec!(43210.56)),
    ("RS", dec!(23456.78)),
    ("T", dec!(12345.67)),
];

/// Published 2024 snapshot. Its reserved totals do not match the sector values.
fn published_2024() -> Snapshot {
    SECTORS_2024
        .into_iter()
        .collect::<Snapshot>()
        .with_value("_T", dec!(1776490.637))
        .with_value("_TNO", dec!(1370811.737))
}

fn published_2023() -> Snapshot {
    SECTORS_2023
        .into_iter()
        .collect::<Snapshot>()
        .with_value("_T", dec!(1721700.95))
        .with_value("_TNO", dec!(1323455.28))
}

/// 2024 snapshot with totals restated from the sector values.
fn restated_2024() -> Snapshot {
    SECTORS_2024
        .into_iter()
        .collect::<Snapshot>()
        .with_value("_T", dec!(1933238.54))
        .with_value("_TNO", dec!(1527559.64))
}

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 9, 30, 0).unwrap()
}

// =============================================================================
// RESTATED (CONSISTENT) DATA
// =============================================================================

#[test]
fn test_restated_report_is_fully_valid() {
    let config = ReportConfig::default();
    let result = generate_report(&restated_2024(), &published_2023(), &config).unwrap();

    assert!(result.is_valid());
    assert!(result.validation.warnings().is_empty(), "{:?}", result.validation.warnings());
}

#[test]
fn test_restated_report_figures() {
    let report = assemble_report(&restated_2024(), &published_2023(), &ReportConfig::default()).unwrap();

    assert_eq!(report.sectors.len(), 17);

    let ranking: Vec<&str> = report.sectors.iter().take(5).map(|s| s.code.as_str()).collect();
    assert_eq!(ranking, vec!["B", "G", "C", "F", "L"]);

    let mining = report.sector("B").unwrap();
    assert_eq!(mining.percentage, dec!(20.98));
    assert_eq!(mining.yoy_growth, Some(dec!(1.87)));
    assert_eq!(mining.category, SectorCategory::Oil);

    assert_eq!(report.aggregates.oil.percentage, dec!(20.98));
    assert_eq!(report.aggregates.non_oil.value, dec!(1527559.64));
    assert_eq!(report.aggregates.non_oil.percentage, dec!(79.02));
    assert_eq!(report.aggregates.non_oil.yoy_growth, Some(dec!(4.49)));

    let percentages: Decimal = report.sectors.iter().map(|s| s.percentage).sum();
    assert_eq!(percentages, dec!(99.98));

    assert_eq!(report.insights.diversification_index, dec!(0.95));
    assert_eq!(report.insights.dominance_label, DominanceLabel::Medium);
    assert_eq!(report.insights.sector_count, 17);

    let fastest = report.insights.fastest_growing_sector.as_ref().unwrap();
    assert_eq!(fastest.code, "T");
    assert_eq!(fastest.growth, dec!(9.00));
    assert_eq!(fastest.name, "Activities of Households as Employers");
}

#[test]
fn test_top_three() {
    let report = assemble_report(&restated_2024(), &published_2023(), &ReportConfig::default()).unwrap();

    let top: Vec<(&str, Decimal)> = report
        .aggregates
        .top_sectors
        .iter()
        .map(|t| (t.code.as_str(), t.percentage))
        .collect();
    assert_eq!(
        top,
        vec![("B", dec!(20.98)), ("G", dec!(12.02)), ("C", dec!(11.64))]
    );
}

// =============================================================================
// PUBLISHED (INCONSISTENT) DATA
// =============================================================================

#[test]
fn test_published_totals_are_flagged() {
    let config = ReportConfig::default();
    let result = generate_report(&published_2024(), &published_2023(), &config).unwrap();
    let validation = &result.validation;

    assert!(!result.is_valid());
    assert_eq!(
        validation.errors(),
        vec!["Sum of sectors (1933238.54) does not equal total GDP (1776490.64)"]
    );
    assert_eq!(validation.by_rule(ValidationRule::PercentageSum).count(), 1);
    assert_eq!(validation.by_rule(ValidationRule::NonOilTotal).count(), 1);
    assert_eq!(validation.by_rule(ValidationRule::SectorCount).count(), 0);
    assert_eq!(validation.by_rule(ValidationRule::GrowthPlausibility).count(), 0);
}

#[test]
fn test_published_report_still_computed() {
    let report = assemble_report(&published_2024(), &published_2023(), &ReportConfig::default()).unwrap();

    // Shares are taken against the reserved total
    assert_eq!(report.sector("B").unwrap().percentage, dec!(22.84));
    assert_eq!(report.aggregates.non_oil.percentage, dec!(85.99));
    assert_eq!(report.insights.diversification_index, dec!(0.93));
    assert_eq!(report.insights.dominance_label, DominanceLabel::Medium);
    assert_eq!(report.metadata.total_value, dec!(1776490.637));
    assert_eq!(report.metadata.non_oil_total, Some(dec!(1370811.737)));
}

// =============================================================================
// PIPELINE BEHAVIOUR
// =============================================================================

#[test]
fn test_reference_two_sector_example() {
    let current = Snapshot::new()
        .with_value("A", dec!(100))
        .with_value("B", dec!(300))
        .with_value("_T", dec!(400));
    let prior = Snapshot::new()
        .with_value("A", dec!(80))
        .with_value("B", dec!(300));

    let report = assemble_report(&current, &prior, &ReportConfig::default()).unwrap();

    let a = report.sector("A").unwrap();
    assert_eq!((a.percentage, a.yoy_growth, a.rank), (dec!(25.00), Some(dec!(25.00)), 2));
    let b = report.sector("B").unwrap();
    assert_eq!((b.percentage, b.yoy_growth, b.rank), (dec!(75.00), Some(dec!(0.00)), 1));
    assert_eq!(report.insights.diversification_index, dec!(0.75));
}

#[test]
fn test_deterministic_apart_from_timestamp() {
    let config = ReportConfig::default();
    let first = assemble_report_at(
        SectorRegistry::isic(),
        &published_2024(),
        &published_2023(),
        &config,
        fixed_time(),
    )
    .unwrap();
    let second = assemble_report_at(
        SectorRegistry::isic(),
        &published_2024(),
        &published_2023(),
        &config,
        fixed_time(),
    )
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let later = assemble_report(&published_2024(), &published_2023(), &config).unwrap();
    assert_eq!(later.sectors, first.sectors);
    assert_eq!(later.aggregates, first.aggregates);
    assert_eq!(later.insights, first.insights);
}

#[test]
fn test_zero_prior_is_a_warning_not_a_failure() {
    let mut prior = published_2023();
    prior.insert("J", Decimal::ZERO);

    let config = ReportConfig::default();
    let result = generate_report(&restated_2024(), &prior, &config).unwrap();

    assert!(result.report.sector("J").unwrap().yoy_growth.is_none());
    let undefined: Vec<_> = result.validation.by_rule(ValidationRule::UndefinedGrowth).collect();
    assert_eq!(undefined.len(), 1);
    assert_eq!(undefined[0].sector.as_deref(), Some("J"));
    assert!(result.is_valid());
}

#[test]
fn test_structural_failures_abort() {
    let config = ReportConfig::default();

    let unknown = restated_2024().with_value("ZZ", dec!(1));
    assert_eq!(
        assemble_report(&unknown, &published_2023(), &config).unwrap_err(),
        SectoralError::unknown_sector("ZZ")
    );

    let only_totals = Snapshot::new().with_value("_T", dec!(1));
    assert_eq!(
        assemble_report(&only_totals, &Snapshot::new(), &config).unwrap_err(),
        SectoralError::EmptyDataset
    );
}

#[test]
fn test_key_sector_growth_comparison() {
    let report = assemble_report(&restated_2024(), &published_2023(), &ReportConfig::default()).unwrap();
    let rows = growth_comparison(&report.sectors, &KEY_SECTORS);

    let codes: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["B", "G", "C", "F", "L", "K"]);
    assert_eq!(rows[0].sector, "Mining and Quarrying");
    assert_eq!(rows[5].growth, Some(dec!(5.71)));
}

#[test]
fn test_validated_report_json() {
    let config = ReportConfig::default();
    let result = generate_report(&published_2024(), &published_2023(), &config).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["validation"]["valid"], serde_json::json!(false));
    assert_eq!(json["report"]["sectors"].as_array().unwrap().len(), 17);
    assert_eq!(json["report"]["metadata"]["priceType"], serde_json::json!("Constant Prices"));
    assert_eq!(json["report"]["metadata"]["baseYear"], serde_json::json!(2018));
}

// =============================================================================
// ARITHMETIC LIMITS
// =============================================================================

fn power_of_ten(exp: u32) -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(exp), 0)
}

#[test]
fn test_share_beyond_decimal_range_is_fatal() {
    let current = Snapshot::new()
        .with_value("A", power_of_ten(28))
        .with_value("_T", Decimal::ONE);
    let config = ReportConfig::default();

    let err = generate_report(&current, &current, &config).unwrap_err();
    assert!(matches!(err, SectoralError::ArithmeticOverflow { .. }));
}

#[test]
fn test_tiny_prior_value_gives_undefined_growth() {
    let mut current = restated_2024();
    current.insert("T", power_of_ten(21));
    let total: Decimal = current.sectors().map(|(_, value)| value).sum();
    current.insert("_T", total);
    let mut prior = published_2023();
    prior.insert("T", dec!(0.0000001));

    let result = generate_report(&current, &prior, &ReportConfig::default()).unwrap();

    assert!(result.report.sector("T").unwrap().yoy_growth.is_none());
    let undefined: Vec<_> = result.validation.by_rule(ValidationRule::UndefinedGrowth).collect();
    assert_eq!(undefined.len(), 1);
    assert_eq!(undefined[0].sector.as_deref(), Some("T"));
}

#[test]
fn test_sector_sum_overflow_never_panics() {
    let half = Decimal::MAX / dec!(2) + Decimal::ONE;
    let config = ReportConfig::default().with_expected_sector_count(2);

    // Same category: the aggregate itself cannot be represented.
    let same = Snapshot::new()
        .with_value("A", half)
        .with_value("C", half)
        .with_value("_T", Decimal::MAX);
    let err = generate_report(&same, &same, &config).unwrap_err();
    assert!(matches!(err, SectoralError::ArithmeticOverflow { .. }));

    // Split across oil and non-oil: the report stands, validation rejects it.
    let split = Snapshot::new()
        .with_value("A", half)
        .with_value("B", half)
        .with_value("_T", Decimal::MAX);
    let result = generate_report(&split, &split, &config).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.validation.by_rule(ValidationRule::TotalSum).count(), 1);
}
