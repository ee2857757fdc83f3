//! Report command implementation.
//!
//! Builds the full breakdown report for a snapshot pair.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sectoral_analytics::{
    generate_report, growth_comparison, GrowthComparison, SectorRecord, ValidatedReport,
    KEY_SECTORS,
};

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{
    format_growth, format_percent, print_error, print_header, print_output, print_single,
    print_table, print_warning, KeyValue,
};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also show the growth comparison for key sectors
    #[arg(long)]
    pub comparison: bool,
}

/// A sector row for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SectorRow {
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Sector")]
    pub name: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Prior")]
    pub value_prior: String,
    #[tabled(rename = "Share")]
    pub percentage: String,
    #[tabled(rename = "Growth")]
    pub growth: String,
}

impl From<&SectorRecord> for SectorRow {
    fn from(record: &SectorRecord) -> Self {
        Self {
            rank: record.rank,
            code: record.code.clone(),
            name: record.name.clone(),
            category: record.category.to_string(),
            value: format!("{:.2}", record.value),
            value_prior: format!("{:.2}", record.value_prior),
            percentage: format_percent(record.percentage),
            growth: format_growth(record.yoy_growth),
        }
    }
}

/// A growth comparison row for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Prior")]
    pub value_prior: String,
    #[tabled(rename = "Current")]
    pub value: String,
    #[tabled(rename = "Growth")]
    pub growth: String,
}

impl From<&GrowthComparison> for ComparisonRow {
    fn from(row: &GrowthComparison) -> Self {
        Self {
            sector: row.sector.clone(),
            value_prior: format!("{:.2}", row.value_prior),
            value: format!("{:.2}", row.value),
            growth: format_growth(row.growth),
        }
    }
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat) -> Result<()> {
    let (current, prior, config) = args.input.load()?;
    let result = generate_report(&current, &prior, &config)?;

    match format {
        OutputFormat::Json => {
            if args.comparison {
                print_single(&JsonReport {
                    report: &result,
                    comparison: growth_comparison(&result.report.sectors, &KEY_SECTORS),
                })?;
            } else {
                print_single(&result)?;
            }
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            let rows: Vec<SectorRow> = result.report.sectors.iter().map(SectorRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Table => print_report_tables(&result, args.comparison)?,
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ValidatedReport,
    comparison: Vec<GrowthComparison>,
}

fn print_report_tables(result: &ValidatedReport, comparison: bool) -> Result<()> {
    let report = &result.report;
    let meta = &report.metadata;

    print_header(&meta.title);
    let mut summary = vec![
        KeyValue::new("Period", format!("{} vs {}", meta.year, meta.comparison_year)),
        KeyValue::new("Unit", &meta.unit),
        KeyValue::new("Price Basis", format!("{} (base {})", meta.price_type, meta.base_year)),
        KeyValue::new("Source", &meta.data_source),
        KeyValue::from_decimal("Total", meta.total_value, 2),
    ];
    if let Some(non_oil) = meta.non_oil_total {
        summary.push(KeyValue::from_decimal("Reported Non-Oil Total", non_oil, 2));
    }
    print_table(&summary)?;

    print_header("Sectors");
    let rows: Vec<SectorRow> = report.sectors.iter().map(SectorRow::from).collect();
    print_table(&rows)?;

    print_header("Aggregates");
    let agg = &report.aggregates;
    let mut aggregates = vec![
        KeyValue::from_percent("Oil Share", agg.oil.percentage),
        KeyValue::new("Oil Growth", format_growth(agg.oil.yoy_growth)),
        KeyValue::from_percent("Non-Oil Share", agg.non_oil.percentage),
        KeyValue::new("Non-Oil Growth", format_growth(agg.non_oil.yoy_growth)),
    ];
    for (i, top) in agg.top_sectors.iter().enumerate() {
        aggregates.push(KeyValue::new(
            format!("#{} {}", i + 1, top.name),
            format_percent(top.percentage),
        ));
    }
    print_table(&aggregates)?;

    print_header("Insights");
    let insights = &report.insights;
    let mut rows = vec![
        KeyValue::from_decimal("Diversification Index", insights.diversification_index, 2),
        KeyValue::new("Dominance", insights.dominance_label.to_string()),
        KeyValue::new("Sector Count", insights.sector_count.to_string()),
    ];
    if let Some(fastest) = &insights.fastest_growing_sector {
        rows.push(KeyValue::new(
            "Fastest Growing",
            format!("{} ({})", fastest.name, format_growth(Some(fastest.growth))),
        ));
    }
    print_table(&rows)?;

    if comparison {
        print_header("Key Sector Growth");
        let rows: Vec<ComparisonRow> = growth_comparison(&report.sectors, &KEY_SECTORS)
            .iter()
            .map(ComparisonRow::from)
            .collect();
        print_table(&rows)?;
    }

    for error in result.validation.errors() {
        print_error(error);
    }
    for warning in result.validation.warnings() {
        print_warning(warning);
    }

    Ok(())
}
