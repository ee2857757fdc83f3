//! Per-sector records, ranking, and oil / non-oil aggregates.

use crate::metrics::{checked_sum, percentage, yoy_growth};
use rust_decimal::Decimal;
use sectoral_core::registry::{SectorRegistry, TOTAL_CODE};
use sectoral_core::types::{SectorCategory, Snapshot};
use sectoral_core::{SectoralError, SectoralResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Derived figures for one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorRecord {
    /// 1-based position by current value, descending.
    pub rank: usize,

    /// Sector code.
    pub code: String,

    /// Canonical display name.
    pub name: String,

    /// Oil / non-oil category.
    pub category: SectorCategory,

    /// Current-period value.
    pub value: Decimal,

    /// Comparison-period value.
    pub value_prior: Decimal,

    /// Share of the current total, in percent.
    pub percentage: Decimal,

    /// Year-over-year growth in percent; `None` when the prior value is zero.
    pub yoy_growth: Option<Decimal>,
}

/// Summed figures for a group of sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRecord {
    /// Summed current-period value.
    pub value: Decimal,

    /// Share of the current total, in percent.
    pub percentage: Decimal,

    /// Growth against the summed prior values; `None` when that sum is zero.
    pub yoy_growth: Option<Decimal>,
}

/// Short entry in the leading-sectors list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSector {
    /// Sector code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Share of the current total, in percent.
    pub percentage: Decimal,
}

impl From<&SectorRecord> for TopSector {
    fn from(record: &SectorRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            percentage: record.percentage,
        }
    }
}

/// Output of the aggregation stage.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorBreakdown {
    /// Sector records sorted by rank.
    pub sectors: Vec<SectorRecord>,

    /// Oil aggregate.
    pub oil: AggregateRecord,

    /// Non-oil aggregate.
    pub non_oil: AggregateRecord,

    /// Leading sectors by value.
    pub top_sectors: Vec<TopSector>,

    /// Reserved total of the current snapshot.
    pub total: Decimal,

    /// Reserved non-oil total of the current snapshot, if present.
    pub non_oil_total: Option<Decimal>,
}

/// Builds ranked sector records and oil / non-oil aggregates.
///
/// Reserved aggregate codes are skipped. Records are sorted by current value
/// descending with ties broken by code, so the ranking is a total order.
///
/// # Errors
///
/// - `UnknownSectorCode` if either snapshot has a code the registry lacks
/// - `EmptyDataset` if the current snapshot has no sectors
/// - `MissingTotal` if the current snapshot has no `_T` value
/// - `SnapshotMismatch` if the snapshots cover different sectors
/// - `DivisionByZero` if the current total is zero
/// - `ArithmeticOverflow` if a share or an aggregate sum leaves the `Decimal` range
pub fn build_sector_breakdown(
    registry: &SectorRegistry,
    current: &Snapshot,
    prior: &Snapshot,
    top_n: usize,
) -> SectoralResult<SectorBreakdown> {
    for (code, _) in current.sectors().chain(prior.sectors()) {
        registry.definition(code)?;
    }

    if current.sector_count() == 0 {
        return Err(SectoralError::EmptyDataset);
    }

    let total = current
        .total()
        .ok_or_else(|| SectoralError::missing_total(TOTAL_CODE))?;

    if let Some((code, _)) = prior.sectors().find(|(code, _)| !current.contains(code)) {
        return Err(SectoralError::snapshot_mismatch(code, "current"));
    }

    let mut sectors = Vec::with_capacity(current.sector_count());
    for (code, value) in current.sectors() {
        let definition = registry.definition(code)?;
        let value_prior = prior
            .get(code)
            .ok_or_else(|| SectoralError::snapshot_mismatch(code, "prior"))?;

        sectors.push(SectorRecord {
            rank: 0,
            code: code.to_string(),
            name: definition.name.to_string(),
            category: definition.category,
            value,
            value_prior,
            percentage: percentage(value, total)?,
            yoy_growth: growth_or_undefined(code, value, value_prior)?,
        });
    }

    rank_sectors(&mut sectors);

    let oil = aggregate(&sectors, total, |s| s.category.is_oil(), "oil")?;
    let non_oil = aggregate(&sectors, total, |s| !s.category.is_oil(), "non-oil")?;
    let top_sectors = sectors.iter().take(top_n).map(TopSector::from).collect();

    debug!(
        sectors = sectors.len(),
        %total,
        oil_value = %oil.value,
        non_oil_value = %non_oil.value,
        "Built sector breakdown"
    );

    Ok(SectorBreakdown {
        sectors,
        oil,
        non_oil,
        top_sectors,
        total,
        non_oil_total: current.non_oil_total(),
    })
}

/// Sorts by value descending, then code ascending, and assigns ranks 1..N.
pub fn rank_sectors(sectors: &mut [SectorRecord]) {
    sectors.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.code.cmp(&b.code)));
    for (i, sector) in sectors.iter_mut().enumerate() {
        sector.rank = i + 1;
    }
}

/// Growth rate with a zero prior value, or a rate outside the `Decimal`
/// range, mapped to `None`.
fn growth_or_undefined(
    label: &str,
    current: Decimal,
    prior: Decimal,
) -> SectoralResult<Option<Decimal>> {
    match yoy_growth(current, prior) {
        Ok(growth) => Ok(Some(growth)),
        Err(e) if e.is_undefined_ratio() => {
            warn!(sector = label, error = %e, "Growth is undefined");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn aggregate(
    sectors: &[SectorRecord],
    total: Decimal,
    include: impl Fn(&SectorRecord) -> bool,
    label: &str,
) -> SectoralResult<AggregateRecord> {
    let members: Vec<&SectorRecord> = sectors.iter().filter(|s| include(*s)).collect();
    let operation = format!("{label} aggregate");
    let value = checked_sum(members.iter().map(|s| s.value), &operation)?;
    let value_prior = checked_sum(members.iter().map(|s| s.value_prior), &operation)?;

    Ok(AggregateRecord {
        value,
        percentage: percentage(value, total)?,
        yoy_growth: growth_or_undefined(label, value, value_prior)?,
    })
}
