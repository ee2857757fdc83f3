//! Concentration and growth insights over ranked sectors.

use crate::aggregation::SectorRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sectoral_core::rounding::round_display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-sector share at or above which dominance is medium.
pub const MEDIUM_DOMINANCE_THRESHOLD: Decimal = dec!(20);

/// Top-sector share at or above which dominance is high.
pub const HIGH_DOMINANCE_THRESHOLD: Decimal = dec!(30);

/// How much of the total the leading sector commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DominanceLabel {
    /// Below 20%.
    Low,
    /// 20% up to 30%.
    Medium,
    /// 30% and above.
    High,
}

impl DominanceLabel {
    /// Classifies a top-sector share given in percent.
    #[must_use]
    pub fn from_share(percentage: Decimal) -> Self {
        if percentage < MEDIUM_DOMINANCE_THRESHOLD {
            DominanceLabel::Low
        } else if percentage < HIGH_DOMINANCE_THRESHOLD {
            DominanceLabel::Medium
        } else {
            DominanceLabel::High
        }
    }
}

impl fmt::Display for DominanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DominanceLabel::Low => "low",
            DominanceLabel::Medium => "medium",
            DominanceLabel::High => "high",
        };
        write!(f, "{name}")
    }
}

/// The sector with the highest year-over-year growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestGrowingSector {
    /// Sector code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Growth in percent.
    pub growth: Decimal,
}

/// Derived insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Normalized inverse HHI in `[0, 1]`; higher is more diversified.
    pub diversification_index: Decimal,

    /// Dominance of the leading sector.
    pub dominance_label: DominanceLabel,

    /// `None` only when no sector has a defined growth rate.
    pub fastest_growing_sector: Option<FastestGrowingSector>,

    /// Number of sectors considered.
    pub sector_count: usize,
}

/// Herfindahl-Hirschman index over sector shares (fractions, not percent).
///
/// `None` when the squared shares leave the `Decimal` range, which only
/// happens when shares are far above 100% (a total that undercounts its sectors).
#[must_use]
pub fn herfindahl_index(sectors: &[SectorRecord]) -> Option<Decimal> {
    sectors.iter().try_fold(Decimal::ZERO, |hhi, s| {
        let share = s.percentage / Decimal::ONE_HUNDRED;
        share.checked_mul(share).and_then(|sq| hhi.checked_add(sq))
    })
}

/// Diversification index: `(1 - HHI) / (1 - 1/N)`, rounded and clamped to `[0, 1]`.
///
/// A single sector (or none) yields 0. Equal shares across N sectors yield 1.
/// Shares are the rounded published percentages, so the raw value can drift
/// marginally outside the unit interval before clamping. An HHI too large to
/// represent saturates the index at 0.
#[must_use]
pub fn diversification_index(sectors: &[SectorRecord]) -> Decimal {
    let n = sectors.len();
    if n < 2 {
        return Decimal::ZERO;
    }

    let min_hhi = Decimal::ONE / Decimal::from(n);
    let normalized = herfindahl_index(sectors)
        .and_then(|hhi| Decimal::ONE.checked_sub(hhi))
        .and_then(|spread| spread.checked_div(Decimal::ONE - min_hhi));

    normalized.map_or(Decimal::ZERO, |index| {
        round_display(index).clamp(Decimal::ZERO, Decimal::ONE)
    })
}

/// Highest-growth sector; the first in rank order wins ties.
///
/// Sectors with undefined growth are skipped.
#[must_use]
pub fn fastest_growing(sectors: &[SectorRecord]) -> Option<FastestGrowingSector> {
    let mut best: Option<(&SectorRecord, Decimal)> = None;
    for sector in sectors {
        let Some(growth) = sector.yoy_growth else {
            continue;
        };
        if best.map_or(true, |(_, top)| growth > top) {
            best = Some((sector, growth));
        }
    }

    best.map(|(sector, growth)| FastestGrowingSector {
        code: sector.code.clone(),
        name: sector.name.clone(),
        growth,
    })
}

/// Derives all insights from rank-ordered sector records.
#[must_use]
pub fn calculate_insights(sectors: &[SectorRecord]) -> Insights {
    let top_share = sectors.first().map_or(Decimal::ZERO, |s| s.percentage);

    Insights {
        diversification_index: diversification_index(sectors),
        dominance_label: DominanceLabel::from_share(top_share),
        fastest_growing_sector: fastest_growing(sectors),
        sector_count: sectors.len(),
    }
}
