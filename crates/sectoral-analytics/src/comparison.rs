//! Side-by-side growth view for a chosen set of sectors.

use crate::aggregation::SectorRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sectors highlighted in the default growth comparison.
pub const KEY_SECTORS: [&str; 6] = ["B", "C", "F", "G", "L", "K"];

/// Number of leading words kept in a shortened sector label.
const SHORT_LABEL_WORDS: usize = 3;

/// One row of a growth comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthComparison {
    /// Sector code.
    pub code: String,
    /// Shortened display name.
    pub sector: String,
    /// Comparison-period value.
    pub value_prior: Decimal,
    /// Current-period value.
    pub value: Decimal,
    /// Growth in percent, `None` if undefined.
    pub growth: Option<Decimal>,
}

/// First three words of a display name.
#[must_use]
pub fn short_label(name: &str) -> String {
    name.split_whitespace()
        .take(SHORT_LABEL_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Growth rows for the sectors in `codes`, in rank order.
///
/// Codes absent from `sectors` are ignored.
#[must_use]
pub fn growth_comparison(sectors: &[SectorRecord], codes: &[&str]) -> Vec<GrowthComparison> {
    sectors
        .iter()
        .filter(|s| codes.contains(&s.code.as_str()))
        .map(|s| GrowthComparison {
            code: s.code.clone(),
            sector: short_label(&s.name),
            value_prior: s.value_prior,
            value: s.value,
            growth: s.yoy_growth,
        })
        .collect()
}
