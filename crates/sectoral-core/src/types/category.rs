//! Sector category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Economic category of a sector.
///
/// Aggregates are split along this axis: the oil group holds exactly the
/// sectors classified [`SectorCategory::Oil`], the non-oil group everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectorCategory {
    /// Hydrocarbon extraction and related activity.
    Oil,
    /// All other activity.
    NonOil,
}

impl SectorCategory {
    /// Returns true for the oil category.
    #[must_use]
    pub fn is_oil(&self) -> bool {
        matches!(self, SectorCategory::Oil)
    }
}

impl fmt::Display for SectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectorCategory::Oil => "oil",
            SectorCategory::NonOil => "non-oil",
        };
        write!(f, "{name}")
    }
}
