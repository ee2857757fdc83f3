//! Static sector registry.
//!
//! Maps every sector code to its canonical display name and category. The
//! standard table follows the ISIC-based national accounts breakdown with 17
//! sectors, where mining and quarrying (`B`) is the only oil sector.

use crate::error::{SectoralError, SectoralResult};
use crate::types::SectorCategory;
use serde::Serialize;

/// Reserved code carrying total GDP.
pub const TOTAL_CODE: &str = "_T";

/// Reserved code carrying total non-oil GDP.
pub const NON_OIL_TOTAL_CODE: &str = "_TNO";

/// Reserved code carrying the non-financial corporations subtotal.
pub const NON_FINANCIAL_CORPORATIONS_CODE: &str = "NFC";

/// Codes that denote pre-summed aggregates rather than sectors.
pub const RESERVED_CODES: [&str; 3] = [TOTAL_CODE, NON_OIL_TOTAL_CODE, NON_FINANCIAL_CORPORATIONS_CODE];

/// Returns true if `code` is one of the [`RESERVED_CODES`].
#[must_use]
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// A single registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorDefinition {
    /// Classification code.
    pub code: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    /// Oil / non-oil category.
    pub category: SectorCategory,
}

impl SectorDefinition {
    const fn non_oil(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            category: SectorCategory::NonOil,
        }
    }

    const fn oil(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            category: SectorCategory::Oil,
        }
    }
}

static ISIC_SECTORS: [SectorDefinition; 17] = [
    SectorDefinition::non_oil("A", "Agriculture, Forestry and Fishing"),
    SectorDefinition::oil("B", "Mining and Quarrying (includes Oil & Gas)"),
    SectorDefinition::non_oil("C", "Manufacturing"),
    SectorDefinition::non_oil("DE", "Electricity, Gas, Water Supply; Waste Management"),
    SectorDefinition::non_oil("F", "Construction"),
    SectorDefinition::non_oil("G", "Wholesale and Retail Trade"),
    SectorDefinition::non_oil("H", "Transportation and Storage"),
    SectorDefinition::non_oil("I", "Accommodation and Food Service Activities"),
    SectorDefinition::non_oil("J", "Information and Communication"),
    SectorDefinition::non_oil("K", "Financial and Insurance Activities"),
    SectorDefinition::non_oil("L", "Real Estate Activities"),
    SectorDefinition::non_oil("MN", "Professional, Scientific and Technical Activities"),
    SectorDefinition::non_oil("O", "Public Administration and Defence"),
    SectorDefinition::non_oil("P", "Education"),
    SectorDefinition::non_oil("Q", "Human Health and Social Work Activities"),
    SectorDefinition::non_oil("RS", "Arts, Recreation and Other Service Activities"),
    SectorDefinition::non_oil("T", "Activities of Households as Employers"),
];

static RESERVED_NAMES: [(&str, &str); 3] = [
    (TOTAL_CODE, "Total GDP"),
    (NON_OIL_TOTAL_CODE, "Total Non-Oil GDP"),
    (NON_FINANCIAL_CORPORATIONS_CODE, "Non-Financial Corporations"),
];

static ISIC: SectorRegistry = SectorRegistry::new(&ISIC_SECTORS);

/// Immutable lookup from sector code to name and category.
///
/// The registry only borrows a `'static` table, so it is `Copy` and can be
/// shared across threads freely.
///
/// Only sectors vary between registries. The reserved aggregate codes
/// ([`RESERVED_CODES`]) are the same for every registry: snapshots always carry
/// their total under [`TOTAL_CODE`] and their non-oil total under
/// [`NON_OIL_TOTAL_CODE`].
///
/// # Examples
///
/// ```
/// use sectoral_core::registry::SectorRegistry;
/// use sectoral_core::types::SectorCategory;
///
/// let registry = SectorRegistry::isic();
/// assert_eq!(registry.name_of("C").unwrap(), "Manufacturing");
/// assert_eq!(registry.category_of("B").unwrap(), SectorCategory::Oil);
/// assert!(registry.name_of("ZZ").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SectorRegistry {
    sectors: &'static [SectorDefinition],
}

impl SectorRegistry {
    /// Creates a registry over a caller-supplied sector table.
    ///
    /// Sector codes must not collide with [`RESERVED_CODES`]; such entries are
    /// never reached because snapshots treat those codes as aggregates.
    #[must_use]
    pub const fn new(sectors: &'static [SectorDefinition]) -> Self {
        Self { sectors }
    }

    /// The standard 17-sector ISIC registry.
    #[must_use]
    pub fn isic() -> &'static SectorRegistry {
        &ISIC
    }

    /// Looks up a sector definition. Reserved aggregate codes are not sectors.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'static SectorDefinition> {
        self.sectors.iter().find(|s| s.code == code)
    }

    /// Looks up a sector definition, failing on unknown codes.
    pub fn definition(&self, code: &str) -> SectoralResult<&'static SectorDefinition> {
        self.get(code)
            .ok_or_else(|| SectoralError::unknown_sector(code))
    }

    /// Display name for a sector or reserved aggregate code.
    pub fn name_of(&self, code: &str) -> SectoralResult<&'static str> {
        if let Some(def) = self.get(code) {
            return Ok(def.name);
        }
        RESERVED_NAMES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
            .ok_or_else(|| SectoralError::unknown_sector(code))
    }

    /// Category of a sector code.
    pub fn category_of(&self, code: &str) -> SectoralResult<SectorCategory> {
        self.definition(code).map(|def| def.category)
    }

    /// Returns true if `code` is a reserved aggregate code.
    #[must_use]
    pub fn is_reserved(&self, code: &str) -> bool {
        is_reserved_code(code)
    }

    /// All sector definitions in registry order.
    #[must_use]
    pub fn sectors(&self) -> &'static [SectorDefinition] {
        self.sectors
    }

    /// Codes of all sectors in registry order.
    pub fn sector_codes(&self) -> impl Iterator<Item = &'static str> {
        self.sectors.iter().map(|s| s.code)
    }

    /// Number of sectors (reserved aggregates excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Returns true if the registry holds no sectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

impl Default for SectorRegistry {
    fn default() -> Self {
        *Self::isic()
    }
}
