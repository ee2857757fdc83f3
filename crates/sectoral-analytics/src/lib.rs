//! # Sectoral Analytics
//!
//! Sector-level GDP breakdown, diversification insights, and consistency
//! validation.
//!
//! Two period snapshots go in; a [`Report`] comes out:
//!
//! 1. **Metrics**: share of total and year-over-year growth per sector
//! 2. **Aggregation**: ranking, oil / non-oil sums, leading sectors
//! 3. **Insights**: diversification index, dominance label, fastest grower
//! 4. **Validation**: errors and warnings about the assembled report
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no caching, no shared mutable state
//! - **Exact arithmetic**: `Decimal` throughout, two-decimal half-away-from-zero rounding
//! - **Validation is data**: a report with inconsistent inputs is still returned,
//!   alongside the findings that describe it
//!
//! ## Quick Start
//!
//! ```rust
//! use sectoral_analytics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let current = Snapshot::new()
//!     .with_value("A", dec!(100))
//!     .with_value("B", dec!(300))
//!     .with_value("_T", dec!(400));
//! let prior = Snapshot::new()
//!     .with_value("A", dec!(80))
//!     .with_value("B", dec!(300));
//!
//! let config = ReportConfig::default().with_expected_sector_count(2);
//! let result = generate_report(&current, &prior, &config).unwrap();
//!
//! assert!(result.is_valid());
//! assert_eq!(result.report.sector("A").unwrap().yoy_growth, Some(dec!(25)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod comparison;
pub mod config;
pub mod insights;
pub mod metrics;
pub mod report;
pub mod validation;

pub use aggregation::{build_sector_breakdown, AggregateRecord, SectorBreakdown, SectorRecord, TopSector};
pub use comparison::{growth_comparison, GrowthComparison, KEY_SECTORS};
pub use config::ReportConfig;
pub use insights::{calculate_insights, DominanceLabel, FastestGrowingSector, Insights};
pub use report::{
    assemble_report, assemble_report_at, generate_report, Aggregates, Report, ReportMetadata,
    ValidatedReport,
};
pub use validation::{
    validate_report, Severity, ValidationIssue, ValidationReport, ValidationRule,
    ValidationSummary,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use sectoral_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ReportConfig;
    pub use crate::report::{assemble_report, generate_report, Report, ValidatedReport};
    pub use crate::validation::{ValidationReport, ValidationRule};

    pub use crate::aggregation::{AggregateRecord, SectorRecord};
    pub use crate::insights::{DominanceLabel, Insights};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use sectoral_core::prelude::*;
}
