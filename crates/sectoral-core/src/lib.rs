//! # Sectoral Core
//!
//! Core types for the Sectoral GDP breakdown engine.
//!
//! - **Registry**: the static sector code → name / category table
//! - **Types**: [`Snapshot`](types::Snapshot) and [`SectorCategory`](types::SectorCategory)
//! - **Rounding**: the single two-decimal, half-away-from-zero rule used for
//!   every published figure
//! - **Errors**: structural failures that prevent a report from being built
//!
//! ## Example
//!
//! ```rust
//! use sectoral_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let current = Snapshot::new()
//!     .with_value("B", dec!(405678.90))
//!     .with_value("_T", dec!(1776490.637));
//!
//! let registry = SectorRegistry::isic();
//! for (code, _value) in current.sectors() {
//!     assert_eq!(registry.category_of(code).unwrap(), SectorCategory::Oil);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod registry;
pub mod rounding;
pub mod types;

pub use error::{SectoralError, SectoralResult};
pub use registry::{SectorDefinition, SectorRegistry};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SectoralError, SectoralResult};
    pub use crate::registry::{
        is_reserved_code, SectorDefinition, SectorRegistry, NON_OIL_TOTAL_CODE, TOTAL_CODE,
    };
    pub use crate::rounding::round_display;
    pub use crate::types::{SectorCategory, Snapshot};
}
