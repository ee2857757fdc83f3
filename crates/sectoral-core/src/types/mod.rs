//! Domain types shared across the engine.
//!
//! - [`SectorCategory`]: Oil / non-oil classification of a sector
//! - [`Snapshot`]: Sector values for one period

mod category;
mod snapshot;

pub use category::SectorCategory;
pub use snapshot::Snapshot;
