//! Sectors command implementation.
//!
//! Lists the sector registry.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sectoral_core::registry::{SectorDefinition, SectorRegistry};
use sectoral_core::types::SectorCategory;

use crate::cli::OutputFormat;
use crate::output::print_output;

/// Arguments for the sectors command.
#[derive(Args, Debug)]
pub struct SectorsArgs {
    /// Only list oil sectors
    #[arg(long, conflicts_with = "non_oil")]
    pub oil: bool,

    /// Only list non-oil sectors
    #[arg(long)]
    pub non_oil: bool,
}

/// A registry entry for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SectorDefinitionRow {
    #[tabled(rename = "Code")]
    pub code: &'static str,
    #[tabled(rename = "Sector")]
    pub name: &'static str,
    #[tabled(rename = "Category")]
    pub category: SectorCategory,
}

impl From<&SectorDefinition> for SectorDefinitionRow {
    fn from(def: &SectorDefinition) -> Self {
        Self {
            code: def.code,
            name: def.name,
            category: def.category,
        }
    }
}

/// Execute the sectors command.
pub fn execute(args: SectorsArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<SectorDefinitionRow> = SectorRegistry::isic()
        .sectors()
        .iter()
        .filter(|def| {
            if args.oil {
                def.category.is_oil()
            } else if args.non_oil {
                !def.category.is_oil()
            } else {
                true
            }
        })
        .map(SectorDefinitionRow::from)
        .collect();

    print_output(&rows, format)
}
