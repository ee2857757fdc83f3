//! CLI command implementations.

pub mod report;
pub mod sectors;
pub mod validate;

pub use report::ReportArgs;
pub use sectors::SectorsArgs;
pub use validate::ValidateArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use sectoral_analytics::ReportConfig;
use sectoral_core::types::Snapshot;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Input files shared by every command that builds a report.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Current-period snapshot (JSON object of sector code to value)
    #[arg(short, long)]
    pub current: PathBuf,

    /// Comparison-period snapshot (JSON object of sector code to value)
    #[arg(short, long)]
    pub prior: PathBuf,

    /// Report configuration (TOML). Defaults apply when omitted.
    #[arg(long, env = "SECTORAL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Loads both snapshots and the report configuration.
    pub fn load(&self) -> CliResult<(Snapshot, Snapshot, ReportConfig)> {
        let current = load_snapshot(&self.current)?;
        let prior = load_snapshot(&self.prior)?;
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => ReportConfig::default(),
        };
        Ok((current, prior, config))
    }
}

/// Reads a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> CliResult<Snapshot> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot =
        serde_json::from_str(&content).map_err(|e| CliError::InvalidSnapshot {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    debug!(path = %path.display(), codes = snapshot.sector_count(), "loaded snapshot");
    Ok(snapshot)
}

/// Reads a report configuration from a TOML file.
pub fn load_config(path: &Path) -> CliResult<ReportConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ReportConfig = toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_load_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": 100, "B": 300.5, "_T": 400.5}}"#).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.get("B"), Some(dec!(300.5)));
        assert_eq!(snapshot.total(), Some(dec!(400.5)));
    }

    #[test]
    fn test_load_snapshot_rejects_non_numeric() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": "lots"}}"#).unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_load_config_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "expected_sector_count = 2\ntop_n = 1").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.expected_sector_count, 2);
        assert_eq!(config.top_n, 1);
        assert_eq!(config.year, 2024);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_n = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
