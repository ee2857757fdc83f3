//! Validate command implementation.
//!
//! Prints the validation verdict for a snapshot pair and fails when the
//! assembled report has errors.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use sectoral_analytics::{generate_report, ValidationIssue};

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::error::CliError;
use crate::output::{print_error, print_output, print_single, print_success, print_warning};

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// A validation finding for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct IssueRow {
    #[tabled(rename = "Rule")]
    pub rule: String,
    #[tabled(rename = "Severity")]
    pub severity: String,
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

impl From<&ValidationIssue> for IssueRow {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            rule: issue.rule.to_string(),
            severity: format!("{:?}", issue.severity).to_lowercase(),
            sector: issue.sector.clone().unwrap_or_default(),
            message: issue.message.clone(),
        }
    }
}

/// Execute the validate command.
pub fn execute(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let (current, prior, config) = args.input.load()?;
    let result = generate_report(&current, &prior, &config)?;
    let validation = &result.validation;

    match format {
        OutputFormat::Json => print_single(validation)?,
        OutputFormat::Csv | OutputFormat::Minimal => {
            let rows: Vec<IssueRow> = validation.issues().iter().map(IssueRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Table => {
            for error in validation.errors() {
                print_error(error);
            }
            for warning in validation.warnings() {
                print_warning(warning);
            }
            if validation.is_valid() {
                print_success(&format!(
                    "Report is valid ({} sectors, {} warning(s))",
                    result.report.insights.sector_count,
                    validation.warnings().len()
                ));
            }
        }
    }

    let mut failures = validation.errors().len();
    if args.strict {
        failures += validation.warnings().len();
    }
    if failures > 0 {
        return Err(CliError::ValidationFailed(failures).into());
    }

    Ok(())
}
