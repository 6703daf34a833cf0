use std::str::FromStr;
use colored::*;
use serde_json::json;

use crate::error::ProvisionError;
use crate::models::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::provision_error!(InvalidInput, "unknown output format '{}'", other)),
        }
    }
}

pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => match serde_json::to_string(outcome) {
            Ok(document) => document,
            Err(e) => render_failure(&e.into(), format),
        },
        OutputFormat::Text => {
            let marker = if outcome.changed {
                "changed".yellow().bold()
            } else {
                "ok".green().bold()
            };
            format!("{}: {}", marker, outcome.message)
        }
    }
}

pub fn render_failure(error: &ProvisionError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json!({
            "failed": true,
            "message": error.to_string(),
        })
        .to_string(),
        OutputFormat::Text => format!("{}: {}", "failed".red().bold(), error),
    }
}

pub fn print_outcome(outcome: &Outcome, format: OutputFormat) {
    println!("{}", render_outcome(outcome, format));
}

/// Failures go to stdout in JSON mode so the caller reads one document.
pub fn print_failure(error: &ProvisionError, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", render_failure(error, format)),
        OutputFormat::Text => eprintln!("{}", render_failure(error, format)),
    }
}
