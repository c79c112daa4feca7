//! Output formatting module.
//!
//! Provides formatters for plain text and JSON rendering of release reports.

mod json_format;
mod plain;

pub use json_format::print_json;
pub use plain::{print_error, print_plain, print_success, print_warning};

use crate::release::ReleaseReport;
use std::io;

/// Output format for the release report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Plain,
    /// JSON structured output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Format and print a release report according to the specified format.
pub fn print_report(report: &ReleaseReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_plain(report),
        OutputFormat::Json => json_format::print_json(report),
    }
}
