//! CLI argument parsing for schemacheck

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sc")]
#[command(author, version, about = "Validate collection schema exports", long_about = None)]
pub struct Cli {
    /// Collection document to validate (default: pocketbase_collections.json)
    pub path: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print the results section
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the validation report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
