use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, debug, info};
use std::path::Path;
use std::process::ExitCode;

use schemacheck::cli::{Cli, OutputFormat};
use schemacheck::config::Config;
use schemacheck::{ValidationReport, load_collections, validate};

const EXIT_INVALID: u8 = 1;
const EXIT_LOAD_FAILED: u8 = 2;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => LevelFilter::Trace,
            "DEBUG" => LevelFilter::Debug,
            "INFO" => LevelFilter::Info,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                LevelFilter::Warn
            }
        },
        None => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let input = input_path(&cli, &config);
    info!("schemacheck starting: {}", input.display());

    let collections = match load_collections(input) {
        Ok(collections) => collections,
        Err(e) => {
            debug!("main: load failed: {:?}", e);
            if e.is_malformed() {
                eprintln!(
                    "{} Error loading collections: {} is not a well-formed collection document",
                    "✗".red(),
                    e.path().display()
                );
            } else {
                eprintln!(
                    "{} Error loading collections: could not read {}",
                    "✗".red(),
                    e.path().display()
                );
            }
            eprintln!("  {}", e);
            return Ok(ExitCode::from(EXIT_LOAD_FAILED));
        }
    };

    let report = validate(&collections);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Text => {
            print_text(&cli, &config, &report);
        }
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID))
    }
}

fn input_path<'a>(cli: &'a Cli, config: &'a Config) -> &'a Path {
    cli.path.as_deref().unwrap_or(config.input_path.as_path())
}

fn print_text(cli: &Cli, config: &Config, report: &ValidationReport) {
    if !cli.quiet {
        println!("{}", "=== Collection Schema Validation ===".bold());
        println!("Input: {}\n", input_path(cli, config).display().to_string().cyan());
    }

    print!("{}", report.render_text());

    if report.is_success() && config.show_next_steps && !cli.quiet {
        println!("\nNext steps:");
        println!("1. Import {} into the backend", input_path(cli, config).display());
        println!("2. Migrate the notifications collection data to the receiver/sender relations");
    }
}
