//! CLI for validating data source URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dsurl_core::{config, logging};
use dsurl_core::{DialectRegistry, UrlValidator};
use std::path::PathBuf;

use commands::{run_check, run_dialects, run_validate};

/// Top-level CLI for dsurl.
#[derive(Debug, Parser)]
#[command(name = "dsurl")]
#[command(about = "dsurl: validate and normalize data source URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/dsurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate one URL for a data source type and print its normalized form.
    Validate {
        /// Data source type (e.g. postgres, mssql); matched ignoring case.
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// URL or connection string to validate.
        url: String,
        /// Print the structured URL as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate every data source listed in the config file.
    Check,

    /// List data source types with a dedicated connection-string dialect.
    Dialects,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };

        let destination = logging::init_logging(cfg.log_filter.as_deref())?;
        tracing::debug!(?destination, "loaded config: {:?}", cfg);

        let validator = UrlValidator::new(DialectRegistry::default());

        match cli.command {
            CliCommand::Validate {
                type_name,
                url,
                json,
            } => run_validate(&validator, &type_name, &url, json)?,
            CliCommand::Check => run_check(&validator, &cfg)?,
            CliCommand::Dialects => run_dialects(validator.registry()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
