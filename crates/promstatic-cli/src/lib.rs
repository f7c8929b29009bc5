//! promstatic CLI library

pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};

use clap::{Parser, Subcommand};

/// promstatic - static Prometheus configuration from monitoring manifests
#[derive(Parser, Debug)]
#[command(name = "promstatic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert manifests into a scrape configuration and service definition
    Convert(commands::convert::ConvertArgs),
}

impl Cli {
    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => commands::convert::run(args),
        }
    }
}
