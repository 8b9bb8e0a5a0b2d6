//! CLI interface for dcf-valuer
//!
//! Provides subcommands for:
//! - `value`: Full valuation report
//! - `grid`: Sensitivity table only
//! - `config`: Show effective configuration

mod grid;
mod value;

pub use grid::GridArgs;
pub use value::ValueArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dcf-valuer")]
#[command(about = "Discounted cash flow valuation with sensitivity analysis")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a company and compare with its market price
    Value(ValueArgs),
    /// Print the growth x discount rate sensitivity table
    Grid(GridArgs),
    /// Show the effective configuration
    Config,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
