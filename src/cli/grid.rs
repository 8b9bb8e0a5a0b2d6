//! Grid command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::report::render_grid;
use crate::sensitivity::{sensitivity_grid, SensitivityGrid};
use crate::valuation::ValuationInputs;
use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Constant annual cash flow
    #[arg(long, allow_hyphen_values = true)]
    pub fcf: Option<f64>,

    /// Projection years (1-10)
    #[arg(long)]
    pub years: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl GridArgs {
    pub fn grid(&self, config: &Config) -> anyhow::Result<SensitivityGrid> {
        config.validate()?;
        let assumptions = config.assumptions.to_assumptions();
        let base = ValuationInputs::new(
            self.fcf.unwrap_or(assumptions.free_cash_flow),
            assumptions.growth_rate,
            assumptions.discount_rate,
            assumptions.terminal_growth_rate,
            self.years.unwrap_or(assumptions.projection_years),
        )
        .context("Invalid grid inputs")?;

        Ok(sensitivity_grid(
            &base,
            &config.sensitivity.discount_rates_f64(),
            &config.sensitivity.growth_rates_f64(),
        ))
    }

    /// Grid rendered in the requested format
    pub fn render(&self, config: &Config) -> anyhow::Result<String> {
        let grid = self.grid(config)?;
        Ok(match self.format {
            OutputFormat::Table => render_grid(&grid),
            OutputFormat::Json => serde_json::to_string_pretty(&grid)? + "\n",
        })
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }
}
