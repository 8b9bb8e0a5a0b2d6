//! Value command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::equity::CashFlowBasis;
use crate::report::{render_json, render_table, GridSpec, ValuationReport};
use crate::snapshot::FinancialSnapshot;
use crate::valuation::DcfModel;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// JSON file with a financial snapshot
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Current free cash flow (overrides the snapshot)
    #[arg(long, allow_hyphen_values = true)]
    pub fcf: Option<f64>,

    /// Annual growth rate, as a decimal fraction
    #[arg(long, allow_hyphen_values = true)]
    pub growth: Option<Decimal>,

    /// Discount rate (cost of equity or WACC)
    #[arg(long)]
    pub discount: Option<Decimal>,

    /// Terminal growth rate
    #[arg(long, allow_hyphen_values = true)]
    pub terminal_growth: Option<Decimal>,

    /// Projection years (1-10)
    #[arg(long)]
    pub years: Option<u32>,

    /// Shares outstanding (overrides the snapshot)
    #[arg(long)]
    pub shares: Option<i64>,

    /// Current market price per share (overrides the snapshot)
    #[arg(long)]
    pub price: Option<f64>,

    /// Total debt (overrides the snapshot)
    #[arg(long)]
    pub debt: Option<f64>,

    /// Margin of safety for the verdict
    #[arg(long)]
    pub margin: Option<Decimal>,

    /// Cash flow basis
    #[arg(long, value_enum)]
    pub basis: Option<CashFlowBasis>,

    /// Reporting currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// Skip the sensitivity table
    #[arg(long)]
    pub no_grid: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ValueArgs {
    /// Apply command-line overrides on top of the configured assumptions
    pub fn apply_overrides(&self, config: &Config) -> Config {
        let mut config = config.clone();
        let assumptions = &mut config.assumptions;
        if let Some(growth) = self.growth {
            assumptions.growth_rate = growth;
        }
        if let Some(discount) = self.discount {
            assumptions.discount_rate = discount;
        }
        if let Some(terminal) = self.terminal_growth {
            assumptions.terminal_growth_rate = terminal;
        }
        if let Some(years) = self.years {
            assumptions.projection_years = years;
        }
        if let Some(margin) = self.margin {
            assumptions.margin_of_safety = margin;
        }
        if let Some(basis) = self.basis {
            assumptions.basis = basis;
        }
        config
    }

    /// Load the snapshot, if any, and apply command-line overrides
    pub fn load_snapshot(&self) -> anyhow::Result<FinancialSnapshot> {
        let mut snapshot = match &self.snapshot {
            Some(path) => FinancialSnapshot::load(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
            None => FinancialSnapshot::default(),
        };

        if self.fcf.is_some() {
            snapshot.free_cash_flow = self.fcf;
        }
        if self.shares.is_some() {
            snapshot.shares_outstanding = self.shares;
        }
        if self.price.is_some() {
            snapshot.current_market_price = self.price;
        }
        if self.debt.is_some() {
            snapshot.total_debt = self.debt;
        }
        if let Some(currency) = &self.currency {
            snapshot.currency = currency.to_ascii_uppercase();
        }

        Ok(snapshot)
    }

    /// Build the report without printing it
    pub fn report(&self, config: &Config) -> anyhow::Result<ValuationReport> {
        let config = self.apply_overrides(config);
        config.validate()?;

        let snapshot = self.load_snapshot()?;
        let resolved = snapshot
            .resolve(&config.assumptions.to_assumptions())
            .context("Invalid valuation inputs")?;

        let discount_rates = config.sensitivity.discount_rates_f64();
        let growth_rates = config.sensitivity.growth_rates_f64();
        let grid = (!self.no_grid).then_some(GridSpec {
            discount_rates: &discount_rates,
            growth_rates: &growth_rates,
        });

        Ok(ValuationReport::build(&resolved, &DcfModel::new(), grid))
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let report = self.report(config)?;
        match self.format {
            OutputFormat::Table => print!("{}", render_table(&report)),
            OutputFormat::Json => println!("{}", render_json(&report)?),
        }
        Ok(())
    }
}
