//! Configuration types for dcf-valuer

use crate::equity::CashFlowBasis;
use crate::snapshot::Assumptions;
use crate::telemetry::LogFormat;
use crate::valuation::MAX_PROJECTION_YEARS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Default valuation assumptions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssumptionsConfig {
    /// Base free cash flow used when none is supplied
    #[serde(default = "default_free_cash_flow")]
    pub free_cash_flow: Decimal,

    /// Annual growth over the projection horizon
    #[serde(default = "default_growth_rate")]
    pub growth_rate: Decimal,

    /// Cost of equity or WACC
    #[serde(default = "default_discount_rate")]
    pub discount_rate: Decimal,

    /// Perpetual growth beyond the horizon
    #[serde(default = "default_terminal_growth_rate")]
    pub terminal_growth_rate: Decimal,

    #[serde(default = "default_projection_years")]
    pub projection_years: u32,

    /// Required gap between implied and market price
    #[serde(default = "default_margin_of_safety")]
    pub margin_of_safety: Decimal,

    #[serde(default)]
    pub basis: CashFlowBasis,
}

fn default_free_cash_flow() -> Decimal {
    Decimal::new(100, 0)
}
fn default_growth_rate() -> Decimal {
    Decimal::new(5, 2) // 5%
}
fn default_discount_rate() -> Decimal {
    Decimal::new(10, 2) // 10%
}
fn default_terminal_growth_rate() -> Decimal {
    Decimal::new(2, 2) // 2%
}
fn default_projection_years() -> u32 {
    5
}
fn default_margin_of_safety() -> Decimal {
    Decimal::new(15, 2) // 15%
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            free_cash_flow: default_free_cash_flow(),
            growth_rate: default_growth_rate(),
            discount_rate: default_discount_rate(),
            terminal_growth_rate: default_terminal_growth_rate(),
            projection_years: default_projection_years(),
            margin_of_safety: default_margin_of_safety(),
            basis: CashFlowBasis::Equity,
        }
    }
}

impl AssumptionsConfig {
    /// Convert to engine assumptions
    pub fn to_assumptions(&self) -> Assumptions {
        Assumptions {
            free_cash_flow: to_f64(self.free_cash_flow),
            growth_rate: to_f64(self.growth_rate),
            discount_rate: to_f64(self.discount_rate),
            terminal_growth_rate: to_f64(self.terminal_growth_rate),
            projection_years: self.projection_years,
            margin_of_safety: to_f64(self.margin_of_safety),
            basis: self.basis,
        }
    }
}

/// Candidate rates for the sensitivity table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SensitivityConfig {
    #[serde(default = "default_discount_rates")]
    pub discount_rates: Vec<Decimal>,
    #[serde(default = "default_growth_rates")]
    pub growth_rates: Vec<Decimal>,
}

fn default_discount_rates() -> Vec<Decimal> {
    (8..=12).map(|p| Decimal::new(p, 2)).collect()
}
fn default_growth_rates() -> Vec<Decimal> {
    (1..=5).map(|p| Decimal::new(p, 2)).collect()
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            discount_rates: default_discount_rates(),
            growth_rates: default_growth_rates(),
        }
    }
}

impl SensitivityConfig {
    pub fn discount_rates_f64(&self) -> Vec<f64> {
        self.discount_rates.iter().copied().map(to_f64).collect()
    }

    pub fn growth_rates_f64(&self) -> Vec<f64> {
        self.growth_rates.iter().copied().map(to_f64).collect()
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("projection_years must be between 1 and {max}, got {years}")]
    ProjectionYears { years: u32, max: u32 },
    #[error("margin_of_safety must be in [0, 1), got {0}")]
    MarginOfSafety(Decimal),
    #[error("sensitivity.{0} must not be empty")]
    EmptyCandidates(&'static str),
    #[error("sensitivity.{0} must be in ascending order")]
    UnsortedCandidates(&'static str),
    #[error("sensitivity.{list} candidate {rate} must be greater than {min}")]
    CandidateOutOfRange {
        list: &'static str,
        rate: Decimal,
        min: Decimal,
    },
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let years = self.assumptions.projection_years;
        if years == 0 || years > MAX_PROJECTION_YEARS {
            return Err(ConfigError::ProjectionYears {
                years,
                max: MAX_PROJECTION_YEARS,
            });
        }

        let margin = self.assumptions.margin_of_safety;
        if margin < Decimal::ZERO || margin >= Decimal::ONE {
            return Err(ConfigError::MarginOfSafety(margin));
        }

        // Same lower bounds the engine enforces on its inputs
        for (name, rates, min) in [
            (
                "discount_rates",
                &self.sensitivity.discount_rates,
                Decimal::new(-99, 2),
            ),
            (
                "growth_rates",
                &self.sensitivity.growth_rates,
                Decimal::NEGATIVE_ONE,
            ),
        ] {
            if rates.is_empty() {
                return Err(ConfigError::EmptyCandidates(name));
            }
            if rates.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ConfigError::UnsortedCandidates(name));
            }
            if let Some(&rate) = rates.iter().find(|r| **r <= min) {
                return Err(ConfigError::CandidateOutOfRange {
                    list: name,
                    rate,
                    min,
                });
            }
        }

        Ok(())
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.try_into().unwrap_or(0.0)
}
