//! Financial snapshot intake
//!
//! A snapshot is whatever the data provider could find for a company; any
//! field may be missing. Resolving it against caller-supplied assumptions
//! produces complete valuation inputs and a record of every substitution.

mod resolve;

pub use resolve::{Assumptions, Fallback, ResolvedInputs};

use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_currency() -> String {
    "USD".to_string()
}

/// Point-in-time financial data for one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
    #[serde(default)]
    pub market_capitalization: Option<f64>,
    #[serde(default, alias = "total_liabilities")]
    pub total_debt: Option<f64>,
    #[serde(default)]
    pub shares_outstanding: Option<i64>,
    #[serde(default)]
    pub current_market_price: Option<f64>,
    /// ISO 4217 reporting currency
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for FinancialSnapshot {
    fn default() -> Self {
        Self {
            free_cash_flow: None,
            market_capitalization: None,
            total_debt: None,
            shares_outstanding: None,
            current_market_price: None,
            currency: default_currency(),
        }
    }
}

impl FinancialSnapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: FinancialSnapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Market price, falling back to market cap per share
    pub fn market_price(&self) -> Option<f64> {
        if let Some(price) = usable(self.current_market_price).filter(|p| *p > 0.0) {
            return Some(price);
        }
        match (usable(self.market_capitalization), self.shares_outstanding) {
            (Some(cap), Some(shares)) if cap > 0.0 && shares > 0 => Some(cap / shares as f64),
            _ => None,
        }
    }
}

/// Treat NaN and infinity the same as missing
pub(crate) fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
