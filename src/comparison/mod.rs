//! Market comparison
//!
//! Implied share price and the undervalued/overvalued verdict against the
//! current market price

mod classifier;

pub use classifier::{classify, implied_price, implied_price_and_verdict};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Valuation verdict relative to the market price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Undervalued,
    Overvalued,
    FairlyValued,
    /// Price or share count missing
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Undervalued => "Undervalued",
            Verdict::Overvalued => "Overvalued",
            Verdict::FairlyValued => "Fairly valued",
            Verdict::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Implied price compared against the market
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketComparison {
    /// Value per share, if shares outstanding is known and positive
    pub implied_price: Option<f64>,
    pub current_price: Option<f64>,
    pub margin_of_safety: f64,
    /// implied / current - 1
    pub upside: Option<f64>,
    pub verdict: Verdict,
}
