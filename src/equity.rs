//! Enterprise to equity value bridge

use serde::{Deserialize, Serialize};

/// Which cash flow the base amount represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowBasis {
    /// Free cash flow to equity, discounted at cost of equity
    #[default]
    Equity,
    /// Free cash flow to the firm, discounted at WACC
    Firm,
}

/// Equity value derived from an intrinsic value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquityBridge {
    pub basis: CashFlowBasis,
    pub intrinsic_value: f64,
    /// Debt subtracted to reach equity value (zero for FCFE)
    pub less_debt: f64,
    pub equity_value: f64,
}

/// Convert an intrinsic value into the value attributable to shareholders
pub fn equity_value(basis: CashFlowBasis, intrinsic_value: f64, total_debt: f64) -> EquityBridge {
    let less_debt = match basis {
        CashFlowBasis::Equity => 0.0,
        CashFlowBasis::Firm => total_debt,
    };

    EquityBridge {
        basis,
        intrinsic_value,
        less_debt,
        equity_value: intrinsic_value - less_debt,
    }
}
