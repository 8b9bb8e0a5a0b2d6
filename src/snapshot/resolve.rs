//! Snapshot resolution against fallback assumptions

use super::{usable, FinancialSnapshot};
use crate::equity::CashFlowBasis;
use crate::valuation::{InputError, ValuationInputs};
use serde::Serialize;

/// Caller-supplied assumptions used where the snapshot has no data
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    /// Base cash flow used when the snapshot has none
    pub free_cash_flow: f64,
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub terminal_growth_rate: f64,
    pub projection_years: u32,
    pub margin_of_safety: f64,
    pub basis: CashFlowBasis,
}

/// A substitution made while resolving a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum Fallback {
    /// Free cash flow missing, assumption used
    FreeCashFlow { assumed: f64 },
    /// Market price derived from market cap / shares
    PriceFromMarketCap { price: f64 },
    /// No price available; verdict will be unknown
    CurrentPrice,
    /// No usable share count; implied price will be unknown
    SharesOutstanding,
    /// Debt missing for a firm-basis valuation, treated as zero
    TotalDebt,
}

/// Snapshot merged with assumptions, ready for the engine
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub inputs: ValuationInputs,
    pub shares_outstanding: Option<i64>,
    pub current_price: Option<f64>,
    pub total_debt: f64,
    pub margin_of_safety: f64,
    pub basis: CashFlowBasis,
    pub currency: String,
    pub fallbacks: Vec<Fallback>,
}

impl FinancialSnapshot {
    /// Fill gaps from `assumptions` and build validated valuation inputs
    pub fn resolve(&self, assumptions: &Assumptions) -> Result<ResolvedInputs, InputError> {
        let mut fallbacks = Vec::new();

        let base_cash_flow = match usable(self.free_cash_flow) {
            Some(fcf) => fcf,
            None => {
                fallbacks.push(Fallback::FreeCashFlow {
                    assumed: assumptions.free_cash_flow,
                });
                assumptions.free_cash_flow
            }
        };

        let inputs = ValuationInputs::new(
            base_cash_flow,
            assumptions.growth_rate,
            assumptions.discount_rate,
            assumptions.terminal_growth_rate,
            assumptions.projection_years,
        )?;

        let shares_outstanding = self.shares_outstanding.filter(|s| *s > 0);
        if shares_outstanding.is_none() {
            fallbacks.push(Fallback::SharesOutstanding);
        }

        let quoted = usable(self.current_market_price).filter(|p| *p > 0.0);
        let current_price = self.market_price();
        match (quoted, current_price) {
            (None, Some(price)) => fallbacks.push(Fallback::PriceFromMarketCap { price }),
            (None, None) => fallbacks.push(Fallback::CurrentPrice),
            _ => {}
        }

        let total_debt = match (usable(self.total_debt), assumptions.basis) {
            (Some(debt), _) => debt,
            (None, CashFlowBasis::Firm) => {
                fallbacks.push(Fallback::TotalDebt);
                0.0
            }
            (None, CashFlowBasis::Equity) => 0.0,
        };

        for fallback in &fallbacks {
            tracing::warn!(?fallback, "Snapshot field missing, using fallback");
        }

        Ok(ResolvedInputs {
            inputs,
            shares_outstanding,
            current_price,
            total_debt,
            margin_of_safety: assumptions.margin_of_safety,
            basis: assumptions.basis,
            currency: self.currency.clone(),
            fallbacks,
        })
    }
}
