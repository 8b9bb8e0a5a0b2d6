//! Valuation report
//!
//! Runs the engine over resolved inputs and renders the result as a text
//! table or JSON

mod format;
mod render;

pub use format::{currency_symbol, format_money, format_percent, format_scaled};
pub use render::{render_grid, render_json, render_table};

use crate::comparison::{implied_price_and_verdict, MarketComparison};
use crate::equity::{equity_value, EquityBridge};
use crate::sensitivity::{sensitivity_grid, SensitivityGrid};
use crate::snapshot::{Fallback, ResolvedInputs};
use crate::valuation::{Valuation, ValuationModel};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything produced by one valuation request
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub valuation: Valuation,
    pub equity: EquityBridge,
    pub comparison: MarketComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityGrid>,
    pub fallbacks: Vec<Fallback>,
}

/// Candidate rates for the sensitivity table
#[derive(Debug, Clone, Copy)]
pub struct GridSpec<'a> {
    pub discount_rates: &'a [f64],
    pub growth_rates: &'a [f64],
}

impl ValuationReport {
    /// Value `resolved` with `model`, optionally adding a sensitivity grid
    pub fn build(
        resolved: &ResolvedInputs,
        model: &dyn ValuationModel,
        grid: Option<GridSpec<'_>>,
    ) -> Self {
        let valuation = model.value(&resolved.inputs);
        let equity = equity_value(resolved.basis, valuation.intrinsic_value, resolved.total_debt);
        let comparison = implied_price_and_verdict(
            equity.equity_value,
            resolved.shares_outstanding,
            resolved.current_price,
            resolved.margin_of_safety,
        );
        let sensitivity = grid.map(|spec| {
            sensitivity_grid(&resolved.inputs, spec.discount_rates, spec.growth_rates)
        });

        tracing::info!(
            intrinsic_value = valuation.intrinsic_value,
            equity_value = equity.equity_value,
            verdict = %comparison.verdict,
            "Valuation complete"
        );

        Self {
            generated_at: Utc::now(),
            currency: resolved.currency.clone(),
            valuation,
            equity,
            comparison,
            sensitivity,
            fallbacks: resolved.fallbacks.clone(),
        }
    }
}
