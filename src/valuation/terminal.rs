//! Gordon Growth terminal value
//!
//! TV = last_flow * (1 + g_t) / (r - g_t), discounted back over the
//! projection horizon. The formula only converges when r > g_t; when the
//! spread falls below [`TERMINAL_SPREAD_FLOOR`] the terminal growth rate is
//! clamped to r - floor and the result is flagged. Rates for which even
//! the clamped perpetuity has no meaning produce an `Undefined` outcome
//! with zero value.

use super::ValuationInputs;
use serde::Serialize;

/// Minimum spread between discount rate and terminal growth rate
pub const TERMINAL_SPREAD_FLOOR: f64 = 0.01;

/// Discount rates must exceed this so the clamped growth stays above -100%
pub const MIN_DISCOUNT_RATE: f64 = -1.0 + TERMINAL_SPREAD_FLOOR;

/// Whether the perpetuity converged with the requested growth rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Convergence {
    Converged,
    /// Terminal growth was lowered to keep the divisor positive
    Clamped { requested: f64, applied: f64 },
    /// Rates outside the perpetuity's domain; value reported as zero
    Undefined,
}

impl Convergence {
    pub fn is_clamped(&self) -> bool {
        matches!(self, Convergence::Clamped { .. })
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Convergence::Undefined)
    }
}

/// Terminal value outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerminalValueResult {
    /// Undiscounted cash flow in the final projection year
    pub last_flow: f64,
    /// Terminal growth rate actually used
    pub terminal_growth_rate: f64,
    /// Value of the perpetuity at the end of the horizon
    pub undiscounted: f64,
    /// Present value of the perpetuity
    pub discounted: f64,
    pub convergence: Convergence,
}

/// Terminal value for the given inputs
pub fn terminal_value(inputs: &ValuationInputs) -> TerminalValueResult {
    let last_flow =
        inputs.base_cash_flow * (1.0 + inputs.growth_rate).powi(inputs.projection_years as i32);

    gordon_growth(
        last_flow,
        inputs.terminal_growth_rate,
        inputs.discount_rate,
        inputs.projection_years,
    )
}

/// Discounted Gordon Growth value of a flow growing at `growth` forever
pub(crate) fn gordon_growth(
    last_flow: f64,
    growth: f64,
    discount_rate: f64,
    years: u32,
) -> TerminalValueResult {
    let undefined = TerminalValueResult {
        last_flow: if last_flow.is_finite() { last_flow } else { 0.0 },
        terminal_growth_rate: 0.0,
        undiscounted: 0.0,
        discounted: 0.0,
        convergence: Convergence::Undefined,
    };

    // NaN fails both comparisons
    if !(discount_rate > MIN_DISCOUNT_RATE && growth > -1.0)
        || !discount_rate.is_finite()
        || !last_flow.is_finite()
    {
        return undefined;
    }

    let (applied, convergence) = if discount_rate - growth < TERMINAL_SPREAD_FLOOR {
        let applied = discount_rate - TERMINAL_SPREAD_FLOOR;
        (
            applied,
            Convergence::Clamped {
                requested: growth,
                applied,
            },
        )
    } else {
        (growth, Convergence::Converged)
    };

    let undiscounted = last_flow * (1.0 + applied) / (discount_rate - applied);
    let discounted = undiscounted / (1.0 + discount_rate).powi(years as i32);

    if !discounted.is_finite() {
        return undefined;
    }

    TerminalValueResult {
        last_flow,
        terminal_growth_rate: applied,
        undiscounted,
        discounted,
        convergence,
    }
}
