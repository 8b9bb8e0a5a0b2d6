//! Valuation engine
//!
//! Discounted cash flow projection, Gordon Growth terminal value and
//! intrinsic value aggregation. Every function here is pure: inputs in,
//! fully specified result out, no shared state.

mod dcf;
mod projection;
mod terminal;
mod types;

pub use dcf::DcfModel;
pub use projection::{project, ProjectedFlow, ProjectionResult};
pub use terminal::{
    terminal_value, Convergence, TerminalValueResult, MIN_DISCOUNT_RATE, TERMINAL_SPREAD_FLOOR,
};
pub use types::InputError;

pub(crate) use terminal::gordon_growth;

use serde::{Deserialize, Serialize};

/// Longest supported explicit projection horizon, in years
pub const MAX_PROJECTION_YEARS: u32 = 10;

/// Fully specified inputs for one valuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Current free cash flow; zero and negative values are allowed
    pub base_cash_flow: f64,
    /// Annual growth rate over the projection horizon
    pub growth_rate: f64,
    /// Cost of equity (FCFE) or WACC (FCFF)
    pub discount_rate: f64,
    /// Perpetual growth rate beyond the horizon
    pub terminal_growth_rate: f64,
    /// Number of explicitly projected years
    pub projection_years: u32,
}

impl ValuationInputs {
    /// Create validated inputs
    pub fn new(
        base_cash_flow: f64,
        growth_rate: f64,
        discount_rate: f64,
        terminal_growth_rate: f64,
        projection_years: u32,
    ) -> Result<Self, InputError> {
        let inputs = Self {
            base_cash_flow,
            growth_rate,
            discount_rate,
            terminal_growth_rate,
            projection_years,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check the inputs can be valued without producing NaN or infinity
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("base_cash_flow", self.base_cash_flow),
            ("growth_rate", self.growth_rate),
            ("discount_rate", self.discount_rate),
            ("terminal_growth_rate", self.terminal_growth_rate),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }

        if self.discount_rate <= MIN_DISCOUNT_RATE {
            return Err(InputError::DiscountRateTooLow {
                rate: self.discount_rate,
                min: MIN_DISCOUNT_RATE,
            });
        }

        for (field, rate) in [
            ("growth_rate", self.growth_rate),
            ("terminal_growth_rate", self.terminal_growth_rate),
        ] {
            if rate <= -1.0 {
                return Err(InputError::GrowthRateTooLow { field, rate });
            }
        }

        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(InputError::ProjectionYearsOutOfRange {
                years: self.projection_years,
                max: MAX_PROJECTION_YEARS,
            });
        }

        Ok(())
    }
}

/// Sum of the discounted projection and the discounted terminal value
pub fn intrinsic_value(inputs: &ValuationInputs) -> f64 {
    project(inputs).total() + terminal_value(inputs).discounted
}

/// Complete result of valuing one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub inputs: ValuationInputs,
    pub projection: ProjectionResult,
    pub terminal: TerminalValueResult,
    /// Present value of all future cash flows
    pub intrinsic_value: f64,
}

impl Valuation {
    /// Present value contributed by the explicit projection years
    pub fn projected_present_value(&self) -> f64 {
        self.projection.total()
    }

    /// Fraction of intrinsic value coming from the terminal value
    ///
    /// `None` when intrinsic value is zero.
    pub fn terminal_share(&self) -> Option<f64> {
        if self.intrinsic_value == 0.0 {
            return None;
        }
        Some(self.terminal.discounted / self.intrinsic_value)
    }
}

/// Trait for valuation model implementations
pub trait ValuationModel: Send + Sync {
    /// Value the given inputs
    fn value(&self, inputs: &ValuationInputs) -> Valuation;
}
