//! Cash flow projection
//!
//! Compounds the base cash flow forward and discounts each year back:
//! future(i) = base * (1 + g)^i, discounted(i) = future(i) / (1 + r)^i

use super::ValuationInputs;
use serde::Serialize;

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedFlow {
    /// Year index, starting at 1
    pub year: u32,
    /// Cash flow in that year before discounting
    pub future_value: f64,
    /// Present value of that year's cash flow
    pub discounted_value: f64,
}

/// Chronological projected cash flows, one entry per projection year
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ProjectionResult {
    flows: Vec<ProjectedFlow>,
}

impl ProjectionResult {
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn flows(&self) -> &[ProjectedFlow] {
        &self.flows
    }

    /// Discounted values in year order
    pub fn discounted_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.flows.iter().map(|f| f.discounted_value)
    }

    /// Undiscounted values in year order
    pub fn future_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.flows.iter().map(|f| f.future_value)
    }

    /// Sum of discounted values
    pub fn total(&self) -> f64 {
        self.discounted_values().sum()
    }
}

/// Project and discount cash flows for years 1..=projection_years
pub fn project(inputs: &ValuationInputs) -> ProjectionResult {
    let growth = 1.0 + inputs.growth_rate;
    let discount = 1.0 + inputs.discount_rate;

    let flows = (1..=inputs.projection_years)
        .map(|year| {
            let exponent = year as i32;
            let future_value = inputs.base_cash_flow * growth.powi(exponent);
            ProjectedFlow {
                year,
                future_value,
                discounted_value: future_value / discount.powi(exponent),
            }
        })
        .collect();

    ProjectionResult { flows }
}
