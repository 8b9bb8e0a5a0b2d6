//! Sensitivity analysis
//!
//! Intrinsic value across a grid of growth and discount rate candidates

mod grid;

pub use grid::{constant_base_value, sensitivity_grid, SensitivityCell, SensitivityGrid};

/// Default discount rate candidates
pub const DEFAULT_DISCOUNT_RATES: [f64; 5] = [0.08, 0.09, 0.10, 0.11, 0.12];

/// Default growth rate candidates
pub const DEFAULT_GROWTH_RATES: [f64; 5] = [0.01, 0.02, 0.03, 0.04, 0.05];
