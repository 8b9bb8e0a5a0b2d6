//! Growth x discount rate grid
//!
//! Each cell values a constant (non-growing) cash flow over the horizon and
//! applies the candidate growth rate to the perpetuity only. This is a
//! what-if illustration, not a restatement of the primary projection.

use crate::valuation::{gordon_growth, Convergence, ValuationInputs};
use rayon::prelude::*;
use serde::Serialize;

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityCell {
    pub growth_rate: f64,
    pub discount_rate: f64,
    pub intrinsic_value: f64,
    pub convergence: Convergence,
}

/// Rows follow the growth candidates, columns the discount candidates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityGrid {
    growth_rates: Vec<f64>,
    discount_rates: Vec<f64>,
    cells: Vec<Vec<SensitivityCell>>,
}

impl SensitivityGrid {
    pub fn growth_rates(&self) -> &[f64] {
        &self.growth_rates
    }

    pub fn discount_rates(&self) -> &[f64] {
        &self.discount_rates
    }

    pub fn rows(&self) -> &[Vec<SensitivityCell>] {
        &self.cells
    }

    /// Cell at (growth index, discount index)
    pub fn get(&self, row: usize, col: usize) -> Option<&SensitivityCell> {
        self.cells.get(row)?.get(col)
    }

    /// Number of cells that needed the terminal growth clamp
    pub fn clamped_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.convergence.is_clamped())
            .count()
    }

    /// Number of cells whose rates the model cannot value
    pub fn undefined_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.convergence.is_defined())
            .count()
    }
}

/// Value of a constant cash flow for `years` plus a perpetuity growing at
/// `growth_rate`, discounted at `discount_rate`
///
/// Rates the perpetuity cannot be evaluated at give `(0.0, Undefined)`.
pub fn constant_base_value(
    base_cash_flow: f64,
    growth_rate: f64,
    discount_rate: f64,
    years: u32,
) -> (f64, Convergence) {
    let terminal = gordon_growth(base_cash_flow, growth_rate, discount_rate, years);
    if !terminal.convergence.is_defined() {
        return (0.0, Convergence::Undefined);
    }

    let discount = 1.0 + discount_rate;
    let explicit: f64 = (1..=years as i32)
        .map(|i| base_cash_flow / discount.powi(i))
        .sum();

    let total = explicit + terminal.discounted;
    if !total.is_finite() {
        return (0.0, Convergence::Undefined);
    }

    (total, terminal.convergence)
}

/// Build the grid for the base cash flow and horizon in `base`
///
/// Rows are evaluated in parallel; the table keeps candidate order.
pub fn sensitivity_grid(
    base: &ValuationInputs,
    discount_rates: &[f64],
    growth_rates: &[f64],
) -> SensitivityGrid {
    let cells: Vec<Vec<SensitivityCell>> = growth_rates
        .par_iter()
        .map(|&growth_rate| {
            discount_rates
                .iter()
                .map(|&discount_rate| {
                    let (intrinsic_value, convergence) = constant_base_value(
                        base.base_cash_flow,
                        growth_rate,
                        discount_rate,
                        base.projection_years,
                    );
                    SensitivityCell {
                        growth_rate,
                        discount_rate,
                        intrinsic_value,
                        convergence,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let grid = SensitivityGrid {
        growth_rates: growth_rates.to_vec(),
        discount_rates: discount_rates.to_vec(),
        cells,
    };

    let clamped = grid.clamped_cells();
    if clamped > 0 {
        tracing::warn!(clamped, "Sensitivity cells with non-convergent terminal value");
    }
    let undefined = grid.undefined_cells();
    if undefined > 0 {
        tracing::warn!(undefined, "Sensitivity cells with rates outside the model's domain");
    }

    grid
}
