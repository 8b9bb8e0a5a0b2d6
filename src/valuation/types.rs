//! Valuation input errors

use thiserror::Error;

/// Inputs that cannot form a valuation
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// A rate or amount is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    /// Discount rate too low for the clamped perpetuity to stay positive
    #[error("Discount rate must be greater than {min}, got {rate}")]
    DiscountRateTooLow { rate: f64, min: f64 },
    /// Growth at or below -100% flips the sign of projected flows
    #[error("{field} must be greater than -100%, got {rate}")]
    GrowthRateTooLow { field: &'static str, rate: f64 },
    /// Projection horizon outside the supported range
    #[error("Projection years must be at most {max}, got {years}")]
    ProjectionYearsOutOfRange { years: u32, max: u32 },
}
