//! dcf-valuer: Discounted cash flow valuation engine
//!
//! This library provides:
//! - Cash flow projection and discounting
//! - Gordon Growth terminal value with a non-convergence clamp
//! - Intrinsic value, implied share price and valuation verdict
//! - Growth x discount rate sensitivity tables
//! - Financial snapshot intake with documented fallbacks
//! - Text and JSON reports

pub mod cli;
pub mod comparison;
pub mod config;
pub mod equity;
pub mod report;
pub mod sensitivity;
pub mod snapshot;
pub mod telemetry;
pub mod valuation;
