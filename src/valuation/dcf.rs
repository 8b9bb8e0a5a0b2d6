//! Discounted cash flow model

use super::{project, terminal_value, Convergence, Valuation, ValuationInputs, ValuationModel};

/// Two-stage DCF: explicit projection followed by a Gordon Growth perpetuity
pub struct DcfModel;

impl DcfModel {
    /// Create a new DCF model
    pub fn new() -> Self {
        Self
    }
}

impl Default for DcfModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ValuationModel for DcfModel {
    fn value(&self, inputs: &ValuationInputs) -> Valuation {
        let projection = project(inputs);
        let terminal = terminal_value(inputs);

        if let Convergence::Clamped { requested, applied } = terminal.convergence {
            tracing::warn!(
                discount_rate = inputs.discount_rate,
                requested,
                applied,
                "Terminal growth rate clamped below discount rate"
            );
        }

        let intrinsic_value = projection.total() + terminal.discounted;

        tracing::debug!(
            projected = projection.total(),
            terminal = terminal.discounted,
            intrinsic_value,
            "Valuation computed"
        );

        Valuation {
            inputs: *inputs,
            projection,
            terminal,
            intrinsic_value,
        }
    }
}
