//! Implied price and verdict classification

use super::{MarketComparison, Verdict};

/// Value per share; `None` when shares are missing or non-positive
pub fn implied_price(intrinsic_value: f64, shares_outstanding: Option<i64>) -> Option<f64> {
    match shares_outstanding {
        Some(shares) if shares > 0 && intrinsic_value.is_finite() => {
            Some(intrinsic_value / shares as f64)
        }
        _ => None,
    }
}

/// Classify an implied price against the market price
///
/// Prices exactly on a threshold count as Undervalued/Overvalued.
pub fn classify(implied_price: f64, current_price: f64, margin_of_safety: f64) -> Verdict {
    let upper = current_price * (1.0 + margin_of_safety);
    let lower = current_price * (1.0 - margin_of_safety);

    if implied_price >= upper {
        Verdict::Undervalued
    } else if implied_price <= lower {
        Verdict::Overvalued
    } else {
        Verdict::FairlyValued
    }
}

/// Derive the implied price and compare it with the market
pub fn implied_price_and_verdict(
    intrinsic_value: f64,
    shares_outstanding: Option<i64>,
    current_price: Option<f64>,
    margin_of_safety: f64,
) -> MarketComparison {
    let implied = implied_price(intrinsic_value, shares_outstanding);
    let current = current_price.filter(|p| p.is_finite() && *p > 0.0);

    let (verdict, upside) = match (implied, current) {
        (Some(implied), Some(current)) => (
            classify(implied, current, margin_of_safety),
            Some(implied / current - 1.0),
        ),
        _ => (Verdict::Unknown, None),
    };

    tracing::debug!(
        implied_price = ?implied,
        current_price = ?current,
        margin_of_safety,
        %verdict,
        "Market comparison"
    );

    MarketComparison {
        implied_price: implied,
        current_price: current,
        margin_of_safety,
        upside,
        verdict,
    }
}
