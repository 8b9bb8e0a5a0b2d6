//! End-to-end engine properties

use dcf_valuer::comparison::{implied_price_and_verdict, Verdict};
use dcf_valuer::sensitivity::{sensitivity_grid, DEFAULT_DISCOUNT_RATES, DEFAULT_GROWTH_RATES};
use dcf_valuer::valuation::{
    intrinsic_value, project, terminal_value, Convergence, DcfModel, ValuationInputs,
    ValuationModel,
};

fn scenario_a() -> ValuationInputs {
    ValuationInputs::new(100.0, 0.05, 0.10, 0.02, 5).unwrap()
}

#[test]
fn test_scenario_a() {
    let inputs = scenario_a();
    let projection = project(&inputs);
    let first = projection.discounted_values().next().unwrap();
    assert!((first - 100.0 * 1.05 / 1.10).abs() < 1e-9);
    assert!((first - 95.4545).abs() < 1e-4);
    assert!(intrinsic_value(&inputs) > 0.0);
}

#[test]
fn test_scenario_b_zero_shares() {
    let value = intrinsic_value(&scenario_a());
    let comparison = implied_price_and_verdict(value, Some(0), Some(10.0), 0.15);
    assert_eq!(comparison.verdict, Verdict::Unknown);
    assert!(comparison.implied_price.is_none());
}

#[test]
fn test_scenario_c_growth_exceeds_discount() {
    let inputs = ValuationInputs::new(100.0, 0.05, 0.02, 0.05, 5).unwrap();
    let terminal = terminal_value(&inputs);
    assert!(terminal.discounted.is_finite());
    assert!(!terminal.discounted.is_nan());
    assert!(matches!(terminal.convergence, Convergence::Clamped { .. }));
    assert!(intrinsic_value(&inputs).is_finite());
}

#[test]
fn test_equal_rates_flagged_every_time() {
    let inputs = ValuationInputs::new(100.0, 0.05, 0.04, 0.04, 5).unwrap();
    let results: Vec<_> = (0..3).map(|_| terminal_value(&inputs)).collect();
    assert!(results.iter().all(|r| r.convergence.is_clamped()));
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_discount_rate_monotonicity() {
    let model = DcfModel::new();
    let low = model.value(&ValuationInputs::new(100.0, 0.05, 0.09, 0.02, 5).unwrap());
    let high = model.value(&ValuationInputs::new(100.0, 0.05, 0.11, 0.02, 5).unwrap());

    for (l, h) in low
        .projection
        .discounted_values()
        .zip(high.projection.discounted_values())
    {
        assert!(h < l);
    }
    assert!(high.terminal.discounted < low.terminal.discounted);
    assert!(high.intrinsic_value < low.intrinsic_value);
}

#[test]
fn test_zero_years_is_terminal_only() {
    let inputs = ValuationInputs::new(100.0, 0.05, 0.10, 0.02, 0).unwrap();
    assert!(project(&inputs).is_empty());
    assert_eq!(intrinsic_value(&inputs), terminal_value(&inputs).discounted);
}

#[test]
fn test_verdict_symmetry() {
    let price = 37.5;
    let margin = 0.1;
    // One share, so implied price equals the intrinsic value passed in
    let at = |implied: f64| {
        implied_price_and_verdict(implied, Some(1), Some(price), margin).verdict
    };
    assert_eq!(at(price * (1.0 + margin)), Verdict::Undervalued);
    assert_eq!(at(price * (1.0 - margin)), Verdict::Overvalued);
    assert_eq!(at(price), Verdict::FairlyValued);
}

#[test]
fn test_grid_regeneration_is_bit_identical() {
    let first = sensitivity_grid(&scenario_a(), &DEFAULT_DISCOUNT_RATES, &DEFAULT_GROWTH_RATES);
    let second = sensitivity_grid(&scenario_a(), &DEFAULT_DISCOUNT_RATES, &DEFAULT_GROWTH_RATES);
    let bits = |g: &dcf_valuer::sensitivity::SensitivityGrid| -> Vec<u64> {
        g.rows()
            .iter()
            .flatten()
            .map(|c| c.intrinsic_value.to_bits())
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_grid_out_of_domain_candidates_never_nan() {
    let grid = sensitivity_grid(&scenario_a(), &[-1.0, 0.02, 0.10], &[-2.0, 0.05]);
    assert!(grid
        .rows()
        .iter()
        .flatten()
        .all(|c| c.intrinsic_value.is_finite()));
    let total_loss = grid.get(1, 0).unwrap();
    assert_eq!(total_loss.convergence, Convergence::Undefined);
    assert!(!total_loss.convergence.is_clamped());
    // Growth above discount is still recovered by the clamp
    assert!(grid.get(1, 1).unwrap().convergence.is_clamped());
    // Whole -200% growth row plus the -100% discount column
    assert_eq!(grid.undefined_cells(), 4);
}
