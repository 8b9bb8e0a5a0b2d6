//! Snapshot to report integration tests

use dcf_valuer::comparison::Verdict;
use dcf_valuer::config::Config;
use dcf_valuer::report::{render_json, render_table, GridSpec, ValuationReport};
use dcf_valuer::snapshot::{Fallback, FinancialSnapshot};
use dcf_valuer::valuation::DcfModel;

#[test]
fn test_snapshot_with_nulls_still_values() {
    let json = r#"{
        "free_cash_flow": null,
        "market_capitalization": null,
        "total_debt": null,
        "shares_outstanding": null,
        "current_market_price": null,
        "currency": "INR"
    }"#;
    let snapshot: FinancialSnapshot = serde_json::from_str(json).unwrap();
    let assumptions = Config::default().assumptions.to_assumptions();
    let resolved = snapshot.resolve(&assumptions).unwrap();

    let report = ValuationReport::build(&resolved, &DcfModel::new(), None);
    assert!(report.valuation.intrinsic_value > 0.0);
    assert_eq!(report.comparison.verdict, Verdict::Unknown);
    assert!(report
        .fallbacks
        .contains(&Fallback::FreeCashFlow { assumed: 100.0 }));

    let text = render_table(&report);
    assert!(text.contains('₹'));
    assert!(text.contains("Verdict:            Unknown"));
}

#[test]
fn test_full_snapshot_report() {
    let json = r#"{
        "free_cash_flow": 2000000000.0,
        "market_capitalization": 30000000000.0,
        "total_debt": 5000000000.0,
        "shares_outstanding": 1000000000,
        "current_market_price": 30.0,
        "currency": "USD"
    }"#;
    let snapshot: FinancialSnapshot = serde_json::from_str(json).unwrap();
    let mut config = Config::default();
    config.assumptions.basis = dcf_valuer::equity::CashFlowBasis::Firm;
    let resolved = snapshot
        .resolve(&config.assumptions.to_assumptions())
        .unwrap();

    let discount_rates = config.sensitivity.discount_rates_f64();
    let growth_rates = config.sensitivity.growth_rates_f64();
    let report = ValuationReport::build(
        &resolved,
        &DcfModel::new(),
        Some(GridSpec {
            discount_rates: &discount_rates,
            growth_rates: &growth_rates,
        }),
    );

    // ~28.9B intrinsic less 5B debt over 1B shares is ~23.9, below 30.0 * 0.85
    assert_eq!(report.equity.less_debt, 5e9);
    assert_eq!(report.comparison.verdict, Verdict::Overvalued);
    let implied = report.comparison.implied_price.unwrap();
    assert!((implied - 23.92).abs() < 0.01);
    assert!(report.fallbacks.is_empty());

    let json = render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["currency"], "USD");
    assert_eq!(value["equity"]["basis"], "firm");
    assert_eq!(
        value["sensitivity"]["cells"].as_array().unwrap().len(),
        growth_rates.len()
    );
}
