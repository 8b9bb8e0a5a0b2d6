//! Configuration integration tests

use dcf_valuer::config::Config;
use dcf_valuer::equity::CashFlowBasis;
use rust_decimal_macros::dec;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.assumptions.discount_rate, dec!(0.10));
    assert_eq!(config.assumptions.basis, CashFlowBasis::Equity);
    assert_eq!(config.sensitivity.growth_rates.len(), 5);
}

#[test]
fn test_config_round_trips_through_display() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.assumptions.projection_years, 5);
    assert_eq!(parsed.sensitivity.discount_rates, config.sensitivity.discount_rates);
}
