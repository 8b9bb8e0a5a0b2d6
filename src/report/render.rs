//! Text and JSON rendering

use super::format::{format_money, format_percent, format_scaled};
use super::ValuationReport;
use crate::sensitivity::SensitivityGrid;
use crate::snapshot::Fallback;
use crate::valuation::Convergence;
use std::fmt::Write;

const CELL_WIDTH: usize = 12;
const LABEL_WIDTH: usize = 20;

/// Write one `  Label:    value` line
fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let label = format!("{label}:");
    let _ = writeln!(out, "  {label:<width$}{value}", width = LABEL_WIDTH);
}

/// Render the report as a plain-text summary
pub fn render_table(report: &ValuationReport) -> String {
    let currency = report.currency.as_str();
    let valuation = &report.valuation;
    let inputs = &valuation.inputs;
    let terminal = &valuation.terminal;
    let money = |value: f64| format_money(value, currency);
    let mut out = String::new();

    let generated = report.generated_at.format("%Y-%m-%d %H:%M UTC");
    let _ = writeln!(out, "DCF Valuation ({generated})");
    let _ = writeln!(out);
    field(&mut out, "Base cash flow", money(inputs.base_cash_flow));
    field(&mut out, "Growth rate", format_percent(inputs.growth_rate, 2));
    field(&mut out, "Discount rate", format_percent(inputs.discount_rate, 2));
    field(
        &mut out,
        "Terminal growth",
        format_percent(inputs.terminal_growth_rate, 2),
    );
    field(&mut out, "Projection years", inputs.projection_years);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  {:>4}  {:>14}  {:>14}",
        "Year", "Cash flow", "Present value"
    );
    for flow in valuation.projection.flows() {
        let _ = writeln!(
            out,
            "  {:>4}  {:>14}  {:>14}",
            flow.year,
            format_scaled(flow.future_value),
            format_scaled(flow.discounted_value)
        );
    }
    let _ = writeln!(out);

    field(
        &mut out,
        "PV of projection",
        money(valuation.projected_present_value()),
    );
    field(&mut out, "PV of terminal", money(terminal.discounted));
    if let Some(share) = valuation.terminal_share() {
        field(&mut out, "Terminal share", format_percent(share, 1));
    }
    match terminal.convergence {
        Convergence::Clamped { applied, .. } => {
            let _ = writeln!(
                out,
                "  Note: terminal growth clamped to {}",
                format_percent(applied, 2)
            );
        }
        Convergence::Undefined => {
            let _ = writeln!(out, "  Note: terminal value undefined at these rates");
        }
        Convergence::Converged => {}
    }
    field(&mut out, "Intrinsic value", money(valuation.intrinsic_value));
    if report.equity.less_debt != 0.0 {
        field(&mut out, "Less debt", money(report.equity.less_debt));
        field(&mut out, "Equity value", money(report.equity.equity_value));
    }
    let _ = writeln!(out);

    let comparison = &report.comparison;
    let price = |p: Option<f64>| p.map(money).unwrap_or_else(|| "n/a".to_string());
    field(&mut out, "Implied price", price(comparison.implied_price));
    field(&mut out, "Market price", price(comparison.current_price));
    if let Some(upside) = comparison.upside {
        field(&mut out, "Upside", format_percent(upside, 1));
    }
    field(
        &mut out,
        "Verdict",
        format!(
            "{} (margin of safety {})",
            comparison.verdict,
            format_percent(comparison.margin_of_safety, 0)
        ),
    );

    if !report.fallbacks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Assumptions used:");
        for fallback in &report.fallbacks {
            let _ = writeln!(out, "    - {}", describe_fallback(fallback, currency));
        }
    }

    if let Some(grid) = &report.sensitivity {
        let _ = writeln!(out);
        out.push_str(&render_grid(grid));
    }

    out
}

/// Render the sensitivity grid, growth down the side, discount across
pub fn render_grid(grid: &SensitivityGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sensitivity (growth \\ discount)");

    let _ = write!(out, "{:>8}", "");
    for rate in grid.discount_rates() {
        let header = format_percent(*rate, 0);
        let _ = write!(out, "{header:>width$}", width = CELL_WIDTH);
    }
    let _ = writeln!(out);

    for (rate, row) in grid.growth_rates().iter().zip(grid.rows()) {
        let _ = write!(out, "{:>8}", format_percent(*rate, 0));
        for cell in row {
            let value = match cell.convergence {
                Convergence::Converged => format!("{:.2}", cell.intrinsic_value),
                Convergence::Clamped { .. } => format!("{:.2}*", cell.intrinsic_value),
                Convergence::Undefined => "n/a".to_string(),
            };
            let _ = write!(out, "{value:>width$}", width = CELL_WIDTH);
        }
        let _ = writeln!(out);
    }

    if grid.clamped_cells() > 0 {
        let _ = writeln!(out, "* terminal growth clamped below discount rate");
    }
    if grid.undefined_cells() > 0 {
        let _ = writeln!(out, "n/a: rates outside the model's domain");
    }

    out
}

/// Render the report as pretty-printed JSON
pub fn render_json(report: &ValuationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn describe_fallback(fallback: &Fallback, currency: &str) -> String {
    match fallback {
        Fallback::FreeCashFlow { assumed } => {
            format!("free cash flow missing, assumed {}", format_money(*assumed, currency))
        }
        Fallback::PriceFromMarketCap { price } => format!(
            "market price derived from market cap: {}",
            format_money(*price, currency)
        ),
        Fallback::CurrentPrice => "market price unavailable".to_string(),
        Fallback::SharesOutstanding => "shares outstanding unavailable".to_string(),
        Fallback::TotalDebt => "total debt missing, treated as zero".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::CashFlowBasis;
    use crate::report::GridSpec;
    use crate::snapshot::ResolvedInputs;
    use crate::valuation::{DcfModel, ValuationInputs};

    fn report(fallbacks: Vec<Fallback>, grid: bool) -> ValuationReport {
        let resolved = ResolvedInputs {
            inputs: ValuationInputs::new(100.0, 0.05, 0.10, 0.02, 5).unwrap(),
            shares_outstanding: Some(10),
            current_price: Some(100.0),
            total_debt: 0.0,
            margin_of_safety: 0.15,
            basis: CashFlowBasis::Equity,
            currency: "USD".to_string(),
            fallbacks,
        };
        let spec = GridSpec {
            discount_rates: &[0.02, 0.10],
            growth_rates: &[0.03],
        };
        ValuationReport::build(&resolved, &DcfModel::new(), grid.then_some(spec))
    }

    #[test]
    fn test_render_table() {
        let text = render_table(&report(vec![], false));
        assert!(text.contains("Intrinsic value:    $1.45K"));
        assert!(text.contains("Verdict:            Undervalued"));
        assert!(text.contains("Implied price:      $144.62"));
        assert!(!text.contains("Assumptions used"));
        assert!(!text.contains("Sensitivity"));
    }

    #[test]
    fn test_render_table_lists_fallbacks() {
        let text = render_table(&report(vec![Fallback::TotalDebt], false));
        assert!(text.contains("total debt missing, treated as zero"));
    }

    #[test]
    fn test_render_grid_marks_clamped_cells() {
        let text = render_table(&report(vec![], true));
        assert!(text.contains("Sensitivity"));
        assert!(text.contains('*'));
        assert!(text.contains("terminal growth clamped below discount rate"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&report(vec![Fallback::CurrentPrice], true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comparison"]["verdict"], "undervalued");
        assert_eq!(value["valuation"]["projection"].as_array().unwrap().len(), 5);
        assert_eq!(value["valuation"]["terminal"]["convergence"]["status"], "converged");
        assert_eq!(value["fallbacks"][0]["field"], "current_price");
        assert!(value["sensitivity"].is_object());
    }

    #[test]
    fn test_render_grid_undefined_cells() {
        let inputs = ValuationInputs::new(100.0, 0.05, 0.10, 0.02, 5).unwrap();
        let grid = crate::sensitivity::sensitivity_grid(&inputs, &[-1.0, 0.10], &[0.02]);
        let text = render_grid(&grid);
        assert!(text.contains("n/a"));
        assert!(text.contains("rates outside the model's domain"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_render_table_fields_align() {
        let text = render_table(&report(vec![], false));
        assert!(text.contains("  Projection years:   5\n"));
        assert!(text.contains("  PV of terminal:     $1.01K\n"));
    }
}
