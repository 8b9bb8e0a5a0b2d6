//! Number and currency display helpers

/// Symbol for an ISO 4217 code, or the code itself followed by a space
pub fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "KRW" => "₩".to_string(),
        other => format!("{other} "),
    }
}

/// Scale a number with a K/M/B/T suffix, two decimals
pub fn format_scaled(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    format!("{scaled:.2}{suffix}")
}

/// Scaled amount with currency symbol; the sign goes before the symbol
pub fn format_money(value: f64, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    if value < 0.0 {
        format!("-{symbol}{}", format_scaled(-value))
    } else {
        format!("{symbol}{}", format_scaled(value))
    }
}

/// Decimal fraction as a percentage with the given precision
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}
