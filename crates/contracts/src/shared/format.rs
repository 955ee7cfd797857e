//! Display formatting: prices (es-AR grouping) and update timestamps.

use chrono::{DateTime, TimeZone};
use serde_json::Value;
use std::fmt::Display;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Shown instead of a price when the value is missing ("ask for price").
pub const PRICE_ON_REQUEST: &str = "Consultar";

/// Formats a number the way `toLocaleString('es-AR')` does: `.` groups
/// thousands, `,` separates decimals, at most three fraction digits.
///
/// ```
/// use contracts::shared::format::format_decimal;
/// assert_eq!(format_decimal(1234.5), "1.234,5");
/// assert_eq!(format_decimal(-1500.0), "-1.500");
/// ```
pub fn format_decimal(value: f64) -> String {
    let scaled = value * 1000.0;
    let rounded = if scaled.is_finite() {
        scaled.round() / 1000.0
    } else {
        value
    };
    let formatted = format!("{:.3}", rounded.abs());
    let (integer_part, fraction_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    let fraction = fraction_part.trim_end_matches('0');
    if !fraction.is_empty() {
        result.push(',');
        result.push_str(fraction);
    }

    if rounded < 0.0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Turns raw price values from the catalog into display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    pub symbol: String,
    pub on_request: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            on_request: PRICE_ON_REQUEST.to_string(),
        }
    }
}

impl PriceFormatter {
    pub fn new(symbol: impl Into<String>, on_request: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            on_request: on_request.into(),
        }
    }

    /// Never fails: anything that is not a usable number or text becomes
    /// the on-request sentinel. Zero counts as "no price".
    pub fn format(&self, value: &Value) -> String {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(x) if x.is_finite() && x != 0.0 => {
                    format!("{}{}", self.symbol, format_decimal(x))
                }
                _ => self.on_request.clone(),
            },
            Value::String(s) if !s.trim().is_empty() => format!("{}{}", self.symbol, s),
            _ => self.on_request.clone(),
        }
    }
}

/// Formats a price with the default `$` / `Consultar` settings.
pub fn format_price(value: &Value) -> String {
    PriceFormatter::default().format(value)
}

/// Renders a timestamp like `toLocaleString('es-AR')`: `19/10/2026, 14:05:09`.
pub fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%-d/%-m/%Y, %H:%M:%S").to_string()
}
