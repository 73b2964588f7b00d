//! pt-BR currency formatting.
//!
//! Values render as `R$ 1.234,56`: dot-grouped thousands, comma decimal,
//! always two decimal places. Negatives carry a leading `- `; values within
//! half a cent of zero snap to `R$ 0,00` so rounding noise never prints as
//! a signed amount. Unknown values render as `N/A`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Render a decimal with exactly two decimal places (banker's rounding).
#[must_use]
pub fn fixed2(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = format!("{frac_part:0<2}");
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{int_part}.{}", &frac[..2])
}

/// Format a monetary value in the pt-BR convention.
#[must_use]
pub fn format_brl(value: Decimal) -> String {
    // Half a cent either side of zero prints as zero, never as "- R$ 0,00".
    if value.abs() < dec!(0.005) {
        return "R$ 0,00".to_string();
    }

    let rounded = value.round_dp(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = format!("{frac_part:0<2}");

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let amount = format!("R$ {grouped},{}", &frac[..2]);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("- {amount}")
    } else {
        amount
    }
}

/// Format an optional monetary value; unknown renders as `N/A`.
#[must_use]
pub fn format_brl_opt(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_brl)
}
