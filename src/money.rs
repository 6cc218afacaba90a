use crate::calc::CalcError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Convert a computed amount into a `Decimal`, keeping every bit of the binary value so that
/// display rounding sees the same number the formula produced.
pub fn from_f64(value: f64, what: &'static str) -> Result<Decimal, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite { what });
    }
    Decimal::from_f64_retain(value).ok_or(CalcError::NonFinite { what })
}

/// Round to whole cents, ties to even.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Plain two decimal amount, e.g. `-1203.52`. Used for JSON and CSV output.
pub fn display_amount(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

/// US currency, e.g. `$1,896.20` or `$-1,203.52`.
pub fn display_usd(amount: Decimal) -> String {
    let plain = display_amount(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", plain.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${sign}{grouped}.{cents}")
}

/// A fractional rate shown as a percentage, e.g. `0.22` as `22.00%`.
pub fn display_rate(rate: Decimal) -> String {
    format!("{:.2}%", round_cents(rate * dec!(100)))
}
