//! Currency formatting for Brazilian reais, e.g. `R$ 1.234,56`.

/// The currency symbol followed by a non-breaking space, as browsers render `pt-BR` BRL amounts.
const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Up to this amount (2^46) an `f64` resolves well below a cent, so it can be
/// rounded to whole cents with integer arithmetic.
const EXACT_CENTS_LIMIT: f64 = 70_368_744_177_664.0;

/// Format `amount` as a `pt-BR` currency string rounded to cents.
///
/// Thousands are grouped with `.` and the decimal separator is `,`.
/// Negative amounts are prefixed with `-`, e.g. `-R$ 20,00`.
pub fn format_value(amount: f64) -> String {
    let digits = to_decimal_string(amount.abs());
    let (reais, cents) = digits.split_once('.').unwrap_or((&digits, "00"));
    let is_zero = !digits.bytes().any(|digit| matches!(digit, b'1'..=b'9'));
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{CURRENCY_PREFIX}{},{cents}", group_thousands(reais))
}

/// Round a non-negative amount to cents, half away from zero, as `"1234.56"`.
fn to_decimal_string(amount: f64) -> String {
    if amount < EXACT_CENTS_LIMIT {
        let cents = (amount * 100.0).round() as u64;
        format!("{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{amount:.2}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}
