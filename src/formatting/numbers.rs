//! Two-decimal number formatting for result display.
//!
//! Numbers render with exactly two fraction digits and `,` digit grouping,
//! e.g. `84,375.00`. Non-finite values render as `∞`/`-∞`/`NaN`, or as
//! `inf`/`-inf`/`NaN` when only ASCII is allowed.

/// Format `value` with two decimals and thousands separators.
pub fn format_number(value: f64) -> String {
    format_number_with(value, true)
}

/// Like [`format_number`], choosing glyphs for non-finite values.
pub fn format_number_with(value: f64, unicode: bool) -> String {
    if let Some(symbol) = non_finite_symbol(value, unicode) {
        return symbol.to_string();
    }

    let (integer, fraction) = round_to_cents(&value.abs().to_string());
    let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{}.{fraction}", group_thousands(&integer))
}

/// Dollar amount: `$84,375.00`, `-$1,250.00`.
pub fn format_currency(value: f64, unicode: bool) -> String {
    if non_finite_symbol(value, unicode).is_some() {
        return format_number_with(value, unicode);
    }
    let formatted = format_number_with(value, unicode);
    match formatted.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${formatted}"),
    }
}

/// Percentage with two decimals: `377.74%`.
pub fn format_percent(value: f64, unicode: bool) -> String {
    format!("{}%", format_number_with(value, unicode))
}

fn non_finite_symbol(value: f64, unicode: bool) -> Option<&'static str> {
    match (value.is_nan(), value.is_infinite(), unicode) {
        (true, _, _) => Some("NaN"),
        (_, true, true) if value > 0.0 => Some("∞"),
        (_, true, true) => Some("-∞"),
        (_, true, false) if value > 0.0 => Some("inf"),
        (_, true, false) => Some("-inf"),
        _ => None,
    }
}

/// Round a plain decimal string (`f64` display form, no sign or exponent)
/// to two fraction digits, halves away from zero.
///
/// Working on the shortest decimal form rather than the binary value means
/// `1.005` rounds to `1.01`, as the figure the user typed suggests.
fn round_to_cents(decimal: &str) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<char> = integer
        .chars()
        .chain(fraction.chars().chain(std::iter::repeat('0')).take(2))
        .collect();

    if fraction.chars().nth(2).is_some_and(|d| d >= '5') {
        increment(&mut digits);
    }

    let split = digits.len() - 2;
    (
        digits[..split].iter().collect(),
        digits[split..].iter().collect(),
    )
}

/// Add one to the last digit, carrying leftwards.
fn increment(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    digits
        .chars()
        .enumerate()
        .fold(String::with_capacity(len + len / 3), |mut out, (i, c)| {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_and_rounds() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(5.625), "5.63");
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(999.999), "1,000.00");
        assert_eq!(format_number(84375.0), "84,375.00");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_rounding_follows_decimal_form() {
        assert_eq!(format_number(1.005), "1.01");
        assert_eq!(format_number(0.145), "0.15");
        assert_eq!(format_number(2.675), "2.68");
        assert_eq!(format_number(-1.005), "-1.01");
        assert_eq!(format_number(0.144999), "0.14");
        assert_eq!(format_number(99.995), "100.00");
        assert_eq!(format_number(1e21), "1,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-0.5), "-0.50");
        assert_eq!(format_number(-24625.0), "-24,625.00");
        assert_eq!(format_number(-0.001), "0.00");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number_with(f64::INFINITY, false), "inf");
        assert_eq!(format_currency(f64::NEG_INFINITY, false), "-inf");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(33000.0, true), "$33,000.00");
        assert_eq!(format_currency(-1234.5, true), "-$1,234.50");
        assert_eq!(format_currency(20.0, false), "$20.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(377.7372262773723, true), "377.74%");
        assert_eq!(format_percent(-12.0, true), "-12.00%");
    }
}
