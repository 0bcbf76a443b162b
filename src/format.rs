use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Longest result text shown as-is; anything longer switches to scientific
/// notation.
pub const MAX_RESULT_LEN: usize = 15;
/// Digits after the decimal point of the scientific mantissa.
pub const SCIENTIFIC_PRECISION: usize = 5;

/// Renders a value as plain text.
///
/// Integers print all their digits. Reals print the shortest decimal that
/// reads back as the same `f64`: positionally with at least one fractional
/// digit while the decimal exponent is in `-4..16`, and as `d.ddde±XX`
/// outside that range.
///
/// # Example
/// ```
/// use calctk::{format::render_value, interpreter::value::core::Value};
///
/// assert_eq!(render_value(&Value::from(-42)), "-42");
/// assert_eq!(render_value(&Value::Real(2.0)), "2.0");
/// assert_eq!(render_value(&Value::Real(0.1 + 0.2)), "0.30000000000000004");
/// assert_eq!(render_value(&Value::Real(1e16)), "1e+16");
/// assert_eq!(render_value(&Value::Real(1.5e-5)), "1.5e-05");
/// ```
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Real(r) => render_real(*r),
    }
}

/// Renders an `f64` using the shortest round-trip digits.
fn render_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{sign}0.0");
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let body = if (-4..16).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{first}.{rest}")
        };
        format!("{mantissa}e{}", signed_exponent(exponent))
    };
    format!("{sign}{body}")
}

/// Splits a positive finite `f64` into its shortest significant digits and
/// the decimal exponent of the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Lays out significant digits positionally for a decimal exponent in
/// `-4..16`.
fn positional(digits: &str, exponent: i32) -> String {
    match usize::try_from(exponent) {
        Ok(int_len) if digits.len() > int_len + 1 => {
            let (int_part, frac_part) = digits.split_at(int_len + 1);
            format!("{int_part}.{frac_part}")
        },
        Ok(int_len) => format!("{digits:0<width$}.0", width = int_len + 1),
        Err(_) => {
            let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
            format!("0.{zeros}{digits}")
        },
    }
}

/// Formats an exponent with an explicit sign and at least two digits.
fn signed_exponent(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{:02}", exponent.unsigned_abs())
}

/// Formats a number in scientific notation with five fractional digits, as
/// `1.23457E+20`.
///
/// # Example
/// ```
/// use calctk::format::to_scientific;
///
/// assert_eq!(to_scientific(123_456_789_012_345_678.0), "1.23457E+17");
/// assert_eq!(to_scientific(0.000_012_345_678), "1.23457E-05");
/// assert_eq!(to_scientific(-1e100), "-1.00000E+100");
/// ```
#[must_use]
pub fn to_scientific(value: f64) -> String {
    let text = format!("{value:.precision$E}", precision = SCIENTIFIC_PRECISION);
    match text.split_once('E') {
        Some((mantissa, exponent)) => {
            format!("{mantissa}E{}", signed_exponent(exponent.parse().unwrap_or(0)))
        },
        None => text,
    }
}

/// Applies the display length rule to a rendered result.
///
/// Text of at most [`MAX_RESULT_LEN`] characters is returned unchanged.
/// Longer text is read back as a number and rewritten by
/// [`to_scientific`].
///
/// # Errors
/// - `InvalidNumber` if long text does not read back as a number.
/// - `NonFiniteResult` if it reads back as an infinity or NaN.
///
/// # Example
/// ```
/// use calctk::format::format_result;
///
/// assert_eq!(format_result("2.5").unwrap(), "2.5");
/// assert_eq!(format_result("1606938044258990275541962092341162602522202993782792835301376")
///                .unwrap(),
///            "1.60694E+60");
/// assert!(format_result("(1.0000000000000002+1.7320508075688772j)").is_err());
/// ```
pub fn format_result(text: &str) -> Result<String, RuntimeError> {
    if text.chars().count() <= MAX_RESULT_LEN {
        return Ok(text.to_string());
    }

    let value: f64 = text.trim()
                         .parse()
                         .map_err(|_| RuntimeError::InvalidNumber { text: text.to_string() })?;
    if !value.is_finite() {
        return Err(RuntimeError::NonFiniteResult { value });
    }
    Ok(to_scientific(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_range_boundaries() {
        assert_eq!(render_real(1e15), "1000000000000000.0");
        assert_eq!(render_real(1e16), "1e+16");
        assert_eq!(render_real(0.0001), "0.0001");
        assert_eq!(render_real(0.00001), "1e-05");
        assert_eq!(render_real(123.456), "123.456");
        assert_eq!(render_real(-0.0), "-0.0");
    }

    #[test]
    fn scientific_exponents_are_padded() {
        assert_eq!(to_scientific(1.0), "1.00000E+00");
        assert_eq!(to_scientific(2.5e-7), "2.50000E-07");
        assert_eq!(to_scientific(1e300), "1.00000E+300");
    }

    #[test]
    fn short_text_is_untouched() {
        for text in ["0", "-7", "3.14159", "1e+16", "abc", "123456789012345"] {
            assert_eq!(format_result(text).unwrap(), text);
        }
    }

    #[test]
    fn long_text_switches_to_scientific() {
        assert_eq!(format_result("1234567890123456").unwrap(), "1.23457E+15");
        assert_eq!(format_result("0.30000000000000004").unwrap(), "3.00000E-01");
        assert_eq!(format_result("-9223372036854775808").unwrap(), "-9.22337E+18");
    }

    #[test]
    fn long_text_that_is_not_a_number_fails() {
        assert!(matches!(format_result("not a number at all"),
                         Err(RuntimeError::InvalidNumber { .. })));
        assert!(matches!(format_result(&"9".repeat(400)),
                         Err(RuntimeError::NonFiniteResult { .. })));
    }
}
