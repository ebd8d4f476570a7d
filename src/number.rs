//! Lenient number handling for field text.
//!
//! Field values are strings owned by the host document. Reading them is
//! forgiving: leading whitespace is skipped and parsing stops at the first
//! character that can't continue the number, so `"42 €"` reads as 42 and
//! `"abc"` doesn't read at all.

/// Parses a leading integer. A `0x` prefix switches to hexadecimal, and
/// fractions are truncated (`"3.9"` is 3). Magnitudes beyond `i64` saturate.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);

    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };

    let digits = digits.chars().map_while(|c| c.to_digit(radix)).collect::<Vec<_>>();

    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;

    for d in digits {
        let d = i64::from(d);
        value = value.saturating_mul(i64::from(radix));
        value = if negative { value.saturating_sub(d) } else { value.saturating_add(d) };
    }

    Some(value)
}

/// Parses a leading decimal number, with optional fraction and exponent.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (negative, rest) = split_sign(s);

    if rest.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;

        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }

        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);

        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let magnitude = rest[..end].parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Formats a number the way it is written into field values and inline
/// styles: integral values without a fraction, `NaN` and `Infinity` spelled
/// out, and no negative zero. Magnitudes from 1e21 up and below 1e-6 use
/// exponent notation with an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    }
    else if value.is_infinite() {
        if value > 0.0 { "Infinity".into() } else { "-Infinity".into() }
    }
    else if value == 0.0 {
        "0".into()
    }
    else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);

        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    }
    else {
        value.to_string()
    }
}

/// `format_number(value) + "%"`.
pub fn format_percent(value: f64) -> String { format!("{}%", format_number(value)) }

/// Rounds half-way cases towards positive infinity, so -2.5 becomes -2.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();

    if value - floor >= 0.5 {
        floor + 1.0
    }
    else {
        floor
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    }
    else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn count_digits(bytes: &[u8]) -> usize { bytes.iter().take_while(|b| b.is_ascii_digit()).count() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefixes() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -17"), Some(-17));
        assert_eq!(parse_int("+8kg"), Some(8));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("NaN"), None);
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("0x10"), Some(16));
        assert_eq!(parse_int("-0XfF!"), Some(-255));
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn float_prefixes() {
        assert_eq!(parse_float("60%"), Some(60.0));
        assert_eq!(parse_float("33.5%"), Some(33.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("1e2px"), Some(100.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("-Infinity%"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("NaN%"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_number(60.0), "60");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_percent(f64::INFINITY), "Infinity%");
        assert_eq!(format_percent(20.0), "20%");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }
}
