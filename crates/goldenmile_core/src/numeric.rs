//! Number handling that matches what a browser form would send.
//!
//! Budget and size arrive as free text. They are read with the same rules as
//! JavaScript's `parseFloat`, and encoded on the wire the same way
//! `JSON.stringify` encodes numbers, so the backend sees identical payloads
//! from every front-end.

/// Parse the longest numeric prefix of `input`, like JavaScript `parseFloat`.
///
/// Leading whitespace is skipped. `Infinity` (optionally signed) is accepted.
/// Anything without a leading number yields `NaN`.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone "." is only part of the number when digits surround it
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Serde helpers that encode `f64` the way `JSON.stringify` does.
///
/// Integral values below 1e21 are written as plain integers and non-finite
/// values become `null`. Other values use serde_json's shortest round-trip
/// form, which names the same number but is spelled differently from
/// JavaScript at two edges: `1e-6` for `0.000001` and `1e21` for `1e+21`.
pub mod js_number {
    use serde::Serializer;

    /// JavaScript switches integral values to exponent notation here.
    const INTEGRAL_LIMIT: f64 = 1.0e21;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if !value.is_finite() {
            return serializer.serialize_none();
        }
        if value.fract() == 0.0
            && value.abs() < INTEGRAL_LIMIT
            && let Some(n) = shortest_integer(*value)
        {
            return serializer.serialize_i128(n);
        }
        serializer.serialize_f64(*value)
    }

    /// The shortest round-trip digits of an integral value, padded with
    /// zeros. Above 2^53 this differs from the exact binary value
    /// (`123456789012345680000`, not `123456789012345677824`).
    fn shortest_integer(value: f64) -> Option<i128> {
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e')?;
        let exponent: usize = exponent.parse().ok()?;
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        if digits.len() > exponent + 1 {
            return None;
        }

        let padded = format!("{digits}{}", "0".repeat(exponent + 1 - digits.len()));
        let n: i128 = padded.parse().ok()?;
        Some(if value < 0.0 { -n } else { n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("500000"), 500000.0);
        assert_eq!(parse_float("1.25"), 1.25);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float("+7"), 7.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("1.5.2"), 1.5);
        assert_eq!(parse_float("2000 sqft"), 2000.0);
    }

    #[test]
    fn test_parse_float_whitespace() {
        assert_eq!(parse_float("  3.5"), 3.5);
        assert_eq!(parse_float("\t\n42"), 42.0);
    }

    #[test]
    fn test_parse_float_partial_decimals() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-.").is_nan());
    }

    #[test]
    fn test_parse_float_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        // Incomplete exponent is ignored
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float("+Infinityx"), f64::INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_float_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("   ").is_nan());
    }

    #[derive(serde::Serialize)]
    struct Wrapper(#[serde(serialize_with = "js_number::serialize")] f64);

    fn encode(value: f64) -> String {
        serde_json::to_string(&Wrapper(value)).unwrap()
    }

    #[test]
    fn test_js_number_integral() {
        assert_eq!(encode(500000.0), "500000");
        assert_eq!(encode(-2.0), "-2");
        assert_eq!(encode(-0.0), "0");
    }

    #[test]
    fn test_js_number_large_integral() {
        assert_eq!(encode(1e20), "100000000000000000000");
        assert_eq!(encode(-123456789012345680000.0), "-123456789012345680000");
        assert_eq!(encode(1e21), "1e21");
    }

    #[test]
    fn test_js_number_small_fraction() {
        assert_eq!(encode(0.00001), "0.00001");
        assert_eq!(encode(0.000001), "1e-6");
        assert_eq!(encode(1e-7), "1e-7");
    }

    #[test]
    fn test_js_number_fractional() {
        assert_eq!(encode(1.25), "1.25");
        assert_eq!(encode(0.1), "0.1");
    }

    #[test]
    fn test_js_number_non_finite() {
        assert_eq!(encode(f64::NAN), "null");
        assert_eq!(encode(f64::INFINITY), "null");
        assert_eq!(encode(f64::NEG_INFINITY), "null");
    }
}
