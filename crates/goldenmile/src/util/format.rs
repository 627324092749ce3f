//! Text formatting for the terminal.

use goldenmile_core::parse_float;

/// Make backend text safe to draw in a terminal cell grid.
///
/// Line endings become `\n`, tabs become four spaces and any other control
/// character is dropped. Everything else is kept as-is.
pub fn terminal_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Group digits in threes: `1234567` -> `1,234,567`.
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// How the backend will read a budget entry, e.g. `"1.5abc"` -> `"1.50 Cr"`.
pub fn budget_hint(input: &str) -> Option<String> {
    let value = parse_float(input);
    value.is_finite().then(|| format!("{:.2} Cr", value))
}

/// How the backend will read a size entry, e.g. `"1200"` -> `"1,200 sqft"`.
pub fn size_hint(input: &str) -> Option<String> {
    let value = parse_float(input);
    if !value.is_finite() {
        return None;
    }
    let sign = if value < 0.0 { "-" } else { "" };
    Some(format!(
        "{}{} sqft",
        sign,
        with_thousands(value.abs().round() as u64)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_safe() {
        assert_eq!(terminal_safe("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(terminal_safe("x\ty"), "x    y");
        assert_eq!(terminal_safe("bell\u{7}!"), "bell!");
        assert_eq!(terminal_safe("Analysis ready ✔"), "Analysis ready ✔");
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_hints_follow_lenient_parsing() {
        assert_eq!(budget_hint("1.5abc").as_deref(), Some("1.50 Cr"));
        assert_eq!(budget_hint("abc"), None);
        assert_eq!(size_hint(" 1200").as_deref(), Some("1,200 sqft"));
        assert_eq!(size_hint("Infinity"), None);
    }
}
