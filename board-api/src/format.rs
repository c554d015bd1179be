//! Display formatting for prices and large metrics.

/// Formats a value as US dollars with four fraction digits and thousands grouping.
///
/// `1234.5` becomes `$1,234.5000`, `-0.01` becomes `-$0.0100`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let fixed = format!("{:.4}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0000"));
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Formats a value in short compact notation (`999`, `1.2K`, `12K`, `1.5M`).
///
/// Values below 10 of their unit keep one fraction digit, larger ones are
/// rounded to an integer. Trailing `.0` is dropped.
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let mut unit_index = UNITS.iter().position(|(scale, _)| abs >= *scale);
    loop {
        let (scale, suffix) = match unit_index {
            Some(i) => UNITS[i],
            None => (1.0, ""),
        };
        let rounded = round_significant(abs / scale);
        // 999_950 rounds to 1000K; promote to the next unit instead.
        if rounded >= 1000.0 {
            if let Some(i) = unit_index {
                if i > 0 {
                    unit_index = Some(i - 1);
                    continue;
                }
            } else {
                unit_index = Some(UNITS.len() - 1);
                continue;
            }
        }
        let text = if rounded < 10.0 {
            trim_zero_fraction(format!("{:.1}", rounded))
        } else {
            format!("{:.0}", rounded)
        };
        if text == "0" {
            return text;
        }
        return format!("{}{}{}", sign, text, suffix);
    }
}

fn round_significant(scaled: f64) -> f64 {
    if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    }
}

fn trim_zero_fraction(text: String) -> String {
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.0000");
        assert_eq!(format_currency(0.01234), "$0.0123");
        assert_eq!(format_currency(1234.5), "$1,234.5000");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.0000");
        assert_eq!(format_currency(-0.01), "-$0.0100");
        assert_eq!(format_currency(-0.00001), "$0.0000");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1234.0), "1.2K");
        assert_eq!(format_compact(12_345.0), "12K");
        assert_eq!(format_compact(123_456.0), "123K");
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(2_000_000_000.0), "2B");
        assert_eq!(format_compact(1e12), "1T");
        assert_eq!(format_compact(-4_200.0), "-4.2K");
    }

    #[test]
    fn test_format_compact_promotes_rounded_unit() {
        assert_eq!(format_compact(999_950.0), "1M");
        assert_eq!(format_compact(999.96), "1K");
    }
}
