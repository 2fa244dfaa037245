// Parsing and formatting helpers shared by the loader and report output,
// plus the guarded division used for every displayed ratio.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64`, tolerating the formatting noise of
/// spreadsheet exports (surrounding spaces, thousands separators).
///
/// Returns `None` for a missing or blank value, for anything that contains
/// letters or otherwise fails to parse, and for values that overflow `f64`.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(',', "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Trimmed, non-empty text or `None`.
pub fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// `numerator / denominator`, or `0.0` when the denominator is zero or the
/// result is not finite.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let r = numerator / denominator;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

pub fn percent_of(part: f64, whole: f64) -> f64 {
    safe_ratio(part, whole) * 100.0
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals with `1,234,567.89` style grouping.
    if !n.is_finite() {
        return n.to_string();
    }
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Beyond `i64` the digits are printed ungrouped.
    let mut res = match int_part.parse::<i64>() {
        Ok(v) => v.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    }
    // No sign for values that round to zero.
    let rounds_to_zero = s.chars().all(|c| c == '0' || c == '.');
    if n.is_sign_negative() && !rounds_to_zero {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_safe() {
        assert_eq!(parse_f64_safe(Some(" 1,250.50 ")), Some(1250.5));
        assert_eq!(parse_f64_safe(Some("-40")), Some(-40.0));
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(Some("12abc")), None);
        assert_eq!(parse_f64_safe(None), None);
        let overflow = format!("1{}", "0".repeat(400));
        assert_eq!(parse_f64_safe(Some(&overflow)), None);
        assert_eq!(parse_f64_safe(Some("1e400")), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  x ".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_safe_ratio_zero_denominator() {
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq!(safe_ratio(0.0, 0.0), 0.0);
        assert_eq!(safe_ratio(-5.0, -0.0), 0.0);
        assert_eq!(safe_ratio(6.0, 3.0), 2.0);
        assert_eq!(percent_of(1.0, 4.0), 25.0);
        assert_eq!(percent_of(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-1500.0, 2), "-1,500.00");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(42.0, 0), "42");
    }

    #[test]
    fn test_format_number_non_finite_and_huge() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(format_number(1e20, 0), "100000000000000000000");
        assert_eq!(format_number(-1e20, 1), "-100000000000000000000.0");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(9855), "9,855");
    }
}
