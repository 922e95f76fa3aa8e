//! Shortest-form float formatting with Go `%v` exponent rules.

/// Format `v` the way Go's `%v` verb does.
///
/// ## Notes
/// - Uses the shortest digit string that round-trips (Rust's `{:e}` already produces it).
/// - Switches to exponent notation when the decimal exponent is below `-4` or at least `6`; the exponent has
///   an explicit sign and at least two digits (`1e+06`, `1.5e-07`).
/// - Non-finite values render as `NaN`, `+Inf` and `-Inf`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{v:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if !(-4..6).contains(&exp) {
        exponent_form(&digits, exp)
    } else {
        decimal_form(&digits, exp)
    };
    format!("{sign}{body}")
}

fn exponent_form(digits: &str, exp: i32) -> String {
    let (head, tail) = digits.split_at(1);
    let exp_sign = if exp < 0 { '-' } else { '+' };
    if tail.is_empty() {
        format!("{head}e{exp_sign}{:02}", exp.abs())
    } else {
        format!("{head}.{tail}e{exp_sign}{:02}", exp.abs())
    }
}

fn decimal_form(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "-0");
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-2.25), "-2.25");
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(123456.0), "123456");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.0001), "0.0001");
    }

    #[test]
    fn test_exponent_values() {
        assert_eq!(format_float(1e6), "1e+06");
        assert_eq!(format_float(1234567.0), "1.234567e+06");
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1e100), "1e+100");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    }
}
