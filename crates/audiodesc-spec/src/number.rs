//! Number formatting shared by the description renderers.

/// Significant digits used by [`format_general`].
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a float like C's `%g`: six significant digits, trailing zeros
/// trimmed, scientific notation for very large or very small magnitudes.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the significant digits can bump the exponent (999999.7 -> 1e6),
    // so take the exponent from the rounded scientific rendering.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats a sample rate: integral rates without decimals, others with two.
pub fn format_sample_rate(rate: f64) -> String {
    if rate.is_finite() && rate.fract() == 0.0 {
        format!("{:.0}", rate)
    } else {
        format!("{:.2}", rate)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_plain_values() {
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(44100.0), "44100");
        assert_eq!(format_general(0.5), "0.5");
        assert_eq!(format_general(-2.25), "-2.25");
        assert_eq!(format_general(123456.0), "123456");
    }

    #[test]
    fn test_general_rounds_to_six_digits() {
        assert_eq!(format_general(1.0000001), "1");
        assert_eq!(format_general(3.14159265), "3.14159");
        assert_eq!(format_general(0.0001234567), "0.000123457");
    }

    #[test]
    fn test_general_scientific() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(999999.7), "1e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_general_special_values() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_sample_rate() {
        assert_eq!(format_sample_rate(44100.0), "44100");
        assert_eq!(format_sample_rate(0.0), "0");
        assert_eq!(format_sample_rate(22050.5), "22050.50");
        assert_eq!(format_sample_rate(11025.126), "11025.13");
    }
}
