/// Precision value meaning "default precision" (six fractional digits).
pub const DEFAULT_PRECISION: i32 = -1;

/// Largest accepted precision; enough digits for the smallest subnormal.
pub const MAX_PRECISION: i32 = 340;

const DEFAULT_DIGITS: usize = 6;

/// Render `num` with `prc` fractional digits, then drop trailing zeros and a
/// dangling decimal point.
///
/// `prc == -1` uses six digits and larger values are capped at
/// [`MAX_PRECISION`]. Zero (including a negative zero left by rounding)
/// always renders as `"0"`; integer renderings keep their digits.
pub fn format_float(num: f64, prc: i32) -> String {
    let digits = usize::try_from(prc.min(MAX_PRECISION)).unwrap_or(DEFAULT_DIGITS);
    let s = format!("{num:.digits$}");

    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };

    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format every component at the same precision.
pub fn format_vector(v: &[f64], prc: i32) -> Vec<String> {
    v.iter().map(|&x| format_float(x, prc)).collect()
}
