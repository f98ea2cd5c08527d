/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` (a length or a count) to `f64`.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_INT`.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    if value as u64 > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Renders a number in its canonical textual form.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`. Magnitudes of `1e21` and above, or below `1e-6`, switch to
/// exponent form with an explicit exponent sign. The non-finite values print
/// as `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use thoughtscript::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(123_456_789_012_345_680_000.0), "123456789012345680000");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-2.5e-7), "-2.5e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => text,
        };
    }

    value.to_string()
}

/// Smallest magnitude printed in exponent form.
const EXPONENT_FROM: f64 = 1e21;

/// Magnitudes below this are printed in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;
