// File: crates/chart-data/src/decimal.rs
// Summary: Decimal-place counting and fixed-precision rounding for threshold output.

/// Largest decimal-place count reported; keeps results inside standard
/// numeric formatting limits.
pub const MAX_DECIMAL_PLACES: u32 = 20;

/// Count digits after the decimal point in `value`'s decimal rendering,
/// capped at [`MAX_DECIMAL_PLACES`].
///
/// Scientific notation is honoured: the exponent is subtracted from the
/// mantissa's fractional digit count, floored at zero (so `1.5e3` counts
/// as 0 and `1.5e-3` as 4).
pub fn decimal_places(value: f64) -> u32 {
    let repr = format!("{value}");
    let (mantissa, exponent) = match repr.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (repr.as_str(), 0),
    };
    let frac = mantissa.split_once('.').map_or(0, |(_, f)| f.len() as i32);
    (frac - exponent).clamp(0, MAX_DECIMAL_PLACES as i32) as u32
}

/// Round to `places` decimal digits, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
