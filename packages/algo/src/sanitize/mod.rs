//! Data Sanitization
//!
//! Guards engine inputs that arrive from the caller as raw numbers.

/// Check whether an XP input is unusable (NaN, Inf or negative)
pub fn is_invalid_xp(xp: f64) -> bool {
    !xp.is_finite() || xp < 0.0
}

/// Clamp a raw XP grant into `0..=max`, rounding to the nearest integer.
///
/// NaN, infinities and negative values become zero so a bad caller can never
/// drive `current_xp` below zero.
pub fn sanitize_xp(xp: f64, max: u64) -> u64 {
    if is_invalid_xp(xp) {
        tracing::warn!(xp, "rejected invalid xp grant");
        return 0;
    }

    let rounded = xp.round();
    if rounded >= max as f64 {
        max
    } else {
        rounded as u64
    }
}
