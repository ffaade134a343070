//! Angle normalization.

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

/// Folds an angle into `[0, 360)` using the Euclidean remainder.
///
/// Non-finite input is returned unchanged.
///
/// ```rust
/// use pixrot_math::normalize_degrees;
///
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// ```
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return degrees;
    }
    let r = degrees.rem_euclid(FULL_TURN);
    // Tiny negative inputs can round up to exactly 360.
    if r >= FULL_TURN { 0.0 } else { r }
}

/// Integer variant of [`normalize_degrees`].
#[inline]
pub fn normalize_degrees_i32(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}
