//! Scalar helpers shared by the vector, matrix and quaternion types.
//!
//! These are the per-component building blocks: every component-wise
//! vector operation is one of these applied to each lane. They use plain
//! comparisons rather than [`f32::min`]/[`f32::max`] so that NaN operands
//! flow through the same way on every lane.
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::{clamp, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
//! ```

use std::f64::consts::TAU;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use canvas_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smaller of two values; returns `b` when the comparison is false.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// Larger of two values; returns `b` when the comparison is false.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Clamps a value to the range [min, max].
///
/// The upper bound is applied first, then the lower bound, so a crossed
/// range (`min > max`) always yields `min`.
///
/// # Example
///
/// ```rust
/// use canvas_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// // Crossed range resolves to min
/// assert_eq!(clamp(3.0, 5.0, 1.0), 5.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let v = if value > max { max } else { value };
    if v < min { min } else { v }
}

/// IEEE-754 remainder of `x / y`.
///
/// Unlike `%`, the quotient is rounded to the nearest integer (ties to
/// even), so the result lies in `[-y/2, y/2]`.
#[inline]
pub fn ieee_remainder(x: f64, y: f64) -> f64 {
    x - (x / y).round_ties_even() * y
}

/// Reduces an angle in radians to `[-π, π]`.
///
/// The reduction is carried out in `f64` so that exact multiples of a
/// right angle stay recognisable after the subtraction.
#[inline]
pub fn wrap_angle(radians: f32) -> f64 {
    ieee_remainder(radians as f64, TAU)
}
