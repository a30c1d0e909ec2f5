//! 3x2 matrix type for 2D affine transforms.
//!
//! [`Matrix3x2`] is the transform type of the 2D drawing API: every
//! rotation, scale, skew and translation applied to geometry is one of
//! these.
//!
//! # Convention
//!
//! Matrices are **row-major** and transform **row vectors** on the left.
//! The implicit third column is `[0, 0, 1]`:
//!
//! ```text
//!                 | m11 m12 0 |
//! [x y 1]    *    | m21 m22 0 |   =   [x' y' 1]
//!                 | m31 m32 1 |
//! ```
//!
//! so `a * b` applies `a` first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::{Matrix3x2, Vector2};
//!
//! let m = Matrix3x2::create_scale(Vector2::new(2.0, 2.0))
//!     * Matrix3x2::create_translation(Vector2::new(1.0, 0.0));
//! assert_eq!(Vector2::new(1.0, 1.0).transform(&m), Vector2::new(3.0, 2.0));
//! ```

use crate::{Vector2, scalar};
use bytemuck::{Pod, Zeroable};
use canvas_core::{Error, Result};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Mul, MulAssign};
use tracing::trace;

/// Angular tolerance for snapping rotations to right angles: 0.001°.
const SNAP_EPSILON: f64 = 0.001 * PI / 180.0;

/// A 2D affine transform.
///
/// The layout is `#[repr(C)]` `{ m11, m12, m21, m22, m31, m32 }`, 24 bytes,
/// no padding. `m31`/`m32` hold the translation.
///
/// # Example
///
/// ```rust
/// use canvas_math::{Matrix3x2, Vector2};
///
/// let m = Matrix3x2::create_rotation(std::f32::consts::FRAC_PI_2);
/// // Right angles are exact, not approximations
/// assert_eq!(m, Matrix3x2::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x2 {
    /// Row 1, column 1
    pub m11: f32,
    /// Row 1, column 2
    pub m12: f32,
    /// Row 2, column 1
    pub m21: f32,
    /// Row 2, column 2
    pub m22: f32,
    /// Row 3, column 1 (x translation)
    pub m31: f32,
    /// Row 3, column 2 (y translation)
    pub m32: f32,
}

impl Matrix3x2 {
    /// Identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Matrix with every element NaN; the output of a failed inversion.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN, f32::NAN, f32::NAN);

    /// Creates a matrix from its six elements in memory order.
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, m31: f32, m32: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            m31,
            m32,
        }
    }

    /// Creates from an array in memory order.
    #[inline]
    pub const fn from_array(a: [f32; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Converts to an array in memory order.
    #[inline]
    pub const fn to_array(self) -> [f32; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.m31, self.m32]
    }

    /// Returns `true` if this is exactly the identity (no tolerance).
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The translation row.
    #[inline]
    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.m31, self.m32)
    }

    /// Replaces the translation row.
    #[inline]
    pub fn set_translation(&mut self, translation: Vector2) {
        self.m31 = translation.x;
        self.m32 = translation.y;
    }

    /// Creates a translation.
    #[inline]
    pub fn create_translation(position: Vector2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, position.x, position.y)
    }

    /// Creates a non-uniform scale about the origin.
    #[inline]
    pub fn create_scale(scales: Vector2) -> Self {
        Self::new(scales.x, 0.0, 0.0, scales.y, 0.0, 0.0)
    }

    /// Creates a non-uniform scale that leaves `center` fixed.
    #[inline]
    pub fn create_scale_with_center(scales: Vector2, center: Vector2) -> Self {
        Self::new(
            scales.x,
            0.0,
            0.0,
            scales.y,
            center.x * (1.0 - scales.x),
            center.y * (1.0 - scales.y),
        )
    }

    /// Creates a uniform scale about the origin.
    #[inline]
    pub fn create_scale_uniform(scale: f32) -> Self {
        Self::create_scale(Vector2::splat(scale))
    }

    /// Creates a uniform scale that leaves `center` fixed.
    #[inline]
    pub fn create_scale_uniform_with_center(scale: f32, center: Vector2) -> Self {
        Self::create_scale_with_center(Vector2::splat(scale), center)
    }

    /// Creates a skew about the origin.
    ///
    /// The linear part is `{1, tan(radians_y), tan(radians_x), 1}`.
    #[inline]
    pub fn create_skew(radians_x: f32, radians_y: f32) -> Self {
        Self::create_skew_with_center(radians_x, radians_y, Vector2::ZERO)
    }

    /// Creates a skew that leaves `center` fixed.
    pub fn create_skew_with_center(radians_x: f32, radians_y: f32, center: Vector2) -> Self {
        let x_tan = radians_x.tan();
        let y_tan = radians_y.tan();

        Self::new(
            1.0,
            y_tan,
            x_tan,
            1.0,
            -center.y * x_tan,
            -center.x * y_tan,
        )
    }

    /// Creates a rotation about the origin.
    ///
    /// Angles within 0.001° of a multiple of 90° (after reduction modulo
    /// 2π) produce exact axis-aligned matrices.
    #[inline]
    pub fn create_rotation(radians: f32) -> Self {
        Self::create_rotation_with_center(radians, Vector2::ZERO)
    }

    /// Creates a rotation that leaves `center` fixed.
    ///
    /// Equivalent to `T(-center) * R(radians) * T(center)`.
    pub fn create_rotation_with_center(radians: f32, center: Vector2) -> Self {
        let (s, c) = snapped_sin_cos(radians);

        Self::new(
            c,
            s,
            -s,
            c,
            center.x * (1.0 - c) + center.y * s,
            center.y * (1.0 - c) - center.x * s,
        )
    }

    /// Computes the determinant of the 2x2 linear part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11 * self.m22 - self.m21 * self.m12
    }

    /// Computes the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when the determinant is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canvas_math::{Matrix3x2, Vector2};
    ///
    /// let m = Matrix3x2::create_scale(Vector2::new(2.0, 4.0));
    /// let inv = m.invert().unwrap();
    /// assert_eq!(m * inv, Matrix3x2::IDENTITY);
    ///
    /// assert!(Matrix3x2::create_scale(Vector2::ZERO).invert().is_err());
    /// ```
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            trace!(determinant = det, "Matrix3x2::invert: singular");
            return Err(Error::singular_matrix(det));
        }

        let inv_det = 1.0 / det;

        Ok(Self::new(
            self.m22 * inv_det,
            -self.m12 * inv_det,
            -self.m21 * inv_det,
            self.m11 * inv_det,
            (self.m21 * self.m32 - self.m31 * self.m22) * inv_det,
            (self.m31 * self.m12 - self.m11 * self.m32) * inv_det,
        ))
    }

    /// Inverts into `result`, returning whether the matrix was invertible.
    ///
    /// On failure every element of `result` is set to NaN rather than left
    /// untouched.
    pub fn invert_into(&self, result: &mut Self) -> bool {
        match self.invert() {
            Ok(inv) => {
                *result = inv;
                true
            }
            Err(_) => {
                *result = Self::NAN;
                false
            }
        }
    }

    /// Composes two transforms: `self` first, then `other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
            self.m31 * other.m11 + self.m32 * other.m21 + other.m31,
            self.m31 * other.m12 + self.m32 * other.m22 + other.m32,
        )
    }

    /// Component-wise linear interpolation (unclamped).
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            scalar::lerp(self.m11, other.m11, t),
            scalar::lerp(self.m12, other.m12, t),
            scalar::lerp(self.m21, other.m21, t),
            scalar::lerp(self.m22, other.m22, t),
            scalar::lerp(self.m31, other.m31, t),
            scalar::lerp(self.m32, other.m32, t),
        )
    }

    /// Transforms a point (translation applies).
    #[inline]
    pub fn transform_point(&self, point: Vector2) -> Vector2 {
        point.transform(self)
    }

    /// Transforms a direction (translation ignored).
    #[inline]
    pub fn transform_vector(&self, vector: Vector2) -> Vector2 {
        vector.transform_normal(self)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }
}

/// Sine and cosine of `radians`, exact at multiples of a right angle.
fn snapped_sin_cos(radians: f32) -> (f32, f32) {
    let r = scalar::wrap_angle(radians);

    if r > -SNAP_EPSILON && r < SNAP_EPSILON {
        (0.0, 1.0)
    } else if r > FRAC_PI_2 - SNAP_EPSILON && r < FRAC_PI_2 + SNAP_EPSILON {
        (1.0, 0.0)
    } else if r < -PI + SNAP_EPSILON || r > PI - SNAP_EPSILON {
        (0.0, -1.0)
    } else if r > -FRAC_PI_2 - SNAP_EPSILON && r < -FRAC_PI_2 + SNAP_EPSILON {
        (-1.0, 0.0)
    } else {
        let (s, c) = r.sin_cos();
        (s as f32, c as f32)
    }
}

impl Default for Matrix3x2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_componentwise_ops!(Matrix3x2 { m11, m12, m21, m22, m31, m32 });
impl_blittable!(Matrix3x2, 6, ["m11", "m12", "m21", "m22", "m31", "m32"]);

// Matrix3x2 * Matrix3x2
impl Mul for Matrix3x2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Matrix3x2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}
