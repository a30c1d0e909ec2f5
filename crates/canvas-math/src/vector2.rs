//! 2D vector type for points, offsets and sizes.
//!
//! [`Vector2`] is the workhorse of the 2D API: positions, translation
//! offsets, scale factors and rotation centers are all `Vector2` values.
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::{Matrix3x2, Vector2};
//!
//! let p = Vector2::new(10.0, 20.0);
//! let m = Matrix3x2::create_translation(Vector2::new(5.0, 5.0));
//! assert_eq!(p.transform(&m), Vector2::new(15.0, 25.0));
//! ```

use crate::{Matrix3x2, Matrix4x4, Quaternion, scalar};
use bytemuck::{Pod, Zeroable};

/// A 2D vector of two `f32` components.
///
/// The layout is `#[repr(C)]` `{ x, y }`, 8 bytes, no padding.
///
/// # Example
///
/// ```rust
/// use canvas_math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v[0], 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Squared Euclidean distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Scales the vector to unit length.
    ///
    /// This is a plain division by [`length`](Self::length): a zero vector
    /// yields NaN in both components, and a vector whose length overflows
    /// to infinity (such as `(f32::MAX, f32::MAX)`) yields zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canvas_math::Vector2;
    ///
    /// assert_eq!(Vector2::new(0.0, 2.0).normalize(), Vector2::UNIT_Y);
    /// assert!(Vector2::ZERO.normalize().x.is_nan());
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(scalar::min(self.x, other.x), scalar::min(self.y, other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(scalar::max(self.x, other.x), scalar::max(self.y, other.y))
    }

    /// Clamps each component to [min, max].
    ///
    /// Where `min > max` for a component, that component becomes `min`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
        )
    }

    /// Linear interpolation between self and other.
    ///
    /// `t` is not clamped; values outside [0, 1] extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Reflects the vector off a surface with the given unit normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt())
    }

    /// Transforms a point by a 2D affine matrix.
    ///
    /// The vector is a row vector `[x, y, 1]`, so translation applies.
    #[inline]
    pub fn transform(self, m: &Matrix3x2) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + m.m31,
            self.x * m.m12 + self.y * m.m22 + m.m32,
        )
    }

    /// Transforms a point by a 4x4 matrix, as `[x, y, 0, 1]`.
    #[inline]
    pub fn transform_mat4(self, m: &Matrix4x4) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + m.m41,
            self.x * m.m12 + self.y * m.m22 + m.m42,
        )
    }

    /// Transforms a direction by a 2D affine matrix, ignoring translation.
    #[inline]
    pub fn transform_normal(self, m: &Matrix3x2) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21,
            self.x * m.m12 + self.y * m.m22,
        )
    }

    /// Transforms a direction by a 4x4 matrix, as `[x, y, 0, 0]`.
    #[inline]
    pub fn transform_normal_mat4(self, m: &Matrix4x4) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21,
            self.x * m.m12 + self.y * m.m22,
        )
    }

    /// Rotates the vector (as `[x, y, 0]`) by a quaternion.
    ///
    /// The z component of the rotated vector is discarded.
    #[inline]
    pub fn transform_by_quaternion(self, q: Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let wz2 = q.w * z2;
        let xx2 = q.x * x2;
        let xy2 = q.x * y2;
        let yy2 = q.y * y2;
        let zz2 = q.z * z2;

        Self::new(
            self.x * (1.0 - yy2 - zz2) + self.y * (xy2 - wz2),
            self.x * (xy2 + wz2) + self.y * (1.0 - xx2 - zz2),
        )
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl_componentwise_ops!(Vector2 { x, y });
impl_vector_products!(Vector2 { x, y });
impl_index!(Vector2 { 0 => x, 1 => y });
impl_blittable!(Vector2, 2, ["x", "y"]);
