//! 3D vector type for points, directions and plane normals.
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::Vector3;
//!
//! let n = Vector3::UNIT_X.cross(Vector3::UNIT_Y);
//! assert_eq!(n, Vector3::UNIT_Z);
//! ```

use crate::{Matrix4x4, Quaternion, scalar};
use bytemuck::{Pod, Zeroable};

/// A 3D vector of three `f32` components.
///
/// The layout is `#[repr(C)]` `{ x, y, z }`, 12 bytes, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Extends a [`Vector2`](crate::Vector2) with a z component.
    #[inline]
    pub const fn from_vector2(v: crate::Vector2, z: f32) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// Right-handed: `UNIT_X.cross(UNIT_Y) == UNIT_Z`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    /// NaN for the zero vector, zero when the length overflows.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            scalar::min(self.x, other.x),
            scalar::min(self.y, other.y),
            scalar::min(self.z, other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
        )
    }

    /// Clamps each component to [min, max]; crossed ranges yield `min`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
        )
    }

    /// Linear interpolation between self and other (unclamped).
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
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt())
    }

    /// Transforms a point by a 4x4 matrix, as the row vector `[x, y, z, 1]`.
    ///
    /// No perspective divide is performed.
    #[inline]
    pub fn transform(self, m: &Matrix4x4) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + m.m43,
        )
    }

    /// Transforms a direction by a 4x4 matrix, as `[x, y, z, 0]`.
    #[inline]
    pub fn transform_normal(self, m: &Matrix4x4) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33,
        )
    }

    /// Rotates the vector by a quaternion.
    ///
    /// Closed form of `q * v * q⁻¹`; equal to transforming by
    /// [`Matrix4x4::create_from_quaternion`].
    #[inline]
    pub fn transform_by_quaternion(self, q: Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;

        let wx2 = q.w * x2;
        let wy2 = q.w * y2;
        let wz2 = q.w * z2;
        let xx2 = q.x * x2;
        let xy2 = q.x * y2;
        let xz2 = q.x * z2;
        let yy2 = q.y * y2;
        let yz2 = q.y * z2;
        let zz2 = q.z * z2;

        Self::new(
            self.x * (1.0 - yy2 - zz2) + self.y * (xy2 - wz2) + self.z * (xz2 + wy2),
            self.x * (xy2 + wz2) + self.y * (1.0 - xx2 - zz2) + self.z * (yz2 - wx2),
            self.x * (xz2 - wy2) + self.y * (yz2 + wx2) + self.z * (1.0 - xx2 - yy2),
        )
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl_componentwise_ops!(Vector3 { x, y, z });
impl_vector_products!(Vector3 { x, y, z });
impl_index!(Vector3 { 0 => x, 1 => y, 2 => z });
impl_blittable!(Vector3, 3, ["x", "y", "z"]);
