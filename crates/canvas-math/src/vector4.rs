//! 4D vector type for homogeneous coordinates.

use crate::{Matrix4x4, Quaternion, Vector2, Vector3, scalar};
use bytemuck::{Pod, Zeroable};

/// A 4D vector of four `f32` components.
///
/// The layout is `#[repr(C)]` `{ x, y, z, w }`, 16 bytes, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vector4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0, 0).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0, 0).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector (0, 0, 1, 0).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector (0, 0, 0, 1).
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Promotes a [`Vector2`] with explicit `z` and `w`.
    #[inline]
    pub const fn from_vector2(v: Vector2, z: f32, w: f32) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// Promotes a [`Vector3`] with an explicit `w`.
    #[inline]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The first three components.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
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

    /// Scales the vector to unit length (NaN for zero).
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
            scalar::min(self.w, other.w),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            scalar::max(self.x, other.x),
            scalar::max(self.y, other.y),
            scalar::max(self.z, other.z),
            scalar::max(self.w, other.w),
        )
    }

    /// Clamps each component to [min, max]; crossed ranges yield `min`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
            scalar::clamp(self.w, min.w, max.w),
        )
    }

    /// Linear interpolation between self and other (unclamped).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Reflects the vector off a hyperplane with the given unit normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Component-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.x.sqrt(), self.y.sqrt(), self.z.sqrt(), self.w.sqrt())
    }

    /// Transforms by a 4x4 matrix using the vector's own `w`.
    #[inline]
    pub fn transform(self, m: &Matrix4x4) -> Self {
        Self::new(
            self.x * m.m11 + self.y * m.m21 + self.z * m.m31 + self.w * m.m41,
            self.x * m.m12 + self.y * m.m22 + self.z * m.m32 + self.w * m.m42,
            self.x * m.m13 + self.y * m.m23 + self.z * m.m33 + self.w * m.m43,
            self.x * m.m14 + self.y * m.m24 + self.z * m.m34 + self.w * m.m44,
        )
    }

    /// Transforms a 2D point, promoted to `[x, y, 0, 1]`.
    #[inline]
    pub fn transform_vector2(v: Vector2, m: &Matrix4x4) -> Self {
        Self::transform_vector2_with(v, 0.0, 1.0, m)
    }

    /// Transforms a 2D vector promoted to `[x, y, z, w]`.
    ///
    /// With `w = 0` the translation row is ignored.
    #[inline]
    pub fn transform_vector2_with(v: Vector2, z: f32, w: f32, m: &Matrix4x4) -> Self {
        Self::from_vector2(v, z, w).transform(m)
    }

    /// Transforms a 3D point, promoted to `[x, y, z, 1]`.
    #[inline]
    pub fn transform_vector3(v: Vector3, m: &Matrix4x4) -> Self {
        Self::transform_vector3_with(v, 1.0, m)
    }

    /// Transforms a 3D vector promoted to `[x, y, z, w]`.
    #[inline]
    pub fn transform_vector3_with(v: Vector3, w: f32, m: &Matrix4x4) -> Self {
        Self::from_vector3(v, w).transform(m)
    }

    /// Rotates the xyz part by a quaternion; `w` is passed through.
    #[inline]
    pub fn transform_by_quaternion(self, q: Quaternion) -> Self {
        Self::from_vector3(self.xyz().transform_by_quaternion(q), self.w)
    }

    /// Rotates a 2D vector by a quaternion, yielding `[x', y', z', 1]`.
    #[inline]
    pub fn transform_vector2_by_quaternion(v: Vector2, q: Quaternion) -> Self {
        Self::transform_vector3_by_quaternion(Vector3::from_vector2(v, 0.0), q)
    }

    /// Rotates a 3D vector by a quaternion, yielding `[x', y', z', 1]`.
    #[inline]
    pub fn transform_vector3_by_quaternion(v: Vector3, q: Quaternion) -> Self {
        Self::from_vector3(v.transform_by_quaternion(q), 1.0)
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl_componentwise_ops!(Vector4 { x, y, z, w });
impl_vector_products!(Vector4 { x, y, z, w });
impl_index!(Vector4 { 0 => x, 1 => y, 2 => z, 3 => w });
impl_blittable!(Vector4, 4, ["x", "y", "z", "w"]);
