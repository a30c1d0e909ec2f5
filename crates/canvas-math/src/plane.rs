//! Plane in 3D space, stored as a normal and a signed offset.
//!
//! A point `p` lies on the plane when `normal · p + d == 0`.

use crate::{Matrix4x4, Quaternion, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};

/// A plane `{ normal, d }`.
///
/// The layout is `#[repr(C)]` `{ normal.x, normal.y, normal.z, d }`,
/// 16 bytes, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane {
    /// Plane normal; not necessarily unit length
    pub normal: Vector3,
    /// Signed distance term
    pub d: f32,
}

impl Plane {
    /// Creates a plane from normal components and the offset.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, d: f32) -> Self {
        Self::from_normal(Vector3::new(x, y, z), d)
    }

    /// Creates a plane from a normal and the offset.
    #[inline]
    pub const fn from_normal(normal: Vector3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Creates a plane from `(normal.x, normal.y, normal.z, d)`.
    #[inline]
    pub const fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Returns `(normal.x, normal.y, normal.z, d)`.
    #[inline]
    pub const fn to_vector4(self) -> Vector4 {
        Vector4::from_vector3(self.normal, self.d)
    }

    /// Creates from an array `[normal.x, normal.y, normal.z, d]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[normal.x, normal.y, normal.z, d]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// Creates the plane through three points.
    ///
    /// The normal follows the winding `p1 -> p2 -> p3` counter-clockwise
    /// and is unit length. Collinear points give a NaN plane.
    pub fn create_from_vertices(p1: Vector3, p2: Vector3, p3: Vector3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalize();
        Self::from_normal(normal, -normal.dot(p1))
    }

    /// Scales the plane so the normal has unit length.
    ///
    /// Planes that are already normalized (within `f32::EPSILON`) are
    /// returned unchanged.
    pub fn normalize(self) -> Self {
        let length_squared = self.normal.length_squared();
        if (length_squared - 1.0).abs() < f32::EPSILON {
            return self;
        }

        let inv = 1.0 / length_squared.sqrt();
        Self::from_normal(self.normal * inv, self.d * inv)
    }

    /// Dot product with a homogeneous 4D vector.
    #[inline]
    pub fn dot(self, value: Vector4) -> f32 {
        self.to_vector4().dot(value)
    }

    /// Evaluates the plane equation at a point (`w = 1`).
    ///
    /// Signed distance for normalized planes.
    #[inline]
    pub fn dot_coordinate(self, point: Vector3) -> f32 {
        self.normal.dot(point) + self.d
    }

    /// Dot product of the normal with a direction (`w = 0`).
    #[inline]
    pub fn dot_normal(self, direction: Vector3) -> f32 {
        self.normal.dot(direction)
    }

    /// Transforms the plane by a matrix.
    ///
    /// Planes are covariant, so this multiplies by the inverse transpose.
    /// A singular matrix gives an all-NaN plane.
    pub fn transform(self, m: &Matrix4x4) -> Self {
        let mut inv = Matrix4x4::IDENTITY;
        m.invert_into(&mut inv);
        Self::from_vector4(self.to_vector4().transform(&inv.transpose()))
    }

    /// Rotates the plane by a unit quaternion.
    ///
    /// Equivalent to [`transform`](Self::transform) with the rotation
    /// matrix, without the inversion.
    #[inline]
    pub fn transform_by_quaternion(self, rotation: Quaternion) -> Self {
        Self::from_normal(self.normal.transform_by_quaternion(rotation), self.d)
    }
}

impl From<Vector4> for Plane {
    #[inline]
    fn from(v: Vector4) -> Self {
        Self::from_vector4(v)
    }
}

impl From<Plane> for Vector4 {
    #[inline]
    fn from(p: Plane) -> Self {
        p.to_vector4()
    }
}

impl_blittable!(Plane, 4, ["normal.x", "normal.y", "normal.z", "d"]);
