//! Quaternion type for 3D rotations.
//!
//! Quaternions are stored as `(x, y, z, w)` with the vector part first.
//! Unit quaternions represent rotations; `q` and `-q` are the same
//! rotation, and interpolation always takes the shorter of the two arcs.
//!
//! # Composition
//!
//! `a * b` is the Hamilton product: rotating by it applies `b` first, then
//! `a`. [`Quaternion::concatenate`] reverses that, matching the
//! row-vector matrix order:
//!
//! ```rust
//! use canvas_math::{Matrix4x4, Quaternion, Vector3};
//! use approx::assert_abs_diff_eq;
//!
//! let a = Quaternion::create_from_axis_angle(Vector3::UNIT_X, 0.5);
//! let b = Quaternion::create_from_axis_angle(Vector3::UNIT_Y, 1.2);
//!
//! let m = Matrix4x4::create_from_quaternion(a) * Matrix4x4::create_from_quaternion(b);
//! assert_abs_diff_eq!(
//!     Matrix4x4::create_from_quaternion(a.concatenate(b)),
//!     m,
//!     epsilon = 1e-6
//! );
//! ```

use crate::{Matrix4x4, Vector3};
use bytemuck::{Pod, Zeroable};
use std::ops::{Div, DivAssign, Mul, MulAssign};

/// Below `1 - SLERP_EPSILON`, `cos(ω)` is treated as parallel and slerp
/// falls back to normalized linear interpolation.
const SLERP_EPSILON: f32 = 1e-6;

/// A quaternion of four `f32` components.
///
/// The layout is `#[repr(C)]` `{ x, y, z, w }`, 16 bytes, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quaternion {
    /// Identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    #[inline]
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns `true` if this is exactly the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length. All-NaN for the zero quaternion.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Negates the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length_squared`.
    ///
    /// All-NaN for the zero quaternion.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.length_squared())
    }

    /// Composes rotations in application order: `self` first, then
    /// `other`. Equal to `other * self`.
    #[inline]
    pub fn concatenate(self, other: Self) -> Self {
        other * self
    }

    /// Creates a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields
    /// `(0, 0, 0, cos(angle / 2))`.
    pub fn create_from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        let length_squared = axis.length_squared();
        let axis = if length_squared == 0.0 {
            Vector3::ZERO
        } else {
            axis / length_squared.sqrt()
        };

        Self::from_vector3(axis * s, c)
    }

    /// Creates a rotation from yaw (about Y), pitch (about X) and roll
    /// (about Z).
    ///
    /// Equal to `axis_angle(Y, yaw) * axis_angle(X, pitch) * axis_angle(Z, roll)`:
    /// roll is applied first, then pitch, then yaw.
    pub fn create_from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Extracts the rotation from the upper-left 3x3 of a matrix.
    ///
    /// The matrix is assumed to be a pure rotation. Uses the trace when it
    /// is positive, otherwise the largest diagonal element, so 180°
    /// rotations are handled.
    pub fn create_from_rotation_matrix(m: &Matrix4x4) -> Self {
        let trace = m.m11 + m.m22 + m.m33;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m23 - m.m32) * inv,
                (m.m31 - m.m13) * inv,
                (m.m12 - m.m21) * inv,
                s * 0.5,
            )
        } else if m.m11 >= m.m22 && m.m11 >= m.m33 {
            let s = (1.0 + m.m11 - m.m22 - m.m33).sqrt();
            let inv = 0.5 / s;
            Self::new(
                0.5 * s,
                (m.m12 + m.m21) * inv,
                (m.m13 + m.m31) * inv,
                (m.m23 - m.m32) * inv,
            )
        } else if m.m22 > m.m33 {
            let s = (1.0 + m.m22 - m.m11 - m.m33).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m21 + m.m12) * inv,
                0.5 * s,
                (m.m32 + m.m23) * inv,
                (m.m31 - m.m13) * inv,
            )
        } else {
            let s = (1.0 + m.m33 - m.m11 - m.m22).sqrt();
            let inv = 0.5 / s;
            Self::new(
                (m.m31 + m.m13) * inv,
                (m.m32 + m.m23) * inv,
                0.5 * s,
                (m.m12 - m.m21) * inv,
            )
        }
    }

    /// Normalized linear interpolation along the shorter arc.
    ///
    /// Returns exactly `self` at `t = 0` and exactly `other` (or `-other`
    /// when the arcs flip) at `t = 1`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };

        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }

        (self + (other - self) * t).normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to normalized linear interpolation when the inputs are
    /// nearly parallel. Endpoints are exact as for [`lerp`](Self::lerp).
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut cos_omega = self.dot(other);
        let other = if cos_omega < 0.0 {
            cos_omega = -cos_omega;
            -other
        } else {
            other
        };

        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }

        if cos_omega > 1.0 - SLERP_EPSILON {
            return (self * (1.0 - t) + other * t).normalize();
        }

        let omega = cos_omega.acos();
        let inv_sin = 1.0 / omega.sin();
        let s1 = ((1.0 - t) * omega).sin() * inv_sin;
        let s2 = (t * omega).sin() * inv_sin;

        self * s1 + other * s2
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_componentwise_ops!(Quaternion { x, y, z, w });
impl_index!(Quaternion { 0 => x, 1 => y, 2 => z, 3 => w });
impl_blittable!(Quaternion, 4, ["x", "y", "z", "w"]);

// Hamilton product
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cx = self.y * rhs.z - self.z * rhs.y;
        let cy = self.z * rhs.x - self.x * rhs.z;
        let cz = self.x * rhs.y - self.y * rhs.x;
        let dot = self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;

        Self::new(
            self.x * rhs.w + rhs.x * self.w + cx,
            self.y * rhs.w + rhs.y * self.w + cy,
            self.z * rhs.w + rhs.z * self.w + cz,
            self.w * rhs.w - dot,
        )
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `a / b == a * b.inverse()`
impl Div for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Quaternion {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
