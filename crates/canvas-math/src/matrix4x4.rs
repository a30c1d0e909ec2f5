//! 4x4 matrix type for 3D transforms and projections.
//!
//! # Convention
//!
//! Like [`Matrix3x2`], matrices are **row-major** and transform **row
//! vectors** on the left, so the translation lives in the fourth row
//! (`m41`, `m42`, `m43`) and `a * b` applies `a` first, then `b`:
//!
//! ```text
//!                   | m11 m12 m13 m14 |
//! [x y z w]    *    | m21 m22 m23 m24 |
//!                   | m31 m32 m33 m34 |
//!                   | m41 m42 m43 m44 |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::{Matrix4x4, Vector3};
//!
//! let m = Matrix4x4::create_scale_uniform(2.0)
//!     * Matrix4x4::create_translation(Vector3::new(1.0, 2.0, 3.0));
//! let p = Vector3::ONE.transform(&m);
//! assert_eq!(p, Vector3::new(3.0, 4.0, 5.0));
//! ```

use crate::{Matrix3x2, Plane, Quaternion, Vector3, Vector4, scalar};
use bytemuck::{Pod, Zeroable};
use canvas_core::{Error, Result};
use std::ops::{Mul, MulAssign};
use tracing::trace;

/// Tolerance used by billboard and decomposition degeneracy checks.
const DEGENERACY_EPSILON: f32 = 1e-4;

/// A 4x4 matrix of `f32` elements.
///
/// The layout is `#[repr(C)]` row-major `{ m11, m12, ..., m44 }`, 64 bytes,
/// no padding.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix4x4 {
    /// Row 1, column 1
    pub m11: f32,
    /// Row 1, column 2
    pub m12: f32,
    /// Row 1, column 3
    pub m13: f32,
    /// Row 1, column 4
    pub m14: f32,
    /// Row 2, column 1
    pub m21: f32,
    /// Row 2, column 2
    pub m22: f32,
    /// Row 2, column 3
    pub m23: f32,
    /// Row 2, column 4
    pub m24: f32,
    /// Row 3, column 1
    pub m31: f32,
    /// Row 3, column 2
    pub m32: f32,
    /// Row 3, column 3
    pub m33: f32,
    /// Row 3, column 4
    pub m34: f32,
    /// Row 4, column 1 (x translation)
    pub m41: f32,
    /// Row 4, column 2 (y translation)
    pub m42: f32,
    /// Row 4, column 3 (z translation)
    pub m43: f32,
    /// Row 4, column 4
    pub m44: f32,
}

/// Result of [`Matrix4x4::decompose`].
///
/// Recomposing as `scale * rotation * translation` reproduces the
/// original matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    /// Scale along each axis; one axis may be negative for reflections
    pub scale: Vector3,
    /// Rotation as a unit quaternion
    pub rotation: Quaternion,
    /// Translation row
    pub translation: Vector3,
}

impl Matrix4x4 {
    /// Identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_array([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Matrix with every element NaN; the output of a failed inversion.
    pub const NAN: Self = Self::from_array([f32::NAN; 16]);

    /// Creates a matrix from its sixteen elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        Self {
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        }
    }

    /// Creates from an array in row-major order.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_array(a: [f32; 16]) -> Self {
        Self::new(
            a[0], a[1], a[2], a[3],
            a[4], a[5], a[6], a[7],
            a[8], a[9], a[10], a[11],
            a[12], a[13], a[14], a[15],
        )
    }

    /// Converts to an array in row-major order.
    #[inline]
    #[rustfmt::skip]
    pub const fn to_array(self) -> [f32; 16] {
        [
            self.m11, self.m12, self.m13, self.m14,
            self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34,
            self.m41, self.m42, self.m43, self.m44,
        ]
    }

    /// Creates a matrix from row vectors.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_rows(r1: Vector4, r2: Vector4, r3: Vector4, r4: Vector4) -> Self {
        Self::new(
            r1.x, r1.y, r1.z, r1.w,
            r2.x, r2.y, r2.z, r2.w,
            r3.x, r3.y, r3.z, r3.w,
            r4.x, r4.y, r4.z, r4.w,
        )
    }

    /// Creates an affine matrix from three basis rows and a translation.
    #[inline]
    const fn from_basis(x: Vector3, y: Vector3, z: Vector3, translation: Vector3) -> Self {
        Self::from_rows(
            Vector4::from_vector3(x, 0.0),
            Vector4::from_vector3(y, 0.0),
            Vector4::from_vector3(z, 0.0),
            Vector4::from_vector3(translation, 1.0),
        )
    }

    /// Embeds a 2D affine transform.
    ///
    /// The 2x2 linear part goes to the upper left, the translation to
    /// `m41`/`m42`, and the z row and column are identity.
    #[inline]
    #[rustfmt::skip]
    pub const fn from_matrix3x2(m: &Matrix3x2) -> Self {
        Self::new(
            m.m11, m.m12, 0.0, 0.0,
            m.m21, m.m22, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            m.m31, m.m32, 0.0, 1.0,
        )
    }

    /// Returns `true` if this is exactly the identity (no tolerance).
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The translation row.
    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.m41, self.m42, self.m43)
    }

    /// Replaces the translation row (`m44` is left untouched).
    #[inline]
    pub fn set_translation(&mut self, translation: Vector3) {
        self.m41 = translation.x;
        self.m42 = translation.y;
        self.m43 = translation.z;
    }

    /// Creates a translation.
    #[inline]
    pub fn create_translation(position: Vector3) -> Self {
        Self::from_basis(Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z, position)
    }

    /// Creates a non-uniform scale about the origin.
    #[inline]
    pub fn create_scale(scales: Vector3) -> Self {
        Self::create_scale_with_center(scales, Vector3::ZERO)
    }

    /// Creates a non-uniform scale that leaves `center` fixed.
    pub fn create_scale_with_center(scales: Vector3, center: Vector3) -> Self {
        let translation = center * (Vector3::ONE - scales);

        Self::from_basis(
            Vector3::new(scales.x, 0.0, 0.0),
            Vector3::new(0.0, scales.y, 0.0),
            Vector3::new(0.0, 0.0, scales.z),
            translation,
        )
    }

    /// Creates a uniform scale about the origin.
    #[inline]
    pub fn create_scale_uniform(scale: f32) -> Self {
        Self::create_scale(Vector3::splat(scale))
    }

    /// Creates a uniform scale that leaves `center` fixed.
    #[inline]
    pub fn create_scale_uniform_with_center(scale: f32, center: Vector3) -> Self {
        Self::create_scale_with_center(Vector3::splat(scale), center)
    }

    /// Creates a rotation about the X axis.
    #[inline]
    pub fn create_rotation_x(radians: f32) -> Self {
        Self::create_rotation_x_with_center(radians, Vector3::ZERO)
    }

    /// Creates a rotation about an X-parallel axis through `center`.
    #[rustfmt::skip]
    pub fn create_rotation_x_with_center(radians: f32, center: Vector3) -> Self {
        let (s, c) = radians.sin_cos();
        let y = center.y * (1.0 - c) + center.z * s;
        let z = center.z * (1.0 - c) - center.y * s;

        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, y, z, 1.0,
        )
    }

    /// Creates a rotation about the Y axis.
    #[inline]
    pub fn create_rotation_y(radians: f32) -> Self {
        Self::create_rotation_y_with_center(radians, Vector3::ZERO)
    }

    /// Creates a rotation about a Y-parallel axis through `center`.
    #[rustfmt::skip]
    pub fn create_rotation_y_with_center(radians: f32, center: Vector3) -> Self {
        let (s, c) = radians.sin_cos();
        let x = center.x * (1.0 - c) - center.z * s;
        let z = center.z * (1.0 - c) + center.x * s;

        Self::new(
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            x, 0.0, z, 1.0,
        )
    }

    /// Creates a rotation about the Z axis.
    #[inline]
    pub fn create_rotation_z(radians: f32) -> Self {
        Self::create_rotation_z_with_center(radians, Vector3::ZERO)
    }

    /// Creates a rotation about a Z-parallel axis through `center`.
    #[rustfmt::skip]
    pub fn create_rotation_z_with_center(radians: f32, center: Vector3) -> Self {
        let (s, c) = radians.sin_cos();
        let x = center.x * (1.0 - c) + center.y * s;
        let y = center.y * (1.0 - c) - center.x * s;

        Self::new(
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            x, y, 0.0, 1.0,
        )
    }

    /// Creates a rotation of `angle` radians about a unit `axis`.
    #[rustfmt::skip]
    pub fn create_from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let Vector3 { x, y, z } = axis;
        let (sa, ca) = angle.sin_cos();

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        Self::new(
            xx + ca * (1.0 - xx), xy - ca * xy + sa * z, xz - ca * xz - sa * y, 0.0,
            xy - ca * xy - sa * z, yy + ca * (1.0 - yy), yz - ca * yz + sa * x, 0.0,
            xz - ca * xz + sa * y, yz - ca * yz - sa * x, zz + ca * (1.0 - zz), 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates the rotation matrix of a quaternion.
    ///
    /// The quaternion is assumed to be unit length. `q` and `-q` give the
    /// same matrix.
    #[rustfmt::skip]
    pub fn create_from_quaternion(q: Quaternion) -> Self {
        let xx = q.x * q.x;
        let yy = q.y * q.y;
        let zz = q.z * q.z;

        let xy = q.x * q.y;
        let wz = q.z * q.w;
        let xz = q.z * q.x;
        let wy = q.y * q.w;
        let yz = q.y * q.z;
        let wx = q.x * q.w;

        Self::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0,
            2.0 * (xy - wz), 1.0 - 2.0 * (zz + xx), 2.0 * (yz + wx), 0.0,
            2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (yy + xx), 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation from yaw (Y), pitch (X) and roll (Z) angles.
    #[inline]
    pub fn create_from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::create_from_quaternion(Quaternion::create_from_yaw_pitch_roll(yaw, pitch, roll))
    }

    /// Creates a right-handed view matrix.
    #[rustfmt::skip]
    pub fn create_look_at(camera_position: Vector3, camera_target: Vector3, camera_up: Vector3) -> Self {
        let z = (camera_position - camera_target).normalize();
        let x = camera_up.cross(z).normalize();
        let y = z.cross(x);

        Self::new(
            x.x, y.x, z.x, 0.0,
            x.y, y.y, z.y, 0.0,
            x.z, y.z, z.z, 0.0,
            -x.dot(camera_position), -y.dot(camera_position), -z.dot(camera_position), 1.0,
        )
    }

    /// Creates a world matrix placing an object at `position` facing
    /// `forward` (the object's -Z axis).
    pub fn create_world(position: Vector3, forward: Vector3, up: Vector3) -> Self {
        let z = (-forward).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);

        Self::from_basis(x, y, z, position)
    }

    /// Creates a perspective projection from view-volume dimensions at the
    /// near plane.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProjection`] unless `0 < near < far`.
    #[rustfmt::skip]
    pub fn create_perspective(width: f32, height: f32, near_plane_distance: f32, far_plane_distance: f32) -> Result<Self> {
        check_clip_planes(near_plane_distance, far_plane_distance)?;
        let n = near_plane_distance;
        let f = far_plane_distance;
        let range = f / (n - f);

        Ok(Self::new(
            2.0 * n / width, 0.0, 0.0, 0.0,
            0.0, 2.0 * n / height, 0.0, 0.0,
            0.0, 0.0, range, -1.0,
            0.0, 0.0, range * n, 0.0,
        ))
    }

    /// Creates a perspective projection from a vertical field of view.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProjection`] unless `0 < field_of_view < π` and
    /// `0 < near < far`.
    #[rustfmt::skip]
    pub fn create_perspective_field_of_view(
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane_distance: f32,
        far_plane_distance: f32,
    ) -> Result<Self> {
        if !(field_of_view > 0.0 && field_of_view < std::f32::consts::PI) {
            return Err(reject("field_of_view", field_of_view, "must be in (0, pi)"));
        }
        check_clip_planes(near_plane_distance, far_plane_distance)?;

        let y_scale = 1.0 / (field_of_view * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        let n = near_plane_distance;
        let f = far_plane_distance;
        let range = f / (n - f);

        Ok(Self::new(
            x_scale, 0.0, 0.0, 0.0,
            0.0, y_scale, 0.0, 0.0,
            0.0, 0.0, range, -1.0,
            0.0, 0.0, range * n, 0.0,
        ))
    }

    /// Creates an off-center perspective projection.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidProjection`] unless `0 < near < far`.
    #[rustfmt::skip]
    pub fn create_perspective_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near_plane_distance: f32,
        far_plane_distance: f32,
    ) -> Result<Self> {
        check_clip_planes(near_plane_distance, far_plane_distance)?;
        let n = near_plane_distance;
        let f = far_plane_distance;
        let range = f / (n - f);

        Ok(Self::new(
            2.0 * n / (right - left), 0.0, 0.0, 0.0,
            0.0, 2.0 * n / (top - bottom), 0.0, 0.0,
            (left + right) / (right - left), (top + bottom) / (top - bottom), range, -1.0,
            0.0, 0.0, range * n, 0.0,
        ))
    }

    /// Creates an orthographic projection centered on the view axis.
    #[rustfmt::skip]
    pub fn create_orthographic(width: f32, height: f32, z_near_plane: f32, z_far_plane: f32) -> Self {
        let range = 1.0 / (z_near_plane - z_far_plane);

        Self::new(
            2.0 / width, 0.0, 0.0, 0.0,
            0.0, 2.0 / height, 0.0, 0.0,
            0.0, 0.0, range, 0.0,
            0.0, 0.0, range * z_near_plane, 1.0,
        )
    }

    /// Creates an off-center orthographic projection.
    #[rustfmt::skip]
    pub fn create_orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near_plane: f32,
        z_far_plane: f32,
    ) -> Self {
        let range = 1.0 / (z_near_plane - z_far_plane);

        Self::new(
            2.0 / (right - left), 0.0, 0.0, 0.0,
            0.0, 2.0 / (top - bottom), 0.0, 0.0,
            0.0, 0.0, range, 0.0,
            (left + right) / (left - right), (top + bottom) / (bottom - top), range * z_near_plane, 1.0,
        )
    }

    /// Creates a spherical billboard that rotates around `object_position`
    /// to face the camera.
    ///
    /// `camera_forward` is used when the object and camera coincide.
    pub fn create_billboard(
        object_position: Vector3,
        camera_position: Vector3,
        camera_up: Vector3,
        camera_forward: Vector3,
    ) -> Self {
        let offset = object_position - camera_position;
        let norm = offset.length_squared();

        let z = if norm < DEGENERACY_EPSILON {
            -camera_forward
        } else {
            offset * (1.0 / norm.sqrt())
        };

        let x = camera_up.cross(z).normalize();
        let y = z.cross(x);

        Self::from_basis(x, y, z, object_position)
    }

    /// Creates a cylindrical billboard that rotates around `rotate_axis`
    /// to face the camera.
    ///
    /// When the view direction is (nearly) parallel to the axis,
    /// `object_forward` picks the facing instead; if that is also parallel,
    /// a fixed fallback axis is used.
    pub fn create_constrained_billboard(
        object_position: Vector3,
        camera_position: Vector3,
        rotate_axis: Vector3,
        camera_forward: Vector3,
        object_forward: Vector3,
    ) -> Self {
        // 1 - cos(0.1°)
        let min_angle = 1.0 - (0.1f64.to_radians().cos() as f32);

        let offset = object_position - camera_position;
        let norm = offset.length_squared();

        let face_dir = if norm < DEGENERACY_EPSILON {
            -camera_forward
        } else {
            offset * (1.0 / norm.sqrt())
        };

        let y = rotate_axis;

        let (x, z) = if rotate_axis.dot(face_dir).abs() > 1.0 - min_angle {
            let mut z = object_forward;

            if rotate_axis.dot(z).abs() > 1.0 - min_angle {
                z = if rotate_axis.z.abs() > 1.0 - min_angle {
                    Vector3::UNIT_X
                } else {
                    Vector3::new(0.0, 0.0, -1.0)
                };
            }

            let x = rotate_axis.cross(z).normalize();
            (x, x.cross(rotate_axis).normalize())
        } else {
            let x = rotate_axis.cross(face_dir).normalize();
            (x, x.cross(y).normalize())
        };

        Self::from_basis(x, y, z, object_position)
    }

    /// Creates a matrix that flattens geometry onto `plane` as a shadow
    /// cast by a directional light.
    ///
    /// The light travels along `light_direction`; the plane is normalized
    /// first.
    #[rustfmt::skip]
    pub fn create_shadow(light_direction: Vector3, plane: Plane) -> Self {
        let p = plane.normalize();
        let dot = p.normal.dot(light_direction);
        let a = -p.normal.x;
        let b = -p.normal.y;
        let c = -p.normal.z;
        let d = -p.d;
        let l = light_direction;

        Self::new(
            a * l.x + dot, a * l.y, a * l.z, 0.0,
            b * l.x, b * l.y + dot, b * l.z, 0.0,
            c * l.x, c * l.y, c * l.z + dot, 0.0,
            d * l.x, d * l.y, d * l.z, dot,
        )
    }

    /// Creates a matrix that mirrors geometry across `plane`.
    #[rustfmt::skip]
    pub fn create_reflection(plane: Plane) -> Self {
        let p = plane.normalize();
        let Vector3 { x: a, y: b, z: c } = p.normal;

        let fa = -2.0 * a;
        let fb = -2.0 * b;
        let fc = -2.0 * c;

        Self::new(
            fa * a + 1.0, fb * a, fc * a, 0.0,
            fa * b, fb * b + 1.0, fc * b, 0.0,
            fa * c, fb * c, fc * c + 1.0, 0.0,
            fa * p.d, fb * p.d, fc * p.d, 1.0,
        )
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let (a, b, c, d) = (self.m11, self.m12, self.m13, self.m14);
        let (e, f, g, h) = (self.m21, self.m22, self.m23, self.m24);
        let (i, j, k, l) = (self.m31, self.m32, self.m33, self.m34);
        let (m, n, o, p) = (self.m41, self.m42, self.m43, self.m44);

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        a * (f * kp_lo - g * jp_ln + h * jo_kn)
            - b * (e * kp_lo - g * ip_lm + h * io_km)
            + c * (e * jp_ln - f * ip_lm + h * in_jm)
            - d * (e * jo_kn - f * io_km + g * in_jm)
    }

    /// Computes the inverse by the adjugate (cofactor) method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when the determinant is zero.
    pub fn invert(&self) -> Result<Self> {
        let (a, b, c, d) = (self.m11, self.m12, self.m13, self.m14);
        let (e, f, g, h) = (self.m21, self.m22, self.m23, self.m24);
        let (i, j, k, l) = (self.m31, self.m32, self.m33, self.m34);
        let (m, n, o, p) = (self.m41, self.m42, self.m43, self.m44);

        let kp_lo = k * p - l * o;
        let jp_ln = j * p - l * n;
        let jo_kn = j * o - k * n;
        let ip_lm = i * p - l * m;
        let io_km = i * o - k * m;
        let in_jm = i * n - j * m;

        let a11 = f * kp_lo - g * jp_ln + h * jo_kn;
        let a12 = -(e * kp_lo - g * ip_lm + h * io_km);
        let a13 = e * jp_ln - f * ip_lm + h * in_jm;
        let a14 = -(e * jo_kn - f * io_km + g * in_jm);

        let det = a * a11 + b * a12 + c * a13 + d * a14;
        if det == 0.0 {
            trace!(determinant = det, "Matrix4x4::invert: singular");
            return Err(Error::singular_matrix(det));
        }

        let inv_det = 1.0 / det;

        let gp_ho = g * p - h * o;
        let fp_hn = f * p - h * n;
        let fo_gn = f * o - g * n;
        let ep_hm = e * p - h * m;
        let eo_gm = e * o - g * m;
        let en_fm = e * n - f * m;

        let gl_hk = g * l - h * k;
        let fl_hj = f * l - h * j;
        let fk_gj = f * k - g * j;
        let el_hi = e * l - h * i;
        let ek_gi = e * k - g * i;
        let ej_fi = e * j - f * i;

        Ok(Self::new(
            a11 * inv_det,
            -(b * kp_lo - c * jp_ln + d * jo_kn) * inv_det,
            (b * gp_ho - c * fp_hn + d * fo_gn) * inv_det,
            -(b * gl_hk - c * fl_hj + d * fk_gj) * inv_det,
            a12 * inv_det,
            (a * kp_lo - c * ip_lm + d * io_km) * inv_det,
            -(a * gp_ho - c * ep_hm + d * eo_gm) * inv_det,
            (a * gl_hk - c * el_hi + d * ek_gi) * inv_det,
            a13 * inv_det,
            -(a * jp_ln - b * ip_lm + d * in_jm) * inv_det,
            (a * fp_hn - b * ep_hm + d * en_fm) * inv_det,
            -(a * fl_hj - b * el_hi + d * ej_fi) * inv_det,
            a14 * inv_det,
            (a * jo_kn - b * io_km + c * in_jm) * inv_det,
            -(a * fo_gn - b * eo_gm + c * en_fm) * inv_det,
            (a * fk_gj - b * ek_gi + c * ej_fi) * inv_det,
        ))
    }

    /// Inverts into `result`, returning whether the matrix was invertible.
    ///
    /// On failure every element of `result` is set to NaN.
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

    /// Returns the transpose of this matrix.
    #[inline]
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::new(
            self.m11, self.m21, self.m31, self.m41,
            self.m12, self.m22, self.m32, self.m42,
            self.m13, self.m23, self.m33, self.m43,
            self.m14, self.m24, self.m34, self.m44,
        )
    }

    /// Row `i` (0-based) as a vector.
    #[inline]
    pub(crate) fn row(&self, i: usize) -> Vector4 {
        match i {
            0 => Vector4::new(self.m11, self.m12, self.m13, self.m14),
            1 => Vector4::new(self.m21, self.m22, self.m23, self.m24),
            2 => Vector4::new(self.m31, self.m32, self.m33, self.m34),
            3 => Vector4::new(self.m41, self.m42, self.m43, self.m44),
            _ => panic!("Matrix4x4 row out of bounds: {}", i),
        }
    }

    /// Composes two transforms: `self` first, then `other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let t = other.transpose();
        let cols = [t.row(0), t.row(1), t.row(2), t.row(3)];
        let mut out = [0.0f32; 16];

        for r in 0..4 {
            let row = self.row(r);
            for (c, col) in cols.iter().enumerate() {
                out[r * 4 + c] = row.dot(*col);
            }
        }

        Self::from_array(out)
    }

    /// Applies a quaternion rotation after this transform.
    ///
    /// Equal to `self * Matrix4x4::create_from_quaternion(rotation)`.
    #[inline]
    pub fn transform(&self, rotation: Quaternion) -> Self {
        self.mul_mat(&Self::create_from_quaternion(rotation))
    }

    /// Component-wise linear interpolation (unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(std::array::from_fn(|i| scalar::lerp(a[i], b[i], t)))
    }

    /// Splits an affine transform into scale, rotation and translation.
    ///
    /// # Errors
    ///
    /// [`Error::NotDecomposable`] if the scaled basis is not orthogonal
    /// (for example, the matrix contains shear or projection).
    ///
    /// # Example
    ///
    /// ```rust
    /// use canvas_math::{Matrix4x4, Vector3};
    ///
    /// let m = Matrix4x4::create_scale(Vector3::new(1.0, 2.0, 3.0))
    ///     * Matrix4x4::create_translation(Vector3::new(4.0, 5.0, 6.0));
    /// let parts = m.decompose().unwrap();
    /// assert_eq!(parts.translation, Vector3::new(4.0, 5.0, 6.0));
    /// ```
    pub fn decompose(&self) -> Result<Decomposed> {
        let (scale, rotation, translation) = self.decompose_parts();
        match rotation {
            Ok(rotation) => Ok(Decomposed {
                scale,
                rotation,
                translation,
            }),
            Err(residual) => {
                trace!(residual, "Matrix4x4::decompose: basis is not a rotation");
                Err(Error::not_decomposable(residual))
            }
        }
    }

    /// Decomposes into output parameters, returning whether it succeeded.
    ///
    /// Scale and translation are always written; on failure `rotation` is
    /// the identity.
    pub fn decompose_into(&self, scale: &mut Vector3, rotation: &mut Quaternion, translation: &mut Vector3) -> bool {
        let (s, r, t) = self.decompose_parts();
        *scale = s;
        *translation = t;
        match r {
            Ok(r) => {
                *rotation = r;
                true
            }
            Err(_) => {
                *rotation = Quaternion::IDENTITY;
                false
            }
        }
    }

    fn decompose_parts(&self) -> (Vector3, std::result::Result<Quaternion, f32>, Vector3) {
        const CANONICAL: [Vector3; 3] = [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z];

        let translation = self.translation();
        let mut basis = [self.row(0).xyz(), self.row(1).xyz(), self.row(2).xyz()];
        let mut scales = [basis[0].length(), basis[1].length(), basis[2].length()];

        // a: longest axis, c: shortest
        let (a, b, c) = if scales[0] < scales[1] {
            if scales[1] < scales[2] {
                (2, 1, 0)
            } else if scales[0] < scales[2] {
                (1, 2, 0)
            } else {
                (1, 0, 2)
            }
        } else if scales[0] < scales[2] {
            (2, 0, 1)
        } else if scales[1] < scales[2] {
            (0, 2, 1)
        } else {
            (0, 1, 2)
        };

        if scales[a] < DEGENERACY_EPSILON {
            basis[a] = CANONICAL[a];
        }
        basis[a] = basis[a].normalize();

        if scales[b] < DEGENERACY_EPSILON {
            // Cross with the canonical axis least aligned with basis[a]
            let abs = basis[a].abs();
            let cc = if abs.x < abs.y {
                if abs.y < abs.z || abs.x < abs.z { 0 } else { 2 }
            } else if abs.x < abs.z || abs.y < abs.z {
                1
            } else {
                2
            };
            basis[b] = basis[a].cross(CANONICAL[cc]);
        }
        basis[b] = basis[b].normalize();

        if scales[c] < DEGENERACY_EPSILON {
            basis[c] = basis[a].cross(basis[b]);
        }
        basis[c] = basis[c].normalize();

        let mut rotation = Self::from_basis(basis[0], basis[1], basis[2], Vector3::ZERO);
        let mut det = rotation.determinant();

        if det < 0.0 {
            scales[a] = -scales[a];
            basis[a] = -basis[a];
            det = -det;
            rotation = Self::from_basis(basis[0], basis[1], basis[2], Vector3::ZERO);
        }

        let residual = (det - 1.0) * (det - 1.0);
        let scale = Vector3::from_array(scales);

        if residual > DEGENERACY_EPSILON {
            (scale, Err(residual), translation)
        } else {
            (scale, Ok(Quaternion::create_from_rotation_matrix(&rotation)), translation)
        }
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }
}

/// Validates perspective near/far distances. NaN is rejected.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn check_clip_planes(near: f32, far: f32) -> Result<()> {
    if !(near > 0.0) {
        return Err(reject("near_plane_distance", near, "must be positive"));
    }
    if !(far > 0.0) {
        return Err(reject("far_plane_distance", far, "must be positive"));
    }
    if near >= far {
        return Err(reject("near_plane_distance", near, "must be less than far_plane_distance"));
    }
    Ok(())
}

fn reject(name: &'static str, value: f32, reason: &'static str) -> Error {
    trace!(name, value, reason, "projection argument rejected");
    Error::invalid_projection(name, value, reason)
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[rustfmt::skip]
impl_componentwise_ops!(Matrix4x4 {
    m11, m12, m13, m14,
    m21, m22, m23, m24,
    m31, m32, m33, m34,
    m41, m42, m43, m44
});
#[rustfmt::skip]
impl_blittable!(Matrix4x4, 16, [
    "m11", "m12", "m13", "m14",
    "m21", "m22", "m23", "m24",
    "m31", "m32", "m33", "m34",
    "m41", "m42", "m43", "m44"
]);

impl From<Matrix3x2> for Matrix4x4 {
    #[inline]
    fn from(m: Matrix3x2) -> Self {
        Self::from_matrix3x2(&m)
    }
}

// Matrix4x4 * Matrix4x4
impl Mul for Matrix4x4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Matrix4x4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sequence() -> Matrix4x4 {
        Matrix4x4::from_array(std::array::from_fn(|i| (i + 1) as f32))
    }

    fn sample_affine() -> Matrix4x4 {
        let a = 30f32.to_radians();
        let mut m = Matrix4x4::create_rotation_x(a)
            * Matrix4x4::create_rotation_y(a)
            * Matrix4x4::create_rotation_z(a);
        m.set_translation(Vector3::new(111.0, 222.0, 333.0));
        m
    }

    fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
        approx::abs_diff_eq!(a, b, epsilon = 1e-5) || approx::abs_diff_eq!(a, -b, epsilon = 1e-5)
    }

    #[test]
    fn test_matrix4x4_identity() {
        assert!(Matrix4x4::IDENTITY.is_identity());
        assert!(Matrix4x4::default().is_identity());
        let mut m = Matrix4x4::IDENTITY;
        m.m34 = 1e-30;
        assert!(!m.is_identity());
    }

    #[test]
    fn test_matrix4x4_determinant() {
        assert_eq!(Matrix4x4::IDENTITY.determinant(), 1.0);
        assert_eq!(sequence().determinant(), 0.0);
        assert_eq!(Matrix4x4::create_scale(Vector3::new(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_abs_diff_eq!(sample_affine().determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    #[rustfmt::skip]
    fn test_matrix4x4_determinant_general() {
        let m = Matrix4x4::new(
            2.0, 0.0, 1.0, 3.0,
            1.0, -1.0, 0.0, 2.0,
            0.0, 4.0, 1.0, -2.0,
            5.0, 1.0, 0.0, 1.0,
        );
        assert_abs_diff_eq!(m.determinant(), -12.0, epsilon = 1e-4);
    }

    #[test]
    fn test_matrix4x4_invert() {
        let m = sample_affine();
        let inv = m.invert().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4x4::IDENTITY, epsilon = 1e-3);
        assert_abs_diff_eq!(inv * m, Matrix4x4::IDENTITY, epsilon = 1e-3);
    }

    #[test]
    #[rustfmt::skip]
    fn test_matrix4x4_invert_general() {
        let m = Matrix4x4::new(
            2.0, 0.0, 1.0, 3.0,
            1.0, -1.0, 0.0, 2.0,
            0.0, 4.0, 1.0, -2.0,
            5.0, 1.0, 0.0, 1.0,
        );
        let inv = m.invert().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4x4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_invert_identity() {
        assert_eq!(Matrix4x4::IDENTITY.invert().unwrap(), Matrix4x4::IDENTITY);
    }

    #[test]
    fn test_matrix4x4_invert_translation() {
        let m = Matrix4x4::create_translation(Vector3::new(23.0, 42.0, 666.0));
        let inv = m.invert().unwrap();
        assert_eq!(inv, Matrix4x4::create_translation(Vector3::new(-23.0, -42.0, -666.0)));
    }

    #[test]
    fn test_matrix4x4_invert_singular() {
        let m = sequence();
        assert!(m.invert().unwrap_err().is_singular());

        let mut out = Matrix4x4::IDENTITY;
        assert!(!m.invert_into(&mut out));
        assert!(out.to_array().iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_matrix4x4_transpose() {
        let m = sequence();
        let t = m.transpose();
        assert_eq!(t.m12, 5.0);
        assert_eq!(t.m21, 2.0);
        assert_eq!(t.m41, 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_matrix4x4_rows() {
        let m = sequence();
        let rows = [m.row(0), m.row(1), m.row(2), m.row(3)];
        assert_eq!(rows[1], Vector4::new(m.m21, m.m22, m.m23, m.m24));
        assert_eq!(Matrix4x4::from_rows(rows[0], rows[1], rows[2], rows[3]), m);
    }

    #[test]
    #[should_panic(expected = "row out of bounds")]
    fn test_matrix4x4_row_out_of_bounds() {
        sequence().row(4);
    }

    #[test]
    #[rustfmt::skip]
    fn test_matrix4x4_multiply() {
        let a = sequence();
        let expected = Matrix4x4::new(
            90.0, 100.0, 110.0, 120.0,
            202.0, 228.0, 254.0, 280.0,
            314.0, 356.0, 398.0, 440.0,
            426.0, 484.0, 542.0, 600.0,
        );
        assert_eq!(a * a, expected);

        let mut b = a;
        b *= a;
        assert_eq!(b, expected);
        assert_eq!(a * Matrix4x4::IDENTITY, a);
    }

    #[test]
    fn test_matrix4x4_multiply_matches_vector_transform() {
        let a = Matrix4x4::create_rotation_y(0.3) * Matrix4x4::create_translation(Vector3::new(1.0, 2.0, 3.0));
        let b = Matrix4x4::create_scale(Vector3::new(2.0, 3.0, 4.0)) * Matrix4x4::create_rotation_x(-0.7);
        let v = Vector4::new(1.0, -2.0, 0.5, 1.0);
        assert_abs_diff_eq!(v.transform(&(a * b)), v.transform(&a).transform(&b), epsilon = 1e-5);
    }

    #[test]
    #[rustfmt::skip]
    fn test_matrix4x4_from_matrix3x2() {
        let src = Matrix3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let m = Matrix4x4::from_matrix3x2(&src);
        let expected = Matrix4x4::new(
            1.0, 2.0, 0.0, 0.0,
            3.0, 4.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            5.0, 6.0, 0.0, 1.0,
        );
        assert_eq!(m, expected);
        assert_eq!(Matrix4x4::from(src), expected);
    }

    #[test]
    fn test_matrix4x4_rotation_x() {
        let m = Matrix4x4::create_rotation_x(30f32.to_radians());
        let (s, c) = 30f32.to_radians().sin_cos();
        assert_eq!(m.m22, c);
        assert_eq!(m.m23, s);
        assert_eq!(m.m32, -s);
        assert_eq!(m.m33, c);
        assert_abs_diff_eq!(Vector3::UNIT_Y.transform(&Matrix4x4::create_rotation_x(90f32.to_radians())), Vector3::UNIT_Z, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_rotation_y() {
        let m = Matrix4x4::create_rotation_y(90f32.to_radians());
        assert_abs_diff_eq!(Vector3::UNIT_Z.transform(&m), Vector3::UNIT_X, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_rotation_z() {
        let m = Matrix4x4::create_rotation_z(90f32.to_radians());
        assert_abs_diff_eq!(Vector3::UNIT_X.transform(&m), Vector3::UNIT_Y, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_rotation_with_center() {
        let center = Vector3::new(23.0, 42.0, 66.0);
        let to = Matrix4x4::create_translation(-center);
        let back = Matrix4x4::create_translation(center);

        for r in [0.0f32, 0.5, 1.57, -2.0, 3.14] {
            assert_abs_diff_eq!(
                Matrix4x4::create_rotation_x_with_center(r, center),
                to * Matrix4x4::create_rotation_x(r) * back,
                epsilon = 1e-4
            );
            assert_abs_diff_eq!(
                Matrix4x4::create_rotation_y_with_center(r, center),
                to * Matrix4x4::create_rotation_y(r) * back,
                epsilon = 1e-4
            );
            assert_abs_diff_eq!(
                Matrix4x4::create_rotation_z_with_center(r, center),
                to * Matrix4x4::create_rotation_z(r) * back,
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_matrix4x4_rotation_order_matches_yaw_pitch_roll() {
        let (yaw, pitch, roll) = (0.4f32, -0.9f32, 1.3f32);
        let composed = Matrix4x4::create_rotation_z(roll)
            * Matrix4x4::create_rotation_x(pitch)
            * Matrix4x4::create_rotation_y(yaw);
        assert_abs_diff_eq!(
            Matrix4x4::create_from_yaw_pitch_roll(yaw, pitch, roll),
            composed,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_matrix4x4_scale_with_center() {
        let center = Vector3::new(23.0, 42.0, 66.0);
        let scales = Vector3::new(3.0, 4.0, 5.0);
        let m = Matrix4x4::create_scale_with_center(scales, center);
        let expected = Matrix4x4::create_translation(-center)
            * Matrix4x4::create_scale(scales)
            * Matrix4x4::create_translation(center);
        assert_eq!(m, expected);
        assert_eq!(
            Matrix4x4::create_scale_uniform_with_center(3.0, center),
            Matrix4x4::create_scale_with_center(Vector3::splat(3.0), center)
        );
    }

    #[test]
    fn test_matrix4x4_from_axis_angle() {
        for (axis, r) in [
            (Vector3::UNIT_X, 0.6f32),
            (Vector3::UNIT_Y, -1.2),
            (Vector3::UNIT_Z, 2.5),
            (Vector3::new(1.0, 2.0, 3.0).normalize(), 0.9),
        ] {
            let m = Matrix4x4::create_from_axis_angle(axis, r);
            let q = Matrix4x4::create_from_quaternion(Quaternion::create_from_axis_angle(axis, r));
            assert_abs_diff_eq!(m, q, epsilon = 1e-5);
        }
        assert_abs_diff_eq!(
            Matrix4x4::create_from_axis_angle(Vector3::UNIT_X, 0.6),
            Matrix4x4::create_rotation_x(0.6),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_matrix4x4_from_quaternion_negated() {
        let q = Quaternion::create_from_yaw_pitch_roll(0.1, 0.2, 0.3);
        assert_eq!(Matrix4x4::create_from_quaternion(q), Matrix4x4::create_from_quaternion(-q));
    }

    #[test]
    fn test_matrix4x4_look_at() {
        let position = Vector3::new(10.0, 20.0, 30.0);
        let target = Vector3::new(3.0, 2.0, -4.0);
        let up = Vector3::UNIT_Y;
        let view = Matrix4x4::create_look_at(position, target, up);

        // camera sits at the origin of view space, looking down -Z
        assert_abs_diff_eq!(position.transform(&view), Vector3::ZERO, epsilon = 1e-4);
        let t = target.transform(&view);
        assert_abs_diff_eq!(t.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(t.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(t.z, -position.distance(target), epsilon = 1e-4);
    }

    #[test]
    fn test_matrix4x4_world() {
        let position = Vector3::new(10.0, 20.0, 30.0);
        let forward = Vector3::new(3.0, 2.0, -4.0).normalize();
        let world = Matrix4x4::create_world(position, forward, Vector3::UNIT_Y);

        assert_eq!(world.translation(), position);
        // object space -Z maps to forward
        let f = Vector3::new(0.0, 0.0, -1.0).transform_normal(&world);
        assert_abs_diff_eq!(f, forward, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_look_at_is_inverse_of_world() {
        let position = Vector3::new(1.0, 2.0, 3.0);
        let target = Vector3::new(-4.0, 0.5, 7.0);
        let view = Matrix4x4::create_look_at(position, target, Vector3::UNIT_Y);
        let world = Matrix4x4::create_world(position, target - position, Vector3::UNIT_Y);
        assert_abs_diff_eq!(view * world, Matrix4x4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_perspective() {
        let m = Matrix4x4::create_perspective(1000.0, 2000.0, 10.0, 30.0).unwrap();
        assert_eq!(m.m11, 0.02);
        assert_eq!(m.m22, 0.01);
        assert_eq!(m.m33, -1.5);
        assert_eq!(m.m34, -1.0);
        assert_eq!(m.m43, -15.0);
        assert_eq!(m.m44, 0.0);
    }

    #[test]
    fn test_matrix4x4_perspective_maps_clip_planes() {
        let m = Matrix4x4::create_perspective_field_of_view(1.0, 1.5, 2.0, 50.0).unwrap();
        let near = Vector4::new(0.0, 0.0, -2.0, 1.0).transform(&m);
        let far = Vector4::new(0.0, 0.0, -50.0, 1.0).transform(&m);
        assert_abs_diff_eq!(near.z / near.w, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_perspective_field_of_view() {
        let m = Matrix4x4::create_perspective_field_of_view(std::f32::consts::FRAC_PI_2, 2.0, 1.0, 10.0).unwrap();
        assert_abs_diff_eq!(m.m22, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m11, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_perspective_errors() {
        assert!(Matrix4x4::create_perspective(10.0, 10.0, -1.0, 10.0).unwrap_err().is_argument_error());
        assert!(Matrix4x4::create_perspective(10.0, 10.0, 1.0, -10.0).is_err());
        assert!(Matrix4x4::create_perspective(10.0, 10.0, 5.0, 5.0).is_err());
        assert!(Matrix4x4::create_perspective(10.0, 10.0, f32::NAN, 5.0).is_err());

        assert!(Matrix4x4::create_perspective_field_of_view(0.0, 1.0, 1.0, 10.0).is_err());
        assert!(Matrix4x4::create_perspective_field_of_view(std::f32::consts::PI, 1.0, 1.0, 10.0).is_err());
        assert!(Matrix4x4::create_perspective_field_of_view(1.0, 1.0, 10.0, 1.0).is_err());

        assert!(Matrix4x4::create_perspective_off_center(-1.0, 1.0, -1.0, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_matrix4x4_perspective_off_center() {
        let centered = Matrix4x4::create_perspective(20.0, 10.0, 1.0, 100.0).unwrap();
        let off = Matrix4x4::create_perspective_off_center(-10.0, 10.0, -5.0, 5.0, 1.0, 100.0).unwrap();
        assert_abs_diff_eq!(centered, off, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_orthographic() {
        let m = Matrix4x4::create_orthographic(100.0, 200.0, 1.0, 11.0);
        assert_eq!(m.m11, 0.02);
        assert_eq!(m.m22, 0.01);
        assert_eq!(m.m33, -0.1);
        assert_eq!(m.m43, -0.1);
        assert_eq!(m.m44, 1.0);

        let off = Matrix4x4::create_orthographic_off_center(-50.0, 50.0, -100.0, 100.0, 1.0, 11.0);
        assert_abs_diff_eq!(m, off, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_orthographic_off_center_maps_corners() {
        let m = Matrix4x4::create_orthographic_off_center(10.0, 90.0, 20.0, 60.0, 0.0, 5.0);
        assert_abs_diff_eq!(Vector3::new(10.0, 20.0, 0.0).transform(&m), Vector3::new(-1.0, -1.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(Vector3::new(90.0, 60.0, -5.0).transform(&m), Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_billboard() {
        let object = Vector3::new(3.0, 4.0, 5.0);
        let camera = Vector3::new(3.0, 4.0, 15.0);
        let m = Matrix4x4::create_billboard(object, camera, Vector3::UNIT_Y, Vector3::new(0.0, 0.0, -1.0));

        // object z axis points away from the camera
        assert_abs_diff_eq!(m.row(2).xyz(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_abs_diff_eq!(m.row(1).xyz(), Vector3::UNIT_Y, epsilon = 1e-6);
        assert_eq!(m.translation(), object);
    }

    #[test]
    fn test_matrix4x4_billboard_coincident_camera() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let forward = Vector3::new(0.0, 0.0, -1.0);
        let m = Matrix4x4::create_billboard(p, p, Vector3::UNIT_Y, forward);
        assert_abs_diff_eq!(m.row(2).xyz(), -forward, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_constrained_billboard() {
        let object = Vector3::ZERO;
        let camera = Vector3::new(10.0, 7.0, 0.0);
        let m = Matrix4x4::create_constrained_billboard(
            object,
            camera,
            Vector3::UNIT_Y,
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, -1.0),
        );

        // y axis stays locked, z axis faces away from the camera in the XZ plane
        assert_abs_diff_eq!(m.row(1).xyz(), Vector3::UNIT_Y, epsilon = 1e-6);
        assert_abs_diff_eq!(m.row(2).xyz(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_constrained_billboard_parallel_axis() {
        // camera directly above: fall back to the object forward vector
        let m = Matrix4x4::create_constrained_billboard(
            Vector3::ZERO,
            Vector3::new(0.0, 10.0, 0.0),
            Vector3::UNIT_Y,
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, -1.0),
        );
        assert_abs_diff_eq!(m.row(2).xyz(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_abs_diff_eq!(m.row(1).xyz(), Vector3::UNIT_Y, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_shadow() {
        let ground = Plane::new(0.0, 1.0, 0.0, 0.0);
        let light = Vector3::new(1.0, -1.0, 0.0);
        let m = Matrix4x4::create_shadow(light, ground);

        let p = Vector4::new(2.0, 3.0, 4.0, 1.0).transform(&m);
        let projected = p.xyz() / p.w;
        assert_abs_diff_eq!(projected, Vector3::new(5.0, 0.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_reflection() {
        let mirror = Plane::new(0.0, 2.0, 0.0, -4.0); // y = 2
        let m = Matrix4x4::create_reflection(mirror);
        assert_abs_diff_eq!(Vector3::new(1.0, 5.0, 3.0).transform(&m), Vector3::new(1.0, -1.0, 3.0), epsilon = 1e-5);
        assert_abs_diff_eq!(m * m, Matrix4x4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_decompose() {
        let scale = Vector3::new(2.0, 3.0, 4.0);
        let rotation = Quaternion::create_from_yaw_pitch_roll(0.3, 0.6, -0.9);
        let translation = Vector3::new(10.0, 20.0, 30.0);

        let m = Matrix4x4::create_scale(scale)
            * Matrix4x4::create_from_quaternion(rotation)
            * Matrix4x4::create_translation(translation);
        let parts = m.decompose().unwrap();

        assert_abs_diff_eq!(parts.scale, scale, epsilon = 1e-4);
        assert!(same_rotation(parts.rotation, rotation));
        assert_abs_diff_eq!(parts.translation, translation, epsilon = 1e-6);
    }

    #[test]
    fn test_matrix4x4_decompose_reflection() {
        let m = Matrix4x4::create_scale(Vector3::new(-1.0, 2.0, 3.0));
        let parts = m.decompose().unwrap();
        let rebuilt = Matrix4x4::create_scale(parts.scale)
            * Matrix4x4::create_from_quaternion(parts.rotation);
        assert_abs_diff_eq!(rebuilt, m, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_decompose_zero_scale() {
        let m = Matrix4x4::create_scale(Vector3::new(0.0, 2.0, 0.0));
        let parts = m.decompose().unwrap();
        assert_abs_diff_eq!(parts.scale.abs(), Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-6);

        // degenerate axes are rebuilt, possibly flipping the surviving one
        let rebuilt = Matrix4x4::create_scale(parts.scale)
            * Matrix4x4::create_from_quaternion(parts.rotation);
        assert_abs_diff_eq!(rebuilt, m, epsilon = 1e-5);
    }

    #[test]
    fn test_matrix4x4_decompose_shear_fails() {
        let mut m = Matrix4x4::IDENTITY;
        m.m21 = 1.0;
        m.m12 = 1.0;
        m.m42 = 7.0;
        assert!(matches!(m.decompose(), Err(Error::NotDecomposable { .. })));

        let mut scale = Vector3::ZERO;
        let mut rotation = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let mut translation = Vector3::ZERO;
        assert!(!m.decompose_into(&mut scale, &mut rotation, &mut translation));
        assert_eq!(rotation, Quaternion::IDENTITY);
        assert_eq!(translation, Vector3::new(0.0, 7.0, 0.0));
    }

    #[test]
    fn test_matrix4x4_transform_quaternion() {
        let m = sample_affine();
        let q = Quaternion::create_from_axis_angle(Vector3::new(1.0, 2.0, 3.0).normalize(), 0.75);
        assert_eq!(m.transform(q), m * Matrix4x4::create_from_quaternion(q));
    }

    #[test]
    fn test_matrix4x4_lerp() {
        let a = sequence();
        let b = a * 3.0;
        assert_eq!(a.lerp(&b, 0.5), a * 2.0);
        assert_eq!(a.lerp(&b, 0.0), a);
    }

    #[test]
    fn test_matrix4x4_componentwise() {
        let a = sequence();
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Matrix4x4::from_array([0.0; 16]));
        assert_eq!(-a, a * -1.0);
    }
}
