//! Conversions to and from [`glam`].
//!
//! glam uses column vectors and column-major storage. Our matrices use row
//! vectors and row-major storage, so the element order in memory is the
//! same and conversion is a plain copy. The composition order flips:
//!
//! ```rust
//! use canvas_math::{Matrix4x4, Vector3};
//! use glam::Mat4;
//!
//! let a = Matrix4x4::create_rotation_z(0.5);
//! let b = Matrix4x4::create_translation(Vector3::new(1.0, 2.0, 3.0));
//! let lhs = Mat4::from(a * b);
//! let rhs = Mat4::from(b) * Mat4::from(a);
//! assert!(lhs.abs_diff_eq(rhs, 1e-6));
//! ```

use crate::{Matrix3x2, Matrix4x4, Plane, Quaternion, Vector2, Vector3, Vector4};

macro_rules! impl_glam_vector {
    ($t:ident, $g:ty) => {
        impl $t {
            /// Converts to the matching glam vector.
            #[inline]
            pub fn to_glam(self) -> $g {
                <$g>::from_array(self.to_array())
            }

            /// Creates from the matching glam vector.
            #[inline]
            pub fn from_glam(v: $g) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$g> for $t {
            #[inline]
            fn from(v: $g) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$t> for $g {
            #[inline]
            fn from(v: $t) -> $g {
                v.to_glam()
            }
        }
    };
}

impl_glam_vector!(Vector2, glam::Vec2);
impl_glam_vector!(Vector3, glam::Vec3);
impl_glam_vector!(Vector4, glam::Vec4);
impl_glam_vector!(Quaternion, glam::Quat);

impl Matrix4x4 {
    /// Converts to glam Mat4.
    ///
    /// Our rows become glam columns, so the transform is the same.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.to_array())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array())
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix4x4> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix4x4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl Matrix3x2 {
    /// Converts to glam Affine2 (linear part in `matrix2`, translation
    /// from the third row).
    #[inline]
    pub fn to_glam(&self) -> glam::Affine2 {
        glam::Affine2::from_cols_array(&self.to_array())
    }

    /// Creates from glam Affine2.
    #[inline]
    pub fn from_glam(m: glam::Affine2) -> Self {
        Self::from_array(m.to_cols_array())
    }
}

impl From<glam::Affine2> for Matrix3x2 {
    #[inline]
    fn from(m: glam::Affine2) -> Self {
        Self::from_glam(m)
    }
}

impl From<Matrix3x2> for glam::Affine2 {
    #[inline]
    fn from(m: Matrix3x2) -> glam::Affine2 {
        m.to_glam()
    }
}

// Planes travel as (normal, d) in a Vec4
impl From<glam::Vec4> for Plane {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_array(v.to_array())
    }
}

impl From<Plane> for glam::Vec4 {
    #[inline]
    fn from(p: Plane) -> glam::Vec4 {
        glam::Vec4::from_array(p.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Affine2, Mat4, Quat, Vec2, Vec3, Vec4};

    #[test]
    fn test_vector_conversions() {
        assert_eq!(Vec2::from(Vector2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
        assert_eq!(Vector3::from(Vec3::new(1.0, 2.0, 3.0)), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector4::new(1.0, 2.0, 3.0, 4.0).to_glam(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Quaternion::from_glam(Quat::from_xyzw(0.0, 0.0, 0.6, 0.8)),
            Quaternion::new(0.0, 0.0, 0.6, 0.8)
        );
    }

    #[test]
    fn test_matrix4x4_composition_order() {
        let a = Matrix4x4::create_rotation_x(0.4) * Matrix4x4::create_translation(Vector3::new(1.0, 2.0, 3.0));
        let b = Matrix4x4::create_scale(Vector3::new(2.0, 3.0, 4.0)) * Matrix4x4::create_rotation_z(-1.1);
        let lhs = Mat4::from(a * b);
        let rhs = Mat4::from(b) * Mat4::from(a);
        assert!(lhs.abs_diff_eq(rhs, 1e-5));
    }

    #[test]
    fn test_matrix4x4_transform_point() {
        let m = Matrix4x4::create_from_yaw_pitch_roll(0.3, 0.2, -0.5)
            * Matrix4x4::create_translation(Vector3::new(4.0, 5.0, 6.0));
        let v = Vector3::new(1.0, -2.0, 3.0);
        let ours = Vec3::from(v.transform(&m));
        let theirs = m.to_glam().transform_point3(v.to_glam());
        assert!(ours.abs_diff_eq(theirs, 1e-5));
    }

    #[test]
    fn test_quaternion_matrix_parity() {
        let q = Quaternion::create_from_yaw_pitch_roll(0.7, -0.4, 1.9);
        let ours = Mat4::from(Matrix4x4::create_from_quaternion(q));
        let theirs = Mat4::from_quat(Quat::from(q));
        assert!(ours.abs_diff_eq(theirs, 1e-6));
    }

    #[test]
    fn test_matrix3x2_affine2() {
        let m = Matrix3x2::create_rotation(0.6) * Matrix3x2::create_translation(Vector2::new(3.0, -2.0));
        let v = Vector2::new(1.5, 2.5);
        let ours = Vec2::from(v.transform(&m));
        let theirs = Affine2::from(m).transform_point2(v.into());
        assert!(ours.abs_diff_eq(theirs, 1e-5));
        assert_eq!(Matrix3x2::from(m.to_glam()), m);
    }

    #[test]
    fn test_plane_vec4() {
        let p = Plane::new(0.0, 1.0, 0.0, -2.0);
        let v = Vec4::from(p);
        assert_eq!(v, Vec4::new(0.0, 1.0, 0.0, -2.0));
        assert_eq!(Plane::from(v), p);
    }
}
