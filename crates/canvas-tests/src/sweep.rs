//! Dense angle sweeps over the rotation constructors.
//!
//! Each test walks a grid of angles and axes and checks that the matrix
//! and quaternion representations agree, including the half-turn and
//! right-angle cases where extraction switches branches.

use approx::{abs_diff_eq, assert_abs_diff_eq};
use canvas_math::{Matrix3x2, Matrix4x4, Plane, Quaternion, Vector2, Vector3};

/// Degrees from -720 to 720 in half-degree steps.
fn dense_degrees() -> impl Iterator<Item = f32> {
    (-1440..=1440).map(|i| i as f32 * 0.5)
}

/// Degrees from -360 to 360 in 30-degree steps.
fn coarse_degrees() -> impl Iterator<Item = f32> {
    (-12..=12).map(|i| i as f32 * 30.0)
}

fn axes() -> [Vector3; 7] {
    [
        Vector3::UNIT_X,
        Vector3::UNIT_Y,
        Vector3::UNIT_Z,
        Vector3::new(1.0, 1.0, 0.0).normalize(),
        Vector3::new(0.0, -1.0, 1.0).normalize(),
        Vector3::new(1.0, 2.0, 3.0).normalize(),
        Vector3::new(-3.0, 0.5, 1.5).normalize(),
    ]
}

fn same_rotation(a: Quaternion, b: Quaternion, eps: f32) -> bool {
    abs_diff_eq!(a, b, epsilon = eps) || abs_diff_eq!(a, -b, epsilon = eps)
}

#[test]
fn test_sweep_single_axis_round_trip() {
    for deg in dense_degrees() {
        let r = deg.to_radians();
        for (axis, m) in [
            (Vector3::UNIT_X, Matrix4x4::create_rotation_x(r)),
            (Vector3::UNIT_Y, Matrix4x4::create_rotation_y(r)),
            (Vector3::UNIT_Z, Matrix4x4::create_rotation_z(r)),
        ] {
            let q = Quaternion::create_from_axis_angle(axis, r);

            assert_abs_diff_eq!(Matrix4x4::create_from_quaternion(q), m, epsilon = 1e-5);

            let back = Quaternion::create_from_rotation_matrix(&m);
            assert!(same_rotation(back, q, 1e-5), "{} deg about {:?}: {:?} vs {:?}", deg, axis, back, q);
        }
    }
}

#[test]
fn test_sweep_composed_round_trip() {
    for yaw in coarse_degrees() {
        for pitch in coarse_degrees() {
            for roll in coarse_degrees() {
                let (y, p, r) = (yaw.to_radians(), pitch.to_radians(), roll.to_radians());
                let q = Quaternion::create_from_yaw_pitch_roll(y, p, r);
                let m = Matrix4x4::create_rotation_z(r)
                    * Matrix4x4::create_rotation_x(p)
                    * Matrix4x4::create_rotation_y(y);

                assert_abs_diff_eq!(Matrix4x4::create_from_quaternion(q), m, epsilon = 1e-5);

                let back = Quaternion::create_from_rotation_matrix(&m);
                assert!(
                    same_rotation(back, q, 1e-4),
                    "yaw {} pitch {} roll {}: {:?} vs {:?}",
                    yaw, pitch, roll, back, q
                );
            }
        }
    }
}

#[test]
fn test_sweep_axis_angle_matrix() {
    for axis in axes() {
        for deg in coarse_degrees() {
            let r = deg.to_radians();
            let m = Matrix4x4::create_from_axis_angle(axis, r);
            let q = Matrix4x4::create_from_quaternion(Quaternion::create_from_axis_angle(axis, r));
            assert_abs_diff_eq!(m, q, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_sweep_plane_transform() {
    let planes = [
        Plane::new(0.0, 1.0, 0.0, -2.0),
        Plane::new(1.0, 2.0, 3.0, 4.0).normalize(),
        Plane::create_from_vertices(
            Vector3::new(1.0, 0.0, 5.0),
            Vector3::new(0.0, 3.0, 1.0),
            Vector3::new(-2.0, 1.0, 0.0),
        ),
    ];

    for plane in planes {
        for axis in axes() {
            for deg in coarse_degrees() {
                let q = Quaternion::create_from_axis_angle(axis, deg.to_radians());
                let m = Matrix4x4::create_from_quaternion(q);
                assert_abs_diff_eq!(plane.transform(&m), plane.transform_by_quaternion(q), epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn test_sweep_inverse() {
    for axis in axes() {
        for deg in coarse_degrees() {
            let m = Matrix4x4::create_scale(Vector3::new(0.5, 2.0, 1.5))
                * Matrix4x4::create_from_axis_angle(axis, deg.to_radians())
                * Matrix4x4::create_translation(Vector3::new(3.0, -4.0, 5.0));
            let inv = m.invert().unwrap();
            assert_abs_diff_eq!(m * inv, Matrix4x4::IDENTITY, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_sweep_right_angle_snapping() {
    let quarter = Matrix3x2::create_rotation(std::f32::consts::FRAC_PI_2);
    assert_eq!(quarter * quarter * quarter * quarter, Matrix3x2::IDENTITY);

    for k in -16i32..=16 {
        let m = Matrix3x2::create_rotation(k as f32 * std::f32::consts::FRAC_PI_2);
        for v in m.to_array() {
            assert!(v == 0.0 || v == 1.0 || v == -1.0, "k = {}: {:?}", k, m);
        }

        // right-angle rotations map lattice points to lattice points exactly
        let p = Vector2::new(3.0, -7.0).transform(&m);
        assert_eq!(p.x.fract(), 0.0);
        assert_eq!(p.y.fract(), 0.0);
    }
}
