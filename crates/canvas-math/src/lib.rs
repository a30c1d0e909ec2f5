//! # canvas-math
//!
//! Fixed-layout math types for 2D and 3D affine geometry.
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - Points, directions, homogeneous coordinates
//! - [`Matrix3x2`] - 2D affine transforms (rotation snapping at right angles)
//! - [`Matrix4x4`] - 3D transforms, projections, billboards, decomposition
//! - [`Quaternion`] - Rotations with shortest-path lerp/slerp
//! - [`Plane`] - Normal + offset planes
//!
//! # Design
//!
//! Every type is a `#[repr(C)]` aggregate of `f32` with no padding, so
//! values and slices of values can be handed to GPU buffers or foreign
//! code as-is (see [`Blittable`]).
//!
//! Matrices are **row-major** and transform **row vectors**:
//!
//! ```text
//! result = vector * matrix
//! ```
//!
//! so `a * b` applies `a` first, then `b`.
//!
//! # Usage
//!
//! ```rust
//! use canvas_math::{Matrix3x2, Vector2};
//!
//! // Quarter turn about (10, 10), snapped to an exact right angle
//! let m = Matrix3x2::create_rotation_with_center(
//!     std::f32::consts::FRAC_PI_2,
//!     Vector2::new(10.0, 10.0),
//! );
//! assert_eq!(m.m11, 0.0);
//! assert_eq!(Vector2::new(20.0, 10.0).transform(&m), Vector2::new(10.0, 20.0));
//! ```
//!
//! # Failure handling
//!
//! Checked APIs ([`Matrix4x4::invert`], [`Matrix4x4::decompose`], the
//! perspective constructors) return [`Result`]. The NaN-filling forms
//! ([`Matrix4x4::invert_into`], [`Matrix3x2::invert_into`]) are kept for
//! callers that want IEEE propagation instead.
//!
//! # Features
//!
//! - `serde` - Serialize/deserialize every type as its fields in memory order
//!
//! # Dependencies
//!
//! - [`glam`] - Conversions for interop
//! - [`canvas_core`] - Errors and the layout contract

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

pub mod scalar;

mod interop;
mod matrix3x2;
mod matrix4x4;
mod plane;
mod quaternion;
mod vector2;
mod vector3;
mod vector4;

pub use matrix3x2::*;
pub use matrix4x4::*;
pub use plane::*;
pub use quaternion::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;

pub use scalar::{clamp, ieee_remainder, lerp, wrap_angle};

pub use canvas_core::{Blittable, Error, Result};
