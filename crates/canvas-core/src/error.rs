//! Error types for canvas numerics operations.
//!
//! Most operations in `canvas-math` never fail: degenerate inputs produce
//! NaN or infinite components exactly as IEEE-754 dictates. The [`Error`]
//! enum covers the few operations that expose a checked API:
//!
//! - Matrix inversion ([`Error::SingularMatrix`])
//! - Projection matrix construction ([`Error::InvalidProjection`])
//! - Matrix decomposition ([`Error::NotDecomposable`])
//!
//! # Usage
//!
//! ```rust
//! use canvas_core::{Error, Result};
//!
//! fn checked_reciprocal(det: f32) -> Result<f32> {
//!     if det == 0.0 {
//!         return Err(Error::singular_matrix(det));
//!     }
//!     Ok(1.0 / det)
//! }
//!
//! assert!(checked_reciprocal(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `canvas-math` - `Matrix3x2::invert`, `Matrix4x4::invert`,
//!   `Matrix4x4::decompose` and the perspective constructors

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked numerics APIs.
///
/// # Categories
///
/// - **Inversion errors**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Argument errors**: [`InvalidProjection`](Error::InvalidProjection)
/// - **Decomposition errors**: [`NotDecomposable`](Error::NotDecomposable)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The matrix has a zero determinant and cannot be inverted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use canvas_core::Error;
    ///
    /// let err = Error::singular_matrix(0.0);
    /// assert!(err.to_string().contains("singular"));
    /// ```
    #[error("singular matrix: determinant is {determinant}")]
    SingularMatrix {
        /// Determinant that was computed
        determinant: f32,
    },

    /// A projection constructor was given an out-of-range argument.
    ///
    /// Returned for non-positive near/far planes, `near >= far`, or a
    /// field of view outside `(0, π)`.
    #[error("invalid projection argument `{name}` = {value}: {reason}")]
    InvalidProjection {
        /// Argument name
        name: &'static str,
        /// Rejected value
        value: f32,
        /// What the argument must satisfy
        reason: &'static str,
    },

    /// The matrix has no scale/rotation/translation decomposition.
    ///
    /// `residual` is `(|det(basis)| - 1)^2` after scale removal; it must be
    /// below the decomposition tolerance for the basis to count as a
    /// rotation.
    #[error("matrix cannot be decomposed: rotation basis residual {residual}")]
    NotDecomposable {
        /// Squared deviation of the normalized basis determinant from one
        residual: f32,
    },
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::InvalidProjection`] error.
    ///
    /// # Arguments
    ///
    /// * `name` - Argument name as it appears in the constructor signature
    /// * `value` - The rejected value
    /// * `reason` - Constraint the value violates
    #[inline]
    pub fn invalid_projection(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidProjection {
            name,
            value,
            reason,
        }
    }

    /// Creates an [`Error::NotDecomposable`] error.
    #[inline]
    pub fn not_decomposable(residual: f32) -> Self {
        Self::NotDecomposable { residual }
    }

    /// Returns `true` if this is a singular matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` if this is an argument validation error.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidProjection { .. })
    }
}
