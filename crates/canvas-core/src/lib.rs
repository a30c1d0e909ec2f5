//! # canvas-core
//!
//! Core types shared by the canvas numerics crates.
//!
//! - [`Error`], [`Result`] - Failures reported by the checked numerics APIs
//! - [`Blittable`] - The fixed-layout contract every value type honours
//!
//! ## Crate Structure
//!
//! ```text
//! canvas-core (this crate)
//!    ^
//!    |
//!    +-- canvas-math (vectors, matrices, quaternions, planes)
//!    +-- canvas-tests (integration tests)
//!    +-- canvas-bench (benchmarks)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod layout;

pub use error::*;
pub use layout::*;

/// Prelude module for convenient imports.
///
/// ```
/// use canvas_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::layout::{is_tightly_packed, slice_as_bytes, Blittable};
}
