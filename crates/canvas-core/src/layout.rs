//! GPU layout contract for numerics value types.
//!
//! Every value type in `canvas-math` is written directly into GPU constant
//! buffers and handed across ABI boundaries, so its memory layout is part of
//! its public contract: a fixed sequence of `f32` fields with no padding.
//!
//! [`Blittable`] names that contract. It extends [`bytemuck::Pod`] with the
//! ordered field names, which lets callers serialize positionally and lets
//! tests check each field's byte offset.
//!
//! # Usage
//!
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use canvas_core::{Blittable, is_tightly_packed};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct Extent {
//!     width: f32,
//!     height: f32,
//! }
//!
//! impl Blittable for Extent {
//!     const FIELD_NAMES: &'static [&'static str] = &["width", "height"];
//! }
//!
//! const _: () = assert!(is_tightly_packed::<Extent>());
//!
//! let e = Extent { width: 2.0, height: 3.0 };
//! assert_eq!(e.as_floats(), &[2.0, 3.0]);
//! assert_eq!(e.as_bytes().len(), 8);
//! ```

use bytemuck::Pod;

/// Size in bytes of one scalar field.
pub const FIELD_SIZE: usize = std::mem::size_of::<f32>();

/// A plain `f32` aggregate with a fixed, tightly packed field order.
///
/// Implementors must be `#[repr(C)]` structs whose fields, flattened, are
/// exactly `FIELD_NAMES.len()` `f32` values in declaration order.
pub trait Blittable: Pod {
    /// Flattened field names in memory order.
    const FIELD_NAMES: &'static [&'static str];

    /// Number of `f32` fields.
    const FIELD_COUNT: usize = Self::FIELD_NAMES.len();

    /// Byte offset of the named field, if it exists.
    fn field_offset(name: &str) -> Option<usize> {
        Self::FIELD_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| i * FIELD_SIZE)
    }

    /// Views the value as its `f32` fields in memory order.
    #[inline]
    fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// Views the value as raw bytes, ready for a buffer upload.
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a value from exactly `FIELD_COUNT` floats.
    ///
    /// Returns `None` if the slice length does not match.
    #[inline]
    fn from_floats(floats: &[f32]) -> Option<Self> {
        bytemuck::try_from_bytes::<Self>(bytemuck::cast_slice(floats))
            .ok()
            .copied()
    }
}

/// Views a slice of values as one contiguous byte buffer.
///
/// Elements are laid out back-to-back with no inter-element gap.
#[inline]
pub fn slice_as_bytes<T: Blittable>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Returns `true` if `T` occupies exactly one `f32` per named field.
pub const fn is_tightly_packed<T: Blittable>() -> bool {
    std::mem::size_of::<T>() == T::FIELD_NAMES.len() * FIELD_SIZE
        && std::mem::align_of::<T>() == std::mem::align_of::<f32>()
}
