//! Operator and trait boilerplate shared by the value types.

/// Implements component-wise arithmetic operators for a struct of `f32`
/// fields: `+`, `-`, unary `-`, `* f32`, `f32 *`, `/ f32` and their
/// assigning forms.
macro_rules! impl_componentwise_ops {
    ($t:ident { $($f:ident),+ }) => {
        impl ::std::ops::Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl ::std::ops::Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl ::std::ops::Mul<f32> for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl ::std::ops::Mul<$t> for f32 {
            type Output = $t;

            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t { $($f: self * rhs.$f),+ }
            }
        }

        impl ::std::ops::Div<f32> for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl ::std::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::std::ops::MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign<f32> for $t {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

/// Implements component-wise `*` and `/` between two vectors.
macro_rules! impl_vector_products {
    ($t:ident { $($f:ident),+ }) => {
        impl ::std::ops::Mul for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl ::std::ops::Div for $t {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl ::std::ops::MulAssign for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign for $t {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

/// Implements [`canvas_core::Blittable`], array conversions and the
/// `approx` comparison traits in terms of the flattened float fields.
macro_rules! impl_blittable {
    ($t:ident, $n:literal, [$($name:literal),+]) => {
        impl ::canvas_core::Blittable for $t {
            const FIELD_NAMES: &'static [&'static str] = &[$($name),+];
        }

        const _: () = assert!(::canvas_core::is_tightly_packed::<$t>());
        const _: () = assert!(::std::mem::size_of::<$t>() == $n * 4);

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(v: $t) -> [f32; $n] {
                v.to_array()
            }
        }

        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> f32 {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| <f32 as ::approx::AbsDiffEq>::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            #[inline]
            fn default_max_relative() -> f32 {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| {
                        <f32 as ::approx::RelativeEq>::relative_eq(a, b, epsilon, max_relative)
                    })
            }
        }

        impl ::approx::UlpsEq for $t {
            #[inline]
            fn default_max_ulps() -> u32 {
                <f32 as ::approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| <f32 as ::approx::UlpsEq>::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
}

/// Implements bounds-checked `Index`/`IndexMut` over named fields.
macro_rules! impl_index {
    ($t:ident { $($i:literal => $f:ident),+ }) => {
        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($t), i),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("{} index out of bounds: {}", stringify!($t), i),
                }
            }
        }
    };
}
