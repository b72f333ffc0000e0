#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in the decomposition engine.
///
/// All arithmetic in the engine is performed on values implementing `FloatT`.
/// Implementations are provided automatically for any type meeting the
/// trait bounds, which covers the native f32 and f64 types.   Other types
/// acting as a field (addition, subtraction, multiplication, reciprocal)
/// can be used provided that they satisfy the same bounds.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize.  It is
/// used internally for converting constant primitives to [`FloatT`](crate::algebra::FloatT),
/// and by the [settings builder](crate::ldlt::LdltSettingsBuilder) for
/// converting defaults of primitive type.

// NB: `AsFloatT` is a convenience trait so that we can write
// (2.0).as_T() on constants, rather than T::from_f32(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: std::ops::Mul<T, Output = T> + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap()
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let a: f64 = (0.5).as_T();
    let b: f32 = (3_usize).as_T();
    assert_eq!(a, 0.5);
    assert_eq!(b, 3.0);
}
