// src/numerics/types/traits.rs
// Scalar trait shared by every numerics type.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use super::constants::Constants;

/// FloatingPoint is the scalar bound used by matrices, vectors and angles.
///
/// Note: We require Copy, PartialOrd, the basic arithmetic ops on Self and
/// the precision-tagged [`Constants`] table. Implemented for `f32` and `f64`.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + Debug
    + Default
    + Constants
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Narrowing conversion from `f64` (lossy for `f32`).
    fn from_f64(value: f64) -> Self;

    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;

    /// IEEE 754 remainder: `self - n * divisor` where `n` is `self / divisor`
    /// rounded to the nearest integer, ties to even.
    fn ieee_remainder(self, divisor: Self) -> Self;
}

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            #[inline]
            fn zero() -> Self { 0.0 }
            #[inline]
            fn one() -> Self { 1.0 }
            #[inline]
            fn from_f64(value: f64) -> Self { value as $t }
            #[inline]
            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            #[inline]
            fn sin(self) -> Self { <$t>::sin(self) }
            #[inline]
            fn cos(self) -> Self { <$t>::cos(self) }
            #[inline]
            fn abs(self) -> Self { <$t>::abs(self) }

            fn ieee_remainder(self, divisor: Self) -> Self {
                let n = (self / divisor).round_ties_even();
                self - n * divisor
            }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
