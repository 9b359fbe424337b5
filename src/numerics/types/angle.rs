// src/numerics/types/angle.rs
// Unit-tagged angle with an explicit conversion algebra.

//! Angles tagged with their unit at the type level.
//!
//! An [`Angle<U, T>`] is a bare scalar whose meaning is fixed by the unit
//! marker `U` ([`Rad`], [`Deg`] or [`Rev`]). Angles of different units never
//! mix implicitly: arithmetic is only defined between angles of the same unit,
//! and crossing units requires an explicit conversion.
//!
//! ```
//! use mathkit::numerics::types::angle::{Degrees, Radians, Revolutions};
//!
//! let quarter: Degrees = Degrees::new(90.0);
//! let rad: Radians = quarter.into();
//! assert!((rad.value() - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
//!
//! let turns: Revolutions = rad.to();
//! assert!((turns.value() - 0.25).abs() < 1e-6);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use super::traits::FloatingPoint;

mod sealed {
    pub trait Sealed {}
}

/// Runtime tag of an angle unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Radians,
    Degrees,
    Revolutions,
}

/// Type-level angle unit. Implemented only by [`Rad`], [`Deg`] and [`Rev`].
pub trait AngleUnit: sealed::Sealed + Copy + fmt::Debug + 'static {
    const KIND: UnitKind;
    const SYMBOL: &'static str;
}

/// Radians marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rad;

/// Degrees marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Deg;

/// Revolutions (full turns) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rev;

impl sealed::Sealed for Rad {}
impl sealed::Sealed for Deg {}
impl sealed::Sealed for Rev {}

impl AngleUnit for Rad {
    const KIND: UnitKind = UnitKind::Radians;
    const SYMBOL: &'static str = "rad";
}

impl AngleUnit for Deg {
    const KIND: UnitKind = UnitKind::Degrees;
    const SYMBOL: &'static str = "deg";
}

impl AngleUnit for Rev {
    const KIND: UnitKind = UnitKind::Revolutions;
    const SYMBOL: &'static str = "rev";
}

/// Converts a raw angle value between two units.
///
/// This is the single conversion table behind every cross-unit construction.
/// Same-unit conversion returns `value` untouched.
pub fn convert<T: FloatingPoint>(value: T, from: UnitKind, to: UnitKind) -> T {
    use UnitKind::*;

    match (from, to) {
        (Radians, Degrees) => value * T::DEGREES_PER_HALF_TURN / T::PI,
        (Radians, Revolutions) => value / T::TAU,
        (Degrees, Radians) => value * T::PI / T::DEGREES_PER_HALF_TURN,
        (Degrees, Revolutions) => value / T::DEGREES_PER_TURN,
        (Revolutions, Radians) => value * T::TAU,
        (Revolutions, Degrees) => value * T::DEGREES_PER_TURN,
        (Radians, Radians) | (Degrees, Degrees) | (Revolutions, Revolutions) => value,
    }
}

/// A scalar angle whose unit is fixed by `U`.
pub struct Angle<U: AngleUnit, T: FloatingPoint = f32> {
    value: T,
    unit: PhantomData<U>,
}

pub type Radians<T = f32> = Angle<Rad, T>;
pub type Degrees<T = f32> = Angle<Deg, T>;
pub type Revolutions<T = f32> = Angle<Rev, T>;

impl<U: AngleUnit, T: FloatingPoint> Angle<U, T> {
    /// Zero angle, also the `Default`.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// Wraps a raw value already expressed in unit `U`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn unit(&self) -> UnitKind {
        U::KIND
    }

    /// Converts this angle into unit `V`.
    pub fn to<V: AngleUnit>(self) -> Angle<V, T> {
        Angle::new(convert(self.value, U::KIND, V::KIND))
    }

    /// Builds an angle in unit `U` from an angle in any unit.
    pub fn from_angle<V: AngleUnit>(angle: Angle<V, T>) -> Self {
        angle.to()
    }

    /// Raw value in radians.
    pub fn radians(self) -> T {
        convert(self.value, U::KIND, UnitKind::Radians)
    }

    /// Raw value in degrees.
    pub fn degrees(self) -> T {
        convert(self.value, U::KIND, UnitKind::Degrees)
    }

    /// Raw value in revolutions.
    pub fn revolutions(self) -> T {
        convert(self.value, U::KIND, UnitKind::Revolutions)
    }

    pub fn sin(self) -> T {
        self.radians().sin()
    }

    pub fn cos(self) -> T {
        self.radians().cos()
    }

    /// Remainder with the quotient rounded to the nearest integer
    /// (ties to even), so the result lies in `[-other/2, other/2]`.
    pub fn ieee_remainder(self, other: Self) -> T {
        self.value.ieee_remainder(other.value)
    }
}

// Manual impls so the marker type needs no extra bounds.

impl<U: AngleUnit, T: FloatingPoint> Clone for Angle<U, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: AngleUnit, T: FloatingPoint> Copy for Angle<U, T> {}

impl<U: AngleUnit, T: FloatingPoint> Default for Angle<U, T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: AngleUnit, T: FloatingPoint> fmt::Debug for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle<{}>({:?})", U::SYMBOL, self.value)
    }
}

impl<U: AngleUnit, T: FloatingPoint> PartialEq for Angle<U, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: AngleUnit, T: FloatingPoint> PartialOrd for Angle<U, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// Cross-unit construction. The same-unit case is the blanket `From<T> for T`.
macro_rules! impl_unit_conversion {
    ($from:ty => $to:ty) => {
        impl<T: FloatingPoint> From<Angle<$from, T>> for Angle<$to, T> {
            fn from(angle: Angle<$from, T>) -> Self {
                angle.to()
            }
        }
    };
}

impl_unit_conversion!(Rad => Deg);
impl_unit_conversion!(Rad => Rev);
impl_unit_conversion!(Deg => Rad);
impl_unit_conversion!(Deg => Rev);
impl_unit_conversion!(Rev => Rad);
impl_unit_conversion!(Rev => Deg);

/// A raw scalar is taken to be radians.
impl<T: FloatingPoint> From<T> for Angle<Rad, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<U: AngleUnit, T: FloatingPoint> Neg for Angle<U, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: AngleUnit, T: FloatingPoint> Add for Angle<U, T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }
}

impl<U: AngleUnit, T: FloatingPoint> Sub for Angle<U, T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.value - other.value)
    }
}

impl<U: AngleUnit, T: FloatingPoint> Mul<T> for Angle<U, T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.value * scalar)
    }
}

impl<U: AngleUnit, T: FloatingPoint> Div<T> for Angle<U, T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.value / scalar)
    }
}

/// Truncated remainder: the result has the sign of the dividend.
impl<U: AngleUnit, T: FloatingPoint> Rem for Angle<U, T> {
    type Output = T;

    fn rem(self, other: Self) -> T {
        self.value % other.value
    }
}

impl<U: AngleUnit, T: FloatingPoint> AddAssign for Angle<U, T> {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl<U: AngleUnit, T: FloatingPoint> SubAssign for Angle<U, T> {
    fn sub_assign(&mut self, other: Self) {
        self.value -= other.value;
    }
}

impl<U: AngleUnit, T: FloatingPoint> MulAssign<T> for Angle<U, T> {
    fn mul_assign(&mut self, scalar: T) {
        self.value *= scalar;
    }
}

impl<U: AngleUnit, T: FloatingPoint> DivAssign<T> for Angle<U, T> {
    fn div_assign(&mut self, scalar: T) {
        self.value /= scalar;
    }
}

#[cfg(feature = "serde")]
impl<U, T> serde::Serialize for Angle<U, T>
where
    U: AngleUnit,
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U, T> serde::Deserialize<'de> for Angle<U, T>
where
    U: AngleUnit,
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_conversion_table() {
        let pi = core::f64::consts::PI;

        assert_abs_diff_eq!(convert(pi, UnitKind::Radians, UnitKind::Degrees), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(convert(pi, UnitKind::Radians, UnitKind::Revolutions), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(convert(90.0, UnitKind::Degrees, UnitKind::Radians), pi / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(convert(90.0, UnitKind::Degrees, UnitKind::Revolutions), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(convert(0.5, UnitKind::Revolutions, UnitKind::Radians), pi, epsilon = 1e-12);
        assert_abs_diff_eq!(convert(0.75, UnitKind::Revolutions, UnitKind::Degrees), 270.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_unit_is_identity() {
        for kind in [UnitKind::Radians, UnitKind::Degrees, UnitKind::Revolutions] {
            assert_eq!(convert(1.234_f64, kind, kind), 1.234);
        }
        let a: Degrees<f64> = Degrees::new(42.0);
        assert_eq!(a.to::<Deg>(), a);
        assert_eq!(Degrees::from_angle(a), a);
    }

    #[test]
    fn test_zero_constant() {
        assert_eq!(Radians::<f32>::ZERO.value(), 0.0);
        assert_eq!(Degrees::<f64>::ZERO, Degrees::<f64>::default());
        assert_eq!(Revolutions::<f64>::ZERO.to::<Deg>(), Degrees::<f64>::ZERO);
    }

    #[test]
    fn test_degrees_to_radians() {
        let right: Degrees = Degrees::new(90.0);
        let rad: Radians = Radians::from(right);
        assert_abs_diff_eq!(rad.value(), core::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(rad.unit(), UnitKind::Radians);
    }

    #[test]
    fn test_round_trips() {
        for raw in [-720.0_f64, -45.0, 0.0, 1.0, 90.0, 359.9, 1080.0] {
            let deg: Degrees<f64> = Degrees::new(raw);

            let via_rad: Degrees<f64> = Radians::<f64>::from(deg).into();
            assert_abs_diff_eq!(via_rad.value(), raw, epsilon = 1e-9);

            let via_rev: Degrees<f64> = Revolutions::<f64>::from(deg).into();
            assert_abs_diff_eq!(via_rev.value(), raw, epsilon = 1e-9);

            let via_from_angle = Degrees::from_angle(Radians::<f64>::from_angle(deg));
            assert_abs_diff_eq!(via_from_angle.value(), raw, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mixed_units_require_conversion() {
        let a: Radians = Radians::new(core::f32::consts::FRAC_PI_2);
        let b: Degrees = Degrees::new(120.0);
        let c: Revolutions = Revolutions::new(0.75);

        let result: Radians = Radians::<f32>::from(c) + a + b.into();
        assert_abs_diff_eq!(result.value(), 8.377_580_4, epsilon = 1e-5);
        assert_abs_diff_eq!(result.sin(), 0.866_025_4, epsilon = 1e-5);
    }

    #[test]
    fn test_arithmetic() {
        let a: Degrees<f64> = Degrees::new(30.0);
        let b: Degrees<f64> = Degrees::new(15.0);

        assert_eq!((a + b).value(), 45.0);
        assert_eq!((a - b).value(), 15.0);
        assert_eq!((a * 2.0).value(), 60.0);
        assert_eq!((a / 3.0).value(), 10.0);
        assert_eq!((-a).value(), -30.0);

        let mut c = a;
        c += b;
        c -= Degrees::new(5.0);
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c.value(), 20.0);
    }

    #[test]
    fn test_remainder_semantics() {
        let full: Degrees<f64> = Degrees::new(360.0);

        assert_eq!(Degrees::new(370.0) % full, 10.0);
        assert_eq!(Degrees::new(-370.0) % full, -10.0);
        assert_eq!(Degrees::new(350.0).ieee_remainder(full), -10.0);
    }

    #[test]
    fn test_exact_comparisons() {
        let a: Radians<f64> = Radians::new(1.0);
        let b: Radians<f64> = Radians::new(1.0 + f64::EPSILON);

        assert_ne!(a, b);
        assert!(a < b);
        assert!(b >= a);
        assert_eq!(a, Radians::new(1.0));
        assert_eq!(Radians::<f64>::default().value(), 0.0);
    }

    #[test]
    fn test_raw_scalar_is_radians() {
        let r: Radians<f64> = 0.5_f64.into();
        assert_eq!(r.value(), 0.5);
        assert_abs_diff_eq!(r.degrees(), 28.647_889_756_541_16, epsilon = 1e-12);
    }

    #[test]
    fn test_accessors() {
        let mut a: Revolutions<f64> = Revolutions::new(1.0);
        *a.value_mut() = 0.5;
        assert_eq!(a.into_inner(), 0.5);
        a.set_value(2.0);
        assert_abs_diff_eq!(a.radians(), 2.0 * core::f64::consts::TAU, epsilon = 1e-12);
        assert_eq!(format!("{:?}", a), "Angle<rev>(2.0)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_angle_bincode_roundtrip() {
        let config = bincode::config::standard();
        let a: Degrees<f64> = Degrees::new(123.5);

        let encoded = bincode::serde::encode_to_vec(a, config).unwrap();
        let (decoded, _): (Degrees<f64>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(a, decoded);
    }
}
