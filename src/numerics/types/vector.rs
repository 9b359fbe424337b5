// src/numerics/types/vector.rs
// Vector2 / Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::angle::Radians;
use super::error::{NumericsError, Result};
use super::traits::FloatingPoint;

/// Vector2 is a simple 2D vector type with template-able numeric type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

/// Vector3 is a simple 3D vector type with template-able numeric type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    pub fn set_values(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Return the squared length (avoids sqrt)
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Cosine similarity: `dot(a, b) / (|a| |b|)`.
    ///
    /// Fails with [`NumericsError::DegenerateVector`] if either vector has
    /// zero magnitude.
    pub fn similarity(&self, other: &Self) -> Result<T> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == T::zero() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(self.dot(other) / denominator)
    }

    /// Scale to unit length in place. A zero vector is left untouched.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    pub fn normalized(self) -> Result<Self> {
        let length = self.magnitude();
        if length == T::zero() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(self / length)
    }

    /// Flip the direction in place.
    pub fn reverse(&mut self) {
        *self = -*self;
    }

    /// Counter-clockwise rotation. Raw scalars are taken as radians.
    pub fn rotate(&mut self, angle: impl Into<Radians<T>>) {
        let (sin, cos) = sin_cos(angle);
        let x = self.x * cos - self.y * sin;
        self.y = self.x * sin + self.y * cos;
        self.x = x;
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn set_values(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Return the squared length (avoids sqrt)
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Cosine similarity, see [`Vector2::similarity`].
    pub fn similarity(&self, other: &Self) -> Result<T> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == T::zero() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(self.dot(other) / denominator)
    }

    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    pub fn normalized(self) -> Result<Self> {
        let length = self.magnitude();
        if length == T::zero() {
            return Err(NumericsError::DegenerateVector);
        }
        Ok(self / length)
    }

    pub fn reverse(&mut self) {
        *self = -*self;
    }

    // The per-axis rotations below follow the clockwise-when-viewed-down-the-axis
    // convention, i.e. they rotate the frame rather than the point.

    pub fn rotate_x(&mut self, angle: impl Into<Radians<T>>) {
        let (sin, cos) = sin_cos(angle);
        let y = self.y * cos + self.z * sin;
        self.z = -self.y * sin + self.z * cos;
        self.y = y;
    }

    pub fn rotate_y(&mut self, angle: impl Into<Radians<T>>) {
        let (sin, cos) = sin_cos(angle);
        let x = self.x * cos - self.z * sin;
        self.z = self.x * sin + self.z * cos;
        self.x = x;
    }

    pub fn rotate_z(&mut self, angle: impl Into<Radians<T>>) {
        let (sin, cos) = sin_cos(angle);
        let x = self.x * cos + self.y * sin;
        self.y = -self.x * sin + self.y * cos;
        self.x = x;
    }

    /// Rotate about X, then Y, then Z.
    pub fn rotate_xyz(
        &mut self,
        x: impl Into<Radians<T>>,
        y: impl Into<Radians<T>>,
        z: impl Into<Radians<T>>,
    ) {
        self.rotate_x(x);
        self.rotate_y(y);
        self.rotate_z(z);
    }

    /// Rotate about Z, then Y, then X.
    pub fn rotate_zyx(
        &mut self,
        z: impl Into<Radians<T>>,
        y: impl Into<Radians<T>>,
        x: impl Into<Radians<T>>,
    ) {
        self.rotate_z(z);
        self.rotate_y(y);
        self.rotate_x(x);
    }
}

fn sin_cos<T: FloatingPoint>(angle: impl Into<Radians<T>>) -> (T, T) {
    let radians = angle.into().value();
    (radians.sin(), radians.cos())
}

// Elementwise operators, shared by both arities.
macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: FloatingPoint> Add for $name<T> {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl<T: FloatingPoint> Sub for $name<T> {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl<T: FloatingPoint> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: FloatingPoint> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl<T: FloatingPoint> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, scalar: T) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl<T: FloatingPoint> AddAssign for $name<T> {
            fn add_assign(&mut self, other: Self) {
                $(self.$field += other.$field;)+
            }
        }

        impl<T: FloatingPoint> SubAssign for $name<T> {
            fn sub_assign(&mut self, other: Self) {
                $(self.$field -= other.$field;)+
            }
        }

        impl<T: FloatingPoint> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, scalar: T) {
                $(self.$field *= scalar;)+
            }
        }

        impl<T: FloatingPoint> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, scalar: T) {
                $(self.$field /= scalar;)+
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });

// Conversions between vectors and tuples / arrays

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Conditional impls for serde

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{FloatingPoint, Vector2, Vector3};

    impl<T> Serialize for Vector2<T>
    where
        T: FloatingPoint + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            (&self.x, &self.y).serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Vector2<T>
    where
        T: FloatingPoint + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let (x, y) = <(T, T)>::deserialize(deserializer)?;
            Ok(Vector2 { x, y })
        }
    }

    impl<T> Serialize for Vector3<T>
    where
        T: FloatingPoint + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            (&self.x, &self.y, &self.z).serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Vector3<T>
    where
        T: FloatingPoint + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
            Ok(Vector3 { x, y, z })
        }
    }
}
