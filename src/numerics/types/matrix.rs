// src/numerics/types/matrix.rs
// Dynamically sized dense matrix with row-major storage.

//! Dense `rows x columns` matrix.
//!
//! Arithmetic comes in two flavours:
//!
//! - the `try_*` methods check their preconditions (matching shape, conformable
//!   product, non-zero divisor) and return a [`NumericsError`] on failure;
//! - the operators (`+`, `-`, `*`, `/` and their compound forms) keep the legacy
//!   policy of returning the left operand unchanged when a precondition fails.
//!   Every such fallback is reported as a `tracing` warning.
//!
//! ```
//! use mathkit::numerics::types::matrix::Matrix;
//!
//! let a = Matrix::<f64>::new(2, 3, 1.0);
//! let b = Matrix::<f64>::new(3, 2, 2.0);
//!
//! let product = a.try_product(&b).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//! assert_eq!(product.value(0, 0), &6.0);
//!
//! assert!(a.try_product(&a).is_err());
//! ```

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use tracing::{trace, warn};

use super::error::{NumericsError, Result};
use super::traits::FloatingPoint;

/// Dense matrix of `T` stored row-major in a single owned buffer.
///
/// `rows` and `columns` are always at least 1 and the buffer always holds
/// exactly `rows * columns` elements.
#[derive(Clone, Debug)]
pub struct Matrix<T: FloatingPoint = f32> {
    rows: usize,
    columns: usize,
    default_value: T,
    storage: Vec<T>,
}

impl<T: FloatingPoint> Matrix<T> {
    /// Create a `rows x columns` matrix with every cell set to `default_value`.
    ///
    /// Zero extents are clamped to 1.
    pub fn new(rows: usize, columns: usize, default_value: T) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);

        Self {
            rows,
            columns,
            default_value,
            storage: vec![default_value; rows * columns],
        }
    }

    /// Zero matrix
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, T::zero())
    }

    /// Identity matrix
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 0..m.rows {
            m.storage[i * m.columns + i] = T::one();
        }
        m
    }

    /// Wrap a row-major buffer.
    ///
    /// Extents are clamped like [`Matrix::new`]; the buffer length must then
    /// equal `rows * columns`, and that product must fit in a `usize`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        let rows = rows.max(1);
        let columns = columns.max(1);

        let expected = rows
            .checked_mul(columns)
            .ok_or(NumericsError::ExtentOverflow { rows, columns })?;
        if data.len() != expected {
            return Err(NumericsError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            default_value: T::zero(),
            storage: data,
        })
    }

    /// Construct a new matrix from rows
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Result<Self> {
        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), C, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Always false: a matrix holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn default_value(&self) -> T {
        self.default_value
    }

    /// Change the fill value used for matrices derived from this one.
    /// Existing cells are not touched.
    pub fn set_default_value(&mut self, value: T) {
        self.default_value = value;
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    /// Cell at `(row, column)`.
    ///
    /// # Panics
    /// If `row >= rows()` or `column >= columns()`.
    pub fn value(&self, row: usize, column: usize) -> &T {
        &self.storage[self.offset(row, column)]
    }

    /// Mutable cell at `(row, column)`. Panics like [`Matrix::value`].
    pub fn value_mut(&mut self, row: usize, column: usize) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.storage[offset]
    }

    pub fn set_value(&mut self, row: usize, column: usize, value: T) {
        *self.value_mut(row, column) = value;
    }

    /// Checked cell access.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.storage.get(row * self.columns + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            self.storage.get_mut(row * self.columns + column)
        } else {
            None
        }
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.storage[start..start + self.columns]
    }

    /// Get a column by index
    pub fn column(&self, column: usize) -> Vec<T> {
        self.storage
            .iter()
            .skip(self.offset(0, column))
            .step_by(self.columns)
            .copied()
            .collect()
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    fn ensure_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(NumericsError::ShapeMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            default_value: self.default_value,
            storage: self
                .storage
                .iter()
                .zip(&other.storage)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            default_value: self.default_value,
            storage: self.storage.iter().map(|&a| f(a)).collect(),
        }
    }

    /// Elementwise sum. Shapes must match.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference. Shapes must match.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Elementwise (Hadamard) product. Shapes must match.
    pub fn try_hadamard(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other, "hadamard")?;
        Ok(self.zip_with(other, |a, b| a * b))
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.columns() == other.rows()`; the result is
    /// `self.rows() x other.columns()` and inherits `self`'s default value.
    pub fn try_product(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            return Err(NumericsError::ShapeMismatch {
                operation: "product",
                left: self.shape(),
                right: other.shape(),
            });
        }

        trace!(
            left = ?self.shape(),
            right = ?other.shape(),
            "computing matrix product"
        );

        let mut result = Self::new(self.rows, other.columns, self.default_value);
        for i in 0..self.rows {
            let lhs_row = &self.storage[i * self.columns..(i + 1) * self.columns];
            for j in 0..other.columns {
                let mut sum = T::zero();
                for (k, &lhs) in lhs_row.iter().enumerate() {
                    sum += lhs * other.storage[k * other.columns + j];
                }
                result.storage[i * other.columns + j] = sum;
            }
        }
        Ok(result)
    }

    /// Multiply every cell by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|a| a * scalar)
    }

    pub fn scale_in_place(&mut self, scalar: T) {
        for cell in &mut self.storage {
            *cell *= scalar;
        }
    }

    /// Divide every cell by `scalar`, which must be non-zero.
    pub fn try_div(&self, scalar: T) -> Result<Self> {
        if scalar == T::zero() {
            return Err(NumericsError::DivisionByZero);
        }
        Ok(self.map(|a| a / scalar))
    }

    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_shape(other, "add")?;
        for (a, &b) in self.storage.iter_mut().zip(&other.storage) {
            *a += b;
        }
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_shape(other, "subtract")?;
        for (a, &b) in self.storage.iter_mut().zip(&other.storage) {
            *a -= b;
        }
        Ok(())
    }

    pub fn try_hadamard_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same_shape(other, "hadamard")?;
        for (a, &b) in self.storage.iter_mut().zip(&other.storage) {
            *a *= b;
        }
        Ok(())
    }

    /// Replace `self` with `self * other`. `self` takes the product's shape.
    pub fn try_product_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.try_product(other)?;
        Ok(())
    }

    pub fn try_div_assign(&mut self, scalar: T) -> Result<()> {
        if scalar == T::zero() {
            return Err(NumericsError::DivisionByZero);
        }
        for cell in &mut self.storage {
            *cell /= scalar;
        }
        Ok(())
    }

    /// Transpose in place: cell `(i, j)` moves to `(j, i)` and the extents swap.
    pub fn transpose(&mut self) {
        trace!(shape = ?self.shape(), "transposing matrix");

        let mut transposed = Vec::with_capacity(self.storage.len());
        for j in 0..self.columns {
            transposed.extend(self.storage.iter().skip(j).step_by(self.columns).copied());
        }

        self.storage = transposed;
        core::mem::swap(&mut self.rows, &mut self.columns);
    }

    /// Transposed copy.
    pub fn transposed(&self) -> Self {
        let mut copy = self.clone();
        copy.transpose();
        copy
    }

    /// Sum of the main diagonal of a square matrix.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(NumericsError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok((0..self.rows)
            .map(|i| self.storage[i * self.columns + i])
            .fold(T::zero(), |sum, v| sum + v))
    }

    /// Overwrite a square matrix with the identity. Non-square matrices are
    /// left untouched.
    pub fn make_identity(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(NumericsError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }

        for i in 0..self.rows {
            for j in 0..self.columns {
                self.storage[i * self.columns + j] = if i == j { T::one() } else { T::zero() };
            }
        }
        Ok(())
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        let (a, b) = (self.offset(r1, 0), self.offset(r2, 0));
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.storage.split_at_mut(high);
        head[low..low + self.columns].swap_with_slice(&mut tail[..self.columns]);
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: T) {
        let start = self.offset(row, 0);
        for cell in &mut self.storage[start..start + self.columns] {
            *cell *= scalar;
        }
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: T) {
        let (t, s) = (self.offset(target, 0), self.offset(source, 0));
        for j in 0..self.columns {
            let v = self.storage[s + j];
            self.storage[t + j] += v * scalar;
        }
    }
}

/// Two matrices are equal when their shapes and cells are equal.
/// The default value is a construction hint and takes no part.
impl<T: FloatingPoint> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.storage == other.storage
    }
}

impl<T: FloatingPoint> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T: FloatingPoint> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        self.value(row, column)
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        self.value_mut(row, column)
    }
}

// Operator forms: on a failed precondition they hand back the left operand.

fn fall_back<T: FloatingPoint>(lhs: Matrix<T>, err: NumericsError) -> Matrix<T> {
    warn!(error = %err, "matrix operation failed, returning left operand unchanged");
    lhs
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "matrix operation failed, left operand unchanged");
    }
}

macro_rules! impl_matrix_binop {
    ($op:ident, $method:ident, $checked:ident, $assign_op:ident, $assign_method:ident, $checked_assign:ident) => {
        impl<T: FloatingPoint> $op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: &Matrix<T>) -> Matrix<T> {
                match self.$checked(other) {
                    Ok(result) => result,
                    Err(err) => fall_back(self.clone(), err),
                }
            }
        }

        impl<T: FloatingPoint> $op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: &Matrix<T>) -> Matrix<T> {
                match self.$checked(other) {
                    Ok(result) => result,
                    Err(err) => fall_back(self, err),
                }
            }
        }

        impl<T: FloatingPoint> $op for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, other: Matrix<T>) -> Matrix<T> {
                $op::$method(self, &other)
            }
        }

        impl<T: FloatingPoint> $assign_op<&Matrix<T>> for Matrix<T> {
            fn $assign_method(&mut self, other: &Matrix<T>) {
                report(self.$checked_assign(other));
            }
        }

        impl<T: FloatingPoint> $assign_op for Matrix<T> {
            fn $assign_method(&mut self, other: Matrix<T>) {
                report(self.$checked_assign(&other));
            }
        }
    };
}

impl_matrix_binop!(Add, add, try_add, AddAssign, add_assign, try_add_assign);
impl_matrix_binop!(Sub, sub, try_sub, SubAssign, sub_assign, try_sub_assign);
impl_matrix_binop!(Mul, mul, try_product, MulAssign, mul_assign, try_product_assign);

impl<T: FloatingPoint> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.scale_in_place(scalar);
        self
    }
}

impl<T: FloatingPoint> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_in_place(scalar);
    }
}

impl<T: FloatingPoint> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, scalar: T) -> Matrix<T> {
        match self.try_div(scalar) {
            Ok(result) => result,
            Err(err) => fall_back(self.clone(), err),
        }
    }
}

impl<T: FloatingPoint> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn div(mut self, scalar: T) -> Matrix<T> {
        match self.try_div_assign(scalar) {
            Ok(()) => self,
            Err(err) => fall_back(self, err),
        }
    }
}

impl<T: FloatingPoint> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, scalar: T) {
        report(self.try_div_assign(scalar));
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{FloatingPoint, Matrix};

    #[derive(Serialize)]
    struct MatrixRef<'a, T> {
        rows: usize,
        columns: usize,
        default_value: &'a T,
        data: &'a [T],
    }

    #[derive(Deserialize)]
    struct MatrixData<T> {
        rows: usize,
        columns: usize,
        default_value: T,
        data: Vec<T>,
    }

    impl<T> Serialize for Matrix<T>
    where
        T: FloatingPoint + Serialize,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            MatrixRef {
                rows: self.rows,
                columns: self.columns,
                default_value: &self.default_value,
                data: &self.storage,
            }
            .serialize(serializer)
        }
    }

    impl<'de, T> Deserialize<'de> for Matrix<T>
    where
        T: FloatingPoint + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = MatrixData::<T>::deserialize(deserializer)?;
            if raw.rows == 0 || raw.columns == 0 {
                return Err(D::Error::custom("matrix extents must be at least 1"));
            }

            let mut matrix = Matrix::from_vec(raw.rows, raw.columns, raw.data).map_err(D::Error::custom)?;
            matrix.default_value = raw.default_value;
            Ok(matrix)
        }
    }
}
