// src/numerics/types/error.rs
// Error type shared by the checked numerics operations.

/// Errors that can occur during checked matrix and vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("Shape mismatch in {operation}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Matrix is not square: {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    #[error("Vector has zero magnitude")]
    DegenerateVector,

    #[error("Storage length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Matrix extents overflow: {rows}x{columns} cells do not fit in usize")]
    ExtentOverflow { rows: usize, columns: usize },
}

pub type Result<T, E = NumericsError> = core::result::Result<T, E>;
