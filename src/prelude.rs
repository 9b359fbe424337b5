//! Everything needed to work with the numerics types in one import.
//!
//! ```
//! use mathkit::prelude::*;
//!
//! let v: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
//! let turn: Radians<f64> = Degrees::<f64>::new(90.0).into();
//! let mut w = v;
//! w.rotate_z(turn);
//! assert!((w.y + 1.0).abs() < 1e-12);
//! ```

pub use crate::numerics::types::angle::{
    convert, Angle, AngleUnit, Deg, Degrees, Rad, Radians, Rev, Revolutions, UnitKind,
};
pub use crate::numerics::types::constants::Constants;
pub use crate::numerics::types::error::NumericsError;
pub use crate::numerics::types::matrix::Matrix;
pub use crate::numerics::types::traits::FloatingPoint;
pub use crate::numerics::types::vector::{Vector2, Vector3};
