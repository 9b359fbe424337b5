pub mod numerics;
pub mod prelude;

pub use numerics::types::angle::{Angle, Degrees, Radians, Revolutions};
pub use numerics::types::error::{NumericsError, Result};
pub use numerics::types::matrix::Matrix;
pub use numerics::types::vector::{Vector2, Vector3};
