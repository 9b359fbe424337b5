// src/numerics/types/constants.rs
// Mathematical constants parameterized by precision.

/// Compile-time constants for a floating point precision.
///
/// Generic code reads them through the scalar type, e.g. `T::PI` or
/// `T::TAU` for any `T: FloatingPoint`.
pub trait Constants: Sized {
    /// Additive identity, usable in const context.
    const ZERO: Self;

    /// Euler's number.
    const E: Self;

    const PI: Self;
    const HALF_PI: Self;
    const THIRD_PI: Self;
    const QUARTER_PI: Self;
    const EIGHTH_PI: Self;
    const TWO_PI: Self;
    const THREE_PI: Self;
    const FOUR_PI: Self;

    /// 1/π
    const FRAC_1_PI: Self;
    /// 2/π
    const FRAC_2_PI: Self;
    /// 1/τ
    const FRAC_1_TAU: Self;

    /// One full turn in radians (2π).
    const TAU: Self;
    const HALF_TAU: Self;
    const QUARTER_TAU: Self;
    const EIGHTH_TAU: Self;
    const SIXTEENTH_TAU: Self;

    const SQRT_2: Self;
    const SQRT_3: Self;

    const DEGREES_PER_TURN: Self;
    const DEGREES_PER_HALF_TURN: Self;
}

macro_rules! impl_constants {
    ($t:ident, $sqrt_3:literal) => {
        impl Constants for $t {
            const ZERO: Self = 0.0;

            const E: Self = core::$t::consts::E;

            const PI: Self = core::$t::consts::PI;
            const HALF_PI: Self = core::$t::consts::FRAC_PI_2;
            const THIRD_PI: Self = core::$t::consts::FRAC_PI_3;
            const QUARTER_PI: Self = core::$t::consts::FRAC_PI_4;
            const EIGHTH_PI: Self = core::$t::consts::FRAC_PI_8;
            const TWO_PI: Self = core::$t::consts::TAU;
            const THREE_PI: Self = 3.0 * core::$t::consts::PI;
            const FOUR_PI: Self = 2.0 * core::$t::consts::TAU;

            const FRAC_1_PI: Self = core::$t::consts::FRAC_1_PI;
            const FRAC_2_PI: Self = core::$t::consts::FRAC_2_PI;
            const FRAC_1_TAU: Self = 0.5 * core::$t::consts::FRAC_1_PI;

            const TAU: Self = core::$t::consts::TAU;
            const HALF_TAU: Self = core::$t::consts::PI;
            const QUARTER_TAU: Self = core::$t::consts::FRAC_PI_2;
            const EIGHTH_TAU: Self = core::$t::consts::FRAC_PI_4;
            const SIXTEENTH_TAU: Self = core::$t::consts::FRAC_PI_8;

            const SQRT_2: Self = core::$t::consts::SQRT_2;
            const SQRT_3: Self = $sqrt_3;

            const DEGREES_PER_TURN: Self = 360.0;
            const DEGREES_PER_HALF_TURN: Self = 180.0;
        }
    };
}

// `core::{f32,f64}::consts::SQRT_3` is still unstable.
impl_constants!(f32, 1.732_050_8);
impl_constants!(f64, 1.732_050_807_568_877_2);
