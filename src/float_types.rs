// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;

/// Classification tolerance used when nothing else is configured.
///
/// Override at build time with the `CSGBSP_EPSILON` environment variable
/// (e.g. `CSGBSP_EPSILON=1e-6 cargo build`).
pub const DEFAULT_EPSILON: Real = 1e-5;

/// Returns the build-time epsilon: `CSGBSP_EPSILON` if it parses as a [`Real`],
/// otherwise [`DEFAULT_EPSILON`].
pub fn default_epsilon() -> Real {
    if let Some(environment_variable) = option_env!("CSGBSP_EPSILON") {
        if let Ok(value) = Real::from_str(environment_variable) {
            return value.max(Real::EPSILON);
        }
    }
    DEFAULT_EPSILON
}

/// Settings shared by every boolean operation.
///
/// The epsilon is the half-thickness of a plane: points whose signed
/// (unnormalized) distance `dot(normal, p) - offset` lies in `[-epsilon, epsilon]`
/// are treated as lying on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsgConfig {
    pub epsilon: Real,
}

impl Default for CsgConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
        }
    }
}

impl CsgConfig {
    /// Config with a custom epsilon, clamped to at least `Real::EPSILON`.
    pub fn with_epsilon(epsilon: Real) -> Self {
        Self {
            epsilon: epsilon.max(Real::EPSILON),
        }
    }
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
