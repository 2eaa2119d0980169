//! Kinematics module
//!
//! Maps robot-level motion commands to per-wheel angular velocities using the
//! Jacobian model for an omnidirectional platform.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod frame;
mod jacobian;
mod params;
mod solver;
mod wheel_config;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use frame::*;
pub use jacobian::*;
pub use params::*;
pub use solver::*;
pub use wheel_config::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors raised while constructing a wheel configuration.
///
/// These are fatal to session start and are surfaced to the caller, never
/// defaulted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The wheel angle sequence is empty")]
    NoWheels,

    #[error("Wheel radius must be positive, got {0} m")]
    InvalidWheelRadius(f64),

    #[error("Wheel width must be positive, got {0} m")]
    InvalidWheelWidth(f64),

    #[error("Platform radius must be non-negative, got {0} m")]
    InvalidPlatformRadius(f64),
}
