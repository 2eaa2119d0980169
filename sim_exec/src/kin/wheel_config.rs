//! Wheel configuration structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::ConfigError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Static description of the robot's wheel geometry.
///
/// The configuration is validated at construction and immutable afterwards.
/// The wheel count equals the length of the mounting angle sequence.
#[derive(Clone, Debug, Serialize)]
pub struct WheelConfig {
    /// Wheel mounting angles around the platform.
    ///
    /// Units: radians
    wheel_angles_rad: Vec<f64>,

    /// Radius of the omni wheels.
    ///
    /// Units: meters
    wheel_radius_m: f64,

    /// Width of the omni wheels.
    ///
    /// Units: meters
    wheel_width_m: f64,

    /// Distance from the centre of the robot platform to the wheels.
    ///
    /// Units: meters
    platform_radius_m: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Selects which of the two wheel angle sets to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WheelSet {
    /// The standard 3 wheel set
    Standard,

    /// The extended 4 wheel set
    Extended,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WheelConfig {
    /// Build a new wheel configuration from mounting angles in degrees.
    ///
    /// # Outputs
    /// - On success the validated configuration.
    /// - On error a `ConfigError` describing the invalid geometry.
    pub fn new(
        wheel_angles_deg: &[f64],
        wheel_radius_m: f64,
        wheel_width_m: f64,
        platform_radius_m: f64,
    ) -> Result<Self, ConfigError> {
        if wheel_angles_deg.is_empty() {
            return Err(ConfigError::NoWheels);
        }
        // A non-positive radius would divide by zero in the Jacobian rows
        if wheel_radius_m <= 0.0 {
            return Err(ConfigError::InvalidWheelRadius(wheel_radius_m));
        }
        if wheel_width_m <= 0.0 {
            return Err(ConfigError::InvalidWheelWidth(wheel_width_m));
        }
        if platform_radius_m < 0.0 {
            return Err(ConfigError::InvalidPlatformRadius(platform_radius_m));
        }

        Ok(Self {
            wheel_angles_rad: wheel_angles_deg
                .iter()
                .map(|a| a.to_radians())
                .collect(),
            wheel_radius_m,
            wheel_width_m,
            platform_radius_m,
        })
    }

    /// Number of wheels in this configuration.
    pub fn num_wheels(&self) -> usize {
        self.wheel_angles_rad.len()
    }

    /// Wheel mounting angles in radians.
    pub fn wheel_angles_rad(&self) -> &[f64] {
        &self.wheel_angles_rad
    }

    /// Wheel radius in meters.
    pub fn wheel_radius_m(&self) -> f64 {
        self.wheel_radius_m
    }

    /// Wheel width in meters.
    pub fn wheel_width_m(&self) -> f64 {
        self.wheel_width_m
    }

    /// Platform radius in meters.
    pub fn platform_radius_m(&self) -> f64 {
        self.platform_radius_m
    }
}

impl Default for WheelSet {
    fn default() -> Self {
        WheelSet::Standard
    }
}

impl WheelSet {
    /// Short label used for archive paths and log messages.
    pub fn label(&self) -> &'static str {
        match self {
            WheelSet::Standard => "three_wheel",
            WheelSet::Extended => "four_wheel",
        }
    }

    /// Display title for this wheel set.
    pub fn title(&self) -> &'static str {
        match self {
            WheelSet::Standard => "Jacobian Omnidirectional - 3 Wheels",
            WheelSet::Extended => "Jacobian Omnidirectional - 4 Wheels",
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config =
            WheelConfig::new(&[60.0, 180.0, 300.0], 0.148, 0.044, 0.195).unwrap();

        assert_eq!(config.num_wheels(), 3);
        assert!((config.wheel_angles_rad()[1] - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            WheelConfig::new(&[], 0.148, 0.044, 0.195),
            Err(ConfigError::NoWheels)
        ));
        assert!(matches!(
            WheelConfig::new(&[60.0], 0.0, 0.044, 0.195),
            Err(ConfigError::InvalidWheelRadius(_))
        ));
        assert!(matches!(
            WheelConfig::new(&[60.0], -0.1, 0.044, 0.195),
            Err(ConfigError::InvalidWheelRadius(_))
        ));
        assert!(matches!(
            WheelConfig::new(&[60.0], 0.148, 0.0, 0.195),
            Err(ConfigError::InvalidWheelWidth(_))
        ));
        assert!(matches!(
            WheelConfig::new(&[60.0], 0.148, 0.044, -0.195),
            Err(ConfigError::InvalidPlatformRadius(_))
        ));
    }
}
