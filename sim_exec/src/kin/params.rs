//! Parameters structure for the kinematics module

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;
use super::WheelSet;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters describing the robot's wheel geometry.
#[derive(Clone, Debug, Deserialize)]
pub struct Params {

    // ---- GEOMETRY ----

    /// The radius of the omni wheels.
    ///
    /// Units: meters
    pub wheel_radius_m: f64,

    /// The width of the omni wheels.
    ///
    /// Units: meters
    pub wheel_width_m: f64,

    /// Distance from the centre of the robot platform to the wheels.
    ///
    /// Units: meters
    pub platform_radius_m: f64,

    // ---- WHEEL SETS ----

    /// Wheel mounting angles for the standard (3 wheel) set.
    ///
    /// Units: degrees
    pub wheel_angles_deg: Vec<f64>,

    /// Wheel mounting angles for the extended (4 wheel) set.
    ///
    /// Units: degrees
    pub ext_wheel_angles_deg: Vec<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    /// The documented default geometry, used when no parameter file can be
    /// loaded.
    fn default() -> Self {
        Self {
            wheel_radius_m: 0.148,
            wheel_width_m: 0.044,
            platform_radius_m: 0.195,
            wheel_angles_deg: vec![60.0, 180.0, 300.0],
            ext_wheel_angles_deg: vec![45.0, 135.0, 225.0, 315.0],
        }
    }
}

impl Params {
    /// Get the mounting angle set for the given wheel set.
    pub fn angles_deg(&self, wheel_set: WheelSet) -> &[f64] {
        match wheel_set {
            WheelSet::Standard => &self.wheel_angles_deg,
            WheelSet::Extended => &self.ext_wheel_angles_deg,
        }
    }
}
