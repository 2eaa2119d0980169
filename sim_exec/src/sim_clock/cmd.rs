//! Motion commands emitted by the simulation clock

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One instant's desired motion of the robot body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MotionCommand {
    /// Driving speed of the robot.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Driving direction.
    ///
    /// Units: degrees
    pub direction_deg: f64,

    /// Orientation of the robot platform.
    ///
    /// Units: degrees
    pub orientation_deg: f64,

    /// Angular velocity of the robot platform.
    ///
    /// Units: radians/second
    pub omega_rads: f64,
}
