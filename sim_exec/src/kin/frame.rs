//! Body frame velocity transform

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A motion command re-expressed in the robot's own coordinate frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BodyFrameVel {
    /// Body frame x velocity.
    ///
    /// Units: meters/second
    pub vx_ms: f64,

    /// Body frame y velocity.
    ///
    /// Units: meters/second
    pub vy_ms: f64,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Convert a speed and driving direction into body frame velocities,
/// accounting for the robot's current orientation.
///
/// The body frame's reference axis is rotated 90° from the raw trigonometric
/// frame, so the rotated components are `(-lateral, forward)`. This rotation
/// defines which physical direction "forward" maps to in the Jacobian's row
/// convention and must not be altered.
///
/// Pure function, all angles accepted unconstrained (periodic in 360°).
pub fn to_body_frame(speed_ms: f64, direction_deg: f64, orientation_deg: f64) -> BodyFrameVel {
    // Driving direction relative to the robot's orientation
    let delta_rad = (direction_deg - orientation_deg).to_radians();

    // Components in the unrotated frame
    let fwd_ms = speed_ms * delta_rad.cos();
    let lat_ms = speed_ms * delta_rad.sin();

    // Rotate 90 degrees into the body frame
    BodyFrameVel {
        vx_ms: -lat_ms,
        vy_ms: fwd_ms,
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_speed() {
        // Zero speed gives zero body velocity whatever the angles
        for angle in &[-720.0, -37.5, 0.0, 90.0, 1234.5] {
            let v = to_body_frame(0.0, *angle, *angle * 0.5);
            assert_eq!(v.vx_ms, 0.0);
            assert_eq!(v.vy_ms, 0.0);
        }
    }

    #[test]
    fn test_rotation_convention() {
        // Driving at 90° with zero orientation maps onto -x in the body frame
        let v = to_body_frame(1.0, 90.0, 0.0);
        assert!((v.vx_ms + 1.0).abs() < 1e-12);
        assert!(v.vy_ms.abs() < 1e-12);

        // Driving straight ahead maps onto +y
        let v = to_body_frame(1.0, 0.0, 0.0);
        assert!(v.vx_ms.abs() < 1e-12);
        assert!((v.vy_ms - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_periodicity() {
        for k in &[-2.0, -1.0, 1.0, 3.0] {
            let a = to_body_frame(0.75, 10.5, 3.25);
            let b = to_body_frame(0.75, 10.5 + 360.0 * k, 3.25 + 360.0 * k);

            assert!((a.vx_ms - b.vx_ms).abs() < 1e-12);
            assert!((a.vy_ms - b.vy_ms).abs() < 1e-12);
        }
    }

    #[test]
    fn test_orientation_cancels_direction() {
        // Equal direction and orientation is the same as driving forward
        let a = to_body_frame(0.5, 123.0, 123.0);
        let b = to_body_frame(0.5, 0.0, 0.0);

        assert!((a.vx_ms - b.vx_ms).abs() < 1e-12);
        assert!((a.vy_ms - b.vy_ms).abs() < 1e-12);
    }
}
