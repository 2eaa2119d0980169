//! Wheel velocity solver

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::{DVector, Vector3};
use serde::Serialize;

// Internal
use super::{BodyFrameVel, Jacobian};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Angular velocities of the wheels, in the same order as the configuration's
/// mounting angles.
///
/// Units: radians/second
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WheelRates(pub DVector<f64>);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WheelRates {
    /// The rates as a slice, one entry per wheel.
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Number of wheels these rates apply to.
    pub fn num_wheels(&self) -> usize {
        self.0.len()
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the wheel angular velocities for the given body frame velocity and
/// platform angular velocity.
///
/// This is the matrix-vector product of the N×3 Jacobian with
/// `[v_bx, v_by, ω]`. The Jacobian's column count is guaranteed to be 3 by
/// construction so the operation is total.
pub fn solve(jacobian: &Jacobian, body_vel: &BodyFrameVel, omega_rads: f64) -> WheelRates {
    let v = Vector3::new(body_vel.vx_ms, body_vel.vy_ms, omega_rads);

    WheelRates(jacobian.matrix() * v)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::kin::{self, WheelConfig};

    fn three_wheel_jacobian() -> Jacobian {
        let config =
            WheelConfig::new(&[60.0, 180.0, 300.0], 0.148, 0.044, 0.195).unwrap();
        Jacobian::build(&config)
    }

    #[test]
    fn test_zero_input() {
        let jacobian = three_wheel_jacobian();
        let rates = solve(&jacobian, &BodyFrameVel::default(), 0.0);

        assert_eq!(rates.num_wheels(), 3);
        assert!(rates.as_slice().iter().all(|r| *r == 0.0));
    }

    #[test]
    fn test_reference_scenario() {
        // Driving at 1 m/s towards 90° with zero orientation and zero spin
        let jacobian = three_wheel_jacobian();
        let body_vel = kin::to_body_frame(1.0, 90.0, 0.0);
        let rates = solve(&jacobian, &body_vel, 0.0);

        let expected = [-3.378378, 6.756757, -3.378378];
        for (rate, exp) in rates.as_slice().iter().zip(expected.iter()) {
            assert!((rate - exp).abs() < 1e-3, "got {}, expected {}", rate, exp);
        }
    }

    #[test]
    fn test_pure_rotation() {
        // With no translation every wheel spins at ω·R/r
        let jacobian = three_wheel_jacobian();
        let rates = solve(&jacobian, &BodyFrameVel::default(), 2.0);

        let exp = 2.0 * 0.195 / 0.148;
        for rate in rates.as_slice() {
            assert!((rate - exp).abs() < 1e-9);
        }
    }
}
