//! Jacobian matrix construction

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::DMatrix;
use serde::Serialize;

// Internal
use super::WheelConfig;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The linear map from robot body velocity `(v_x, v_y, ω)` to per-wheel
/// angular velocities.
///
/// The matrix is N×3 where N is the wheel count. It is derived
/// deterministically from a [`WheelConfig`] and immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Jacobian {
    matrix: DMatrix<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Jacobian {
    /// Build the Jacobian for the given wheel configuration.
    ///
    /// For wheel `i` with mounting angle `θ_i`, wheel radius `r` and platform
    /// radius `R` the row is:
    ///
    /// ```text
    /// [ cos(θ_i)/r , sin(θ_i)/r , R/r ]
    /// ```
    ///
    /// The first two entries project the body velocity onto the wheel's
    /// rolling direction, the third adds the contribution of body rotation,
    /// and the division by `r` converts linear speed to angular speed.
    ///
    /// Infallible: the configuration has already been validated at
    /// construction, in particular the wheel radius is nonzero.
    pub fn build(config: &WheelConfig) -> Self {
        let r = config.wheel_radius_m();

        let matrix = DMatrix::from_fn(config.num_wheels(), 3, |i, j| {
            let angle_rad = config.wheel_angles_rad()[i];
            match j {
                0 => angle_rad.cos() / r,
                1 => angle_rad.sin() / r,
                _ => config.platform_radius_m() / r,
            }
        });

        Self { matrix }
    }

    /// The underlying N×3 matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Number of wheels (rows) this Jacobian maps to.
    pub fn num_wheels(&self) -> usize {
        self.matrix.nrows()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::kin::{Params, WheelSet};

    #[test]
    fn test_row_invariant() {
        // For every wheel the first two entries are a scaled unit vector, so
        // their squares sum to 1/r²
        let params = Params::default();

        for wheel_set in &[WheelSet::Standard, WheelSet::Extended] {
            let config = WheelConfig::new(
                params.angles_deg(*wheel_set),
                params.wheel_radius_m,
                params.wheel_width_m,
                params.platform_radius_m,
            )
            .unwrap();

            let jacobian = Jacobian::build(&config);
            let inv_r_sq = 1.0 / params.wheel_radius_m.powi(2);

            assert_eq!(jacobian.matrix().ncols(), 3);
            assert_eq!(jacobian.num_wheels(), config.num_wheels());

            for i in 0..jacobian.num_wheels() {
                let m = jacobian.matrix();
                assert!((m[(i, 0)].powi(2) + m[(i, 1)].powi(2) - inv_r_sq).abs() < 1e-9);
                assert!(
                    (m[(i, 2)] - params.platform_radius_m / params.wheel_radius_m).abs()
                        < 1e-12
                );
            }
        }
    }

    #[test]
    fn test_three_wheel_entries() {
        let config =
            WheelConfig::new(&[60.0, 180.0, 300.0], 0.148, 0.044, 0.195).unwrap();
        let jacobian = Jacobian::build(&config);
        let m = jacobian.matrix();

        // cos(60°)/0.148 = 3.3784, sin(60°)/0.148 = 5.8515
        assert!((m[(0, 0)] - 3.378378).abs() < 1e-3);
        assert!((m[(0, 1)] - 5.851503).abs() < 1e-3);
        assert!((m[(1, 0)] + 6.756757).abs() < 1e-3);
        assert!(m[(1, 1)].abs() < 1e-9);
        assert!((m[(2, 0)] - 3.378378).abs() < 1e-3);
        assert!((m[(2, 1)] + 5.851503).abs() < 1e-3);
    }
}
