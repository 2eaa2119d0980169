//! Renderer module
//!
//! The renderer is strictly downstream of the kinematics: it consumes the
//! wheel velocities, the motion command and the active wheel configuration
//! once per non-paused tick. The core has no dependency on how, or whether,
//! the results are displayed.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};

// Internal
use crate::kin::WheelConfig;
use crate::sim_session::FrameOutput;
use util::maths::{clamp, lin_map};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Maximum wheel rate used to normalise the rate bars, for the current robot
/// parameters.
///
/// Units: radians/second
const MAX_RATE_RADS: f64 = 6.0;

/// Width of a full rate bar in characters
const BAR_WIDTH: usize = 10;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Receives each frame's results for display.
pub trait Render {
    /// Display one non-paused frame.
    fn render(&mut self, output: &FrameOutput, config: &WheelConfig);
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Renders frames as log lines, mirroring the info box of the original plot
/// window.
pub struct ConsoleRenderer {
    /// Title printed with each frame
    title: &'static str,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ConsoleRenderer {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

impl Render for ConsoleRenderer {
    fn render(&mut self, output: &FrameOutput, config: &WheelConfig) {
        let rates = output
            .rates
            .as_slice()
            .iter()
            .map(|r| format!("{:.1}", r))
            .collect::<Vec<_>>()
            .join(", ");

        info!(
            "{} ({} wheels): orient. = {:5.1}°, driving dir = {:5.1}°, \
             speed = {:.2} m/s, ω = [{}] rad/s",
            self.title,
            config.num_wheels(),
            output.cmd.orientation_deg,
            output.cmd.direction_deg,
            output.cmd.speed_ms,
            rates
        );

        // One bar per wheel, normalised and clamped at the maximum rate
        for (i, rate) in output.rates.as_slice().iter().enumerate() {
            let norm = clamp(&(rate.abs() / MAX_RATE_RADS), &0.0, &1.0);
            let len = lin_map((0.0, 1.0), (0.0, BAR_WIDTH as f64), norm)
                .round() as usize;
            let sign = if *rate < 0.0 { '-' } else { '+' };

            debug!("    wheel {} {}{}", i, sign, "#".repeat(len));
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::kin::{self, Jacobian, WheelConfig};
    use crate::sim_clock::MotionCommand;

    #[test]
    fn test_console_renderer_accepts_frames() {
        let config =
            WheelConfig::new(&[60.0, 180.0, 300.0], 0.148, 0.044, 0.195).unwrap();
        let jacobian = Jacobian::build(&config);

        let cmd = MotionCommand {
            speed_ms: 1.0,
            direction_deg: 90.0,
            orientation_deg: 0.0,
            omega_rads: 0.0,
        };
        let body_vel =
            kin::to_body_frame(cmd.speed_ms, cmd.direction_deg, cmd.orientation_deg);
        let output = crate::sim_session::FrameOutput {
            cmd,
            body_vel,
            rates: kin::solve(&jacobian, &body_vel, cmd.omega_rads),
        };

        // The renderer only logs, so this just checks it handles a frame
        let mut renderer = ConsoleRenderer::new("test");
        renderer.render(&output, &config);
    }
}
