//! Implementations for the SimSession state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{trace, warn};
use serde::Serialize;

// Internal
use super::SimError;
use crate::kin::{self, BodyFrameVel, Jacobian, Params, WheelConfig, WheelRates, WheelSet};
use crate::sim_clock::{MotionCommand, PauseHandle, SimClock};
use util::{
    archive::{Archived, Archiver},
    module::State,
    params,
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Simulation session state.
///
/// The wheel configuration and Jacobian are built once during `init` and
/// shared read-only across ticks. The clock is exclusively owned and mutated
/// by `proc`.
#[derive(Default)]
pub struct SimSession {
    pub(crate) params: Params,
    pub(crate) wheel_set: WheelSet,

    pub(crate) config: Option<WheelConfig>,
    pub(crate) jacobian: Option<Jacobian>,
    pub(crate) clock: SimClock,

    pub(crate) report: StatusReport,
    pub(crate) output: Option<FrameOutput>,

    arch_cmd: Archiver,
    arch_rates: Archiver,
}

/// Data required to initialise a session.
pub struct InitData {
    /// Parameter file holding the wheel geometry, relative to the params
    /// directory
    pub params_file: &'static str,

    /// Which wheel angle set to simulate
    pub wheel_set: WheelSet,

    /// Fixed angular velocity of the platform.
    ///
    /// Units: radians/second
    pub omega_rads: f64,
}

/// Input data to the session.
///
/// Ticks carry no external data; the pause state arrives asynchronously
/// through the clock's atomic flag.
#[derive(Clone, Copy, Default)]
pub struct InputData;

/// Output of one non-paused tick, handed to the renderer.
#[derive(Clone, Debug, Serialize)]
pub struct FrameOutput {
    /// The motion command for this frame
    pub cmd: MotionCommand,

    /// The command re-expressed in the body frame
    pub body_vel: BodyFrameVel,

    /// The resulting wheel angular velocities
    pub rates: WheelRates,
}

/// Status report for session processing.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct StatusReport {
    /// True if the tick produced no output because the clock is paused
    pub paused: bool,

    /// Frame index the tick ran under
    pub frame: u64,
}

/// Flat record written to the motion command archive.
#[derive(Serialize)]
struct CmdRecord {
    frame: u64,
    speed_ms: f64,
    direction_deg: f64,
    orientation_deg: f64,
    omega_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for SimSession {
    type InitData = InitData;
    type InitError = SimError;

    type InputData = InputData;
    type OutputData = Option<FrameOutput>;
    type StatusReport = StatusReport;
    type ProcError = SimError;

    /// Initialise the simulation session.
    ///
    /// Loads the geometry parameters, builds and validates the wheel
    /// configuration and its Jacobian, and creates the session's archivers.
    fn init(&mut self, init_data: Self::InitData, session: &Session)
        -> Result<(), Self::InitError>
    {
        // Load the geometry parameters, falling back to the documented
        // defaults if the file cannot be read. This is the provider-side
        // recovery; once configuration construction begins below, errors are
        // fatal.
        self.params = match params::load(init_data.params_file) {
            Ok(p) => p,
            Err(e) => {
                warn!(
                    "Could not load kinematics parameters ({}), using defaults",
                    e
                );
                Params::default()
            }
        };

        self.wheel_set = init_data.wheel_set;

        // Build and validate the wheel configuration
        let config = WheelConfig::new(
            self.params.angles_deg(init_data.wheel_set),
            self.params.wheel_radius_m,
            self.params.wheel_width_m,
            self.params.platform_radius_m,
        )?;

        // Build the Jacobian, fixed for the lifetime of the session
        self.jacobian = Some(Jacobian::build(&config));
        self.config = Some(config);

        self.clock = SimClock::new(init_data.omega_rads);

        // Create the arch folder for this session
        let mut arch_path = session.arch_root.clone();
        arch_path.push(init_data.wheel_set.label());
        std::fs::create_dir_all(arch_path)
            .map_err(|e| SimError::ArchiverInitError(e.to_string()))?;

        // Initialise the archivers
        self.arch_cmd = Archiver::from_path(
            session,
            format!("{}/motion_cmd.csv", init_data.wheel_set.label()),
        )
        .map_err(|e| SimError::ArchiverInitError(e.to_string()))?;
        self.arch_rates = Archiver::from_path(
            session,
            format!("{}/wheel_rates.csv", init_data.wheel_set.label()),
        )
        .map_err(|e| SimError::ArchiverInitError(e.to_string()))?;

        Ok(())
    }

    /// Perform one tick of the simulation session.
    fn proc(&mut self, _input: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Clear the status report
        self.report = StatusReport {
            frame: self.clock.frame(),
            ..StatusReport::default()
        };

        // Advance the clock. While paused there is nothing to recompute and
        // the previously rendered output must be retained, so exit without
        // touching it.
        let cmd = match self.clock.tick() {
            Some(c) => c,
            None => {
                self.report.paused = true;
                return Ok((None, self.report));
            }
        };

        let jacobian = match self.jacobian {
            Some(ref j) => j,
            None => return Err(SimError::NotInitialised),
        };

        // Re-express the command in the body frame and solve for the wheel
        // rates
        let body_vel =
            kin::to_body_frame(cmd.speed_ms, cmd.direction_deg, cmd.orientation_deg);
        let rates = kin::solve(jacobian, &body_vel, cmd.omega_rads);

        trace!(
            "{} frame {}: rates {:?}",
            self.wheel_set.label(),
            self.report.frame,
            rates.as_slice()
        );

        let output = FrameOutput {
            cmd,
            body_vel,
            rates,
        };
        self.output = Some(output.clone());

        Ok((Some(output), self.report))
    }
}

impl Archived for SimSession {
    fn write(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Paused ticks produce no new frame so there is nothing to append
        if self.report.paused {
            return Ok(());
        }

        if let Some(ref output) = self.output {
            self.arch_cmd.serialise(CmdRecord {
                frame: self.report.frame,
                speed_ms: output.cmd.speed_ms,
                direction_deg: output.cmd.direction_deg,
                orientation_deg: output.cmd.orientation_deg,
                omega_rads: output.cmd.omega_rads,
            })?;
            self.arch_rates.serialise(output.rates.as_slice().to_vec())?;
        }

        Ok(())
    }
}

impl SimSession {
    /// The wheel set this session simulates.
    pub fn wheel_set(&self) -> WheelSet {
        self.wheel_set
    }

    /// The validated wheel configuration, or `None` before initialisation.
    pub fn config(&self) -> Option<&WheelConfig> {
        self.config.as_ref()
    }

    /// Get a handle which toggles this session's clock.
    pub fn pause_handle(&self) -> PauseHandle {
        self.clock.pause_handle()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    /// Build a session without touching the filesystem.
    fn test_session(omega_rads: f64) -> SimSession {
        let params = Params::default();
        let config = WheelConfig::new(
            params.angles_deg(WheelSet::Standard),
            params.wheel_radius_m,
            params.wheel_width_m,
            params.platform_radius_m,
        )
        .unwrap();

        SimSession {
            jacobian: Some(Jacobian::build(&config)),
            config: Some(config),
            clock: SimClock::new(omega_rads),
            params,
            ..Default::default()
        }
    }

    #[test]
    fn test_proc_running() {
        let mut session = test_session(0.0);

        let (output, report) = session.proc(&InputData::default()).unwrap();
        let output = output.unwrap();

        assert!(!report.paused);
        assert_eq!(report.frame, 0);
        assert_eq!(output.cmd.direction_deg, 0.0);
        assert_eq!(output.rates.num_wheels(), 3);
    }

    #[test]
    fn test_proc_paused_retains_output() {
        let mut session = test_session(0.0);

        let (first, _) = session.proc(&InputData::default()).unwrap();
        assert!(first.is_some());

        // Pause and tick a few times: no output, previous output retained
        session.pause_handle().toggle();
        for _ in 0..5 {
            let (output, report) = session.proc(&InputData::default()).unwrap();
            assert!(output.is_none());
            assert!(report.paused);
        }
        assert!(session.output.is_some());

        // Resume: the frame counter kept advancing while paused
        session.pause_handle().toggle();
        let (output, report) = session.proc(&InputData::default()).unwrap();
        assert_eq!(report.frame, 6);
        assert_eq!(output.unwrap().cmd.direction_deg, 6.0);
    }

    #[test]
    fn test_proc_matches_reference_scenario() {
        let mut session = test_session(0.0);

        // Frame 90: speed 1.0, direction 90°, orientation 0°
        for _ in 0..90 {
            session.proc(&InputData::default()).unwrap();
        }
        let (output, _) = session.proc(&InputData::default()).unwrap();
        let output = output.unwrap();

        let expected = [-3.378378, 6.756757, -3.378378];
        for (rate, exp) in output.rates.as_slice().iter().zip(expected.iter()) {
            assert!((rate - exp).abs() < 1e-3);
        }
    }

    #[test]
    fn test_uninitialised_session() {
        let mut session = SimSession::default();

        assert!(matches!(
            session.proc(&InputData::default()),
            Err(SimError::NotInitialised)
        ));
    }
}
