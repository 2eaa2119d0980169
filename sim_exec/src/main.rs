//! Main simulation executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logging and run options
//!     - Initialise one or two simulation sessions (one per wheel set)
//!     - Spawn the pause controller
//!     - Main loop:
//!         - Simulation session processing (clock tick, body frame
//!           transform, wheel velocity solve)
//!         - Rendering of the produced frames
//!         - Archive writing
//!         - Cycle management
//!
//! # Modules
//!
//! All cyclic modules (e.g. `sim_session`) shall provide a public struct
//! implementing the `util::module::State` trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{info, warn};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use sim_lib::{
    data_store::DataStore,
    kin::WheelSet,
    opts::RunOpts,
    pause_ctrl,
    renderer::{ConsoleRenderer, Render},
    sim_session::{InitData, InputData, SimSession},
};
use util::{
    archive::Archived,
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle, matching the original animation interval.
const CYCLE_PERIOD_S: f64 = 0.05;

/// Number of cycles per second
const CYCLE_FREQUENCY_HZ: f64 = 1.0 / CYCLE_PERIOD_S;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new(
        "sim_exec",
        "sessions"
    ).wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Omni Sim Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- RUN OPTIONS ----

    let opts = RunOpts::from_args(env::args().skip(1));

    info!("Run options: {:?}", opts);

    // ---- INITIALISE SESSIONS ----

    info!("Initialising simulation sessions...");

    let mut ds = DataStore::default();
    let mut renderers: Vec<ConsoleRenderer> = Vec::new();

    let wheel_sets = if opts.run_both {
        vec![WheelSet::Standard, WheelSet::Extended]
    }
    else {
        vec![opts.primary_wheel_set()]
    };

    for wheel_set in wheel_sets {
        let mut sim_session = SimSession::default();

        sim_session.init(
            InitData {
                params_file: "kin.toml",
                wheel_set,
                omega_rads: opts.omega_rads,
            },
            &session,
        ).wrap_err("Failed to initialise SimSession")?;

        info!("SimSession ({}) init complete", wheel_set.label());

        renderers.push(ConsoleRenderer::new(wheel_set.title()));
        ds.sessions.push(sim_session);
    }

    info!("Session initialisation complete\n");

    // ---- PAUSE CONTROLLER ----

    // One toggle source is shared by all sessions
    let handles = ds.sessions.iter().map(|s| s.pause_handle()).collect();
    pause_ctrl::spawn(handles);

    info!("Pause controller started, press Enter to pause/resume\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    loop {

        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(CYCLE_FREQUENCY_HZ);

        // ---- SIMULATION PROCESSING ----

        for (i, sess) in ds.sessions.iter_mut().enumerate() {
            match sess.proc(&InputData::default()) {
                Ok((output, report)) => {
                    ds.session_rpts.push(report);

                    // Hand the frame to the renderer. While paused no output
                    // is produced and the previously rendered state stands.
                    if let (Some(ref output), Some(config)) = (output, sess.config()) {
                        renderers[i].render(output, config);
                    }
                }
                Err(e) => warn!("Error during SimSession processing: {}", e),
            }

            // ---- WRITE ARCHIVES ----

            if let Err(e) = sess.write() {
                warn!("Could not write session archives: {}", e);
            }
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S)
            .checked_sub(cycle_dur)
        {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            },
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }
}
