//! Pause controller module
//!
//! Reads lines from stdin on a background thread and delivers a pause toggle
//! to every registered clock. This is the single toggle source shared by
//! side-by-side sessions; each session keeps its own independent clock.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{info, warn};
use std::io::BufRead;
use std::thread;

// Internal
use crate::sim_clock::PauseHandle;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Spawn the pause controller thread.
///
/// Each line read from stdin (an Enter press) delivers one toggle to all
/// handles. The thread exits when stdin is closed.
pub fn spawn(handles: Vec<PauseHandle>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();

        for line in stdin.lock().lines() {
            match line {
                Ok(_) => {
                    for handle in &handles {
                        handle.toggle();
                    }
                    info!("Pause toggled");
                }
                Err(e) => {
                    warn!("Pause controller could not read stdin: {}", e);
                    break;
                }
            }
        }
    })
}
