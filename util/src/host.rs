//! Host platform utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Environment variable giving the root directory of the software tree.
pub const ROOT_ENV_VAR: &str = "OMNI_SIM_ROOT";

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software tree.
///
/// If the `OMNI_SIM_ROOT` environment variable is set its value is used,
/// otherwise the current working directory is assumed to be the root.
pub fn get_sim_root() -> PathBuf {
    match env::var(ROOT_ENV_VAR) {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from(".")
    }
}
