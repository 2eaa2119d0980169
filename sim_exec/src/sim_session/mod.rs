//! Simulation session module
//!
//! A session simulates one wheel configuration: it owns the validated
//! geometry, the Jacobian built from it, and an independent simulation clock.
//! Two sessions may run side by side sharing nothing but the pause toggle
//! source.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during SimSession operation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Invalid wheel configuration: {0}")]
    Config(#[from] crate::kin::ConfigError),

    #[error("Session processing was requested before initialisation")]
    NotInitialised,

    #[error("Failed to initialise an archiver: {0}")]
    ArchiverInitError(String),
}
