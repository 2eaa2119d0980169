//! Simulation clock module
//!
//! Advances the frame counter and derives the time-varying motion command
//! for each frame, with support for pause/resume.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use state::*;
