//! # Omni Sim library.
//!
//! This library allows other crates in the workspace to access items defined
//! inside the simulation crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Data store - holds all state shared across the main loop
pub mod data_store;

/// Kinematics module - wheel geometry, Jacobian construction, body frame
/// transform and wheel velocity solver
pub mod kin;

/// Run options - command line interface replacing the original tool's
/// interactive prompts
pub mod opts;

/// Pause controller - delivers pause toggles to the simulation clocks from
/// stdin
pub mod pause_ctrl;

/// Renderer - displays frame results, strictly downstream of the kinematics
pub mod renderer;

/// Simulation clock module - advances the frame counter and derives motion
/// commands
pub mod sim_clock;

/// Simulation session module - owns one wheel configuration, its Jacobian
/// and its clock
pub mod sim_session;
