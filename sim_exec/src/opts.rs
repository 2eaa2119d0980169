//! Run options for the simulation executable
//!
//! These replace the interactive prompts of the original tool. Invalid
//! values never abort the run: they are recovered with the documented
//! default and a warning before any session construction begins.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;

// Internal
use crate::kin::WheelSet;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Default angular velocity of the platform.
///
/// Units: radians/second
pub const DEFAULT_OMEGA_RADS: f64 = 0.0;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Options controlling a simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunOpts {
    /// Run two sessions side by side, one per wheel set
    pub run_both: bool,

    /// Use the extended (4 wheel) set for a single-session run
    pub use_extended: bool,

    /// Fixed angular velocity of the platform.
    ///
    /// Units: radians/second
    pub omega_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            run_both: false,
            use_extended: false,
            omega_rads: DEFAULT_OMEGA_RADS,
        }
    }
}

impl RunOpts {
    /// Parse options from command line arguments (excluding the executable
    /// name).
    ///
    /// Recognised arguments:
    /// - `--both`: run the 3 wheel and 4 wheel sets side by side
    /// - `--extended`: use the 4 wheel set
    /// - `--omega <value>`: fixed angular velocity in radians/second
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--both" => opts.run_both = true,
                "--extended" => opts.use_extended = true,
                "--omega" => {
                    opts.omega_rads = match iter.next().map(|v| v.as_ref().parse::<f64>()) {
                        Some(Ok(omega)) => omega,
                        Some(Err(_)) | None => {
                            warn!(
                                "Invalid or missing omega value, using default \
                                 ({} rad/s)",
                                DEFAULT_OMEGA_RADS
                            );
                            DEFAULT_OMEGA_RADS
                        }
                    };
                }
                other => warn!("Unrecognised argument \"{}\" ignored", other),
            }
        }

        // When both sets run side by side the single-session wheel set flag
        // has no effect
        if opts.run_both && opts.use_extended {
            warn!("--extended has no effect when --both is given");
            opts.use_extended = false;
        }

        opts
    }

    /// The wheel set of the primary session.
    pub fn primary_wheel_set(&self) -> WheelSet {
        if self.use_extended {
            WheelSet::Extended
        } else {
            WheelSet::Standard
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RunOpts::from_args(Vec::<String>::new());

        assert_eq!(opts, RunOpts::default());
        assert_eq!(opts.primary_wheel_set(), WheelSet::Standard);
    }

    #[test]
    fn test_full_args() {
        let opts = RunOpts::from_args(vec!["--extended", "--omega", "0.5"]);

        assert!(!opts.run_both);
        assert_eq!(opts.primary_wheel_set(), WheelSet::Extended);
        assert_eq!(opts.omega_rads, 0.5);
    }

    #[test]
    fn test_bad_omega_recovered() {
        let opts = RunOpts::from_args(vec!["--omega", "fast"]);
        assert_eq!(opts.omega_rads, DEFAULT_OMEGA_RADS);

        let opts = RunOpts::from_args(vec!["--omega"]);
        assert_eq!(opts.omega_rads, DEFAULT_OMEGA_RADS);
    }

    #[test]
    fn test_both_overrides_extended() {
        let opts = RunOpts::from_args(vec!["--both", "--extended"]);

        assert!(opts.run_both);
        assert!(!opts.use_extended);
    }

    #[test]
    fn test_unknown_args_ignored() {
        let opts = RunOpts::from_args(vec!["--what", "--omega", "1.0"]);

        assert_eq!(opts.omega_rads, 1.0);
    }
}
