//! Implementations for the SimClock state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Internal
use super::MotionCommand;
use util::maths::wrap_360;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Discrete time simulation clock.
///
/// The clock advances a frame counter once per tick and derives the motion
/// command for the current frame. It is either running or paused: while
/// paused, ticks produce no command but the frame counter keeps advancing,
/// matching an animation host which keeps delivering frames.
pub struct SimClock {
    /// Fixed angular velocity for this session.
    ///
    /// Units: radians/second
    omega_rads: f64,

    /// Frame index of the next tick
    frame: u64,

    /// Run/pause flag.
    ///
    /// Written by the pause controller thread and read once at the top of
    /// each tick, so it must be atomic.
    running: Arc<AtomicBool>,
}

/// A cloneable handle used to toggle a clock's pause state from another
/// thread.
#[derive(Clone)]
pub struct PauseHandle(Arc<AtomicBool>);

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SimClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SimClock {
    /// Create a new running clock at frame 0 with the given fixed angular
    /// velocity.
    pub fn new(omega_rads: f64) -> Self {
        Self {
            omega_rads,
            frame: 0,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The frame index the next tick will run under.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// True if the clock is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Flip the run/pause state.
    pub fn toggle_pause(&self) {
        self.running.fetch_xor(true, Ordering::Relaxed);
    }

    /// Get a handle which can toggle this clock's pause state from another
    /// thread.
    pub fn pause_handle(&self) -> PauseHandle {
        PauseHandle(self.running.clone())
    }

    /// Advance the clock by one tick.
    ///
    /// Returns the motion command for the current frame, or `None` if the
    /// clock is paused. The run flag is read exactly once, at the top of the
    /// tick.
    pub fn tick(&mut self) -> Option<MotionCommand> {
        let running = self.running.load(Ordering::Relaxed);

        let frame = self.frame;
        self.frame += 1;

        if !running {
            return None;
        }

        // The derived quantities are periodic in 360 frames, so the counter
        // is reduced before converting to f64 to keep precision in long runs
        let frame_deg = (frame % 360) as f64;

        Some(MotionCommand {
            // Oscillates in [0, 1]
            speed_ms: 0.5 * (1.0 + frame_deg.to_radians().sin()),
            direction_deg: frame_deg,
            orientation_deg: wrap_360(self.omega_rads * frame as f64),
            omega_rads: self.omega_rads,
        })
    }
}

impl PauseHandle {
    /// Deliver one pause toggle to the owning clock.
    pub fn toggle(&self) {
        self.0.fetch_xor(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_frame_90() {
        let mut clock = SimClock::new(0.0);

        for _ in 0..90 {
            clock.tick().unwrap();
        }

        let cmd = clock.tick().unwrap();
        assert!((cmd.speed_ms - 1.0).abs() < 1e-12);
        assert_eq!(cmd.direction_deg, 90.0);
        assert_eq!(cmd.orientation_deg, 0.0);
        assert_eq!(cmd.omega_rads, 0.0);
    }

    #[test]
    fn test_orientation_rate() {
        let mut clock = SimClock::new(2.0);

        // Frame 0 has zero orientation
        assert_eq!(clock.tick().unwrap().orientation_deg, 0.0);

        // Frame 1 orientation is ω·1 mod 360
        assert!((clock.tick().unwrap().orientation_deg - 2.0).abs() < 1e-12);

        // Orientation always stays in [0, 360)
        for _ in 0..500 {
            let cmd = clock.tick().unwrap();
            assert!(cmd.orientation_deg >= 0.0 && cmd.orientation_deg < 360.0);
        }
    }

    #[test]
    fn test_pause_toggle_idempotence() {
        let mut clock = SimClock::new(0.0);
        assert!(clock.is_running());

        // A pair of toggles leaves the run state unchanged
        clock.toggle_pause();
        clock.toggle_pause();
        assert!(clock.is_running());

        // No commands are emitted while paused, however many ticks occur
        clock.toggle_pause();
        for _ in 0..100 {
            assert!(clock.tick().is_none());
        }

        // The frame counter keeps advancing while paused
        assert_eq!(clock.frame(), 100);

        clock.toggle_pause();
        let cmd = clock.tick().unwrap();
        assert_eq!(cmd.direction_deg, 100.0);
    }

    #[test]
    fn test_toggle_via_handle() {
        let mut clock = SimClock::new(0.0);
        let handle = clock.pause_handle();

        handle.toggle();
        assert!(!clock.is_running());
        assert!(clock.tick().is_none());

        handle.toggle();
        assert!(clock.is_running());
        assert!(clock.tick().is_some());
    }

    #[test]
    fn test_deterministic_replay() {
        let mut a = SimClock::new(0.3);
        let mut b = SimClock::new(0.3);

        for _ in 0..1000 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
