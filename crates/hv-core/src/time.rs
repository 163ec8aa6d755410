//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `SimTime`.  The
//! frame loop advances a `SimClock` by a fixed frame duration; per-frame
//! elapsed time is exposed as `f32` seconds for dwell timers and attrition.
//!
//! Using an integer instant as the canonical time means scheduler ordering is
//! exact (no floating-point drift in the task queue keys) while the
//! behavior code keeps working in fractional seconds like the host engine.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation instant in milliseconds since start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_ms(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_add(ms))
    }

    /// Instant `secs` seconds after `self`, rounded to the nearest millisecond.
    /// Negative or non-finite durations are treated as zero.
    #[inline]
    pub fn offset_secs(self, secs: f32) -> SimTime {
        self.offset_ms(secs_to_ms(secs))
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Seconds since start as `f32`.
    #[inline]
    pub fn as_secs_f32(self) -> f32 {
        self.0 as f32 / 1_000.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        self.offset_ms(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f32())
    }
}

/// Convert fractional seconds to whole milliseconds.
#[inline]
pub fn secs_to_ms(secs: f32) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1_000.0).round() as u64
    } else {
        0
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step frame clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Milliseconds per frame.
    pub frame_ms: u32,
    /// Frames completed so far.
    pub frame: u64,
    /// Current instant — advanced by `SimClock::advance()` each frame.
    pub now: SimTime,
}

impl SimClock {
    pub fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms,
            frame: 0,
            now: SimTime::ZERO,
        }
    }

    /// Advance the clock by one frame and return the new instant.
    #[inline]
    pub fn advance(&mut self) -> SimTime {
        self.frame += 1;
        self.now = self.now.offset_ms(u64::from(self.frame_ms));
        self.now
    }

    /// Elapsed time of one frame in seconds.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.frame_ms as f32 / 1_000.0
    }

    /// How many frames span `secs` seconds? (rounds up)
    #[inline]
    pub fn frames_for_secs(&self, secs: f32) -> u64 {
        secs_to_ms(secs).div_ceil(u64::from(self.frame_ms.max(1)))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} ({})", self.frame, self.now)
    }
}
