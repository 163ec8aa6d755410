//! Tunable parameters for the agent, the hazard cycle, and the frame loop.
//!
//! Defaults reproduce the reference outpost scene.  Applications typically
//! deserialize these from a file (enable the `serde` feature) and call
//! `validate()` before handing them to the simulation builder.

use crate::{HvError, HvResult, Position};

// ── HarvesterConfig ───────────────────────────────────────────────────────────

/// Agent vitals limits, work rates, and fixed scene locations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarvesterConfig {
    /// Upper bound of `health`.
    pub max_health: f32,

    /// Maximum resource the agent can carry.
    pub capacity: u32,

    /// Units extracted (or unloaded) per completed dwell cycle.
    pub yield_per_cycle: u32,

    /// Seconds of dwell required before each extract / unload / repair step.
    pub dwell_secs: f32,

    /// Enter `Repairing` when `health < max_health * repair_threshold`.
    pub repair_threshold: f32,

    /// Leave `Repairing` when `health >= max_health - repair_release_margin`.
    pub repair_release_margin: f32,

    /// Fraction of `max_health` restored per repair cycle.
    pub repair_fraction: f32,

    /// Ambient health loss per second, applied every tick in every state.
    pub attrition_per_sec: f32,

    /// Arrival tolerance: the agent is "at" a target within this distance.
    pub stopping_distance: f32,

    /// Travel speed in metres per second (used by the straight-line navigator).
    pub speed: f32,

    /// Drop-off point; doubles as the hazard shelter.
    pub station: Position,

    /// Repair bay.
    pub repair_bay: Position,

    /// Where the agent starts.
    pub start: Position,
}

impl Default for HarvesterConfig {
    fn default() -> Self {
        Self {
            max_health:            20.0,
            capacity:              20,
            yield_per_cycle:       5,
            dwell_secs:            1.0,
            repair_threshold:      0.3,
            repair_release_margin: 5.0,
            repair_fraction:       0.2,
            attrition_per_sec:     1.0,
            stopping_distance:     2.0,
            speed:                 8.0,
            station:               Position::flat(0.0, 0.0),
            repair_bay:            Position::flat(12.0, 0.0),
            start:                 Position::flat(0.0, 4.0),
        }
    }
}

impl HarvesterConfig {
    /// Health below which repair takes priority over harvesting.
    #[inline]
    pub fn repair_below(&self) -> f32 {
        self.max_health * self.repair_threshold
    }

    /// Health at or above which repair is considered done.
    #[inline]
    pub fn repair_done_at(&self) -> f32 {
        self.max_health - self.repair_release_margin
    }

    /// Health restored per repair cycle.
    #[inline]
    pub fn repair_step(&self) -> f32 {
        self.max_health * self.repair_fraction
    }

    pub fn validate(&self) -> HvResult<()> {
        if !(self.max_health > 0.0) {
            return Err(HvError::Config(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.capacity == 0 {
            return Err(HvError::Config("capacity must be at least 1".into()));
        }
        if self.yield_per_cycle == 0 {
            return Err(HvError::Config("yield_per_cycle must be at least 1".into()));
        }
        if !(self.dwell_secs >= 0.0) {
            return Err(HvError::Config("dwell_secs must be non-negative".into()));
        }
        if !(0.0..=1.0).contains(&self.repair_threshold) {
            return Err(HvError::Config(format!(
                "repair_threshold must lie in [0, 1], got {}",
                self.repair_threshold
            )));
        }
        if self.repair_done_at() < self.repair_below() {
            return Err(HvError::Config(format!(
                "repair release level {} is below the repair trigger {}",
                self.repair_done_at(),
                self.repair_below()
            )));
        }
        if !(self.repair_fraction > 0.0) {
            return Err(HvError::Config("repair_fraction must be positive".into()));
        }
        if !(self.attrition_per_sec >= 0.0) {
            return Err(HvError::Config("attrition_per_sec must be non-negative".into()));
        }
        if !(self.stopping_distance >= 0.0) {
            return Err(HvError::Config("stopping_distance must be non-negative".into()));
        }
        if !(self.speed > 0.0) {
            return Err(HvError::Config("speed must be positive".into()));
        }
        Ok(())
    }
}

// ── HazardConfig ──────────────────────────────────────────────────────────────

/// Timing and damage parameters of the recurring hazard.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardConfig {
    /// Seconds between trigger samples while idle.
    pub poll_interval_secs: f32,

    /// Trigger draws are uniform in `[0, draw_upper)`.
    pub draw_upper: u32,

    /// A draw equal to this value starts an episode.
    pub sentinel: u32,

    /// Warning hold is uniform in `[warning_min_secs, warning_max_secs)`.
    pub warning_min_secs: f32,
    pub warning_max_secs: f32,

    /// Active hold is uniform in `[active_min_secs, active_max_secs)`.
    pub active_min_secs: f32,
    pub active_max_secs: f32,

    /// Health lost per second by an unsheltered agent while active.
    pub damage_per_sec: f32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1.0,
            draw_upper:         15,
            sentinel:           1,
            warning_min_secs:   3.0,
            warning_max_secs:   5.0,
            active_min_secs:    7.0,
            active_max_secs:    12.0,
            damage_per_sec:     2.0,
        }
    }
}

impl HazardConfig {
    /// Probability that a single idle sample starts an episode.
    pub fn trigger_probability(&self) -> f64 {
        if self.sentinel < self.draw_upper {
            1.0 / f64::from(self.draw_upper)
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> HvResult<()> {
        if !(self.poll_interval_secs > 0.0) {
            return Err(HvError::Config("poll_interval_secs must be positive".into()));
        }
        if crate::time::secs_to_ms(self.poll_interval_secs) == 0 {
            return Err(HvError::Config("poll_interval_secs must be at least 1 ms".into()));
        }
        if self.draw_upper == 0 {
            return Err(HvError::Config("draw_upper must be at least 1".into()));
        }
        check_range("warning hold", self.warning_min_secs, self.warning_max_secs)?;
        check_range("active hold", self.active_min_secs, self.active_max_secs)?;
        if !(self.damage_per_sec >= 0.0) {
            return Err(HvError::Config("damage_per_sec must be non-negative".into()));
        }
        Ok(())
    }
}

fn check_range(what: &'static str, min: f32, max: f32) -> HvResult<()> {
    if min >= 0.0 && min < max {
        Ok(())
    } else {
        Err(HvError::EmptyRange { what, min, max })
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Frame-loop configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Milliseconds per frame.  Default: 50 (20 frames per second).
    pub frame_ms: u32,

    /// Total frames to simulate in `Sim::run`.
    pub total_frames: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a snapshot every N frames.  1 = every frame; 0 = never.
    pub snapshot_interval_frames: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_ms:                 50,
            total_frames:             20 * 120,
            seed:                     42,
            snapshot_interval_frames: 20,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> HvResult<()> {
        if self.frame_ms == 0 {
            return Err(HvError::Config("frame_ms must be at least 1".into()));
        }
        Ok(())
    }

    /// Construct a clock pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.frame_ms)
    }
}
