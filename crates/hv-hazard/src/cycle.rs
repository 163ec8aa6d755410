//! `HazardCycle` — the timed hazard process.

use hv_core::time::secs_to_ms;
use hv_core::{HazardConfig, RandomSource, SimTime};
use hv_schedule::TaskQueue;
use tracing::{debug, info};

use crate::{AlertLevel, HazardFlag, HazardPhase, HazardSignal, HazardState};

const WARNING_TEXT: &str = "Hazard approaching!";
const ACTIVE_TEXT: &str = "Hazard in progress - take shelter";

/// Continuation points of the episode loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum HazardStep {
    /// Idle poll: draw and maybe start an episode.
    Sample,
    /// Warning hold elapsed.
    BeginActive,
    /// Active hold elapsed.
    EndEpisode,
}

/// What the hazard needs from the agent it harms.
pub trait Exposure {
    /// `true` while the agent is within arrival range of its safe station.
    fn is_sheltered(&self) -> bool;

    fn take_damage(&mut self, amount: f32);
}

/// Independently scheduled hazard process.
///
/// The cycle is advanced by the host clock through [`advance`][Self::advance];
/// its own waits are continuations in a [`TaskQueue`], so it never blocks the
/// caller and resumes exactly on schedule even if frames are coarse.
pub struct HazardCycle {
    config:   HazardConfig,
    phase:    HazardPhase,
    alert:    AlertLevel,
    warning:  Option<&'static str>,
    flag:     HazardFlag,
    queue:    TaskQueue<HazardStep>,
    episodes: u64,
}

impl HazardCycle {
    /// Create an idle cycle whose first sample is taken at `start`.
    pub fn new(config: HazardConfig, start: SimTime) -> Self {
        Self::with_flag(config, start, HazardFlag::new())
    }

    /// As [`new`][Self::new], writing into an existing flag handle.
    pub fn with_flag(config: HazardConfig, start: SimTime, flag: HazardFlag) -> Self {
        flag.set(false);
        let mut queue = TaskQueue::new();
        queue.push(start, HazardStep::Sample);
        Self {
            config,
            phase: HazardPhase::Idle,
            alert: AlertLevel::Safe,
            warning: None,
            flag,
            queue,
            episodes: 0,
        }
    }

    // ── Observables ───────────────────────────────────────────────────────

    /// Handle to the shared flag.
    pub fn flag(&self) -> HazardFlag {
        self.flag.clone()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    pub fn state(&self) -> HazardState {
        HazardState { phase: self.phase, active: self.flag.is_active() }
    }

    #[inline]
    pub fn phase(&self) -> HazardPhase {
        self.phase
    }

    #[inline]
    pub fn alert(&self) -> AlertLevel {
        self.alert
    }

    #[inline]
    pub fn warning_text(&self) -> Option<&'static str> {
        self.warning
    }

    /// Episodes started so far.
    #[inline]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// When the cycle next wakes.
    pub fn next_wake(&self) -> Option<SimTime> {
        self.queue.next_due()
    }

    pub fn config(&self) -> &HazardConfig {
        &self.config
    }

    /// The idle trigger predicate for a single draw.
    #[inline]
    pub fn should_trigger(&self, draw: u32) -> bool {
        draw == self.config.sentinel
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Resume every continuation due at or before `now`.  Returns the phase
    /// changes that happened, in order.
    pub fn advance<R: RandomSource>(&mut self, now: SimTime, rng: &mut R) -> Vec<HazardSignal> {
        let mut signals = Vec::new();
        loop {
            let due = self.queue.pop_due(now);
            if due.is_empty() {
                break;
            }
            for (at, step) in due {
                if let Some(signal) = self.resume(at, step, rng) {
                    signals.push(signal);
                }
            }
        }
        signals
    }

    /// Per-frame damage tick.  Returns the damage dealt.
    pub fn apply_exposure<E: Exposure>(&self, dt_secs: f32, target: &mut E) -> f32 {
        if !self.flag.is_active() || target.is_sheltered() {
            return 0.0;
        }
        let amount = self.config.damage_per_sec * dt_secs.max(0.0);
        if amount > 0.0 {
            target.take_damage(amount);
        }
        amount
    }

    fn resume<R: RandomSource>(
        &mut self,
        at:   SimTime,
        step: HazardStep,
        rng:  &mut R,
    ) -> Option<HazardSignal> {
        match step {
            HazardStep::Sample => {
                let draw = rng.range_u32(0..self.config.draw_upper);
                if self.phase == HazardPhase::Idle && self.should_trigger(draw) {
                    let hold = rng.range_f32(self.config.warning_min_secs..self.config.warning_max_secs);
                    self.queue.push(at.offset_secs(hold), HazardStep::BeginActive);
                    self.episodes += 1;
                    info!(at = %at, hold_secs = hold, "hazard warning");
                    Some(self.enter(at, HazardPhase::Warning, AlertLevel::Red, Some(WARNING_TEXT)))
                } else {
                    self.queue.push(self.next_sample(at), HazardStep::Sample);
                    None
                }
            }
            HazardStep::BeginActive => {
                let hold = rng.range_f32(self.config.active_min_secs..self.config.active_max_secs);
                self.queue.push(at.offset_secs(hold), HazardStep::EndEpisode);
                self.flag.set(true);
                info!(at = %at, hold_secs = hold, "hazard active");
                Some(self.enter(at, HazardPhase::Active, AlertLevel::Red, Some(ACTIVE_TEXT)))
            }
            HazardStep::EndEpisode => {
                self.flag.set(false);
                let signal = self.enter(at, HazardPhase::Cooldown, AlertLevel::Safe, None);
                self.phase = HazardPhase::Idle;
                self.queue.push(self.next_sample(at), HazardStep::Sample);
                info!(at = %at, "hazard cleared");
                Some(signal)
            }
        }
    }

    /// Next trigger sample after `at`, never less than 1 ms out.
    fn next_sample(&self, at: SimTime) -> SimTime {
        at.offset_ms(secs_to_ms(self.config.poll_interval_secs).max(1))
    }

    fn enter(
        &mut self,
        at:      SimTime,
        phase:   HazardPhase,
        alert:   AlertLevel,
        warning: Option<&'static str>,
    ) -> HazardSignal {
        debug!(from = %self.phase, to = %phase, "hazard phase change");
        self.phase = phase;
        self.alert = alert;
        self.warning = warning;
        HazardSignal { at, phase, alert, warning }
    }
}
