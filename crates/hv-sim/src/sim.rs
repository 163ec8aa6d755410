//! The `Sim` struct and its frame loop.

use hv_agent::AgentVitals;
use hv_behavior::{BeamEffect, BehaviorModel, Command, StatePath, TickInput};
use hv_core::{AgentId, HarvesterConfig, Position, SimClock, SimConfig, SimRng};
use hv_field::ResourceField;
use hv_hazard::{Exposure, HazardCycle};
use hv_mobility::Navigator;
use tracing::{debug, info, trace};

use crate::{AgentSnapshot, SimObserver};

// ── Exposure adapter ──────────────────────────────────────────────────────────

/// Lets the hazard read shelter status and write damage without seeing the
/// rest of the agent.
struct Exposed<'a, N: Navigator> {
    navigator: &'a N,
    station:   Position,
    vitals:    &'a mut AgentVitals,
}

impl<N: Navigator> Exposure for Exposed<'_, N> {
    fn is_sheltered(&self) -> bool {
        self.navigator.has_arrived(self.station)
    }

    fn take_damage(&mut self, amount: f32) {
        self.vitals.damage(amount);
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Totals reported by [`Sim::run`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames:           u64,
    pub station:          u64,
    pub health:           f32,
    pub hazard_episodes:  u64,
    pub state_changes:    u64,
    pub path:             StatePath,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The frame-loop runner for one harvester.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel, N: Navigator> {
    /// Frame duration, run length, seed, snapshot cadence.
    pub config: SimConfig,

    /// Harvester parameters; the station position is read for shelter checks.
    pub harvester: HarvesterConfig,

    pub clock: SimClock,

    pub agent: AgentId,

    pub vitals: AgentVitals,

    /// The shared resource field.  Only the behavior model extracts from it.
    pub field: ResourceField,

    /// Hazard process.  Owns the RNG stream below.
    pub hazard: HazardCycle,

    pub behavior: B,

    pub navigator: N,

    /// Whether the beam effect is currently playing.
    pub beam_on: bool,

    pub(crate) rng:           SimRng,
    pub(crate) state_changes: u64,
}

impl<B: BehaviorModel, N: Navigator> Sim<B, N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.total_frames`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunSummary {
        info!(
            agent = %self.agent,
            frames = self.config.total_frames,
            nodes = self.field.len(),
            "simulation start"
        );
        while self.clock.frame < self.config.total_frames {
            self.step(observer);
        }
        observer.on_sim_end(&self.clock);
        let summary = self.summary();
        info!(
            frames = summary.frames,
            station = summary.station,
            episodes = summary.hazard_episodes,
            path = %summary.path,
            "simulation end"
        );
        summary
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `total_frames`).  Does not call `on_sim_end`.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Advance one frame.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_frame_start(&self.clock);

        let now = self.clock.advance();
        let dt = self.clock.delta_secs();

        // ── Hazard task ───────────────────────────────────────────────────
        for signal in self.hazard.advance(now, &mut self.rng) {
            observer.on_hazard_signal(&signal);
        }
        let mut exposed = Exposed {
            navigator: &self.navigator,
            station:   self.harvester.station,
            vitals:    &mut self.vitals,
        };
        let dealt = self.hazard.apply_exposure(dt, &mut exposed);
        if dealt > 0.0 {
            trace!(dealt, health = self.vitals.health(), "hazard damage");
        }

        // ── Behavior task ─────────────────────────────────────────────────
        let input = TickInput {
            dt_secs:       dt,
            hazard_active: self.hazard.is_active(),
            navigator:     &self.navigator,
        };
        let out = self.behavior.tick(&input, &mut self.vitals, &mut self.field);

        for change in &out.changes {
            self.state_changes += 1;
            observer.on_state_change(now, change);
        }
        for command in out.commands {
            self.apply(command);
        }
        self.navigator.advance(dt);

        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && self.clock.frame.is_multiple_of(interval) {
            observer.on_snapshot(&self.snapshot());
        }
        observer.on_frame_end(&self.clock);
    }

    /// Current state of the agent.
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            frame:         self.clock.frame,
            time:          self.clock.now,
            agent:         self.agent,
            position:      self.navigator.position(),
            health:        self.vitals.health(),
            max_health:    self.vitals.max_health(),
            carried:       self.vitals.carried(),
            station:       self.vitals.station(),
            hazard_phase:  self.hazard.phase(),
            hazard_active: self.hazard.is_active(),
            path:          self.behavior.state_path(),
            beam_on:       self.beam_on,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames:          self.clock.frame,
            station:         self.vitals.station(),
            health:          self.vitals.health(),
            hazard_episodes: self.hazard.episodes(),
            state_changes:   self.state_changes,
            path:            self.behavior.state_path(),
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::NavigateTo(target) => {
                debug!(agent = %self.agent, to = %target, "navigate");
                self.navigator.navigate_to(target);
            }
            Command::Beam(effect) => {
                self.beam_on = effect == BeamEffect::Play;
            }
        }
    }
}
