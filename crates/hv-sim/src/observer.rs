//! Simulation observer trait for progress reporting and data collection.

use hv_behavior::StateChange;
use hv_core::{SimClock, SimTime};
use hv_hazard::HazardSignal;

use crate::AgentSnapshot;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — transition logger
///
/// ```rust,ignore
/// struct Transitions(Vec<String>);
///
/// impl SimObserver for Transitions {
///     fn on_state_change(&mut self, at: SimTime, change: &StateChange) {
///         self.0.push(format!("{at}: {} -> {}", change.from, change.to));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before the clock advances.
    fn on_frame_start(&mut self, _clock: &SimClock) {}

    /// Called for every hazard phase change, in order.
    fn on_hazard_signal(&mut self, _signal: &HazardSignal) {}

    /// Called for every behavior state change, in the order they fired.
    fn on_state_change(&mut self, _at: SimTime, _change: &StateChange) {}

    /// Called every `config.snapshot_interval_frames` frames.
    fn on_snapshot(&mut self, _snapshot: &AgentSnapshot) {}

    /// Called at the end of each frame.
    fn on_frame_end(&mut self, _clock: &SimClock) {}

    /// Called once after the final frame of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
