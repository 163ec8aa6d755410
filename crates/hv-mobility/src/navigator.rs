//! The `Navigator` trait.

use hv_core::Position;

/// Movement capability supplied by the host.
///
/// `navigate_to` is fire-and-forget: the call records a destination and
/// returns immediately.  Progress is observed only through
/// [`has_arrived`][Self::has_arrived] and [`position`][Self::position].
pub trait Navigator {
    /// Replace the current destination.
    fn navigate_to(&mut self, target: Position);

    /// Current agent position.
    fn position(&self) -> Position;

    /// Arrival tolerance used by [`has_arrived`][Self::has_arrived].
    fn stopping_distance(&self) -> f32;

    /// `true` when the agent is within stopping distance of `target`.
    fn has_arrived(&self, target: Position) -> bool {
        self.position().within(target, self.stopping_distance())
    }

    /// Advance movement by `dt_secs`.  Hosts with their own movement loop
    /// may leave this as a no-op.
    fn advance(&mut self, _dt_secs: f32) {}
}
