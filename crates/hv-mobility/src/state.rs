//! Per-agent movement state.

use hv_core::Position;

/// The movement state of one agent.
///
/// An agent is either **stationary** (`in_transit = false`) or **in transit**
/// toward `destination`.  `origin` and `distance_total` let display tools
/// compute progress along the current leg.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// `true` while the agent is travelling to `destination`.
    pub in_transit: bool,

    /// Where the current leg started.
    pub origin: Position,

    /// Where the agent is heading.  Equals `position` when stationary.
    pub destination: Position,

    /// Current position.
    pub position: Position,

    /// Length of the current leg at the moment it was commanded.
    pub distance_total: f32,
}

impl MovementState {
    /// Construct a stationary state at `pos`.
    #[inline]
    pub fn stationary(pos: Position) -> Self {
        Self {
            in_transit:     false,
            origin:         pos,
            destination:    pos,
            position:       pos,
            distance_total: 0.0,
        }
    }

    /// Fraction of the current leg completed, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for stationary agents or zero-length legs.
    pub fn progress(&self) -> f32 {
        if !self.in_transit || self.distance_total <= f32::EPSILON {
            return 1.0;
        }
        let remaining = self.position.distance(self.destination);
        (1.0 - remaining / self.distance_total).clamp(0.0, 1.0)
    }
}
