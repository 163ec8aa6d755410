//! Constant-speed straight-line mover.

use hv_core::{HarvesterConfig, Position};
use tracing::trace;

use crate::{MovementState, Navigator};

/// Moves the agent along a straight line toward the last commanded
/// destination at `speed` metres per second.
///
/// Stands in for the host's path planner in tests and the demo binary.
#[derive(Debug, Clone)]
pub struct StraightLineNavigator {
    pub state:         MovementState,
    speed:             f32,
    stopping_distance: f32,
    commands:          u64,
}

impl StraightLineNavigator {
    pub fn new(start: Position, speed: f32, stopping_distance: f32) -> Self {
        Self {
            state: MovementState::stationary(start),
            speed: speed.max(0.0),
            stopping_distance: stopping_distance.max(0.0),
            commands: 0,
        }
    }

    pub fn from_config(config: &HarvesterConfig) -> Self {
        Self::new(config.start, config.speed, config.stopping_distance)
    }

    /// Teleport without a command (initial placement, tests).
    pub fn place(&mut self, pos: Position) {
        self.state = MovementState::stationary(pos);
    }

    /// Number of `navigate_to` calls received.
    #[inline]
    pub fn commands(&self) -> u64 {
        self.commands
    }

    #[inline]
    pub fn destination(&self) -> Position {
        self.state.destination
    }
}

impl Navigator for StraightLineNavigator {
    fn navigate_to(&mut self, target: Position) {
        self.commands += 1;
        let here = self.state.position;
        self.state = MovementState {
            in_transit:     here != target,
            origin:         here,
            destination:    target,
            position:       here,
            distance_total: here.distance(target),
        };
    }

    fn position(&self) -> Position {
        self.state.position
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn advance(&mut self, dt_secs: f32) {
        if !self.state.in_transit {
            return;
        }
        let step = self.speed * dt_secs.max(0.0);
        self.state.position = self.state.position.step_towards(self.state.destination, step);
        if self.state.position == self.state.destination {
            self.state.in_transit = false;
            trace!(at = %self.state.position, "navigator reached destination");
        }
    }
}
