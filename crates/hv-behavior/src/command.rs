//! Commands — the side effects the behavior core asks the host to perform.

use hv_core::Position;

/// Harvesting-beam particle effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BeamEffect {
    Play,
    Stop,
}

/// An action the host should carry out after the tick.
///
/// A tick produces at most one `NavigateTo`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Fire-and-forget move toward a point.
    NavigateTo(Position),

    /// Start or stop the beam effect.
    Beam(BeamEffect),
}
