//! The `BehaviorModel` trait — the seam between the frame loop and the
//! decision engine.

use hv_agent::AgentVitals;
use hv_field::ResourceField;
use hv_mobility::Navigator;

use crate::{Command, StateChange, StatePath};

/// Read-only inputs to one tick.
pub struct TickInput<'a> {
    /// Seconds since the previous tick.
    pub dt_secs: f32,

    /// Value of the shared hazard flag at the start of the tick.
    pub hazard_active: bool,

    /// Arrival checks and current position.
    pub navigator: &'a dyn Navigator,
}

/// Everything a tick produced besides direct vitals / field mutation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickOutput {
    pub commands: Vec<Command>,
    pub changes:  Vec<StateChange>,
}

impl TickOutput {
    /// The navigation destination issued this tick, if any.
    pub fn navigation(&self) -> Option<hv_core::Position> {
        self.commands.iter().find_map(|c| match c {
            Command::NavigateTo(p) => Some(*p),
            Command::Beam(_)       => None,
        })
    }
}

/// Pluggable agent behavior.
///
/// The model owns its decision state and is the only writer of the agent's
/// vitals apart from hazard damage.  Commands are applied by the caller
/// after the tick returns.
pub trait BehaviorModel {
    /// Advance one tick.
    fn tick(
        &mut self,
        input:  &TickInput<'_>,
        vitals: &mut AgentVitals,
        field:  &mut ResourceField,
    ) -> TickOutput;

    /// Current state at every level.
    fn state_path(&self) -> StatePath;
}
