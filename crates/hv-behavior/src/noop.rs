//! A no-op behavior model — the agent never acts.

use hv_agent::AgentVitals;
use hv_field::ResourceField;

use crate::{BehaviorModel, StatePath, TickInput, TickOutput};

/// A [`BehaviorModel`] that issues nothing and mutates nothing.
///
/// Useful in tests that exercise the frame loop or the hazard in isolation.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn tick(
        &mut self,
        _input:  &TickInput<'_>,
        _vitals: &mut AgentVitals,
        _field:  &mut ResourceField,
    ) -> TickOutput {
        TickOutput::default()
    }

    fn state_path(&self) -> StatePath {
        StatePath::default()
    }
}
