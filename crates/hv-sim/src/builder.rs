//! Fluent builder for constructing a [`Sim`].

use hv_agent::AgentVitals;
use hv_behavior::{BehaviorModel, HarvesterBrain};
use hv_core::{AgentId, HarvesterConfig, HazardConfig, SimConfig, SimRng, SimTime};
use hv_field::ResourceField;
use hv_hazard::{HazardCycle, HazardFlag};
use hv_mobility::{Navigator, StraightLineNavigator};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B, N>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.field(f)`     | empty `ResourceField`                    |
/// | `.agent(id)`    | `AgentId(0)`                             |
/// | `.vitals(v)`    | full health, empty hold, per `harvester` |
/// | `.flag(f)`      | a fresh `HazardFlag`                     |
pub struct SimBuilder<B: BehaviorModel, N: Navigator> {
    config:    SimConfig,
    harvester: HarvesterConfig,
    hazard:    HazardConfig,
    behavior:  B,
    navigator: N,
    field:     Option<ResourceField>,
    agent:     AgentId,
    vitals:    Option<AgentVitals>,
    flag:      Option<HazardFlag>,
}

impl<B: BehaviorModel, N: Navigator> SimBuilder<B, N> {
    pub fn new(
        config:    SimConfig,
        harvester: HarvesterConfig,
        hazard:    HazardConfig,
        behavior:  B,
        navigator: N,
    ) -> Self {
        Self {
            config,
            harvester,
            hazard,
            behavior,
            navigator,
            field:  None,
            agent:  AgentId(0),
            vitals: None,
            flag:   None,
        }
    }

    pub fn field(mut self, field: ResourceField) -> Self {
        self.field = Some(field);
        self
    }

    pub fn agent(mut self, agent: AgentId) -> Self {
        self.agent = agent;
        self
    }

    /// Start from these vitals instead of a fresh agent.  Capacity and max
    /// health must agree with the harvester config.
    pub fn vitals(mut self, vitals: AgentVitals) -> Self {
        self.vitals = Some(vitals);
        self
    }

    /// Have the hazard write into an externally held flag.
    pub fn flag(mut self, flag: HazardFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B, N>> {
        self.config.validate()?;
        self.harvester.validate()?;
        self.hazard.validate()?;

        let vitals = match self.vitals {
            Some(v) => {
                if v.capacity() != self.harvester.capacity {
                    return Err(SimError::Mismatch {
                        what:     "vitals capacity",
                        expected: self.harvester.capacity.to_string(),
                        got:      v.capacity().to_string(),
                    });
                }
                if v.max_health() != self.harvester.max_health {
                    return Err(SimError::Mismatch {
                        what:     "vitals max health",
                        expected: self.harvester.max_health.to_string(),
                        got:      v.max_health().to_string(),
                    });
                }
                v
            }
            None => AgentVitals::from_config(&self.harvester),
        };

        // First trigger sample one poll interval in.
        let first_sample = SimTime::ZERO.offset_secs(self.hazard.poll_interval_secs);
        let flag = self.flag.unwrap_or_default();
        let hazard = HazardCycle::with_flag(self.hazard, first_sample, flag);

        Ok(Sim {
            clock:         self.config.make_clock(),
            rng:           SimRng::for_agent(self.config.seed, self.agent),
            config:        self.config,
            harvester:     self.harvester,
            agent:         self.agent,
            vitals,
            field:         self.field.unwrap_or_default(),
            hazard,
            behavior:      self.behavior,
            navigator:     self.navigator,
            beam_on:       false,
            state_changes: 0,
        })
    }
}

impl SimBuilder<HarvesterBrain, StraightLineNavigator> {
    /// Builder wired with a [`HarvesterBrain`] and a straight-line navigator
    /// placed at `harvester.start`.
    pub fn harvester(
        config:    SimConfig,
        harvester: HarvesterConfig,
        hazard:    HazardConfig,
    ) -> SimResult<Self> {
        let brain = HarvesterBrain::new(harvester.clone())?;
        let navigator = StraightLineNavigator::from_config(&harvester);
        Ok(Self::new(config, harvester, hazard, brain, navigator))
    }
}
