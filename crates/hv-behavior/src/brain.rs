//! `HarvesterBrain` — hazard arbitration over repair arbitration over
//! harvesting.

use hv_agent::AgentVitals;
use hv_core::{HarvesterConfig, Position};
use hv_field::ResourceField;
use tracing::{debug, trace};

use crate::{
    BeamEffect, BehaviorContext, BehaviorModel, BehaviorResult, Command, Conditions, EnRoute,
    HarvestState, HazardMode, RepairMode, StateChange, StateMachine, StatePath, TickInput,
    TickOutput,
};

type Machine<S> = StateMachine<S, Conditions>;

/// The three nested machines plus the agent's working memory.
///
/// Each machine keeps its own current state; leaving a composite state does
/// not reset the machine it wraps.  The one exception is returning from
/// `Sheltering`, which forces the repair machine back to `Harvesting`.
pub struct HarvesterBrain {
    config:  HarvesterConfig,
    hazard:  Machine<HazardMode>,
    repair:  Machine<RepairMode>,
    harvest: Machine<HarvestState>,
    ctx:     BehaviorContext,
}

impl HarvesterBrain {
    pub fn new(config: HarvesterConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hazard:  hazard_machine(),
            repair:  repair_machine(),
            harvest: harvest_machine(),
            ctx:     BehaviorContext::default(),
        })
    }

    pub fn config(&self) -> &HarvesterConfig {
        &self.config
    }

    pub fn context(&self) -> &BehaviorContext {
        &self.ctx
    }

    #[inline]
    pub fn hazard_mode(&self) -> HazardMode {
        self.hazard.current()
    }

    #[inline]
    pub fn repair_mode(&self) -> RepairMode {
        self.repair.current()
    }

    #[inline]
    pub fn harvest_state(&self) -> HarvestState {
        self.harvest.current()
    }

    /// Capture guard inputs.  A target that no longer resolves is dropped
    /// here, before any guard sees it.
    fn conditions(&mut self, hazard_active: bool, vitals: &AgentVitals, field: &ResourceField) -> Conditions {
        if let Some(id) = self.ctx.target {
            if !field.contains(id) {
                debug!(resource = %id, "target vanished");
                self.ctx.target = None;
            }
        }
        Conditions {
            hazard_active,
            health:          vitals.health(),
            repair_below:    self.config.repair_below(),
            repair_done_at:  self.config.repair_done_at(),
            carried:         vitals.carried(),
            capacity:        vitals.capacity(),
            target_assigned: self.ctx.target.is_some(),
        }
    }

    // ── Leaf actions ──────────────────────────────────────────────────────

    fn sheltering(&mut self, out: &mut TickOutput) {
        self.ctx.en_route.clear();
        out.commands.push(Command::NavigateTo(self.config.station));
        self.beam(BeamEffect::Stop, out);
    }

    fn repairing(&mut self, input: &TickInput<'_>, vitals: &mut AgentVitals, out: &mut TickOutput) {
        let bay = self.config.repair_bay;
        if !self.ctx.en_route.repair {
            self.navigate(bay, EnRoute::only_repair(), out);
        }
        if input.navigator.has_arrived(bay) && vitals.health() < vitals.max_health() {
            if self.dwell_elapsed(input.dt_secs) {
                vitals.heal(self.config.repair_step());
                self.beam(BeamEffect::Play, out);
                trace!(health = vitals.health(), "repair step");
            }
        }
    }

    fn searching(&mut self, input: &TickInput<'_>, vitals: &AgentVitals, field: &ResourceField, out: &mut TickOutput) {
        self.beam(BeamEffect::Stop, out);
        // A full hold goes to drop-off rather than picking a new node.
        self.ctx.target = if vitals.is_full() {
            None
        } else {
            field.find_nearest(input.navigator.position())
        };
    }

    fn gathering(
        &mut self,
        input:  &TickInput<'_>,
        vitals: &mut AgentVitals,
        field:  &mut ResourceField,
        out:    &mut TickOutput,
    ) {
        let Some(id) = self.ctx.target else {
            return;
        };
        let Some(pos) = field.position_of(id) else {
            self.ctx.target = None;
            return;
        };
        if !self.ctx.en_route.resource {
            self.navigate(pos, EnRoute::only_resource(), out);
        }
        if !input.navigator.has_arrived(pos) || !self.dwell_elapsed(input.dt_secs) {
            return;
        }

        let want = self.config.yield_per_cycle.min(vitals.free_capacity());
        let taken = field.extract(id, want);
        vitals.load(taken);
        self.ctx.en_route.resource = false;
        self.beam(BeamEffect::Play, out);
        trace!(resource = %id, taken, carried = vitals.carried(), "extracted");

        if !field.contains(id) {
            self.ctx.target = None;
        } else if vitals.is_full() {
            debug!(resource = %id, "hold full, releasing target");
            self.ctx.target = None;
        }
    }

    fn dropping_off(&mut self, input: &TickInput<'_>, vitals: &mut AgentVitals, out: &mut TickOutput) {
        let station = self.config.station;
        if !self.ctx.en_route.station {
            self.navigate(station, EnRoute::only_station(), out);
        }
        if input.navigator.has_arrived(station) && vitals.carried() > 0 && self.dwell_elapsed(input.dt_secs) {
            let moved = vitals.unload(self.config.yield_per_cycle);
            self.ctx.en_route.station = false;
            self.beam(BeamEffect::Play, out);
            trace!(moved, station = vitals.station(), "unloaded");
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn navigate(&mut self, to: Position, en_route: EnRoute, out: &mut TickOutput) {
        self.ctx.en_route = en_route;
        out.commands.push(Command::NavigateTo(to));
    }

    /// `Play` is sent on every action cycle, `Stop` only while the beam is on.
    fn beam(&mut self, effect: BeamEffect, out: &mut TickOutput) {
        let on = effect == BeamEffect::Play;
        if on || self.ctx.beam_on {
            self.ctx.beam_on = on;
            out.commands.push(Command::Beam(effect));
        }
    }

    /// Dwell gate: once a full interval has accumulated, reset and return
    /// `true`; otherwise accumulate `dt` and return `false`.
    fn dwell_elapsed(&mut self, dt_secs: f32) -> bool {
        if self.ctx.dwell_secs >= self.config.dwell_secs {
            self.ctx.dwell_secs = 0.0;
            true
        } else {
            self.ctx.dwell_secs += dt_secs.max(0.0);
            false
        }
    }

    fn record(&self, change: StateChange, out: &mut TickOutput) {
        debug!(
            machine = change.machine,
            from = change.from,
            to = change.to,
            forced = change.forced,
            "state change"
        );
        out.changes.push(change);
    }
}

impl BehaviorModel for HarvesterBrain {
    fn tick(
        &mut self,
        input:  &TickInput<'_>,
        vitals: &mut AgentVitals,
        field:  &mut ResourceField,
    ) -> TickOutput {
        let cond = self.conditions(input.hazard_active, vitals, field);
        let mut out = TickOutput::default();

        if let Some(change) = self.hazard.evaluate(&cond) {
            self.record(change, &mut out);
            if self.hazard.current() == HazardMode::NeedsRepair {
                if let Some(reset) = self.repair.force(RepairMode::Harvesting) {
                    self.record(reset, &mut out);
                }
            }
        }

        match self.hazard.current() {
            HazardMode::Sheltering => self.sheltering(&mut out),
            HazardMode::NeedsRepair => {
                if let Some(change) = self.repair.evaluate(&cond) {
                    self.record(change, &mut out);
                }
                match self.repair.current() {
                    RepairMode::Repairing => self.repairing(input, vitals, &mut out),
                    RepairMode::Harvesting => {
                        if let Some(change) = self.harvest.evaluate(&cond) {
                            self.record(change, &mut out);
                        }
                        match self.harvest.current() {
                            HarvestState::Searching   => self.searching(input, vitals, field, &mut out),
                            HarvestState::Gathering   => self.gathering(input, vitals, field, &mut out),
                            HarvestState::DroppingOff => self.dropping_off(input, vitals, &mut out),
                        }
                    }
                }
            }
        }

        // Ambient attrition runs in every state.
        vitals.damage(self.config.attrition_per_sec * input.dt_secs.max(0.0));
        out
    }

    fn state_path(&self) -> StatePath {
        StatePath {
            hazard:  self.hazard.current(),
            repair:  self.repair.current(),
            harvest: self.harvest.current(),
        }
    }
}

// ── Machine tables ────────────────────────────────────────────────────────────

fn hazard_machine() -> Machine<HazardMode> {
    use HazardMode::*;
    Machine::new("hazard", NeedsRepair)
        .with_transition(NeedsRepair, Sheltering, |c| c.hazard_active)
        .with_transition(Sheltering, NeedsRepair, |c| !c.hazard_active)
}

fn repair_machine() -> Machine<RepairMode> {
    use RepairMode::*;
    Machine::new("repair", Harvesting)
        .with_transition(Harvesting, Repairing, |c| c.health < c.repair_below)
        .with_transition(Repairing, Harvesting, |c| c.health >= c.repair_done_at)
}

fn harvest_machine() -> Machine<HarvestState> {
    use HarvestState::*;
    Machine::new("harvest", Searching)
        .with_transition(Searching, Gathering, |c| c.target_assigned && c.has_room())
        .with_transition(Searching, DroppingOff, |c| !c.target_assigned && c.carried > 0)
        .with_transition(Gathering, Searching, |c| !c.target_assigned && c.has_room())
        .with_transition(Gathering, DroppingOff, |c| c.is_full() && !c.target_assigned)
        .with_transition(DroppingOff, Searching, |c| c.carried == 0)
}
