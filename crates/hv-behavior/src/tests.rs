//! Unit tests for hv-behavior.

use hv_agent::AgentVitals;
use hv_core::{HarvesterConfig, Position};
use hv_field::ResourceField;
use hv_mobility::{Navigator, StraightLineNavigator};

use crate::{
    BeamEffect, BehaviorModel, Command, Conditions, HarvestState, HarvesterBrain, HazardMode,
    NoopBehavior, RepairMode, StateChange, StateId, StateMachine, StatePath, TickInput, TickOutput,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f32 = 0.05;

/// A navigator pinned in place.  Records the last destination it was given.
struct PinnedNavigator {
    position: Position,
    stop:     f32,
    last:     Option<Position>,
    issued:   usize,
}

impl PinnedNavigator {
    fn at(position: Position) -> Self {
        Self { position, stop: 2.0, last: None, issued: 0 }
    }
}

impl Navigator for PinnedNavigator {
    fn navigate_to(&mut self, target: Position) {
        self.last = Some(target);
        self.issued += 1;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn stopping_distance(&self) -> f32 {
        self.stop
    }
}

/// Station and start at the origin, no ambient attrition.
fn quiet_config() -> HarvesterConfig {
    HarvesterConfig {
        station:           Position::ORIGIN,
        start:             Position::ORIGIN,
        attrition_per_sec: 0.0,
        ..HarvesterConfig::default()
    }
}

fn tick_with(
    brain:  &mut HarvesterBrain,
    nav:    &dyn Navigator,
    hazard: bool,
    vitals: &mut AgentVitals,
    field:  &mut ResourceField,
) -> TickOutput {
    let input = TickInput { dt_secs: DT, hazard_active: hazard, navigator: nav };
    brain.tick(&input, vitals, field)
}

/// Tick and hand every command to the navigator, then move it.
fn drive(
    brain:  &mut HarvesterBrain,
    nav:    &mut StraightLineNavigator,
    vitals: &mut AgentVitals,
    field:  &mut ResourceField,
) -> TickOutput {
    let out = tick_with(brain, &*nav, false, vitals, field);
    if let Some(dest) = out.navigation() {
        nav.navigate_to(dest);
    }
    nav.advance(DT);
    out
}

fn harvest_hops(changes: &[StateChange]) -> Vec<(&'static str, &'static str)> {
    changes
        .iter()
        .filter(|c| c.machine == "harvest")
        .map(|c| (c.from, c.to))
        .collect()
}

/// Put a fresh brain into `Repairing` by dropping health below threshold.
fn repairing_brain(config: HarvesterConfig, nav: &dyn Navigator) -> (HarvesterBrain, AgentVitals) {
    let mut brain = HarvesterBrain::new(config.clone()).unwrap();
    let mut vitals = AgentVitals::from_config(&config);
    let mut field = ResourceField::new();
    vitals.set_health(config.repair_below() - 1.0);
    tick_with(&mut brain, nav, false, &mut vitals, &mut field);
    assert_eq!(brain.repair_mode(), RepairMode::Repairing);
    (brain, vitals)
}

// ── StateMachine ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine_tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Amber,
    }

    impl StateId for Light {
        fn name(self) -> &'static str {
            match self {
                Light::Red   => "Red",
                Light::Green => "Green",
                Light::Amber => "Amber",
            }
        }
    }

    fn lights() -> StateMachine<Light, bool> {
        StateMachine::<Light, bool>::new("light", Light::Red)
            .with_transition(Light::Red, Light::Green, |go| *go)
            .with_transition(Light::Red, Light::Amber, |go| *go)
            .with_transition(Light::Green, Light::Red, |go| !*go)
    }

    #[test]
    fn starts_in_initial() {
        let m = lights();
        assert_eq!(m.current(), Light::Red);
        assert_eq!(m.initial(), Light::Red);
        assert_eq!(m.name(), "light");
    }

    #[test]
    fn closed_guards_hold_state() {
        let mut m = lights();
        assert_eq!(m.evaluate(&false), None);
        assert_eq!(m.current(), Light::Red);
    }

    #[test]
    fn first_registered_open_guard_wins() {
        let mut m = lights();
        let change = m.evaluate(&true).unwrap();
        assert_eq!(m.current(), Light::Green);
        assert_eq!(change, StateChange { machine: "light", from: "Red", to: "Green", forced: false });
    }

    #[test]
    fn at_most_one_transition_per_evaluate() {
        let mut m = StateMachine::new("chain", Light::Red)
            .with_transition(Light::Red, Light::Green, |_: &()| true)
            .with_transition(Light::Green, Light::Amber, |_: &()| true);
        m.evaluate(&());
        assert_eq!(m.current(), Light::Green);
        m.evaluate(&());
        assert_eq!(m.current(), Light::Amber);
    }

    #[test]
    fn transitions_from_keeps_order() {
        let m = lights();
        let targets: Vec<Light> = m.transitions_from(Light::Red).map(|t| t.to).collect();
        assert_eq!(targets, vec![Light::Green, Light::Amber]);
    }

    #[test]
    fn force_and_reset() {
        let mut m = lights();
        let change = m.force(Light::Amber).unwrap();
        assert!(change.forced);
        assert_eq!(m.current(), Light::Amber);
        assert_eq!(m.force(Light::Amber), None);
        assert_eq!(m.reset().map(|c| c.to), Some("Red"));
        assert_eq!(m.reset(), None);
    }
}

// ── Conditions / StatePath ────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    fn cond(carried: u32, capacity: u32) -> Conditions {
        Conditions {
            hazard_active:   false,
            health:          20.0,
            repair_below:    6.0,
            repair_done_at:  15.0,
            carried,
            capacity,
            target_assigned: false,
        }
    }

    #[test]
    fn room_and_full_are_complementary() {
        assert!(cond(0, 20).has_room());
        assert!(!cond(0, 20).is_full());
        assert!(cond(20, 20).is_full());
        assert!(!cond(20, 20).has_room());
    }

    #[test]
    fn path_display_and_leaf() {
        let path = StatePath::default();
        assert_eq!(path.to_string(), "NeedsRepair/Harvesting/Searching");
        assert_eq!(path.leaf(), "Searching");

        let shelter = StatePath { hazard: HazardMode::Sheltering, ..path };
        assert_eq!(shelter.leaf(), "Sheltering");
    }
}

// ── Harvest loop ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod harvest_tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let bad = HarvesterConfig { max_health: 0.0, ..HarvesterConfig::default() };
        assert!(HarvesterBrain::new(bad).is_err());
    }

    #[test]
    fn fills_hold_and_unloads_at_station() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::new(1.5, 0.0, 0.0), 20);
        let mut nav = StraightLineNavigator::from_config(&config);

        let mut hops = Vec::new();
        for _ in 0..240 {
            let out = drive(&mut brain, &mut nav, &mut vitals, &mut field);
            hops.extend(harvest_hops(&out.changes));
        }

        assert_eq!(
            hops,
            vec![
                ("Searching", "Gathering"),
                ("Gathering", "DroppingOff"),
                ("DroppingOff", "Searching"),
            ]
        );
        assert_eq!(vitals.carried(), 0);
        assert_eq!(vitals.station(), 20);
        assert!(field.is_empty());
        assert_eq!(brain.harvest_state(), HarvestState::Searching);
    }

    #[test]
    fn empty_field_keeps_searching_without_moving() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        let nav = PinnedNavigator::at(Position::ORIGIN);

        for _ in 0..500 {
            let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
            assert_eq!(out.navigation(), None);
            assert!(out.changes.is_empty());
        }
        assert_eq!(brain.harvest_state(), HarvestState::Searching);
        assert_eq!(brain.context().target, None);
    }

    #[test]
    fn picks_nearest_node() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(30.0, 0.0), 10);
        let near = field.insert(Position::flat(0.0, 10.0), 10);
        let nav = PinnedNavigator::at(Position::ORIGIN);

        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.context().target, Some(near));

        let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.harvest_state(), HarvestState::Gathering);
        assert_eq!(out.navigation(), Some(Position::flat(0.0, 10.0)));
    }

    #[test]
    fn navigation_is_issued_once_per_leg() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(50.0, 0.0), 10);
        let nav = PinnedNavigator::at(Position::ORIGIN);

        let issued: usize = (0..50)
            .map(|_| tick_with(&mut brain, &nav, false, &mut vitals, &mut field))
            .filter(|out| out.navigation().is_some())
            .count();
        assert_eq!(issued, 1);
    }

    #[test]
    fn vanished_target_sends_agent_back_to_searching() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        let id = field.insert(Position::flat(50.0, 0.0), 10);
        let nav = PinnedNavigator::at(Position::ORIGIN);

        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.harvest_state(), HarvestState::Gathering);

        field.remove(id);
        let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(harvest_hops(&out.changes), vec![("Gathering", "Searching")]);
        assert_eq!(brain.context().target, None);
    }

    #[test]
    fn partial_hold_is_dropped_off_when_field_runs_dry() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(1.0, 0.0), 5);
        let mut nav = StraightLineNavigator::from_config(&config);

        let mut hops = Vec::new();
        for _ in 0..120 {
            let out = drive(&mut brain, &mut nav, &mut vitals, &mut field);
            hops.extend(harvest_hops(&out.changes));
        }
        assert_eq!(
            hops,
            vec![
                ("Searching", "Gathering"),
                ("Gathering", "Searching"),
                ("Searching", "DroppingOff"),
                ("DroppingOff", "Searching"),
            ]
        );
        assert_eq!(vitals.station(), 5);
    }

    #[test]
    fn beam_plays_on_extraction_and_stops_on_search() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(1.0, 0.0), 5);
        let mut nav = StraightLineNavigator::from_config(&config);

        let mut beams = Vec::new();
        for _ in 0..30 {
            let out = drive(&mut brain, &mut nav, &mut vitals, &mut field);
            beams.extend(out.commands.iter().filter_map(|c| match c {
                Command::Beam(b) => Some(*b),
                Command::NavigateTo(_) => None,
            }));
        }
        assert_eq!(beams, vec![BeamEffect::Play, BeamEffect::Stop]);
    }
}

// ── Repair arbitration ────────────────────────────────────────────────────────

#[cfg(test)]
mod repair_tests {
    use super::*;

    #[test]
    fn low_health_enters_repair_same_tick() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        let nav = PinnedNavigator::at(Position::ORIGIN);

        vitals.set_health(5.0);
        let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);

        assert_eq!(brain.repair_mode(), RepairMode::Repairing);
        assert_eq!(out.changes.len(), 1);
        assert_eq!(out.changes[0].to, "Repairing");
        assert_eq!(out.navigation(), Some(config.repair_bay));
    }

    #[test]
    fn health_at_threshold_does_not_trigger_repair() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        let nav = PinnedNavigator::at(Position::ORIGIN);

        vitals.set_health(config.repair_below());
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
    }

    #[test]
    fn repair_heals_in_steps_until_released() {
        let config = quiet_config();
        let nav = PinnedNavigator::at(config.repair_bay);
        let (mut brain, mut vitals) = repairing_brain(config.clone(), &nav);
        let mut field = ResourceField::new();

        let mut released = None;
        for i in 0..400 {
            let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
            assert!(vitals.health() <= vitals.max_health());
            if out.changes.iter().any(|c| c.to == "Harvesting") {
                released = Some(i);
                break;
            }
        }
        assert!(released.is_some());
        assert!(vitals.health() >= config.repair_done_at());
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
    }

    #[test]
    fn no_flapping_inside_hysteresis_band() {
        let config = HarvesterConfig { max_health: 100.0, ..quiet_config() };
        // Far from the bay, so no healing happens.
        let nav = PinnedNavigator::at(Position::flat(-500.0, 0.0));
        let (mut brain, mut vitals) = repairing_brain(config.clone(), &nav);
        let mut field = ResourceField::new();

        for i in 0..400 {
            let wave = 35.0 + 10.0 * ((i as f32) * 0.1).sin();
            vitals.set_health(wave);
            let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
            assert!(out.changes.is_empty(), "flapped at tick {i}");
            assert_eq!(brain.repair_mode(), RepairMode::Repairing);
        }

        vitals.set_health(94.9);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Repairing);

        vitals.set_health(95.0);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
    }

    #[test]
    fn harvest_state_survives_a_repair_detour() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(50.0, 0.0), 10);
        let nav = PinnedNavigator::at(Position::ORIGIN);

        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.harvest_state(), HarvestState::Gathering);

        vitals.set_health(1.0);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Repairing);

        vitals.set_health(20.0);
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
        assert_eq!(brain.harvest_state(), HarvestState::Gathering);
    }
}

// ── Hazard arbitration ────────────────────────────────────────────────────────

#[cfg(test)]
mod hazard_tests {
    use super::*;

    #[test]
    fn hazard_pre_empts_repair_and_resets_it() {
        let config = quiet_config();
        let nav = PinnedNavigator::at(Position::flat(-500.0, 0.0));
        let (mut brain, mut vitals) = repairing_brain(config.clone(), &nav);
        let mut field = ResourceField::new();
        vitals.set_health(10.0);

        let out = tick_with(&mut brain, &nav, true, &mut vitals, &mut field);
        assert_eq!(brain.hazard_mode(), HazardMode::Sheltering);
        assert_eq!(out.navigation(), Some(config.station));
        assert_eq!(brain.repair_mode(), RepairMode::Repairing);

        let out = tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.hazard_mode(), HazardMode::NeedsRepair);
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
        let reset = out.changes.iter().find(|c| c.machine == "repair").unwrap();
        assert!(reset.forced);
        assert_eq!(reset.from, "Repairing");

        // 10 of 20 is above the entry threshold, so no immediate re-entry.
        tick_with(&mut brain, &nav, false, &mut vitals, &mut field);
        assert_eq!(brain.repair_mode(), RepairMode::Harvesting);
    }

    #[test]
    fn sheltering_repeats_station_command_every_tick() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        let nav = PinnedNavigator::at(Position::flat(40.0, 0.0));

        for _ in 0..10 {
            let out = tick_with(&mut brain, &nav, true, &mut vitals, &mut field);
            assert_eq!(out.navigation(), Some(config.station));
        }
        assert_eq!(brain.state_path().leaf(), "Sheltering");
    }

    #[test]
    fn sheltering_takes_no_resources() {
        let config = quiet_config();
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(1.0, 0.0), 50);
        let nav = PinnedNavigator::at(Position::ORIGIN);

        for _ in 0..200 {
            tick_with(&mut brain, &nav, true, &mut vitals, &mut field);
        }
        assert_eq!(field.total_remaining(), 50);
        assert_eq!(vitals.carried(), 0);
    }
}

// ── Vitals bounds ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds_tests {
    use super::*;

    #[test]
    fn attrition_never_drives_health_negative() {
        let config = HarvesterConfig { attrition_per_sec: 50.0, ..quiet_config() };
        let mut brain = HarvesterBrain::new(config.clone()).unwrap();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::flat(1.0, 0.0), 500);
        let mut nav = StraightLineNavigator::from_config(&config);

        for _ in 0..1_000 {
            drive(&mut brain, &mut nav, &mut vitals, &mut field);
            assert!(vitals.health() >= 0.0);
            assert!(vitals.health() <= vitals.max_health());
            assert!(vitals.carried() <= vitals.capacity());
        }
    }

    #[test]
    fn noop_does_nothing() {
        let config = quiet_config();
        let mut vitals = AgentVitals::from_config(&config);
        let mut field = ResourceField::new();
        field.insert(Position::ORIGIN, 5);
        let nav = PinnedNavigator::at(Position::ORIGIN);
        let input = TickInput { dt_secs: DT, hazard_active: true, navigator: &nav };

        let out = NoopBehavior.tick(&input, &mut vitals, &mut field);
        assert_eq!(out, TickOutput::default());
        assert_eq!(vitals.health(), 20.0);
        assert_eq!(NoopBehavior.state_path(), StatePath::default());
    }
}
