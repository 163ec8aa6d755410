//! Plain data row types written by output backends.

use hv_behavior::StateId;
use hv_hazard::HazardSignal;
use hv_sim::AgentSnapshot;

/// One agent at one snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRow {
    pub agent_id:      u32,
    pub frame:         u64,
    pub time_ms:       u64,
    pub x:             f32,
    pub y:             f32,
    pub z:             f32,
    pub health:        f32,
    pub carried:       u32,
    pub station:       u64,
    pub hazard_phase:  &'static str,
    pub hazard_mode:   &'static str,
    pub repair_mode:   &'static str,
    pub harvest_state: &'static str,
    /// The state whose action ran this frame.
    pub leaf:          &'static str,
    pub beam_on:       bool,
}

impl From<&AgentSnapshot> for TelemetryRow {
    fn from(s: &AgentSnapshot) -> Self {
        Self {
            agent_id:      s.agent.get(),
            frame:         s.frame,
            time_ms:       s.time.0,
            x:             s.position.x,
            y:             s.position.y,
            z:             s.position.z,
            health:        s.health,
            carried:       s.carried,
            station:       s.station,
            hazard_phase:  s.hazard_phase.as_str(),
            hazard_mode:   s.path.hazard.name(),
            repair_mode:   s.path.repair.name(),
            harvest_state: s.path.harvest.name(),
            leaf:          s.path.leaf(),
            beam_on:       s.beam_on,
        }
    }
}

/// One hazard phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardEventRow {
    pub time_ms: u64,
    pub phase:   &'static str,
    pub alert:   &'static str,
    /// Empty when the banner is cleared.
    pub warning: &'static str,
}

impl From<&HazardSignal> for HazardEventRow {
    fn from(s: &HazardSignal) -> Self {
        Self {
            time_ms: s.at.0,
            phase:   s.phase.as_str(),
            alert:   s.alert.label(),
            warning: s.warning.unwrap_or(""),
        }
    }
}
