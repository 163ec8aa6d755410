//! Point-in-time view of the agent handed to observers.

use hv_behavior::StatePath;
use hv_core::{AgentId, Position, SimTime};
use hv_hazard::HazardPhase;

/// Everything an output writer needs to record one telemetry row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub frame:         u64,
    pub time:          SimTime,
    pub agent:         AgentId,
    pub position:      Position,
    pub health:        f32,
    pub max_health:    f32,
    pub carried:       u32,
    pub station:       u64,
    pub hazard_phase:  HazardPhase,
    pub hazard_active: bool,
    pub path:          StatePath,
    pub beam_on:       bool,
}
