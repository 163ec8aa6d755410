//! Hazard phases and the signals emitted on every phase change.

use std::fmt;

use hv_core::SimTime;

/// Where the hazard cycle is in its episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HazardPhase {
    #[default]
    Idle,
    Warning,
    Active,
    Cooldown,
}

impl HazardPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            HazardPhase::Idle     => "Idle",
            HazardPhase::Warning  => "Warning",
            HazardPhase::Active   => "Active",
            HazardPhase::Cooldown => "Cooldown",
        }
    }
}

impl fmt::Display for HazardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert level shown to UI collaborators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertLevel {
    #[default]
    Safe,
    Red,
}

impl AlertLevel {
    /// Display label, e.g. for an on-screen alert banner.
    pub fn label(self) -> &'static str {
        match self {
            AlertLevel::Safe => "Alert Level: Safe",
            AlertLevel::Red  => "Alert Level: RED!",
        }
    }
}

/// Snapshot of the cycle.  Only `active` influences the agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct HazardState {
    pub phase:  HazardPhase,
    pub active: bool,
}

/// Emitted whenever the cycle changes phase.
#[derive(Clone, Debug, PartialEq)]
pub struct HazardSignal {
    /// Instant the phase change was scheduled for.
    pub at:      SimTime,
    pub phase:   HazardPhase,
    pub alert:   AlertLevel,
    /// Warning banner text; `None` clears the banner.
    pub warning: Option<&'static str>,
}
