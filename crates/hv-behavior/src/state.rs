//! State identifiers for the three machines.

use std::fmt;

use crate::StateId;

/// Outermost level: hazard arbitration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum HazardMode {
    /// Composite: runs the repair machine.
    #[default]
    NeedsRepair,
    Sheltering,
}

/// Middle level: repair arbitration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum RepairMode {
    /// Composite: runs the harvest machine.
    #[default]
    Harvesting,
    Repairing,
}

/// Innermost level: the harvesting loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum HarvestState {
    #[default]
    Searching,
    Gathering,
    DroppingOff,
}

impl StateId for HazardMode {
    fn name(self) -> &'static str {
        match self {
            HazardMode::NeedsRepair => "NeedsRepair",
            HazardMode::Sheltering  => "Sheltering",
        }
    }
}

impl StateId for RepairMode {
    fn name(self) -> &'static str {
        match self {
            RepairMode::Harvesting => "Harvesting",
            RepairMode::Repairing  => "Repairing",
        }
    }
}

impl StateId for HarvestState {
    fn name(self) -> &'static str {
        match self {
            HarvestState::Searching   => "Searching",
            HarvestState::Gathering   => "Gathering",
            HarvestState::DroppingOff => "DroppingOff",
        }
    }
}

/// The current state at every level.
///
/// Inner levels keep their state while an outer level pre-empts them, so
/// all three are always meaningful; [`leaf`][Self::leaf] names the one whose
/// action actually runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct StatePath {
    pub hazard:  HazardMode,
    pub repair:  RepairMode,
    pub harvest: HarvestState,
}

impl StatePath {
    /// Name of the active leaf state.
    pub fn leaf(&self) -> &'static str {
        match (self.hazard, self.repair) {
            (HazardMode::Sheltering, _)               => self.hazard.name(),
            (HazardMode::NeedsRepair, RepairMode::Repairing) => self.repair.name(),
            (HazardMode::NeedsRepair, RepairMode::Harvesting) => self.harvest.name(),
        }
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hazard, self.repair) {
            (HazardMode::Sheltering, _) => f.write_str(self.hazard.name()),
            (HazardMode::NeedsRepair, RepairMode::Repairing) => {
                write!(f, "{}/{}", self.hazard.name(), self.repair.name())
            }
            (HazardMode::NeedsRepair, RepairMode::Harvesting) => write!(
                f,
                "{}/{}/{}",
                self.hazard.name(),
                self.repair.name(),
                self.harvest.name()
            ),
        }
    }
}
