//! Per-agent scratch state and the per-tick guard snapshot.

use hv_core::ResourceId;

/// Which destination the agent has already been sent toward.
///
/// A set flag suppresses re-issuing the same navigation command; at most one
/// flag is set at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EnRoute {
    pub resource: bool,
    pub station:  bool,
    pub repair:   bool,
}

impl EnRoute {
    pub fn clear(&mut self) {
        *self = EnRoute::default();
    }

    pub fn only_resource() -> Self {
        Self { resource: true, ..Self::default() }
    }

    pub fn only_station() -> Self {
        Self { station: true, ..Self::default() }
    }

    pub fn only_repair() -> Self {
        Self { repair: true, ..Self::default() }
    }
}

/// Mutable working memory of the behavior core, reused across ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorContext {
    /// Node the agent is working on.  Observed, never owned: the field may
    /// drop the node at any time and the ID then stops resolving.
    pub target: Option<ResourceId>,

    pub en_route: EnRoute,

    /// Seconds spent in arrival range on the current timed action.
    pub dwell_secs: f32,

    /// Last beam state commanded; `Stop` is only sent while this is set.
    pub beam_on: bool,
}

/// Everything the guards read, captured once at the start of a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Conditions {
    pub hazard_active:   bool,
    pub health:          f32,
    /// Enter repair below this.
    pub repair_below:    f32,
    /// Leave repair at or above this.
    pub repair_done_at:  f32,
    pub carried:         u32,
    pub capacity:        u32,
    /// A target is set and still resolves in the field.
    pub target_assigned: bool,
}

impl Conditions {
    #[inline]
    pub fn has_room(&self) -> bool {
        self.carried < self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.carried >= self.capacity
    }
}
