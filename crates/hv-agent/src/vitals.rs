//! `AgentVitals` — health and inventory levels.

use hv_core::HarvesterConfig;

/// Health, carried resource, and station-accumulated resource for one agent.
///
/// Fields are private so the clamp invariant cannot be bypassed; display
/// collaborators read through the accessor methods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentVitals {
    health:     f32,
    max_health: f32,
    carried:    u32,
    capacity:   u32,
    station:    u64,
}

impl AgentVitals {
    /// Full health, empty hold, empty station.
    pub fn new(max_health: f32, capacity: u32) -> Self {
        let max_health = if max_health.is_finite() { max_health.max(0.0) } else { 0.0 };
        Self {
            health: max_health,
            max_health,
            carried: 0,
            capacity,
            station: 0,
        }
    }

    pub fn from_config(config: &HarvesterConfig) -> Self {
        Self::new(config.max_health, config.capacity)
    }

    // ── Observables ───────────────────────────────────────────────────────

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// `health / max_health` in `[0, 1]`.
    #[inline]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 { self.health / self.max_health } else { 0.0 }
    }

    #[inline]
    pub fn carried(&self) -> u32 {
        self.carried
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Room left in the hold.
    #[inline]
    pub fn free_capacity(&self) -> u32 {
        self.capacity - self.carried
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.carried >= self.capacity
    }

    #[inline]
    pub fn station(&self) -> u64 {
        self.station
    }

    // ── Health ────────────────────────────────────────────────────────────

    /// Set health directly, clamped to `[0, max_health]`.  NaN maps to 0.
    pub fn set_health(&mut self, value: f32) {
        self.health = if value.is_nan() { 0.0 } else { value.clamp(0.0, self.max_health) };
    }

    /// Subtract `amount` (negative amounts are ignored).
    pub fn damage(&mut self, amount: f32) {
        if amount > 0.0 {
            self.set_health(self.health - amount);
        }
    }

    /// Add `amount` (negative amounts are ignored).
    pub fn heal(&mut self, amount: f32) {
        if amount > 0.0 {
            self.set_health(self.health + amount);
        }
    }

    // ── Inventory ─────────────────────────────────────────────────────────

    /// Add to the hold, saturating at capacity.  Returns the amount stored.
    pub fn load(&mut self, amount: u32) -> u32 {
        let stored = amount.min(self.free_capacity());
        self.carried += stored;
        stored
    }

    /// Move up to `amount` from the hold into the station.  Returns the
    /// amount moved.
    pub fn unload(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.carried);
        self.carried -= moved;
        self.station = self.station.saturating_add(u64::from(moved));
        moved
    }
}
