//! A single depletable resource node.

use hv_core::{Position, ResourceId};

/// A finite deposit at a fixed position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceNode {
    pub id:       ResourceId,
    pub position: Position,
    remaining:    u32,
}

impl ResourceNode {
    /// Default yield of a freshly spawned node.
    pub const DEFAULT_QUANTITY: u32 = 100;

    pub fn new(id: ResourceId, position: Position, quantity: u32) -> Self {
        Self { id, position, remaining: quantity }
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.remaining == 0
    }

    /// Remove up to `amount` units, flooring the remainder at zero.
    ///
    /// Returns the amount actually removed.  `extract(0)` and extraction from
    /// an already-empty node are no-ops that return 0.
    pub fn extract(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.remaining);
        self.remaining -= taken;
        taken
    }
}
