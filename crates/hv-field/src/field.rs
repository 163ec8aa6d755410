//! The active set of resource nodes.

use hv_core::{Position, ResourceId};
use tracing::debug;

use crate::{FieldError, FieldResult, ResourceNode};

/// Insertion-ordered collection of live resource nodes.
///
/// Nodes are stored in a `Vec` sorted by `ResourceId`.  IDs are allocated
/// monotonically and removal preserves order, so the vector doubles as the
/// iteration order for nearest-node tie-breaking and as a binary-search index
/// for ID lookups.
#[derive(Debug, Default, Clone)]
pub struct ResourceField {
    nodes:   Vec<ResourceNode>,
    next_id: u32,
}

impl ResourceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.  A zero-quantity node is never
    /// inserted; `ResourceId::INVALID` is returned instead.
    pub fn insert(&mut self, position: Position, quantity: u32) -> ResourceId {
        if quantity == 0 {
            return ResourceId::INVALID;
        }
        let id = ResourceId(self.next_id);
        self.next_id += 1;
        self.nodes.push(ResourceNode::new(id, position, quantity));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> + '_ {
        self.nodes.iter()
    }

    /// Sum of all remaining quantities.
    pub fn total_remaining(&self) -> u64 {
        self.nodes.iter().map(|n| u64::from(n.remaining())).sum()
    }

    fn slot(&self, id: ResourceId) -> Option<usize> {
        self.nodes.binary_search_by_key(&id, |n| n.id).ok()
    }

    pub fn get(&self, id: ResourceId) -> Option<&ResourceNode> {
        self.slot(id).map(|i| &self.nodes[i])
    }

    /// Liveness check for a previously obtained ID.
    #[inline]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.slot(id).is_some()
    }

    pub fn position_of(&self, id: ResourceId) -> Option<Position> {
        self.get(id).map(|n| n.position)
    }

    /// Like [`get`][Self::get] but reports a missing node as an error.
    pub fn require(&self, id: ResourceId) -> FieldResult<&ResourceNode> {
        self.get(id).ok_or(FieldError::NotFound(id))
    }

    /// Extract up to `amount` from node `id`.
    ///
    /// If the node is exhausted it is removed immediately, so the very next
    /// [`find_nearest`][Self::find_nearest] no longer sees it.  A missing node
    /// yields 0.
    pub fn extract(&mut self, id: ResourceId, amount: u32) -> u32 {
        let Some(i) = self.slot(id) else {
            return 0;
        };
        let taken = self.nodes[i].extract(amount);
        if self.nodes[i].is_depleted() {
            self.nodes.remove(i);
            debug!(resource = %id, "resource node depleted");
        }
        taken
    }

    /// Remove a node outright (host-side destruction).  Returns the node if
    /// it was present.
    pub fn remove(&mut self, id: ResourceId) -> Option<ResourceNode> {
        self.slot(id).map(|i| self.nodes.remove(i))
    }

    /// The live node closest to `point`, or `None` if the field is empty.
    ///
    /// Linear scan; the first node in insertion order wins exact ties.
    pub fn find_nearest(&self, point: Position) -> Option<ResourceId> {
        let mut best: Option<(ResourceId, f32)> = None;
        for node in &self.nodes {
            let d = node.position.distance_squared(point);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((node.id, d)),
            }
        }
        best.map(|(id, _)| id)
    }
}
