//! Seeded scatter placement of resource nodes around a centre point.
//!
//! # Algorithm
//!
//! A grid of `cell_size`-metre cells covers the square enclosing the spawn
//! ring.  Placement grows outward from an active list seeded with the centre:
//!
//! 1. Take the most recently placed point.
//! 2. Try up to `max_tries` candidates at a random bearing and distance
//!    `cell_size + U(separation_min, separation_max)` from it.
//! 3. A candidate inside the ring `(ring_min, ring_max)` is accepted when its
//!    cell is still free.  Acceptance marks every cell within
//!    `exclusion_cells` (Chebyshev) as taken and pushes the new point.
//! 4. If every try fails the point is retired.  Stop when the list is empty
//!    or `max_nodes` have been placed.
//!
//! Runs once at startup; the result depends only on the RNG seed.

use std::f32::consts::PI;

use hv_core::{Position, RandomSource};
use tracing::debug;

use crate::{FieldError, FieldResult, ResourceField, ResourceNode};

// ── TerrainSampler ────────────────────────────────────────────────────────────

/// Ground height lookup provided by the host.
pub trait TerrainSampler {
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// Terrain with a constant height.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain(pub f32);

impl TerrainSampler for FlatTerrain {
    fn sample_height(&self, _x: f32, _z: f32) -> f32 {
        self.0
    }
}

// ── ScatterParams ─────────────────────────────────────────────────────────────

/// Largest occupancy grid side accepted by [`ScatterParams::validate`].
pub const MAX_GRID_SIDE: u32 = 4096;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterParams {
    /// Centre of the spawn ring (height is ignored).
    pub center:          Position,
    pub ring_min:        f32,
    pub ring_max:        f32,
    pub separation_min:  f32,
    pub separation_max:  f32,
    pub cell_size:       f32,
    pub exclusion_cells: i32,
    pub max_tries:       u32,
    pub max_nodes:       usize,
    /// Quantity given to every spawned node.
    pub node_quantity:   u32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            center:          Position::ORIGIN,
            ring_min:        0.0,
            ring_max:        200.0,
            separation_min:  1.0,
            separation_max:  5.0,
            cell_size:       10.0,
            exclusion_cells: 2,
            max_tries:       50,
            max_nodes:       512,
            node_quantity:   ResourceNode::DEFAULT_QUANTITY,
        }
    }
}

impl ScatterParams {
    pub fn validate(&self) -> FieldResult<()> {
        if !(self.ring_min >= 0.0 && self.ring_min < self.ring_max) {
            return Err(FieldError::Scatter(format!(
                "ring [{}, {}] is empty",
                self.ring_min, self.ring_max
            )));
        }
        if !(self.separation_min >= 0.0 && self.separation_min < self.separation_max) {
            return Err(FieldError::Scatter(format!(
                "separation [{}, {}) is empty",
                self.separation_min, self.separation_max
            )));
        }
        if !(self.cell_size > 0.0) {
            return Err(FieldError::Scatter("cell_size must be positive".into()));
        }
        if self.exclusion_cells < 0 {
            return Err(FieldError::Scatter("exclusion_cells must be non-negative".into()));
        }
        let side = (self.ring_max * 2.0 / self.cell_size).ceil();
        if !(side.is_finite() && side <= MAX_GRID_SIDE as f32) {
            return Err(FieldError::Scatter(format!(
                "grid of {side} cells per side exceeds {MAX_GRID_SIDE}"
            )));
        }
        Ok(())
    }
}

// ── ScatterSpawner ────────────────────────────────────────────────────────────

/// One-shot generator that fills a [`ResourceField`].
pub struct ScatterSpawner {
    params:    ScatterParams,
    grid_size: i32,
    occupied:  Vec<bool>,
}

impl ScatterSpawner {
    pub fn new(params: ScatterParams) -> FieldResult<Self> {
        params.validate()?;
        let mut grid_size = ((params.ring_max * 2.0) / params.cell_size).ceil() as i32;
        // Odd so the centre falls in the middle cell.
        if grid_size % 2 == 0 {
            grid_size += 1;
        }
        let cells = (grid_size as usize) * (grid_size as usize);
        Ok(Self { params, grid_size, occupied: vec![false; cells] })
    }

    pub fn params(&self) -> &ScatterParams {
        &self.params
    }

    /// Place nodes into `field`.  Returns the number placed.
    ///
    /// Calling again clears the occupancy grid first, so repeated calls
    /// with a fresh field and the same seed produce the same layout.
    pub fn populate<R, T>(&mut self, field: &mut ResourceField, rng: &mut R, terrain: &T) -> usize
    where
        R: RandomSource,
        T: TerrainSampler,
    {
        self.occupied.iter_mut().for_each(|c| *c = false);

        let p = self.params.clone();
        let center = Position::flat(p.center.x, p.center.z);
        let mut active = vec![center];
        let mut placed = 0usize;

        while let Some(&current) = active.last() {
            if placed >= p.max_nodes {
                break;
            }
            let mut success = false;
            for _ in 0..p.max_tries {
                let angle = rng.range_f32(-PI..PI);
                let r = p.cell_size + rng.range_f32(p.separation_min..p.separation_max);
                let candidate = Position::flat(
                    current.x + r * angle.cos(),
                    current.z + r * angle.sin(),
                );
                let d = candidate.distance(center);
                if d > p.ring_min && d < p.ring_max && self.claim(candidate) {
                    let pos = Position::new(
                        candidate.x,
                        terrain.sample_height(candidate.x, candidate.z),
                        candidate.z,
                    );
                    field.insert(pos, p.node_quantity);
                    active.push(candidate);
                    placed += 1;
                    success = true;
                    break;
                }
            }
            if !success {
                active.pop();
            }
        }

        debug!(placed, "scatter spawn complete");
        placed
    }

    fn cell_of(&self, pos: Position) -> (i32, i32) {
        let p = &self.params;
        let ix = ((pos.x - p.center.x + p.ring_max) / p.cell_size).floor() as i32;
        let iz = ((pos.z - p.center.z + p.ring_max) / p.cell_size).floor() as i32;
        let max = self.grid_size - 1;
        (ix.clamp(0, max), iz.clamp(0, max))
    }

    #[inline]
    fn index(&self, ix: i32, iz: i32) -> usize {
        ix as usize * self.grid_size as usize + iz as usize
    }

    /// Mark the exclusion square around `pos` if its own cell is free.
    fn claim(&mut self, pos: Position) -> bool {
        let (ix, iz) = self.cell_of(pos);
        if self.occupied[self.index(ix, iz)] {
            return false;
        }
        let r = self.params.exclusion_cells;
        for i in (ix - r).max(0)..=(ix + r).min(self.grid_size - 1) {
            for j in (iz - r).max(0)..=(iz + r).min(self.grid_size - 1) {
                let k = self.index(i, j);
                self.occupied[k] = true;
            }
        }
        true
    }
}
