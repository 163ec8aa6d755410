//! Deterministic RNG wrapper and the random-draw interface.
//!
//! The hazard cycle and the resource spawner consume uniform integer and
//! float draws with explicit ranges.  They are written against the
//! [`RandomSource`] trait so tests can substitute scripted draws; production
//! code uses [`SimRng`], a seeded `SmallRng`.
//!
//! # Seeding
//!
//! Per-agent streams are derived as
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Uniform random draws with half-open ranges.
///
/// Implementations must return a value in `range` whenever `range` is
/// non-empty, and `range.start` when it is empty.
pub trait RandomSource {
    /// Uniform integer in `[range.start, range.end)`.
    fn range_u32(&mut self, range: Range<u32>) -> u32;

    /// Uniform float in `[range.start, range.end)`.
    fn range_f32(&mut self, range: Range<f32>) -> f32;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for exogenous events (hazard episodes, spawning).
///
/// Single-threaded by construction.  If several independent streams are
/// needed, derive them with [`SimRng::child`] or [`SimRng::for_agent`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn for_agent(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn range_u32(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        self.0.gen_range(range)
    }

    #[inline]
    fn range_f32(&mut self, range: Range<f32>) -> f32 {
        if !(range.start < range.end) {
            return range.start;
        }
        self.0.gen_range(range)
    }
}
