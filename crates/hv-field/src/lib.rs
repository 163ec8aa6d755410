//! `hv-field` — resource nodes and the field that indexes them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`node`]    | `ResourceNode` — finite quantity, clamped `extract`          |
//! | [`field`]   | `ResourceField` — insertion-ordered index, `find_nearest`    |
//! | [`spawner`] | `ScatterSpawner`, `ScatterParams`, `TerrainSampler`          |
//! | [`error`]   | `FieldError`, `FieldResult<T>`                               |
//!
//! # Lifetime model
//!
//! The field owns every node.  Consumers hold [`ResourceId`][hv_core::ResourceId]s,
//! never references; a node that has been depleted (or removed by the host)
//! simply stops resolving.  IDs are never reused, so a stale ID cannot alias
//! a newer node.

pub mod error;
pub mod field;
pub mod node;
pub mod spawner;

#[cfg(test)]
mod tests;

pub use error::{FieldError, FieldResult};
pub use field::ResourceField;
pub use node::ResourceNode;
pub use spawner::{FlatTerrain, ScatterParams, ScatterSpawner, TerrainSampler, MAX_GRID_SIDE};
