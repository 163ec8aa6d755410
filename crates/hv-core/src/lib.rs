//! `hv-core` — foundational types for the harvester behavior core.
//!
//! This crate is a dependency of every other `hv-*` crate.  It has no `hv-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `ResourceId`                                   |
//! | [`geo`]     | `Position`, Euclidean distance, straight-line stepping    |
//! | [`time`]    | `SimTime`, `SimClock`                                     |
//! | [`rng`]     | `RandomSource` trait, `SimRng`                            |
//! | [`config`]  | `HarvesterConfig`, `HazardConfig`, `SimConfig`            |
//! | [`error`]   | `HvError`, `HvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HarvesterConfig, HazardConfig, SimConfig};
pub use error::{HvError, HvResult};
pub use geo::Position;
pub use ids::{AgentId, ResourceId};
pub use rng::{RandomSource, SimRng};
pub use time::{SimClock, SimTime};
