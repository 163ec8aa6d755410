//! `hv-behavior` — the harvester's decision engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`machine`] | `StateMachine<S, C>` — guarded transition table, first match wins |
//! | [`state`]   | `HazardMode`, `RepairMode`, `HarvestState`, `StatePath`         |
//! | [`context`] | `BehaviorContext` (target, en-route flags, dwell), `Conditions` |
//! | [`command`] | `Command`, `BeamEffect` — what the core asks the host to do     |
//! | [`model`]   | `BehaviorModel` trait, `TickInput`, `TickOutput`                |
//! | [`brain`]   | `HarvesterBrain` — the three nested machines                    |
//! | [`noop`]    | `NoopBehavior` — placeholder that never acts                    |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Priority layering
//!
//! ```text
//! hazard machine     NeedsRepair ◀──────▶ Sheltering
//!                        │
//! repair machine     Harvesting ◀───────▶ Repairing
//!                        │
//! harvest machine    Searching ─▶ Gathering ─▶ DroppingOff ─▶ Searching
//! ```
//!
//! Each tick the outermost machine evaluates its guards, then runs its active
//! state; a composite state recurses into the machine it wraps.  Exactly one
//! leaf action runs per tick.

pub mod brain;
pub mod command;
pub mod context;
pub mod error;
pub mod machine;
pub mod model;
pub mod noop;
pub mod state;

#[cfg(test)]
mod tests;

pub use brain::HarvesterBrain;
pub use command::{BeamEffect, Command};
pub use context::{BehaviorContext, Conditions, EnRoute};
pub use error::{BehaviorError, BehaviorResult};
pub use machine::{StateChange, StateId, StateMachine, Transition};
pub use model::{BehaviorModel, TickInput, TickOutput};
pub use noop::NoopBehavior;
pub use state::{HarvestState, HazardMode, RepairMode, StatePath};
