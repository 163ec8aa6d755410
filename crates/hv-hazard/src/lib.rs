//! `hv-hazard` — the recurring hazard that perturbs the agent's priorities.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`flag`]  | `HazardFlag` — the one value shared with the behavior core     |
//! | [`phase`] | `HazardPhase`, `HazardState`, `AlertLevel`, `HazardSignal`     |
//! | [`cycle`] | `HazardCycle`, `Exposure`                                      |
//!
//! # Episode protocol
//!
//! ```text
//! Idle ──sample every poll_interval, draw == sentinel──▶ Warning
//! Warning ──hold U[warning_min, warning_max)──▶ Active   (flag raised)
//! Active  ──hold U[active_min, active_max)───▶ Cooldown  (flag lowered)
//! Cooldown ─────────────────────────────────▶ Idle      (sampling resumes)
//! ```
//!
//! While the flag is up, [`HazardCycle::apply_exposure`] drains health from an
//! unsheltered agent every frame.

pub mod cycle;
pub mod flag;
pub mod phase;


pub use cycle::{Exposure, HazardCycle};
pub use flag::HazardFlag;
pub use phase::{AlertLevel, HazardPhase, HazardSignal, HazardState};
