//! `hv-mobility` — how the behavior core moves the agent.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`navigator`] | `Navigator` trait — fire-and-forget moves + arrival checks |
//! | [`state`]     | `MovementState` — per-agent travel state                   |
//! | [`straight`]  | `StraightLineNavigator` — constant-speed host stand-in     |
//!
//! Path planning belongs to the host.  The behavior core only issues
//! destinations and asks whether it is within stopping distance of a point.

pub mod navigator;
pub mod state;
pub mod straight;


pub use navigator::Navigator;
pub use state::MovementState;
pub use straight::StraightLineNavigator;
