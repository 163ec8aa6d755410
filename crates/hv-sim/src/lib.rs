//! `hv-sim` — frame loop for a single harvester.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Clock    — advance by frame_ms; dt = frame_ms / 1000.
//!   ② Hazard   — resume every hazard continuation due by now; forward the
//!                phase signals to the observer.
//!   ③ Exposure — while the hazard is active and the agent is outside
//!                arrival range of the station, subtract damage_per_sec · dt.
//!   ④ Behavior — BehaviorModel::tick with the hazard flag as sampled now.
//!   ⑤ Apply    — NavigateTo → Navigator::navigate_to, Beam → beam state.
//!   ⑥ Move     — Navigator::advance(dt).
//!   ⑦ Snapshot — every snapshot_interval_frames frames.
//! ```
//!
//! The hazard and the behavior core never call each other; the flag is the
//! only thing they share.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hv_behavior::HarvesterBrain;
//! use hv_mobility::StraightLineNavigator;
//! use hv_sim::{NoopObserver, SimBuilder};
//!
//! let brain = HarvesterBrain::new(harvester.clone())?;
//! let nav = StraightLineNavigator::from_config(&harvester);
//! let mut sim = SimBuilder::new(sim_config, harvester, hazard, brain, nav)
//!     .field(field)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim};
pub use snapshot::AgentSnapshot;
