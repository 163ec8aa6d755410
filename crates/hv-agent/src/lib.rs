//! `hv-agent` — mutable scalar state of one harvester.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`vitals`] | `AgentVitals` — health, carried resource, station resource |
//!
//! Every mutator clamps: `health ∈ [0, max_health]` and
//! `carried ∈ [0, capacity]` hold after every call.  Out-of-range arithmetic
//! is absorbed here and never surfaced as an error.

pub mod vitals;


pub use vitals::AgentVitals;
