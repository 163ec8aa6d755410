//! `hv-schedule` — explicit scheduler for timer-driven processes.
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`task_queue`] | `TaskQueue<T>` (`BTreeMap<SimTime, Vec<T>>`)          |
//!
//! # Model
//!
//! A timed process (the hazard cycle, for instance) is written as a small
//! state machine whose "wait N seconds" points become queued continuations:
//!
//! ```text
//! queue.push(now.offset_secs(hold), Step::Next);   // suspend
//! for (at, step) in queue.pop_due(now) { ... }     // resume on schedule
//! ```
//!
//! The driving clock belongs to the caller; nothing here sleeps or blocks.

pub mod task_queue;


pub use task_queue::TaskQueue;
