//! `TaskQueue` — continuations keyed by wake time.
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct wake
//! times currently enqueued.  Continuations that share a wake time are
//! resumed in the order they were pushed.

use std::collections::BTreeMap;

use hv_core::SimTime;

/// A priority queue mapping wake times → continuations due at that time.
pub struct TaskQueue<T> {
    inner: BTreeMap<SimTime, Vec<T>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to resume at `at`.
    pub fn push(&mut self, at: SimTime, task: T) {
        self.inner.entry(at).or_default().push(task);
        self.total += 1;
    }

    /// Remove and return every continuation with wake time `<= now`, in
    /// wake-time order.
    ///
    /// Returns an empty `Vec` (no allocation) when nothing is due.
    pub fn pop_due(&mut self, now: SimTime) -> Vec<(SimTime, T)> {
        let mut due = Vec::new();
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > now {
                break;
            }
            let (at, tasks) = entry.remove_entry();
            self.total -= tasks.len();
            due.extend(tasks.into_iter().map(|t| (at, t)));
        }
        due
    }

    /// The earliest wake time with at least one queued task, or `None`.
    pub fn next_due(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued continuations.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct wake times with at least one queued task.
    pub fn time_count(&self) -> usize {
        self.inner.len()
    }

    /// Drop every queued continuation.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }
}
