//! A flat state machine with a guarded transition table.
//!
//! Hierarchy is built by composition: a state enum variant stands for a whole
//! nested machine, and the owner dispatches into that machine when the
//! variant is active.  This module only knows about one level.

use std::fmt::Debug;

/// A state identifier usable in a [`StateMachine`].
pub trait StateId: Copy + Eq + Debug {
    /// Stable name used in logs and telemetry.
    fn name(self) -> &'static str;
}

/// A guarded edge `from → to`.
pub struct Transition<S, C> {
    pub from: S,
    pub to:   S,
    guard:    fn(&C) -> bool,
}

impl<S: StateId, C> Transition<S, C> {
    #[inline]
    pub fn is_open(&self, cond: &C) -> bool {
        (self.guard)(cond)
    }
}

/// Record of a state change, with the machine and states named.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub machine: &'static str,
    pub from:    &'static str,
    pub to:      &'static str,
    /// `true` for an explicit reset rather than a guarded transition.
    pub forced:  bool,
}

/// Current state plus an ordered transition table.
///
/// Guards are evaluated in registration order against a condition snapshot
/// `C`; the first open transition leaving the current state fires and no
/// other is considered that tick.
pub struct StateMachine<S, C> {
    name:        &'static str,
    initial:     S,
    current:     S,
    transitions: Vec<Transition<S, C>>,
}

impl<S: StateId, C> StateMachine<S, C> {
    pub fn new(name: &'static str, initial: S) -> Self {
        Self { name, initial, current: initial, transitions: Vec::new() }
    }

    /// Register `from → to` guarded by `guard`.  Registration order is the
    /// tie-break order.
    pub fn with_transition(mut self, from: S, to: S, guard: fn(&C) -> bool) -> Self {
        self.transitions.push(Transition { from, to, guard });
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn current(&self) -> S {
        self.current
    }

    #[inline]
    pub fn initial(&self) -> S {
        self.initial
    }

    /// Transitions leaving `state`, in tie-break order.
    pub fn transitions_from(&self, state: S) -> impl Iterator<Item = &Transition<S, C>> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// Fire at most one transition out of the current state.
    pub fn evaluate(&mut self, cond: &C) -> Option<StateChange> {
        let to = self
            .transitions_from(self.current)
            .find(|t| t.is_open(cond))
            .map(|t| t.to)?;
        Some(self.switch(to, false))
    }

    /// Jump to `state` without consulting guards.  Returns `None` if the
    /// machine is already there.
    pub fn force(&mut self, state: S) -> Option<StateChange> {
        if state == self.current {
            return None;
        }
        Some(self.switch(state, true))
    }

    /// Force back to the initial state.
    pub fn reset(&mut self) -> Option<StateChange> {
        self.force(self.initial)
    }

    fn switch(&mut self, to: S, forced: bool) -> StateChange {
        let change = StateChange {
            machine: self.name,
            from:    self.current.name(),
            to:      to.name(),
            forced,
        };
        self.current = to;
        change
    }
}
