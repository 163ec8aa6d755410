//! The shared "hazard active" flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle to a single boolean written by the hazard cycle and read
/// by the behavior core.
///
/// All access goes through [`is_active`][Self::is_active] and
/// [`set`][Self::set].  The atomic keeps the handle sound if the two tasks are
/// ever moved onto separate threads.
#[derive(Clone, Debug, Default)]
pub struct HazardFlag(Arc<AtomicBool>);

impl HazardFlag {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Overwrite the flag.  The hazard cycle is the normal writer; hosts and
    /// tests may force it.
    #[inline]
    pub fn set(&self, active: bool) {
        self.0.store(active, Ordering::Release);
    }
}
