//! World-space position type.
//!
//! The host engine works in a Y-up, metre-scaled 3-D space.  Arrival checks
//! and nearest-resource queries use plain Euclidean distance in that space.

use std::fmt;

/// A point in world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane (`y = 0`).
    #[inline]
    pub fn flat(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`][Self::distance]
    /// when only comparing.
    #[inline]
    pub fn distance_squared(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// `true` if `other` lies within `range` of `self` (inclusive).
    #[inline]
    pub fn within(self, other: Position, range: f32) -> bool {
        self.distance_squared(other) <= range * range
    }

    /// Move from `self` toward `target` by at most `max_step`, never
    /// overshooting.
    pub fn step_towards(self, target: Position, max_step: f32) -> Position {
        let dist = self.distance(target);
        if dist <= max_step || dist <= f32::EPSILON {
            return target;
        }
        let t = max_step / dist;
        Position {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
            z: self.z + (target.z - self.z) * t,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
