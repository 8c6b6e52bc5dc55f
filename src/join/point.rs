//! Join points and priorities

use std::fmt;
use std::ops::Add;

use glam::DVec2;

use super::JoinableId;

/// Strength with which a joinable claims a shared point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(pub f64);

impl Add for Priority {
    type Output = Priority;

    fn add(self, rhs: Priority) -> Priority {
        Priority(self.0 + rhs.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate connection point of one joinable.
///
/// Created with the joinable and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinPoint {
    pub owner: JoinableId,
    pub location: DVec2,
    pub radius: f64,
    pub priority: Priority,
}

impl JoinPoint {
    pub fn new(owner: JoinableId, location: DVec2, radius: f64, priority: Priority) -> Self {
        Self {
            owner,
            location,
            radius,
            priority,
        }
    }

    pub fn distance_to(&self, other: &JoinPoint) -> f64 {
        self.location.distance(other.location)
    }

    /// The two tolerance discs overlap. Touching discs do not count.
    pub fn overlaps(&self, other: &JoinPoint) -> bool {
        self.radius + other.radius > self.distance_to(other)
    }

    /// `location` lies within this point's tolerance disc.
    pub fn covers(&self, location: DVec2) -> bool {
        self.location.distance(location) <= self.radius
    }
}

impl fmt::Display for JoinPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ ({},{}) r={} p={}",
            self.owner, self.location.x, self.location.y, self.radius, self.priority
        )
    }
}
