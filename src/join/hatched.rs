//! Hatched wedge bonds
//!
//! A wedge is drawn as a ladder of parallel lines whose lengths shrink from
//! the wide end to the narrow end. It joins at the middle of its widest rung
//! and at a point extrapolated one rung beyond its narrowest one, which is
//! where the narrow end's atom sits.

use glam::DVec2;

use crate::config::JoinConfig;
use crate::errors::JoinError;
use crate::primitives::LineSegment;

use super::{JoinManager, Joinable, JoinableId, JoinableKind, place_points};

#[derive(Debug, Clone, PartialEq)]
pub struct HatchedPolygon {
    lines: Vec<LineSegment>,
    manager: JoinManager,
}

impl HatchedPolygon {
    pub fn new(
        id: JoinableId,
        lines: Vec<LineSegment>,
        config: &JoinConfig,
    ) -> Result<Self, JoinError> {
        let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
            return Err(JoinError::EmptyLineSequence);
        };
        let (longest, shortest) = if first.length() > last.length() {
            (first, last)
        } else {
            (last, first)
        };

        let long_mid = longest.midpoint();
        let mut points = vec![long_mid];
        match narrow_end_point(&lines, long_mid, shortest.midpoint()) {
            Some(p) => points.push(p),
            None => {
                crate::log::warn!(
                    id = %id,
                    lines = lines.len(),
                    "hatched polygon has a single join point"
                );
            }
        }

        let radius = config.radius(config.hatched_radius_factor, longest.length());
        let mut manager = JoinManager::new(id);
        place_points(&mut manager, points, radius, JoinableKind::HatchedPolygon.priority());
        Ok(Self { lines, manager })
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Segment from the wide end to the narrow end, when both points exist.
    pub fn backbone(&self) -> Option<LineSegment> {
        match self.join_points() {
            [wide, narrow] => Some(LineSegment::new(wide.location, narrow.location)),
            _ => None,
        }
    }

    /// The only join point, when the narrow end could not be placed.
    pub fn point(&self) -> Option<DVec2> {
        match self.join_points() {
            [only] => Some(only.location),
            _ => None,
        }
    }
}

/// Extrapolate past the shortest rung by one rung spacing.
fn narrow_end_point(lines: &[LineSegment], long_mid: DVec2, short_mid: DVec2) -> Option<DVec2> {
    let [l0, l1, ..] = lines else {
        return None;
    };
    let span = long_mid.distance(short_mid);
    if span == 0.0 {
        return None;
    }
    let spacing = l0.midpoint().distance(l1.midpoint());
    let s = (span + spacing) / span;
    Some(long_mid + (short_mid - long_mid) * s)
}

impl Joinable for HatchedPolygon {
    fn kind(&self) -> JoinableKind {
        JoinableKind::HatchedPolygon
    }

    fn join_manager(&self) -> &JoinManager {
        &self.manager
    }

    fn join_manager_mut(&mut self) -> &mut JoinManager {
        &mut self.manager
    }
}
