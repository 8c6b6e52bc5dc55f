use glam::DVec2;

use crate::config::JoinConfig;
use crate::primitives::LineSegment;

use super::{JoinManager, Joinable, JoinableId, JoinableKind, place_points};

/// A single line, joinable at its ends or at declared interest points
#[derive(Debug, Clone, PartialEq)]
pub struct LineJoin {
    line: LineSegment,
    manager: JoinManager,
}

impl LineJoin {
    /// Join points at both endpoints.
    pub fn new(id: JoinableId, line: LineSegment, config: &JoinConfig) -> Self {
        let ends = [line.start(), line.end()];
        Self::with_interest_points(id, line, &ends, config)
    }

    /// Join points at the given locations, typically on or near the line.
    pub fn with_interest_points(
        id: JoinableId,
        line: LineSegment,
        points: &[DVec2],
        config: &JoinConfig,
    ) -> Self {
        let radius = config.radius(config.line_radius_factor, line.length());
        let mut manager = JoinManager::new(id);
        place_points(&mut manager, points.iter().copied(), radius, JoinableKind::Line.priority());
        Self { line, manager }
    }

    pub fn line(&self) -> &LineSegment {
        &self.line
    }
}

impl Joinable for LineJoin {
    fn kind(&self) -> JoinableKind {
        JoinableKind::Line
    }

    fn join_manager(&self) -> &JoinManager {
        &self.manager
    }

    fn join_manager_mut(&mut self) -> &mut JoinManager {
        &mut self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn endpoints_by_default() {
        let line = LineSegment::new(dvec2(0.0, 0.0), dvec2(20.0, 0.0));
        let j = LineJoin::new(JoinableId(0), line, &JoinConfig::default());
        let locations: Vec<_> = j.join_points().iter().map(|p| p.location).collect();
        assert_eq!(locations, vec![dvec2(0.0, 0.0), dvec2(20.0, 0.0)]);
        assert_eq!(j.join_points()[0].radius, 2.0);
    }

    #[test]
    fn short_lines_get_minimum_radius() {
        let line = LineSegment::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0));
        let config = JoinConfig::default();
        let j = LineJoin::new(JoinableId(0), line, &config);
        assert_eq!(j.join_points()[0].radius, config.min_radius);
    }

    #[test]
    fn interest_points_replace_ends() {
        let line = LineSegment::new(dvec2(0.0, 0.0), dvec2(20.0, 0.0));
        let j = LineJoin::with_interest_points(
            JoinableId(1),
            line,
            &[dvec2(10.0, 0.0)],
            &JoinConfig::default(),
        );
        assert_eq!(j.join_points().len(), 1);
        assert_eq!(j.join_points()[0].owner, JoinableId(1));
    }
}
