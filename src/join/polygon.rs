use crate::config::JoinConfig;
use crate::primitives::Polygon;

use super::{JoinManager, Joinable, JoinableId, JoinableKind, place_points};

/// A closed polygon, joinable at each vertex
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonJoin {
    polygon: Polygon,
    manager: JoinManager,
}

impl PolygonJoin {
    pub fn new(id: JoinableId, polygon: Polygon, config: &JoinConfig) -> Self {
        let radius = config.radius(config.polygon_radius_factor, polygon.mean_edge_length());
        let mut manager = JoinManager::new(id);
        place_points(
            &mut manager,
            polygon.points.iter().copied(),
            radius,
            JoinableKind::Polygon.priority(),
        );
        Self { polygon, manager }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Joinable for PolygonJoin {
    fn kind(&self) -> JoinableKind {
        JoinableKind::Polygon
    }

    fn join_manager(&self) -> &JoinManager {
        &self.manager
    }

    fn join_manager_mut(&mut self) -> &mut JoinManager {
        &mut self.manager
    }
}
