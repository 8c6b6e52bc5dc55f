use crate::classify::TramPair;
use crate::config::JoinConfig;

use super::{JoinManager, Joinable, JoinableId, JoinableKind, place_points};

/// Two near-parallel lines drawn as one double bond
#[derive(Debug, Clone, PartialEq)]
pub struct TramLine {
    pair: TramPair,
    manager: JoinManager,
}

impl TramLine {
    /// Join points at both midpoints and at the centre between them.
    pub fn new(id: JoinableId, pair: TramPair, config: &JoinConfig) -> Self {
        let mean_length = (pair.first.length() + pair.second.length()) * 0.5;
        let radius = config.radius(config.tram_radius_factor, mean_length);
        let m0 = pair.first.midpoint();
        let m1 = pair.second.midpoint();
        let mut manager = JoinManager::new(id);
        place_points(
            &mut manager,
            [m0, m1, (m0 + m1) * 0.5],
            radius,
            JoinableKind::TramLine.priority(),
        );
        Self { pair, manager }
    }

    pub fn pair(&self) -> &TramPair {
        &self.pair
    }
}

impl Joinable for TramLine {
    fn kind(&self) -> JoinableKind {
        JoinableKind::TramLine
    }

    fn join_manager(&self) -> &JoinManager {
        &self.manager
    }

    fn join_manager_mut(&mut self) -> &mut JoinManager {
        &mut self.manager
    }
}
