use crate::config::JoinConfig;
use crate::primitives::TextRun;

use super::{JoinManager, Joinable, JoinableId, JoinableKind, place_points};

/// A text run, joinable at its anchor (atom labels and the like)
#[derive(Debug, Clone, PartialEq)]
pub struct TextJoin {
    text: TextRun,
    manager: JoinManager,
}

impl TextJoin {
    pub fn new(id: JoinableId, text: TextRun, config: &JoinConfig) -> Self {
        let radius = config.radius(config.text_radius_factor, text.font_size);
        let mut manager = JoinManager::new(id);
        place_points(&mut manager, [text.anchor], radius, JoinableKind::Text.priority());
        Self { text, manager }
    }

    pub fn text(&self) -> &TextRun {
        &self.text
    }
}

impl Joinable for TextJoin {
    fn kind(&self) -> JoinableKind {
        JoinableKind::Text
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
    fn one_point_at_anchor_scaled_by_font() {
        let text = TextRun::new(dvec2(3.0, 4.0), 8.0, "N");
        let j = TextJoin::new(JoinableId(2), text, &JoinConfig::default());
        assert_eq!(j.join_points().len(), 1);
        assert_eq!(j.join_points()[0].location, dvec2(3.0, 4.0));
        assert_eq!(j.join_points()[0].radius, 8.0);
        assert_eq!(j.priority(), JoinableKind::Text.priority());
    }
}
