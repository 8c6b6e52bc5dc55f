//! Per-joinable bookkeeping: join points and the junctions it belongs to

use crate::errors::JoinError;

use super::{JoinPoint, JoinableId, JunctionId, Priority};

/// Join points and junction membership of one joinable.
///
/// A manager knows its owner only by id and never holds another manager.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinManager {
    owner: JoinableId,
    points: Vec<JoinPoint>,
    junctions: Vec<JunctionId>,
}

impl JoinManager {
    pub fn new(owner: JoinableId) -> Self {
        Self {
            owner,
            points: Vec::new(),
            junctions: Vec::new(),
        }
    }

    pub fn owner(&self) -> JoinableId {
        self.owner
    }

    pub fn points(&self) -> &[JoinPoint] {
        &self.points
    }

    pub fn junctions(&self) -> &[JunctionId] {
        &self.junctions
    }

    pub(crate) fn push_point(&mut self, point: JoinPoint) {
        crate::log::debug!(owner = %self.owner, point = %point, "join point");
        self.points.push(point);
    }

    /// Record membership of a junction; adding the same junction twice is a no-op.
    pub fn add_junction(&mut self, junction: JunctionId) {
        if !self.junctions.contains(&junction) {
            self.junctions.push(junction);
        }
    }

    /// Find the point at which this joinable and `other` meet.
    ///
    /// Pairs are enumerated with the lower-id manager in the outer loop so the
    /// answer does not depend on argument order. The point of the higher
    /// priority owner wins a pair (lower id on a tie); across pairs only a
    /// strictly higher combined priority displaces the first match.
    pub fn common_point(&self, other: &JoinManager) -> Result<Option<JoinPoint>, JoinError> {
        if self.owner == other.owner {
            return Err(JoinError::SelfJoin { id: self.owner });
        }
        let (outer, inner) = if self.owner < other.owner {
            (self, other)
        } else {
            (other, self)
        };

        let mut best: Option<(Priority, &JoinPoint)> = None;
        for p in &outer.points {
            for q in &inner.points {
                if !p.overlaps(q) {
                    continue;
                }
                let winner = if q.priority > p.priority { q } else { p };
                let combined = p.priority + q.priority;
                if best.is_none_or(|(b, _)| combined > b) {
                    best = Some((combined, winner));
                }
            }
        }

        let resolved = best.map(|(_, point)| point.clone());
        crate::log::debug!(a = %outer.owner, b = %inner.owner, point = ?resolved, "common point");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn manager(id: usize, priority: f64, locations: &[(f64, f64)]) -> JoinManager {
        let mut m = JoinManager::new(JoinableId(id));
        for &(x, y) in locations {
            m.push_point(JoinPoint::new(JoinableId(id), dvec2(x, y), 1.0, Priority(priority)));
        }
        m
    }

    #[test]
    fn self_join_is_rejected() {
        let a = manager(4, 1.0, &[(0.0, 0.0)]);
        assert_eq!(
            a.common_point(&a),
            Err(JoinError::SelfJoin { id: JoinableId(4) })
        );
    }

    #[test]
    fn higher_priority_point_wins() {
        let low = manager(0, 1.0, &[(0.0, 0.0)]);
        let high = manager(1, 2.9, &[(0.5, 0.0)]);
        let p = low.common_point(&high).unwrap().unwrap();
        assert_eq!(p.owner, JoinableId(1));
        assert_eq!(p.location, dvec2(0.5, 0.0));
    }

    #[test]
    fn equal_priority_goes_to_lower_id() {
        let a = manager(2, 1.0, &[(0.0, 0.0)]);
        let b = manager(7, 1.0, &[(0.5, 0.0)]);
        assert_eq!(b.common_point(&a).unwrap().unwrap().owner, JoinableId(2));
        assert_eq!(a.common_point(&b).unwrap().unwrap().owner, JoinableId(2));
    }

    #[test]
    fn first_match_kept_on_equal_combined_priority() {
        let a = manager(0, 1.0, &[(0.0, 0.0), (10.0, 0.0)]);
        let b = manager(1, 1.0, &[(10.5, 0.0), (0.5, 0.0)]);
        let p = b.common_point(&a).unwrap().unwrap();
        assert_eq!(p.location, dvec2(0.0, 0.0));
    }

    #[test]
    fn distant_points_do_not_meet() {
        let a = manager(0, 1.0, &[(0.0, 0.0)]);
        let b = manager(1, 1.0, &[(5.0, 0.0)]);
        assert_eq!(a.common_point(&b), Ok(None));
    }

    #[test]
    fn junctions_are_added_once() {
        let mut a = manager(0, 1.0, &[]);
        a.add_junction(JunctionId(3));
        a.add_junction(JunctionId(3));
        assert_eq!(a.junctions(), &[JunctionId(3)]);
    }
}
