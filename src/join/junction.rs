//! Junctions: clusters of joinables meeting at one point

use std::fmt;

use glam::DVec2;

use crate::errors::JoinError;

use super::{Joinable, JoinableArena, JoinableId, resolve_common_point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JunctionId(pub usize);

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "junction#{}", self.0)
    }
}

/// A location shared by two or more joinables
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub id: JunctionId,
    pub location: DVec2,
    members: Vec<JoinableId>,
}

impl Junction {
    pub fn new(id: JunctionId, location: DVec2) -> Self {
        Self {
            id,
            location,
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[JoinableId] {
        &self.members
    }

    pub fn contains(&self, id: JoinableId) -> bool {
        self.members.contains(&id)
    }

    /// Add a member unless it is already present.
    pub fn add_member(&mut self, id: JoinableId) {
        if !self.contains(id) {
            self.members.push(id);
        }
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({},{}) [", self.id, self.location.x, self.location.y)?;
        for (i, m) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
        }
        write!(f, "]")
    }
}

/// Resolve every pair of joinables in the arena and cluster the results.
///
/// A resolved point joins the first existing junction lying inside its
/// radius; otherwise it starts a new junction at its own location. Each
/// joinable's manager records the junctions it ends up in.
pub fn build_junctions(arena: &mut JoinableArena) -> Result<Vec<Junction>, JoinError> {
    let mut junctions: Vec<Junction> = Vec::new();
    let n = arena.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (JoinableId(i), JoinableId(j));
            let point = match (arena.get(a), arena.get(b)) {
                (Some(ja), Some(jb)) => resolve_common_point(ja, jb)?,
                _ => None,
            };
            let Some(point) = point else {
                continue;
            };

            let index = match junctions.iter().position(|jn| point.covers(jn.location)) {
                Some(index) => index,
                None => {
                    let id = JunctionId(junctions.len());
                    crate::log::debug!(junction = %id, x = point.location.x, y = point.location.y, "new junction");
                    junctions.push(Junction::new(id, point.location));
                    junctions.len() - 1
                }
            };
            let junction = &mut junctions[index];
            junction.add_member(a);
            junction.add_member(b);
            let id = junction.id;

            for member in [a, b] {
                if let Some(joinable) = arena.get_mut(member) {
                    joinable.add_junction(id);
                }
            }
        }
    }

    crate::log::debug!(count = junctions.len(), "junctions built");
    Ok(junctions)
}
