//! Joinable wrappers and join resolution
//!
//! Each primitive (or group of classified lines) that can take part in a
//! junction is wrapped in one of the [`JoinableEnum`] variants. A variant
//! computes its [`JoinPoint`]s once, at construction, and keeps them in its
//! own [`JoinManager`]. Joinables refer to each other only through
//! [`JoinableId`]s into a [`JoinableArena`].

mod hatched;
mod junction;
mod line;
mod manager;
mod point;
mod polygon;
mod text;
mod tram;

use std::fmt;

use enum_dispatch::enum_dispatch;
use glam::DVec2;

pub use hatched::HatchedPolygon;
pub use junction::{Junction, JunctionId, build_junctions};
pub use line::LineJoin;
pub use manager::JoinManager;
pub use point::{JoinPoint, Priority};
pub use polygon::PolygonJoin;
pub use text::TextJoin;
pub use tram::TramLine;

use crate::classify::{ClassifiedLines, SequenceKind, TramPair};
use crate::config::JoinConfig;
use crate::defaults;
use crate::errors::JoinError;
use crate::primitives::{LineSegment, Polygon, Primitive, TextRun};

/// Index of a joinable inside its [`JoinableArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JoinableId(pub usize);

impl fmt::Display for JoinableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "joinable#{}", self.0)
    }
}

/// Which variant a joinable is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinableKind {
    Line,
    Text,
    TramLine,
    Polygon,
    HatchedPolygon,
}

impl JoinableKind {
    /// Fixed priority of the variant
    pub fn priority(self) -> Priority {
        match self {
            JoinableKind::Line => defaults::LINE_PRIORITY,
            JoinableKind::Text => defaults::TEXT_PRIORITY,
            JoinableKind::TramLine => defaults::TRAM_LINE_PRIORITY,
            JoinableKind::Polygon => defaults::POLYGON_PRIORITY,
            JoinableKind::HatchedPolygon => defaults::HATCHED_POLYGON_PRIORITY,
        }
    }
}

impl fmt::Display for JoinableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JoinableKind::Line => "line",
            JoinableKind::Text => "text",
            JoinableKind::TramLine => "tram line",
            JoinableKind::Polygon => "polygon",
            JoinableKind::HatchedPolygon => "hatched polygon",
        };
        f.write_str(name)
    }
}

/// Uniform join contract shared by every variant.
#[enum_dispatch]
pub trait Joinable {
    fn kind(&self) -> JoinableKind;

    fn join_manager(&self) -> &JoinManager;

    fn join_manager_mut(&mut self) -> &mut JoinManager;

    fn id(&self) -> JoinableId {
        self.join_manager().owner()
    }

    fn priority(&self) -> Priority {
        self.kind().priority()
    }

    fn join_points(&self) -> &[JoinPoint] {
        self.join_manager().points()
    }

    fn junctions(&self) -> &[JunctionId] {
        self.join_manager().junctions()
    }

    fn add_junction(&mut self, junction: JunctionId) {
        self.join_manager_mut().add_junction(junction);
    }

    /// Point at which this joinable meets `other`, if any.
    fn resolve_against(&self, other: &dyn Joinable) -> Result<Option<JoinPoint>, JoinError> {
        self.join_manager().common_point(other.join_manager())
    }
}

/// All joinable variants
#[enum_dispatch(Joinable)]
#[derive(Debug, Clone, PartialEq)]
pub enum JoinableEnum {
    Line(LineJoin),
    Text(TextJoin),
    TramLine(TramLine),
    Polygon(PolygonJoin),
    Hatched(HatchedPolygon),
}

/// Push one point per location, all sharing a radius and the owner's priority.
pub(crate) fn place_points(
    manager: &mut JoinManager,
    locations: impl IntoIterator<Item = DVec2>,
    radius: f64,
    priority: Priority,
) {
    let owner = manager.owner();
    for location in locations {
        manager.push_point(JoinPoint::new(owner, location, radius, priority));
    }
}

/// Wrap a single primitive.
///
/// Lines, text runs and polygons are supported; circles and rectangles are
/// reported as [`JoinError::UnsupportedPrimitive`].
pub fn make_joinable(
    id: JoinableId,
    primitive: &Primitive,
    config: &JoinConfig,
) -> Result<JoinableEnum, JoinError> {
    match primitive {
        Primitive::Line(line) => Ok(LineJoin::new(id, line.clone(), config).into()),
        Primitive::Text(text) => Ok(TextJoin::new(id, text.clone(), config).into()),
        Primitive::Polygon(polygon) => Ok(PolygonJoin::new(id, polygon.clone(), config).into()),
        Primitive::Circle(_) | Primitive::Rect(_) => Err(JoinError::UnsupportedPrimitive {
            kind: primitive.kind(),
        }),
    }
}

/// Resolve the common point of two joinables.
///
/// Symmetric in its arguments; joining a joinable to itself is an error.
pub fn resolve_common_point(
    a: &dyn Joinable,
    b: &dyn Joinable,
) -> Result<Option<JoinPoint>, JoinError> {
    a.resolve_against(b)
}

/// Owner of every joinable in a drawing; ids are indices into it.
#[derive(Debug, Clone, Default)]
pub struct JoinableArena {
    joinables: Vec<JoinableEnum>,
    config: JoinConfig,
}

impl JoinableArena {
    pub fn new(config: JoinConfig) -> Self {
        Self {
            joinables: Vec::new(),
            config,
        }
    }

    /// Wrap every group of classified lines, then every text run.
    ///
    /// Singles become [`LineJoin`]s, tram pairs [`TramLine`]s, hatch
    /// ladders [`HatchedPolygon`]s and closed loops [`PolygonJoin`]s.
    pub fn from_classified(
        classified: ClassifiedLines,
        texts: &[TextRun],
        config: JoinConfig,
    ) -> Result<Self, JoinError> {
        let mut arena = Self::new(config);
        for line in classified.singles {
            arena.add_line(line);
        }
        for pair in classified.tram_pairs {
            arena.add_tram_line(pair);
        }
        for sequence in classified.sequences {
            match sequence.kind {
                SequenceKind::Hatch => {
                    arena.add_hatched(sequence.lines)?;
                }
                SequenceKind::Closed => {
                    let vertices = sequence.lines.iter().map(LineSegment::start).collect();
                    arena.add_polygon(Polygon::new(vertices));
                }
            }
        }
        for text in texts {
            arena.add_text(text.clone());
        }
        crate::log::debug!(count = arena.len(), "joinables built from classified lines");
        Ok(arena)
    }

    fn next_id(&self) -> JoinableId {
        JoinableId(self.joinables.len())
    }

    fn push(&mut self, joinable: JoinableEnum) -> JoinableId {
        let id = joinable.id();
        crate::log::debug!(id = %id, kind = %joinable.kind(), "joinable added");
        self.joinables.push(joinable);
        id
    }

    pub fn add_primitive(&mut self, primitive: &Primitive) -> Result<JoinableId, JoinError> {
        let joinable = make_joinable(self.next_id(), primitive, &self.config)?;
        Ok(self.push(joinable))
    }

    /// Wrap each primitive, dropping unsupported ones with a warning.
    pub fn extend_from_primitives<'a>(&mut self, primitives: impl IntoIterator<Item = &'a Primitive>) {
        for primitive in primitives {
            if let Err(err) = self.add_primitive(primitive) {
                crate::log::warn!(error = %err, "primitive dropped");
            }
        }
    }

    pub fn add_line(&mut self, line: LineSegment) -> JoinableId {
        let joinable = LineJoin::new(self.next_id(), line, &self.config);
        self.push(joinable.into())
    }

    pub fn add_text(&mut self, text: TextRun) -> JoinableId {
        let joinable = TextJoin::new(self.next_id(), text, &self.config);
        self.push(joinable.into())
    }

    pub fn add_tram_line(&mut self, pair: TramPair) -> JoinableId {
        let joinable = TramLine::new(self.next_id(), pair, &self.config);
        self.push(joinable.into())
    }

    pub fn add_polygon(&mut self, polygon: Polygon) -> JoinableId {
        let joinable = PolygonJoin::new(self.next_id(), polygon, &self.config);
        self.push(joinable.into())
    }

    pub fn add_hatched(&mut self, lines: Vec<LineSegment>) -> Result<JoinableId, JoinError> {
        let joinable = HatchedPolygon::new(self.next_id(), lines, &self.config)?;
        Ok(self.push(joinable.into()))
    }

    pub fn get(&self, id: JoinableId) -> Option<&JoinableEnum> {
        self.joinables.get(id.0)
    }

    pub fn get_mut(&mut self, id: JoinableId) -> Option<&mut JoinableEnum> {
        self.joinables.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JoinableEnum> {
        self.joinables.iter()
    }

    pub fn len(&self) -> usize {
        self.joinables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joinables.is_empty()
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }
}
