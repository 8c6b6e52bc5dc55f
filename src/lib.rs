//! Reconstruct chemical and chart structure from flat vector primitives.
//!
//! A page-description document hands over lines, text runs and a few simple
//! shapes with no grouping. This crate rebuilds what they depict:
//!
//! - [`classify_lines`] sorts lines into singles, double-bond
//!   [`TramPair`]s, hatch ladders and closed loops.
//! - [`JoinableArena`] wraps each group as a [`Joinable`], and
//!   [`build_junctions`] clusters joinables meeting at a common point.
//! - [`calibrate_axis`] turns an axis backbone, its ticks and its labels into
//!   an [`AnnotatedAxis`] mapping screen positions to data values.
//!
//! Every stage takes its tolerances from an explicit config struct
//! ([`ClassifyConfig`], [`JoinConfig`], [`AxisConfig`]). Enable the
//! `tracing` feature to get debug logs of each decision.

pub mod axis;
pub mod classify;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod join;
pub mod log;
pub mod primitives;
pub mod types;

pub use axis::{AnnotatedAxis, AxisCalibrator, AxisDirection, calibrate_axis, find_axis_ticks};
pub use classify::{ClassifiedLines, LineSequence, SequenceKind, TramPair, classify_lines};
pub use config::{AxisConfig, ClassifyConfig, FontWidths, JoinConfig};
pub use errors::{CalibrationError, JoinError};
pub use join::{
    HatchedPolygon, JoinManager, JoinPoint, Joinable, JoinableArena, JoinableEnum, JoinableId,
    JoinableKind, Junction, JunctionId, LineJoin, PolygonJoin, Priority, TextJoin, TramLine,
    build_junctions, make_joinable, resolve_common_point,
};
pub use primitives::{
    Circle, LineDirection, LineSegment, Polygon, Primitive, Rect, TextRotation, TextRun,
};
pub use types::{BBox, LinearRange, NumericError};
