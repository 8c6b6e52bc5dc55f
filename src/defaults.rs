//! Default tolerances and priorities (screen units unless noted)

use crate::join::Priority;

// Joinable priorities. Higher wins a shared join point.
pub const LINE_PRIORITY: Priority = Priority(1.0);
pub const POLYGON_PRIORITY: Priority = Priority(1.5);
pub const TRAM_LINE_PRIORITY: Priority = Priority(2.0);
pub const TEXT_PRIORITY: Priority = Priority(2.5);
pub const HATCHED_POLYGON_PRIORITY: Priority = Priority(2.9);

// Join point radii, relative to the size of the wrapped primitive
pub const LINE_RADIUS_FACTOR: f64 = 0.1;
pub const TEXT_RADIUS_FACTOR: f64 = 1.0;
pub const TRAM_RADIUS_FACTOR: f64 = 0.6;
pub const POLYGON_RADIUS_FACTOR: f64 = 0.1;
pub const HATCHED_RADIUS_FACTOR: f64 = 0.5;
pub const MIN_RADIUS: f64 = 0.5;

// Line classification
/// Radians
pub const PARALLEL_ANGLE_EPS: f64 = 0.05;
pub const TRAM_LENGTH_RATIO: f64 = 0.8;
pub const TRAM_MAX_SEPARATION_FACTOR: f64 = 0.5;
pub const HATCH_GAP_FACTOR: f64 = 1.0;
pub const MIN_HATCH_LINES: usize = 3;
pub const LENGTH_EPS: f64 = 0.01;
pub const ENDPOINT_EPS: f64 = 0.01;

// Axis calibration
pub const AXIS_END_EPS: f64 = 1.0;
pub const AXIS_RANGE_EPS: f64 = 0.01;
pub const TICK_LENGTH_PLACES: i32 = 2;
/// Radians
pub const AXIS_ANGLE_EPS: f64 = 0.01;
pub const MAJOR_TICK_CHAR: char = 'M';
pub const MINOR_TICK_CHAR: char = 'm';

// Phrase reconstruction
pub const FONT_WIDTH_FACTOR: f64 = 1.0;
pub const FONT_HEIGHT_FACTOR: f64 = 1.0;
pub const BASELINE_EPS: f64 = 0.5;
