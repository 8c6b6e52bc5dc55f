//! Geometry value types shared by the classifier, joiners and axes.
//!
//! Points and vectors are `glam::DVec2`; this module adds the 1-D ranges and
//! bounding boxes the rest of the crate measures with.

use std::fmt;

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite coordinates.
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject a point with any non-finite coordinate.
pub fn check_point(p: DVec2) -> Result<DVec2, NumericError> {
    check_finite(p.x)?;
    check_finite(p.y)?;
    Ok(p)
}

/// An oriented 1-D interval running from `start` to `end`.
///
/// `start` may exceed `end`: a vertical screen axis runs downwards while its
/// values run upwards, and the orientation has to survive the mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRange {
    pub start: f64,
    pub end: f64,
}

impl LinearRange {
    pub fn new(start: f64, end: f64) -> Self {
        LinearRange { start, end }
    }

    /// Range from the first to the last of an ordered sequence.
    pub fn from_ordered(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let last = *values.last()?;
        Some(LinearRange::new(first, last))
    }

    /// Ascending envelope of unordered values.
    pub fn envelope(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(LinearRange::new(min, max))
    }

    /// Signed extent `end - start`
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    /// True when the range has no extent, so nothing can be scaled from it.
    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0 || !self.length().is_finite()
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min() && v <= self.max()
    }

    /// Endpoint-wise comparison regardless of orientation.
    pub fn is_equal_to(&self, other: &LinearRange, eps: f64) -> bool {
        (self.min() - other.min()).abs() <= eps && (self.max() - other.max()).abs() <= eps
    }

    /// Multiplier taking lengths in `self` to lengths in `other`.
    pub fn scale_to(&self, other: &LinearRange) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some(other.length() / self.length())
        }
    }

    /// Offset completing `x * scale + constant`.
    pub fn constant_to(&self, other: &LinearRange) -> Option<f64> {
        self.scale_to(other).map(|scale| other.start - self.start * scale)
    }

    pub fn scale_and_constant_to(&self, other: &LinearRange) -> Option<(f64, f64)> {
        Some((self.scale_to(other)?, self.constant_to(other)?))
    }

    /// Map `x` from this range onto `other`.
    ///
    /// Interpolates from `start`, so the range endpoints and exact fractions
    /// map without rounding drift.
    pub fn transform_to_range(&self, other: &LinearRange, x: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(other.start + (x - self.start) * other.length() / self.length())
    }
}

impl fmt::Display for LinearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut bb = BBox::new();
        for p in points {
            bb.expand_point(p);
        }
        bb
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn x_range(&self) -> LinearRange {
        LinearRange::new(self.min.x, self.max.x)
    }

    pub fn y_range(&self) -> LinearRange {
        LinearRange::new(self.min.y, self.max.y)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Round to `places` decimals, used to bucket measured lengths.
pub fn normalize(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
