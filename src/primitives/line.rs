//! Straight line segments

use std::fmt;

use glam::{DAffine2, DVec2};

use crate::types::{BBox, NumericError, check_point};

/// Orientation of a segment relative to the screen axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    Horizontal,
    Vertical,
    Other,
}

/// A line segment with a cached length.
///
/// Endpoints only change through [`LineSegment::apply_transform`] and
/// [`LineSegment::normalize_direction`], both of which keep the cache valid.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    p0: DVec2,
    p1: DVec2,
    length: f64,
}

impl LineSegment {
    /// Create a segment from two trusted points.
    pub fn new(p0: DVec2, p1: DVec2) -> Self {
        Self {
            p0,
            p1,
            length: p0.distance(p1),
        }
    }

    /// Create a segment, rejecting NaN or infinite coordinates.
    pub fn try_new(p0: DVec2, p1: DVec2) -> Result<Self, NumericError> {
        Ok(Self::new(check_point(p0)?, check_point(p1)?))
    }

    /// Endpoint by serial number (0 or 1)
    pub fn xy(&self, serial: usize) -> Option<DVec2> {
        match serial {
            0 => Some(self.p0),
            1 => Some(self.p1),
            _ => None,
        }
    }

    #[inline]
    pub fn start(&self) -> DVec2 {
        self.p0
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn midpoint(&self) -> DVec2 {
        (self.p0 + self.p1) * 0.5
    }

    /// Vector from start to end
    pub fn vector(&self) -> DVec2 {
        self.p1 - self.p0
    }

    /// Unit direction, `None` for a zero-length segment.
    pub fn unit_vector(&self) -> Option<DVec2> {
        self.vector().try_normalize()
    }

    pub fn bounding_box(&self) -> BBox {
        BBox::from_points([self.p0, self.p1])
    }

    /// Classify against the screen axes within an angular tolerance (radians).
    ///
    /// Zero-length segments have no direction and report `Other`.
    pub fn direction(&self, angle_eps: f64) -> LineDirection {
        let Some(unit) = self.unit_vector() else {
            return LineDirection::Other;
        };
        // |sin| of the angle to the x axis
        if unit.y.abs() <= angle_eps.sin() {
            LineDirection::Horizontal
        } else if unit.x.abs() <= angle_eps.sin() {
            LineDirection::Vertical
        } else {
            LineDirection::Other
        }
    }

    /// Both endpoints share a y coordinate within `eps`.
    pub fn is_horizontal(&self, eps: f64) -> bool {
        (self.p0.y - self.p1.y).abs() <= eps
    }

    /// Both endpoints share an x coordinate within `eps`.
    pub fn is_vertical(&self, eps: f64) -> bool {
        (self.p0.x - self.p1.x).abs() <= eps
    }

    pub fn is_zero(&self, eps: f64) -> bool {
        let bb = self.bounding_box();
        bb.width() < eps && bb.height() < eps
    }

    /// Unsigned angle to another segment, folded into `[0, pi/2]`.
    pub fn angle_to(&self, other: &LineSegment) -> Option<f64> {
        let a = self.unit_vector()?;
        let b = other.unit_vector()?;
        let cos = a.dot(b).abs().min(1.0);
        Some(cos.acos())
    }

    /// Parallel or antiparallel within `angle_eps` radians.
    pub fn is_parallel_to(&self, other: &LineSegment, angle_eps: f64) -> bool {
        self.angle_to(other).is_some_and(|a| a < angle_eps)
    }

    /// Perpendicular when the cosine of the included angle is within `eps` of zero.
    pub fn is_perpendicular_to(&self, other: &LineSegment, eps: f64) -> bool {
        match (self.unit_vector(), other.unit_vector()) {
            (Some(a), Some(b)) => a.dot(b).abs() < eps,
            _ => false,
        }
    }

    /// Same endpoints in either order.
    pub fn connects_points(&self, a: DVec2, b: DVec2, eps: f64) -> bool {
        (self.p0.abs_diff_eq(a, eps) && self.p1.abs_diff_eq(b, eps))
            || (self.p0.abs_diff_eq(b, eps) && self.p1.abs_diff_eq(a, eps))
    }

    /// The endpoint of `self` that also ends `other`, if any.
    pub fn common_end_point(&self, other: &LineSegment, eps: f64) -> Option<DVec2> {
        let touches = |p: DVec2| other.p0.abs_diff_eq(p, eps) || other.p1.abs_diff_eq(p, eps);
        if touches(self.p0) {
            Some(self.p0)
        } else if touches(self.p1) {
            Some(self.p1)
        } else {
            None
        }
    }

    /// If `point` is at one end, the other end.
    pub fn other_point(&self, point: DVec2, eps: f64) -> Option<DVec2> {
        if point.abs_diff_eq(self.p0, eps) {
            Some(self.p1)
        } else if point.abs_diff_eq(self.p1, eps) {
            Some(self.p0)
        } else {
            None
        }
    }

    /// This horizontal/vertical segment ends on `other` at right angles.
    pub fn makes_t_joint_with(&self, other: &LineSegment, eps: f64) -> bool {
        if self.is_horizontal(eps) && other.is_vertical(eps) {
            let lx = other.p0.x;
            other.bounding_box().y_range().contains(self.p0.y)
                && ((lx - self.p0.x).abs() <= eps || (lx - self.p1.x).abs() <= eps)
        } else if self.is_vertical(eps) && other.is_horizontal(eps) {
            let ly = other.p0.y;
            other.bounding_box().x_range().contains(self.p0.x)
                && ((ly - self.p0.y).abs() <= eps || (ly - self.p1.y).abs() <= eps)
        } else {
            false
        }
    }

    /// Order the endpoints of a horizontal or vertical segment so the first is smallest.
    pub fn normalize_direction(&mut self, eps: f64) {
        let swap = if self.is_horizontal(eps) {
            self.p0.x > self.p1.x
        } else if self.is_vertical(eps) {
            self.p0.y > self.p1.y
        } else {
            false
        };
        if swap {
            std::mem::swap(&mut self.p0, &mut self.p1);
        }
    }

    /// Apply an affine transform to both endpoints and refresh the cached length.
    pub fn apply_transform(&mut self, transform: &DAffine2) {
        self.p0 = transform.transform_point2(self.p0);
        self.p1 = transform.transform_point2(self.p1);
        self.length = self.p0.distance(self.p1);
    }

    /// Perpendicular distance from `point` to the infinite line through this segment.
    pub fn distance_to_line(&self, point: DVec2) -> Option<f64> {
        let unit = self.unit_vector()?;
        Some(unit.perp_dot(point - self.p0).abs())
    }

    /// Parameter interval this segment covers when projected onto `axis`.
    pub fn project_onto(&self, origin: DVec2, axis: DVec2) -> (f64, f64) {
        let a = (self.p0 - origin).dot(axis);
        let b = (self.p1 - origin).dot(axis);
        (a.min(b), a.max(b))
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) ({},{})",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y
        )
    }
}

/// Lines that are horizontal or vertical within `eps`.
pub fn find_horizontal_or_vertical(lines: &[LineSegment], eps: f64) -> Vec<&LineSegment> {
    lines
        .iter()
        .filter(|l| l.is_horizontal(eps) || l.is_vertical(eps))
        .collect()
}
