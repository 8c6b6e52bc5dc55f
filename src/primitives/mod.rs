//! Flat graphics primitives as extracted from a page

mod line;
mod text;

use glam::DVec2;

pub use line::{LineDirection, LineSegment, find_horizontal_or_vertical};
pub use text::{Linker, TextRotation, TextRun};

use crate::types::BBox;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

/// Closed polygon given by its vertices in order
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Edges including the closing one from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.points.len();
        (0..n).filter(move |_| n > 1).map(move |i| {
            LineSegment::new(self.points[i], self.points[(i + 1) % n])
        })
    }

    pub fn mean_edge_length(&self) -> f64 {
        let (sum, count) = self
            .edges()
            .fold((0.0, 0usize), |(s, c), e| (s + e.length(), c + 1));
        if count == 0 { 0.0 } else { sum / count as f64 }
    }

    pub fn bounding_box(&self) -> BBox {
        BBox::from_points(self.points.iter().copied())
    }
}

/// Any primitive the extractor hands over
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineSegment),
    Text(TextRun),
    Polygon(Polygon),
    Circle(Circle),
    Rect(Rect),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line(_) => "line",
            Primitive::Text(_) => "text",
            Primitive::Polygon(_) => "polygon",
            Primitive::Circle(_) => "circle",
            Primitive::Rect(_) => "rect",
        }
    }
}

impl From<LineSegment> for Primitive {
    fn from(line: LineSegment) -> Self {
        Primitive::Line(line)
    }
}

impl From<TextRun> for Primitive {
    fn from(text: TextRun) -> Self {
        Primitive::Text(text)
    }
}

impl From<Polygon> for Primitive {
    fn from(polygon: Polygon) -> Self {
        Primitive::Polygon(polygon)
    }
}
