//! Positioned text runs and the rule for merging neighbours into phrases

use glam::{DVec2, dvec2};

use crate::config::{AxisConfig, FontWidths};

/// Rotation tag of a text run.
///
/// `RotatedPositive` reads bottom to top, `RotatedNegative` top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextRotation {
    #[default]
    None,
    RotatedPositive,
    RotatedNegative,
}

/// A single run of text at an anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub anchor: DVec2,
    pub font_size: f64,
    pub rotation: TextRotation,
    pub content: String,
}

/// How a following run attaches to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linker {
    /// Abutting characters of the same word
    Join,
    /// Same line, one space apart
    Space,
    /// Not part of the same word
    Break,
}

impl TextRun {
    pub fn new(anchor: DVec2, font_size: f64, content: impl Into<String>) -> Self {
        Self {
            anchor,
            font_size,
            rotation: TextRotation::None,
            content: content.into(),
        }
    }

    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation != TextRotation::None
    }

    /// Estimated advance of the whole run along its reading direction.
    pub fn estimated_length(&self, widths: &FontWidths, font_width_factor: f64) -> f64 {
        self.font_size * font_width_factor * widths.text_width(&self.content)
    }

    /// Point where the run is expected to end.
    pub fn calculated_end(&self, widths: &FontWidths, font_width_factor: f64) -> DVec2 {
        let len = self.estimated_length(widths, font_width_factor);
        let offset = match self.rotation {
            TextRotation::None => dvec2(len, 0.0),
            TextRotation::RotatedPositive => dvec2(0.0, -len),
            TextRotation::RotatedNegative => dvec2(0.0, len),
        };
        self.anchor + offset
    }

    /// Coordinate along the reading direction: x for unrotated text, y otherwise.
    pub fn reading_coordinate(&self) -> f64 {
        if self.is_rotated() {
            self.anchor.y
        } else {
            self.anchor.x
        }
    }

    /// +1 when reading runs toward growing coordinates, -1 for bottom-to-top text.
    pub fn reading_sign(&self) -> f64 {
        if self.rotation == TextRotation::RotatedPositive {
            -1.0
        } else {
            1.0
        }
    }

    /// Position along the reading direction; increases from one character to the next.
    pub fn reading_position(&self) -> f64 {
        self.reading_coordinate() * self.reading_sign()
    }

    /// Reading coordinate of [`TextRun::calculated_end`].
    pub fn calculated_end_coordinate(&self, widths: &FontWidths, font_width_factor: f64) -> f64 {
        let end = self.calculated_end(widths, font_width_factor);
        if self.is_rotated() { end.y } else { end.x }
    }

    /// Coordinate across the reading direction: y for unrotated text, x otherwise.
    pub fn baseline(&self) -> f64 {
        if self.is_rotated() {
            self.anchor.x
        } else {
            self.anchor.y
        }
    }

    /// Decide how `next` continues this run.
    ///
    /// Runs only continue one another when they share rotation, have font
    /// sizes within 5% and sit on the same baseline. The gap between the
    /// estimated end of `self` and the start of `next`, measured in space
    /// widths, picks the linker: under half a space joins, up to two spaces
    /// is a space, anything wider (or a backwards step) breaks the word.
    pub fn linker_to(&self, next: &TextRun, config: &AxisConfig) -> Linker {
        if self.rotation != next.rotation || next.font_size <= 0.0 {
            return Linker::Break;
        }
        let ratio = self.font_size / next.font_size;
        if !(ratio > 0.95 && ratio < 1.05) {
            return Linker::Break;
        }
        if (self.baseline() - next.baseline()).abs() > config.baseline_eps {
            return Linker::Break;
        }

        let sign = self.reading_sign();
        let step = (next.reading_coordinate() - self.reading_coordinate()) * sign;
        if step < 0.0 {
            return Linker::Break;
        }

        let max_font = self.font_size.max(next.font_size);
        let space_width = config.font_widths.char_width(' ') * max_font * config.font_width_factor;
        let end = self.calculated_end_coordinate(&config.font_widths, config.font_width_factor);
        let gap = (next.reading_coordinate() - end) * sign;
        let spaces = gap / space_width;
        if spaces < 0.5 {
            Linker::Join
        } else if spaces <= 2.0 {
            Linker::Space
        } else {
            Linker::Break
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(x: f64, y: f64, s: &str) -> TextRun {
        TextRun::new(dvec2(x, y), 10.0, s)
    }

    #[test]
    fn estimated_length_uses_widths() {
        let config = AxisConfig::default();
        let t = run(0.0, 0.0, "10");
        assert!((t.estimated_length(&config.font_widths, 1.0) - 11.2).abs() < 1e-9);
    }

    #[test]
    fn rotated_end_runs_along_y() {
        let widths = FontWidths::default();
        let t = run(5.0, 100.0, "0").with_rotation(TextRotation::RotatedPositive);
        let end = t.calculated_end(&widths, 1.0);
        assert_eq!(end.x, 5.0);
        assert!((end.y - 94.4).abs() < 1e-9);
        assert_eq!(t.baseline(), 5.0);
    }

    #[test]
    fn adjacent_digits_join() {
        let config = AxisConfig::default();
        // "1" is 5.6 wide at size 10
        assert_eq!(run(0.0, 0.0, "1").linker_to(&run(5.6, 0.0, "0"), &config), Linker::Join);
    }

    #[test]
    fn one_space_gap_is_a_space() {
        let config = AxisConfig::default();
        // space is 2.8 wide at size 10
        assert_eq!(run(0.0, 0.0, "1").linker_to(&run(8.6, 0.0, "0"), &config), Linker::Space);
    }

    #[test]
    fn wide_gap_breaks() {
        let config = AxisConfig::default();
        assert_eq!(run(0.0, 0.0, "1").linker_to(&run(25.0, 0.0, "2"), &config), Linker::Break);
    }

    #[test]
    fn different_baseline_or_size_breaks() {
        let config = AxisConfig::default();
        let a = run(0.0, 0.0, "1");
        assert_eq!(a.linker_to(&run(5.6, 3.0, "0"), &config), Linker::Break);
        let big = TextRun::new(dvec2(5.6, 0.0), 12.0, "0");
        assert_eq!(a.linker_to(&big, &config), Linker::Break);
    }

    #[test]
    fn bottom_to_top_digits_join() {
        let config = AxisConfig::default();
        let one = run(5.0, 100.0, "1").with_rotation(TextRotation::RotatedPositive);
        let zero = run(5.0, 94.4, "0").with_rotation(TextRotation::RotatedPositive);
        assert!(one.reading_position() < zero.reading_position());
        assert_eq!(one.linker_to(&zero, &config), Linker::Join);
        assert_eq!(zero.linker_to(&one, &config), Linker::Break);
    }

    #[test]
    fn backwards_step_breaks() {
        let config = AxisConfig::default();
        assert_eq!(run(10.0, 0.0, "1").linker_to(&run(4.0, 0.0, "0"), &config), Linker::Break);
    }
}
