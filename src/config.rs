//! Tolerances and font metrics, passed explicitly into each stage.
//!
//! Every struct defaults from [`crate::defaults`]; callers override single
//! fields with struct-update syntax.

use crate::defaults;

/// Line classifier tolerances
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Maximum angle between parallel lines, radians
    pub parallel_angle_eps: f64,
    /// Minimum shorter/longer length ratio of a tram pair
    pub tram_length_ratio: f64,
    /// Maximum perpendicular separation of a tram pair, relative to length
    pub tram_max_separation_factor: f64,
    /// Maximum midpoint gap between hatch lines, relative to length
    pub hatch_gap_factor: f64,
    pub min_hatch_lines: usize,
    /// Minimum length change between consecutive hatch lines
    pub length_eps: f64,
    /// Distance under which two endpoints coincide
    pub endpoint_eps: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            parallel_angle_eps: defaults::PARALLEL_ANGLE_EPS,
            tram_length_ratio: defaults::TRAM_LENGTH_RATIO,
            tram_max_separation_factor: defaults::TRAM_MAX_SEPARATION_FACTOR,
            hatch_gap_factor: defaults::HATCH_GAP_FACTOR,
            min_hatch_lines: defaults::MIN_HATCH_LINES,
            length_eps: defaults::LENGTH_EPS,
            endpoint_eps: defaults::ENDPOINT_EPS,
        }
    }
}

/// Join point radii
#[derive(Debug, Clone)]
pub struct JoinConfig {
    pub line_radius_factor: f64,
    pub text_radius_factor: f64,
    pub tram_radius_factor: f64,
    pub polygon_radius_factor: f64,
    pub hatched_radius_factor: f64,
    /// Floor for every computed radius
    pub min_radius: f64,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            line_radius_factor: defaults::LINE_RADIUS_FACTOR,
            text_radius_factor: defaults::TEXT_RADIUS_FACTOR,
            tram_radius_factor: defaults::TRAM_RADIUS_FACTOR,
            polygon_radius_factor: defaults::POLYGON_RADIUS_FACTOR,
            hatched_radius_factor: defaults::HATCHED_RADIUS_FACTOR,
            min_radius: defaults::MIN_RADIUS,
        }
    }
}

impl JoinConfig {
    pub(crate) fn radius(&self, factor: f64, size: f64) -> f64 {
        (factor * size).max(self.min_radius)
    }
}

/// Axis calibration tolerances
#[derive(Debug, Clone)]
pub struct AxisConfig {
    /// Gap above which a missing end tick is synthesised
    pub axis_end_eps: f64,
    /// Tolerance when comparing backbone and tick ranges
    pub range_eps: f64,
    /// Keep the backbone range when it disagrees with the ticks and no range was declared
    pub trust_backbone_range: bool,
    /// Decimal places tick lengths are rounded to before clustering
    pub tick_length_places: i32,
    /// Maximum angle for a backbone to count as horizontal/vertical, radians
    pub angle_eps: f64,
    pub font_width_factor: f64,
    pub font_height_factor: f64,
    /// Tolerance for two text runs sharing a baseline
    pub baseline_eps: f64,
    pub font_widths: FontWidths,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            axis_end_eps: defaults::AXIS_END_EPS,
            range_eps: defaults::AXIS_RANGE_EPS,
            trust_backbone_range: true,
            tick_length_places: defaults::TICK_LENGTH_PLACES,
            angle_eps: defaults::AXIS_ANGLE_EPS,
            font_width_factor: defaults::FONT_WIDTH_FACTOR,
            font_height_factor: defaults::FONT_HEIGHT_FACTOR,
            baseline_eps: defaults::BASELINE_EPS,
            font_widths: FontWidths::default(),
        }
    }
}

/// Proportional sans-serif character widths, hundredths of an em.
#[rustfmt::skip]
pub const SANS_SERIF_WIDTHS: [u8; 95] = [
    28,  28,  36,  56,  56,  89,  67,  19,
    33,  33,  39,  58,  28,  33,  28,  28,
    56,  56,  56,  56,  56,  56,  56,  56,
    56,  56,  28,  28,  58,  58,  58,  56,
   102,  67,  67,  72,  72,  67,  61,  78,
    72,  28,  50,  67,  56,  83,  72,  78,
    67,  78,  72,  67,  61,  72,  67,  94,
    67,  67,  61,  28,  28,  28,  47,  56,
    33,  56,  56,  50,  56,  56,  28,  56,
    56,  22,  22,  50,  22,  83,  56,  56,
    56,  56,  33,  50,  28,  56,  50,  72,
    50,  50,  50,  33,  26,  33,  58,
];

/// Character width table for estimating text extents
#[derive(Debug, Clone)]
pub struct FontWidths {
    /// Widths for ASCII 0x20..=0x7E in hundredths of an em
    pub ascii: [u8; 95],
    /// Width for anything outside the table
    pub fallback: u8,
}

impl Default for FontWidths {
    fn default() -> Self {
        Self {
            ascii: SANS_SERIF_WIDTHS,
            fallback: 50,
        }
    }
}

impl FontWidths {
    /// Width of one character in ems.
    pub fn char_width(&self, c: char) -> f64 {
        let hundredths = if (' '..='~').contains(&c) {
            self.ascii[(c as usize) - 0x20]
        } else {
            self.fallback
        };
        f64::from(hundredths) * 0.01
    }

    /// Width of a string in ems.
    pub fn text_width(&self, text: &str) -> f64 {
        text.chars().map(|c| self.char_width(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_share_one_width() {
        let widths = FontWidths::default();
        let w0 = widths.char_width('0');
        assert!(('1'..='9').all(|c| widths.char_width(c) == w0));
        assert!((w0 - 0.56).abs() < 1e-12);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        let widths = FontWidths::default();
        assert!((widths.char_width('\u{2212}') - 0.5).abs() < 1e-12);
    }

    #[test]
    fn text_width_sums_characters() {
        let widths = FontWidths::default();
        assert!((widths.text_width("10") - 1.12).abs() < 1e-12);
    }

    #[test]
    fn radius_has_a_floor() {
        let config = JoinConfig::default();
        assert_eq!(config.radius(0.1, 100.0), 10.0);
        assert_eq!(config.radius(0.1, 1.0), config.min_radius);
    }
}
