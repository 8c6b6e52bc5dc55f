//! Chart axis calibration
//!
//! An axis is a backbone line, tick lines standing on it and numeric labels
//! beside the ticks. [`AxisCalibrator`] works through the stages one call at
//! a time:
//!
//! 1. [`ingest_ticks`](AxisCalibrator::ingest_ticks) sorts the ticks along
//!    the axis and splits them into major and minor by length.
//! 2. [`determine_range`](AxisCalibrator::determine_range) fixes the screen
//!    range of the axis.
//! 3. [`extract_labels`](AxisCalibrator::extract_labels) reads the label
//!    values.
//! 4. [`calibrate`](AxisCalibrator::calibrate) pairs major ticks with values
//!    and produces an [`AnnotatedAxis`] carrying the screen-to-user transform.
//!
//! A failed stage leaves the earlier results in place for inspection.

mod labels;
mod ticks;

use std::fmt;

use glam::DVec2;

pub use labels::{build_words, parse_label, parse_scale};
pub use ticks::find_axis_ticks;

use crate::config::AxisConfig;
use crate::errors::CalibrationError;
use crate::primitives::{LineDirection, LineSegment, TextRun};
use crate::types::{BBox, LinearRange};

use ticks::{TickLayout, add_missing_end_ticks, layout_ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    Horizontal,
    Vertical,
}

impl AxisDirection {
    /// Direction of a backbone line, if it is horizontal or vertical.
    pub fn of(backbone: &LineSegment, angle_eps: f64) -> Option<Self> {
        match backbone.direction(angle_eps) {
            LineDirection::Horizontal => Some(AxisDirection::Horizontal),
            LineDirection::Vertical => Some(AxisDirection::Vertical),
            LineDirection::Other => None,
        }
    }

    /// Coordinate of `p` along the axis.
    pub fn coordinate(self, p: DVec2) -> f64 {
        match self {
            AxisDirection::Horizontal => p.x,
            AxisDirection::Vertical => p.y,
        }
    }

    /// Extent of `bbox` along the axis.
    pub fn range_of(self, bbox: &BBox) -> LinearRange {
        match self {
            AxisDirection::Horizontal => bbox.x_range(),
            AxisDirection::Vertical => bbox.y_range(),
        }
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisDirection::Horizontal => f.write_str("horizontal"),
            AxisDirection::Vertical => f.write_str("vertical"),
        }
    }
}

/// A calibrated axis.
///
/// Major tick coordinates and user values have equal length and both
/// orderings are preserved, so a vertical axis whose values grow up the page
/// maps correctly onto screen y growing down it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedAxis {
    direction: AxisDirection,
    backbone: LineSegment,
    range: Option<LinearRange>,
    major_ticks: Vec<f64>,
    minor_ticks: Vec<f64>,
    values: Vec<f64>,
    major_tick_length: f64,
    minor_tick_length: Option<f64>,
    tick_signature: String,
    screen_range: LinearRange,
    user_range: LinearRange,
    scale: f64,
    constant: f64,
}

impl AnnotatedAxis {
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    pub fn backbone(&self) -> &LineSegment {
        &self.backbone
    }

    /// Screen range of the axis, when one could be established.
    pub fn range(&self) -> Option<LinearRange> {
        self.range
    }

    pub fn major_ticks(&self) -> &[f64] {
        &self.major_ticks
    }

    pub fn minor_ticks(&self) -> &[f64] {
        &self.minor_ticks
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn major_tick_length(&self) -> f64 {
        self.major_tick_length
    }

    pub fn minor_tick_length(&self) -> Option<f64> {
        self.minor_tick_length
    }

    /// One `M` per major and `m` per minor tick, in axis order.
    pub fn tick_signature(&self) -> &str {
        &self.tick_signature
    }

    /// `(scale, constant)` such that `user = screen * scale + constant`.
    pub fn screen_to_user(&self) -> (f64, f64) {
        (self.scale, self.constant)
    }

    pub fn transform_screen_to_user(&self, screen: f64) -> f64 {
        interpolate(self.screen_range, self.user_range, screen)
    }

    pub fn transform_user_to_screen(&self, user: f64) -> f64 {
        interpolate(self.user_range, self.screen_range, user)
    }
}

/// Map `x` between two ranges already known to be non-degenerate.
fn interpolate(from: LinearRange, to: LinearRange, x: f64) -> f64 {
    to.start + (x - from.start) * to.length() / from.length()
}

impl fmt::Display for AnnotatedAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} axis: ticks {}, screen {} -> user {}",
            self.direction, self.tick_signature, self.screen_range, self.user_range
        )
    }
}

/// Stepwise builder for an [`AnnotatedAxis`]
#[derive(Debug, Clone)]
pub struct AxisCalibrator<'a> {
    direction: AxisDirection,
    backbone: LineSegment,
    config: &'a AxisConfig,
    ticks: Option<TickLayout>,
    range: Option<LinearRange>,
    label_words: Vec<String>,
    values: Option<Vec<f64>>,
}

impl<'a> AxisCalibrator<'a> {
    pub fn new(direction: AxisDirection, backbone: LineSegment, config: &'a AxisConfig) -> Self {
        Self {
            direction,
            backbone,
            config,
            ticks: None,
            range: None,
            label_words: Vec::new(),
            values: None,
        }
    }

    /// Sort and classify tick lines.
    pub fn ingest_ticks(&mut self, ticks: &[LineSegment]) -> Result<(), CalibrationError> {
        let layout = layout_ticks(ticks, self.direction, self.config)?;
        crate::log::debug!(
            signature = %layout.signature,
            major = layout.major.len(),
            minor = layout.minor.len(),
            "ticks ingested"
        );
        self.ticks = Some(layout);
        Ok(())
    }

    /// Settle the screen range of the axis.
    ///
    /// The backbone's extent is used when it agrees with the tick envelope.
    /// Otherwise a declared range wins, then the backbone if
    /// [`AxisConfig::trust_backbone_range`] is set; failing both the axis
    /// has no range.
    pub fn determine_range(&mut self, declared: Option<LinearRange>) -> Option<LinearRange> {
        let backbone_range = self.direction.range_of(&self.backbone.bounding_box());
        let agrees = self
            .ticks
            .as_ref()
            .is_some_and(|t| backbone_range.is_equal_to(&t.envelope, self.config.range_eps));

        self.range = if agrees {
            Some(backbone_range)
        } else if declared.is_some() {
            declared
        } else if self.config.trust_backbone_range {
            Some(backbone_range)
        } else {
            None
        };
        crate::log::debug!(agrees, range = ?self.range, "axis range");
        self.range
    }

    /// Read label values from the text runs beside the axis.
    pub fn extract_labels(&mut self, runs: &[TextRun]) -> Result<&[f64], CalibrationError> {
        let (words, values) = match self.direction {
            AxisDirection::Horizontal => labels::horizontal_values(runs, self.config)?,
            AxisDirection::Vertical => labels::vertical_values(runs)?,
        };
        crate::log::debug!(?words, ?values, "axis labels");
        self.label_words = words;
        let values = self.values.insert(values);
        Ok(values.as_slice())
    }

    /// Pair major ticks with label values and build the transform.
    ///
    /// When one or two values have no tick, ticks are synthesised at the
    /// range ends that lie more than [`AxisConfig::axis_end_eps`] beyond the
    /// outermost ticks. Synthesised ticks stay in the calibrator even when
    /// the counts still disagree.
    pub fn calibrate(&mut self) -> Result<AnnotatedAxis, CalibrationError> {
        let Some(ticks) = self.ticks.as_mut() else {
            return Err(CalibrationError::NoTickLines);
        };
        let Some(values) = self.values.as_ref() else {
            return Err(CalibrationError::NoLabels);
        };

        let mut missing = values.len() as isize - ticks.major.len() as isize;
        if let (1 | 2, Some(range)) = (missing, self.range) {
            missing -= add_missing_end_ticks(&mut ticks.major, range, self.config.axis_end_eps) as isize;
        }
        if missing != 0 {
            crate::log::error!(
                ticks = ticks.major.len(),
                labels = values.len(),
                "cannot map ticks to labels"
            );
            return Err(CalibrationError::TickLabelCountMismatch {
                ticks: ticks.major.len(),
                labels: values.len(),
            });
        }

        let screen_range = LinearRange::from_ordered(&ticks.major)
            .filter(|r| !r.is_degenerate())
            .ok_or(CalibrationError::DegenerateRange { what: "tick" })?;
        let user_range = LinearRange::from_ordered(values)
            .filter(|r| !r.is_degenerate())
            .ok_or(CalibrationError::DegenerateRange { what: "value" })?;
        let (scale, constant) = screen_range
            .scale_and_constant_to(&user_range)
            .ok_or(CalibrationError::DegenerateRange { what: "tick" })?;
        crate::log::debug!(scale, constant, "screen to user");

        Ok(AnnotatedAxis {
            direction: self.direction,
            backbone: self.backbone.clone(),
            range: self.range,
            major_ticks: ticks.major.clone(),
            minor_ticks: ticks.minor.clone(),
            values: values.clone(),
            major_tick_length: ticks.major_length,
            minor_tick_length: ticks.minor_length,
            tick_signature: ticks.signature.clone(),
            screen_range,
            user_range,
            scale,
            constant,
        })
    }

    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    pub fn range(&self) -> Option<LinearRange> {
        self.range
    }

    pub fn major_ticks(&self) -> Option<&[f64]> {
        self.ticks.as_ref().map(|t| t.major.as_slice())
    }

    pub fn minor_ticks(&self) -> Option<&[f64]> {
        self.ticks.as_ref().map(|t| t.minor.as_slice())
    }

    pub fn tick_signature(&self) -> Option<&str> {
        self.ticks.as_ref().map(|t| t.signature.as_str())
    }

    pub fn major_tick_length(&self) -> Option<f64> {
        self.ticks.as_ref().map(|t| t.major_length)
    }

    pub fn minor_tick_length(&self) -> Option<f64> {
        self.ticks.as_ref().and_then(|t| t.minor_length)
    }

    /// Label text as grouped before parsing
    pub fn label_words(&self) -> &[String] {
        &self.label_words
    }

    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }
}

/// Run every calibration stage in order.
pub fn calibrate_axis(
    backbone: &LineSegment,
    ticks: &[LineSegment],
    labels: &[TextRun],
    direction: AxisDirection,
    declared_range: Option<LinearRange>,
    config: &AxisConfig,
) -> Result<AnnotatedAxis, CalibrationError> {
    let mut calibrator = AxisCalibrator::new(direction, backbone.clone(), config);
    calibrator.ingest_ticks(ticks)?;
    calibrator.determine_range(declared_range);
    calibrator.extract_labels(labels)?;
    calibrator.calibrate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn horizontal_ticks(xs: &[f64]) -> Vec<LineSegment> {
        xs.iter()
            .map(|&x| LineSegment::new(dvec2(x, 100.0), dvec2(x, 105.0)))
            .collect()
    }

    fn labels_at(xs: &[f64], texts: &[&str]) -> Vec<TextRun> {
        xs.iter()
            .zip(texts)
            .map(|(&x, &t)| TextRun::new(dvec2(x - 3.0, 120.0), 10.0, t))
            .collect()
    }

    #[test]
    fn direction_of_backbone() {
        let h = LineSegment::new(dvec2(0.0, 5.0), dvec2(100.0, 5.0));
        let d = LineSegment::new(dvec2(0.0, 0.0), dvec2(100.0, 100.0));
        assert_eq!(AxisDirection::of(&h, 0.01), Some(AxisDirection::Horizontal));
        assert_eq!(AxisDirection::of(&d, 0.01), None);
    }

    #[test]
    fn range_from_agreeing_backbone() {
        let config = AxisConfig::default();
        let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let mut c = AxisCalibrator::new(AxisDirection::Horizontal, backbone, &config);
        c.ingest_ticks(&horizontal_ticks(&[0.0, 50.0, 100.0])).unwrap();
        let declared = Some(LinearRange::new(-5.0, 105.0));
        assert_eq!(c.determine_range(declared), Some(LinearRange::new(0.0, 100.0)));
    }

    #[test]
    fn range_falls_back_to_declared_then_backbone() {
        let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let ticks = horizontal_ticks(&[10.0, 50.0, 90.0]);

        let config = AxisConfig::default();
        let mut c = AxisCalibrator::new(AxisDirection::Horizontal, backbone.clone(), &config);
        c.ingest_ticks(&ticks).unwrap();
        let declared = LinearRange::new(5.0, 95.0);
        assert_eq!(c.determine_range(Some(declared)), Some(declared));
        assert_eq!(c.determine_range(None), Some(LinearRange::new(0.0, 100.0)));

        let strict = AxisConfig {
            trust_backbone_range: false,
            ..AxisConfig::default()
        };
        let mut c = AxisCalibrator::new(AxisDirection::Horizontal, backbone, &strict);
        c.ingest_ticks(&ticks).unwrap();
        assert_eq!(c.determine_range(None), None);
    }

    #[test]
    fn calibrate_before_ticks_fails() {
        let config = AxisConfig::default();
        let backbone = LineSegment::new(dvec2(0.0, 0.0), dvec2(10.0, 0.0));
        let mut c = AxisCalibrator::new(AxisDirection::Horizontal, backbone, &config);
        assert_eq!(c.calibrate(), Err(CalibrationError::NoTickLines));
    }

    #[test]
    fn mismatch_keeps_partial_state() {
        let config = AxisConfig::default();
        let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let mut c = AxisCalibrator::new(AxisDirection::Horizontal, backbone, &config);
        let xs = [0.0, 50.0, 100.0];
        c.ingest_ticks(&horizontal_ticks(&xs)).unwrap();
        c.determine_range(None);
        let labels = labels_at(&[0.0, 20.0, 40.0, 60.0, 80.0, 100.0], &["0", "1", "2", "3", "4", "5"]);
        c.extract_labels(&labels).unwrap();
        assert_eq!(
            c.calibrate(),
            Err(CalibrationError::TickLabelCountMismatch { ticks: 3, labels: 6 })
        );
        assert_eq!(c.major_ticks(), Some(&xs[..]));
        assert_eq!(c.values().map(<[f64]>::len), Some(6));
    }

    #[test]
    fn equal_values_are_degenerate() {
        let config = AxisConfig::default();
        let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let xs = [0.0, 100.0];
        let result = calibrate_axis(
            &backbone,
            &horizontal_ticks(&xs),
            &labels_at(&xs, &["5", "5"]),
            AxisDirection::Horizontal,
            None,
            &config,
        );
        assert_eq!(result, Err(CalibrationError::DegenerateRange { what: "value" }));
    }

    #[test]
    fn inverse_transform() {
        let config = AxisConfig::default();
        let backbone = LineSegment::new(dvec2(0.0, 100.0), dvec2(100.0, 100.0));
        let xs = [0.0, 50.0, 100.0];
        let axis = calibrate_axis(
            &backbone,
            &horizontal_ticks(&xs),
            &labels_at(&xs, &["0", "5", "10"]),
            AxisDirection::Horizontal,
            None,
            &config,
        )
        .unwrap();
        assert_eq!(axis.transform_user_to_screen(5.0), 50.0);
        assert_eq!(axis.transform_screen_to_user(100.0), 10.0);
        assert_eq!(axis.screen_to_user(), (0.1, 0.0));
    }
}
