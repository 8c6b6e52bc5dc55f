//! Tick discovery and major/minor clustering

use crate::config::AxisConfig;
use crate::defaults::{MAJOR_TICK_CHAR, MINOR_TICK_CHAR};
use crate::errors::CalibrationError;
use crate::primitives::LineSegment;
use crate::types::{LinearRange, normalize};

use super::AxisDirection;

/// Ticks sorted along the axis and split by length
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TickLayout {
    pub major_length: f64,
    pub minor_length: Option<f64>,
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
    pub signature: String,
    pub envelope: LinearRange,
}

/// Lines standing on `backbone` at right angles.
pub fn find_axis_ticks(
    backbone: &LineSegment,
    lines: &[LineSegment],
    config: &AxisConfig,
) -> Vec<LineSegment> {
    lines
        .iter()
        .filter(|l| *l != backbone && l.makes_t_joint_with(backbone, config.range_eps))
        .cloned()
        .collect()
}

pub(crate) fn layout_ticks(
    ticks: &[LineSegment],
    direction: AxisDirection,
    config: &AxisConfig,
) -> Result<TickLayout, CalibrationError> {
    let mut measured: Vec<(f64, f64)> = ticks
        .iter()
        .map(|t| {
            (
                direction.coordinate(t.start()),
                normalize(t.length(), config.tick_length_places),
            )
        })
        .collect();

    let mut lengths: Vec<f64> = Vec::new();
    for &(_, len) in &measured {
        if !lengths.contains(&len) {
            lengths.push(len);
        }
    }
    lengths.sort_by(|a, b| b.total_cmp(a));
    crate::log::debug!(?lengths, "tick lengths");

    let (major_length, minor_length) = match lengths.as_slice() {
        [] => return Err(CalibrationError::NoTickLines),
        [major] => (*major, None),
        [major, minor] => (*major, Some(*minor)),
        _ => {
            crate::log::error!(?lengths, "cannot process ticks");
            return Err(CalibrationError::TooManyTickLengthClasses {
                lengths: lengths.clone(),
            });
        }
    };

    measured.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut major = Vec::new();
    let mut minor = Vec::new();
    let mut signature = String::with_capacity(measured.len());
    for &(coord, len) in &measured {
        let is_major = match minor_length {
            Some(minor) => (len - major_length).abs() < (len - minor).abs(),
            None => true,
        };
        if is_major {
            major.push(coord);
            signature.push(MAJOR_TICK_CHAR);
        } else {
            minor.push(coord);
            signature.push(MINOR_TICK_CHAR);
        }
    }

    let envelope = LinearRange::envelope(measured.iter().map(|&(c, _)| c))
        .ok_or(CalibrationError::NoTickLines)?;

    Ok(TickLayout {
        major_length,
        minor_length,
        major,
        minor,
        signature,
        envelope,
    })
}

/// Add ticks at the range ends when the outermost ticks stop short of them.
///
/// Returns how many were added.
pub(crate) fn add_missing_end_ticks(major: &mut Vec<f64>, range: LinearRange, end_eps: f64) -> usize {
    let mut added = 0;
    if let Some(&low) = major.first() {
        if low - range.min() > end_eps {
            major.insert(0, range.min());
            added += 1;
        }
    }
    if let Some(&high) = major.last() {
        if range.max() - high > end_eps {
            major.push(range.max());
            added += 1;
        }
    }
    added
}
