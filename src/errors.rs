//! Error types with diagnostic codes using miette
//!
//! Joining errors are local to one joinable and calibration errors are local
//! to one axis; neither aborts the rest of a batch. Only [`JoinError::SelfJoin`]
//! signals a caller bug.

use miette::Diagnostic;
use thiserror::Error;

use crate::join::JoinableId;

// ============================================================================
// Join Errors
// ============================================================================

/// Errors raised while wrapping primitives or resolving joins
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum JoinError {
    #[error("unsupported primitive: {kind}")]
    #[diagnostic(
        code(linework::join::unsupported_primitive),
        help("only lines, text runs and polygons can be wrapped directly")
    )]
    UnsupportedPrimitive { kind: &'static str },

    #[error("cannot join {id} to itself")]
    #[diagnostic(code(linework::join::self_join))]
    SelfJoin { id: JoinableId },

    #[error("hatched polygon needs at least one line")]
    #[diagnostic(code(linework::join::empty_line_sequence))]
    EmptyLineSequence,
}

// ============================================================================
// Calibration Errors
// ============================================================================

/// Errors that leave an axis without a screen-to-user transform
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("axis has no tick lines")]
    #[diagnostic(code(linework::axis::no_tick_lines))]
    NoTickLines,

    #[error("cannot process ticks: {} distinct lengths {lengths:?}", .lengths.len())]
    #[diagnostic(
        code(linework::axis::too_many_tick_length_classes),
        help("ticks must fall into at most two length classes (major and minor)")
    )]
    TooManyTickLengthClasses { lengths: Vec<f64> },

    #[error("axis has no label text")]
    #[diagnostic(code(linework::axis::no_labels))]
    NoLabels,

    #[error("label is not numeric: {text:?}")]
    #[diagnostic(code(linework::axis::invalid_label))]
    InvalidLabel { text: String },

    #[error("{ticks} major ticks cannot be mapped onto {labels} labels")]
    #[diagnostic(
        code(linework::axis::tick_label_count_mismatch),
        help("only one or two missing end ticks can be synthesised from the axis range")
    )]
    TickLabelCountMismatch { ticks: usize, labels: usize },

    #[error("degenerate {what} range")]
    #[diagnostic(code(linework::axis::degenerate_range))]
    DegenerateRange { what: &'static str },
}
