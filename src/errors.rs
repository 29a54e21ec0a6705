//! Error types with diagnostics using miette
//!
//! Every failure is local and synchronous: it is raised where it is detected
//! and nothing is written to the output sink once one has occurred.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Result alias used throughout the crate
pub type Result<T, E = GaugeError> = std::result::Result<T, E>;

/// Errors raised while building gauge geometry, drawing, or saving
#[derive(Error, Diagnostic, Debug)]
pub enum GaugeError {
    // ========================================================================
    // Geometry
    // ========================================================================
    #[error("the points {points:?} are collinear and do not determine a circle")]
    #[diagnostic(code(gaugeface::geometry::collinear_points))]
    CollinearPoints { points: [(f64, f64); 3] },

    #[error("degenerate circle: radius operand {operand} is not a valid square")]
    #[diagnostic(code(gaugeface::geometry::degenerate))]
    DegenerateGeometry { operand: f64 },

    #[error("cannot divide a point by zero")]
    #[diagnostic(code(gaugeface::geometry::division_by_zero))]
    DivisionByZero,

    #[error("cannot divide [{lo}, {hi}] into {count} values")]
    #[diagnostic(
        code(gaugeface::geometry::invalid_range),
        help("request at least one value, with finite bounds far enough apart to hold every value")
    )]
    InvalidRange { lo: f64, hi: f64, count: usize },

    // ========================================================================
    // Tick configuration
    // ========================================================================
    #[error("duplicate major tick value: {value}")]
    #[diagnostic(
        code(gaugeface::ticks::duplicate_value),
        help("each major tick value maps to one angle, so values must be distinct")
    )]
    DuplicateTickValue { value: f64 },

    #[error("a gauge needs at least 2 major ticks, got {count}")]
    #[diagnostic(code(gaugeface::ticks::too_few))]
    TooFewTicks { count: usize },

    #[error("{labels} labels given for {values} major tick values")]
    #[diagnostic(code(gaugeface::ticks::label_count_mismatch))]
    LabelCountMismatch { values: usize, labels: usize },

    #[error("major tick value is not finite: {value}")]
    #[diagnostic(code(gaugeface::ticks::non_finite))]
    NonFiniteTickValue { value: f64 },

    #[error("major tick range [{lo}, {hi}] is too wide to represent")]
    #[diagnostic(
        code(gaugeface::ticks::span_overflow),
        help("the distance between the smallest and largest tick must be a finite number")
    )]
    TickSpanOverflow { lo: f64, hi: f64 },

    // ========================================================================
    // Drawing and output
    // ========================================================================
    #[error("unsupported style attributes: '{}'", .keys.join("', '"))]
    #[diagnostic(
        code(gaugeface::svg::unsupported_style),
        help("supported keys are color, width, fill, family, size and anchor")
    )]
    UnsupportedStyle { keys: Vec<String> },

    #[error("invalid scale: {value}")]
    #[diagnostic(code(gaugeface::render::invalid_scale))]
    InvalidScale {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("invalid output sink {}: {reason}", .path.display())]
    #[diagnostic(code(gaugeface::svg::invalid_sink))]
    InvalidSink {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("failed to write SVG output")]
    #[diagnostic(code(gaugeface::svg::io))]
    Io(#[from] std::io::Error),

    #[error("failed to serialize SVG markup")]
    #[diagnostic(code(gaugeface::svg::xml))]
    Xml(#[from] quick_xml::Error),
}
