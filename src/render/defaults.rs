//! Gauge face layout (all in logical units; the face is 2.0 × 1.0)

use crate::types::Point;

pub const FACE_WIDTH: f64 = 2.0;
pub const FACE_HEIGHT: f64 = 1.0;
/// Target units per logical unit
pub const SCALE: f64 = 1200.0;

/// Left end of the arc (lowest major tick), y-down
pub const ZERO_POINT: Point = Point::new(0.25, 0.5);
/// Top of the arc
pub const MID_POINT: Point = Point::new(1.0, 0.25);
/// Right end of the arc (highest major tick), y-down
pub const END_POINT: Point = Point::new(1.75, 0.5);

pub const THICK_LINE: f64 = 0.020;
pub const THIN_LINE: f64 = 0.010;
pub const MAJOR_TICK_LENGTH: f64 = 0.1;
pub const MINOR_TICK_LENGTH: f64 = MAJOR_TICK_LENGTH / 3.0;
/// Label anchors sit this many major tick lengths out from the arc
pub const LABEL_OFFSET: f64 = 1.15;
pub const TEXT_SIZE: f64 = 0.075;

pub const INK: &str = "black";
pub const FONT_FAMILY: &str = "Helvetica";
