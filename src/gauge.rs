//! Gauge geometry: the fitted arc and the mapping between tick values and
//! positions on it.
//!
//! Anchor points are given in the y-down target convention. Angles are
//! measured from "up" and grow clockwise on screen, so the left end of the
//! arc has a negative angle and the right end a positive one.

use std::f64::consts::{PI, TAU};

use crate::circle::{Circle, fit_circle};
use crate::errors::{GaugeError, Result};
use crate::interval::divide_interval;
use crate::log::debug;
use crate::render::defaults;
use crate::types::Point;

/// A labeled graduation mark
#[derive(Debug, Clone, PartialEq)]
pub struct MajorTick {
    pub value: f64,
    pub label: String,
}

/// Immutable geometry of one gauge face
#[derive(Debug, Clone)]
pub struct GaugeGeometry {
    zero_point: Point,
    mid_point: Point,
    end_point: Point,
    circle: Circle,
    zero_angle: f64,
    end_angle: f64,
    major_ticks: Vec<MajorTick>,
    minor_ticks: Vec<f64>,
}

impl GaugeGeometry {
    /// Build a gauge from major tick values, optional labels (defaulting to
    /// each value's decimal form) and the number of minor ticks between each
    /// pair of adjacent major ticks.
    pub fn new(
        values: &[f64],
        labels: Option<Vec<String>>,
        minor_ticks_per_interval: usize,
    ) -> Result<Self> {
        Self::with_anchors(
            [defaults::ZERO_POINT, defaults::MID_POINT, defaults::END_POINT],
            values,
            labels,
            minor_ticks_per_interval,
        )
    }

    /// Default labels and one minor tick per interval
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::new(values, None, 1)
    }

    pub(crate) fn with_anchors(
        [zero_point, mid_point, end_point]: [Point; 3],
        values: &[f64],
        labels: Option<Vec<String>>,
        minor_ticks_per_interval: usize,
    ) -> Result<Self> {
        let circle = fit_circle(zero_point, mid_point, end_point)?;
        let major_ticks = sorted_major_ticks(values, labels)?;

        let mut minor_ticks = Vec::new();
        if minor_ticks_per_interval > 0 {
            for pair in major_ticks.windows(2) {
                minor_ticks.extend(divide_interval(
                    pair[0].value,
                    pair[1].value,
                    minor_ticks_per_interval,
                    false,
                    false,
                )?);
            }
        }

        let zero_angle = angle_from_up(zero_point, circle.center);
        let end_angle = angle_from_up(end_point, circle.center);

        debug!(
            zero_angle,
            end_angle,
            major = major_ticks.len(),
            minor = minor_ticks.len(),
            "built gauge geometry"
        );

        Ok(GaugeGeometry {
            zero_point,
            mid_point,
            end_point,
            circle,
            zero_angle,
            end_angle,
            major_ticks,
            minor_ticks,
        })
    }

    pub fn zero_point(&self) -> Point {
        self.zero_point
    }

    pub fn mid_point(&self) -> Point {
        self.mid_point
    }

    pub fn end_point(&self) -> Point {
        self.end_point
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    pub fn zero_angle(&self) -> f64 {
        self.zero_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Value at the start of the arc (lowest major tick)
    pub fn zero_value(&self) -> f64 {
        self.major_ticks[0].value
    }

    /// Value at the end of the arc (highest major tick)
    pub fn end_value(&self) -> f64 {
        self.major_ticks[self.major_ticks.len() - 1].value
    }

    /// Major ticks in ascending value order
    pub fn major_ticks(&self) -> &[MajorTick] {
        &self.major_ticks
    }

    /// Minor tick values in ascending order
    pub fn minor_ticks(&self) -> &[f64] {
        &self.minor_ticks
    }

    /// Linear value → angle map; values outside the tick range extrapolate.
    pub fn angle_for_value(&self, value: f64) -> f64 {
        let value_range = self.end_value() - self.zero_value();
        let angle_range = self.end_angle - self.zero_angle;
        let rel = (value - self.zero_value()) / value_range;
        if rel == 1.0 {
            // zero + (end - zero) is not always end in floating point
            return self.end_angle;
        }
        self.zero_angle + rel * angle_range
    }

    /// Point on the circle at `angle` (from up, clockwise), y-down
    pub fn point_for_angle(&self, angle: f64) -> Point {
        let to_x_axis = PI / 2.0 - angle;
        let on_circle = Point::new(to_x_axis.cos(), to_x_axis.sin()) * self.circle.radius;
        self.circle.center + on_circle.flip_y()
    }

    pub fn point_for_value(&self, value: f64) -> Point {
        self.point_for_angle(self.angle_for_value(value))
    }

    /// Angle of an arbitrary point as seen from the circle center
    pub fn angle_for_point(&self, point: Point) -> f64 {
        angle_from_up(point, self.circle.center)
    }

    /// Radial segment for the tick at `value`: starts half a thick stroke
    /// inside the arc so ticks join it cleanly, and ends `length` outside.
    pub fn tick_segment(&self, value: f64, length: f64) -> Result<(Point, Point)> {
        let point = self.point_for_value(value);
        let radial = point - self.circle.center;
        let direction = radial.divide(radial.norm())?;
        let start = point - direction * (0.5 * defaults::THICK_LINE);
        let end = point + direction * length;
        Ok((start, end))
    }

    /// Anchor for the label of the tick at `value`
    pub fn label_anchor(&self, value: f64) -> Result<Point> {
        let (_, anchor) =
            self.tick_segment(value, defaults::LABEL_OFFSET * defaults::MAJOR_TICK_LENGTH)?;
        Ok(anchor)
    }
}

/// Angle of `point` around `center`, measured from up and normalized to
/// (−π, π]. The y axis is mirrored first because anchors are y-down.
fn angle_from_up(point: Point, center: Point) -> f64 {
    let mirrored = (point - center).flip_y();
    let mut angle = PI / 2.0 - mirrored.angle();
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

fn sorted_major_ticks(values: &[f64], labels: Option<Vec<String>>) -> Result<Vec<MajorTick>> {
    if values.len() < 2 {
        return Err(GaugeError::TooFewTicks {
            count: values.len(),
        });
    }
    if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
        return Err(GaugeError::NonFiniteTickValue { value });
    }
    let labels = match labels {
        Some(labels) if labels.len() != values.len() => {
            return Err(GaugeError::LabelCountMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        Some(labels) => labels,
        None => values.iter().map(|v| v.to_string()).collect(),
    };

    let mut ticks: Vec<MajorTick> = values
        .iter()
        .zip(labels)
        .map(|(&value, label)| MajorTick { value, label })
        .collect();
    ticks.sort_by(|a, b| a.value.total_cmp(&b.value));

    if let Some(pair) = ticks.windows(2).find(|pair| pair[0].value == pair[1].value) {
        return Err(GaugeError::DuplicateTickValue {
            value: pair[0].value,
        });
    }
    let (lo, hi) = (ticks[0].value, ticks[ticks.len() - 1].value);
    if !(hi - lo).is_finite() {
        return Err(GaugeError::TickSpanOverflow { lo, hi });
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(values: &[f64]) -> GaugeGeometry {
        GaugeGeometry::from_values(values).unwrap()
    }

    #[test]
    fn anchor_angles_are_symmetric() {
        let g = gauge(&[0.0, 100.0]);
        // center (1.0, 1.5), radius 1.25 -> anchors sit at ±atan(0.75)
        let expected = 0.75_f64.atan();
        assert!((g.zero_angle() + expected).abs() < 1e-12);
        assert!((g.end_angle() - expected).abs() < 1e-12);
        assert!(g.angle_for_point(g.mid_point()).abs() < 1e-12);
    }

    #[test]
    fn angle_endpoints_are_exact() {
        let g = gauge(&[0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(g.angle_for_value(g.zero_value()), g.zero_angle());
        assert_eq!(g.angle_for_value(g.end_value()), g.end_angle());

        let odd = gauge(&[-3.7, 0.1, 12.9]);
        assert_eq!(odd.angle_for_value(-3.7), odd.zero_angle());
        assert_eq!(odd.angle_for_value(12.9), odd.end_angle());
    }

    #[test]
    fn angle_extrapolates_outside_range() {
        let g = gauge(&[0.0, 100.0]);
        let span = g.end_angle() - g.zero_angle();
        assert!((g.angle_for_value(200.0) - (g.end_angle() + span)).abs() < 1e-12);
        assert!((g.angle_for_value(-100.0) - (g.zero_angle() - span)).abs() < 1e-12);
        assert!(g.angle_for_value(50.0).abs() < 1e-12);
    }

    #[test]
    fn point_and_angle_round_trip() {
        let g = gauge(&[0.0, 10.0, 20.0, 40.0]);
        for i in 0..=40 {
            let value = i as f64;
            let point = g.point_for_value(value);
            assert!(g.circle().offset_of(point).abs() < 1e-12);
            let back = g.angle_for_point(point);
            assert!(
                (back - g.angle_for_value(value)).abs() < 1e-12,
                "value {value}: {back} vs {}",
                g.angle_for_value(value)
            );
        }
    }

    #[test]
    fn ends_map_back_to_anchors() {
        let g = gauge(&[0.0, 100.0]);
        assert!(g.point_for_value(0.0).distance(g.zero_point()) < 1e-12);
        assert!(g.point_for_value(100.0).distance(g.end_point()) < 1e-12);
        assert!(g.point_for_value(50.0).distance(g.mid_point()) < 1e-12);
    }

    #[test]
    fn ticks_are_sorted_with_labels() {
        let g = GaugeGeometry::new(
            &[100.0, 0.0, 50.0],
            Some(vec!["full".into(), "empty".into(), "half".into()]),
            1,
        )
        .unwrap();
        let labels: Vec<_> = g.major_ticks().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["empty", "half", "full"]);
        assert_eq!(g.minor_ticks(), [25.0, 75.0]);
    }

    #[test]
    fn default_labels_are_decimal() {
        let g = gauge(&[0.0, 2.5, 10.0]);
        let labels: Vec<_> = g.major_ticks().iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "2.5", "10"]);
    }

    #[test]
    fn minor_ticks_lie_strictly_between_majors() {
        let g = GaugeGeometry::new(&[0.0, 10.0, 30.0, 35.0], None, 4).unwrap();
        assert_eq!(g.minor_ticks().len(), 12);
        let majors: Vec<f64> = g.major_ticks().iter().map(|t| t.value).collect();
        for minor in g.minor_ticks() {
            assert!(!majors.contains(minor));
            assert!(majors.windows(2).any(|w| w[0] < *minor && *minor < w[1]));
        }
    }

    #[test]
    fn rejects_minor_ticks_that_cannot_fit() {
        let err = GaugeGeometry::new(&[1.0, 1.0 + f64::EPSILON], None, 3).unwrap_err();
        assert!(matches!(err, GaugeError::InvalidRange { count: 3, .. }));

        // Without minor ticks the same majors are fine.
        let g = GaugeGeometry::new(&[1.0, 1.0 + f64::EPSILON], None, 0).unwrap();
        assert_eq!(g.end_value(), 1.0 + f64::EPSILON);
    }

    #[test]
    fn rejects_tick_span_that_overflows() {
        let err = GaugeGeometry::from_values(&[1e308, -1e308]).unwrap_err();
        assert!(matches!(
            err,
            GaugeError::TickSpanOverflow { lo, hi } if lo == -1e308 && hi == 1e308
        ));
        assert!(matches!(
            GaugeGeometry::new(&[-f64::MAX, 0.0, f64::MAX], None, 0),
            Err(GaugeError::TickSpanOverflow { .. })
        ));
    }

    #[test]
    fn wide_finite_span_keeps_exact_endpoints() {
        let g = GaugeGeometry::from_values(&[-1e307, 1e307]).unwrap();
        assert_eq!(g.angle_for_value(1e307), g.end_angle());
        assert_eq!(g.angle_for_value(-1e307), g.zero_angle());
        assert_eq!(g.minor_ticks(), [0.0]);
    }

    #[test]
    fn zero_minor_ticks() {
        let g = GaugeGeometry::new(&[0.0, 50.0, 100.0], None, 0).unwrap();
        assert!(g.minor_ticks().is_empty());
    }

    #[test]
    fn rejects_duplicate_values() {
        let err = GaugeGeometry::from_values(&[0.0, 50.0, 50.0, 100.0]).unwrap_err();
        assert!(matches!(err, GaugeError::DuplicateTickValue { value } if value == 50.0));
    }

    #[test]
    fn rejects_bad_tick_input() {
        assert!(matches!(
            GaugeGeometry::from_values(&[1.0]),
            Err(GaugeError::TooFewTicks { count: 1 })
        ));
        assert!(matches!(
            GaugeGeometry::from_values(&[0.0, f64::NAN]),
            Err(GaugeError::NonFiniteTickValue { .. })
        ));
        assert!(matches!(
            GaugeGeometry::new(&[0.0, 1.0], Some(vec!["a".into()]), 1),
            Err(GaugeError::LabelCountMismatch { values: 2, labels: 1 })
        ));
    }

    #[test]
    fn rejects_collinear_anchors() {
        let err = GaugeGeometry::with_anchors(
            [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            &[0.0, 1.0],
            None,
            1,
        )
        .unwrap_err();
        assert!(matches!(err, GaugeError::CollinearPoints { .. }));
    }

    #[test]
    fn tick_segment_is_radial() {
        let g = gauge(&[0.0, 100.0]);
        let (start, end) = g.tick_segment(50.0, defaults::MAJOR_TICK_LENGTH).unwrap();
        // The middle tick points straight up from the top of the arc.
        assert!((start.x() - 1.0).abs() < 1e-12);
        assert!((end.x() - 1.0).abs() < 1e-12);
        assert!((start.y() - (0.25 + 0.5 * defaults::THICK_LINE)).abs() < 1e-12);
        assert!((end.y() - (0.25 - defaults::MAJOR_TICK_LENGTH)).abs() < 1e-12);

        let center = g.circle().center;
        let (start, end) = g.tick_segment(0.0, 0.2).unwrap();
        assert!((start.distance(center) - (g.circle().radius - 0.01)).abs() < 1e-12);
        assert!((end.distance(center) - (g.circle().radius + 0.2)).abs() < 1e-12);
    }

    #[test]
    fn label_anchor_extends_past_major_tick() {
        let g = gauge(&[0.0, 100.0]);
        let anchor = g.label_anchor(100.0).unwrap();
        let expected = g.circle().radius + defaults::LABEL_OFFSET * defaults::MAJOR_TICK_LENGTH;
        assert!((anchor.distance(g.circle().center) - expected).abs() < 1e-12);
    }
}
