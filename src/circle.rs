//! Circle through three points.
//!
//! Solves the general circle equation `x² + y² + Dx + Ey + F = 0` by
//! minors of the 4×4 system, evaluated as 3×3 determinants.

use glam::{DMat3, dvec3};

use crate::errors::{GaugeError, Result};
use crate::log::{debug, warn};
use crate::types::Point;

/// Relative tolerance for the collinearity and radius-domain checks.
///
/// The collinearity determinant is twice the signed triangle area, so it is
/// compared against the squared extent of the points.
pub const FIT_EPSILON: f64 = 1e-12;

/// A circle in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Signed distance of `p` from the circle outline (positive outside)
    pub fn offset_of(&self, p: Point) -> f64 {
        p.distance(self.center) - self.radius
    }
}

/// Find the unique circle passing through three points.
///
/// Fails with [`GaugeError::CollinearPoints`] when the points are (nearly)
/// collinear, including when two of them coincide.
pub fn fit_circle(p1: Point, p2: Point, p3: Point) -> Result<Circle> {
    let pts = [p1, p2, p3];
    let sq = pts.map(|p| p.x() * p.x() + p.y() * p.y());

    let minor = |col0: [f64; 3], col1: [f64; 3], col2: [f64; 3]| {
        // Rows of the minor become columns here; det(Aᵀ) = det(A).
        DMat3::from_cols(
            dvec3(col0[0], col1[0], col2[0]),
            dvec3(col0[1], col1[1], col2[1]),
            dvec3(col0[2], col1[2], col2[2]),
        )
        .determinant()
    };
    let xs = pts.map(Point::x);
    let ys = pts.map(Point::y);
    let ones = [1.0; 3];

    let m11 = minor(xs, ys, ones);
    let extent = pts
        .iter()
        .enumerate()
        .flat_map(|(i, a)| pts[i + 1..].iter().map(move |b| a.distance(*b).powi(2)))
        .fold(0.0_f64, f64::max);
    if m11.abs() <= FIT_EPSILON * extent || !m11.is_finite() {
        return Err(GaugeError::CollinearPoints {
            points: pts.map(|p| (p.x(), p.y())),
        });
    }

    let m12 = minor(sq, ys, ones);
    let m13 = minor(sq, xs, ones);
    let m14 = minor(sq, xs, ys);

    let center = Point::new(0.5 * m12 / m11, -0.5 * m13 / m11);
    let center_sq = center.x() * center.x() + center.y() * center.y();
    let radius = radius_from_operand(center_sq + m14 / m11, center_sq)?;

    debug!(cx = center.x(), cy = center.y(), radius, "fit circle");
    Ok(Circle { center, radius })
}

/// `sqrt(operand)`, where `operand = cx² + cy² + M14/M11`. A negative
/// operand within `FIT_EPSILON · (cx² + cy²)` of zero clamps to a zero radius.
fn radius_from_operand(operand: f64, center_sq: f64) -> Result<f64> {
    if !operand.is_finite() || operand < -FIT_EPSILON * center_sq {
        return Err(GaugeError::DegenerateGeometry { operand });
    }
    if operand < 0.0 {
        warn!(operand, "clamping tiny negative radius operand to zero");
    }
    Ok(operand.max(0.0).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_on_circle(circle: &Circle, points: &[Point]) {
        for p in points {
            assert!(
                circle.offset_of(*p).abs() < 1e-9,
                "{p} is {} off the circle {circle:?}",
                circle.offset_of(*p)
            );
        }
    }

    #[test]
    fn fits_gauge_anchors() {
        let pts = [
            Point::new(0.25, 0.5),
            Point::new(1.0, 0.25),
            Point::new(1.75, 0.5),
        ];
        let circle = fit_circle(pts[0], pts[1], pts[2]).unwrap();
        assert!((circle.center.x() - 1.0).abs() < 1e-12);
        assert!((circle.center.y() - 1.5).abs() < 1e-12);
        assert!((circle.radius - 1.25).abs() < 1e-12);
        assert_on_circle(&circle, &pts);
    }

    #[test]
    fn fits_arbitrary_triangles() {
        let cases = [
            [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)],
            [(-7.5, 2.0), (3.25, 11.0), (100.0, -40.0)],
            [(1e-3, 2e-3), (3e-3, -1e-3), (-2e-3, 0.0)],
            [(10.0, 10.0), (11.0, 10.0), (10.0, 12.0)],
        ];
        for case in cases {
            let pts = case.map(Point::from);
            let circle = fit_circle(pts[0], pts[1], pts[2]).unwrap();
            assert_on_circle(&circle, &pts);
        }
    }

    #[test]
    fn right_triangle_center_is_hypotenuse_midpoint() {
        let circle = fit_circle(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        )
        .unwrap();
        assert!((circle.center.x() - 2.0).abs() < 1e-12);
        assert!((circle.center.y() - 1.5).abs() < 1e-12);
        assert!((circle.radius - 2.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_collinear_points() {
        let err = fit_circle(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        )
        .unwrap_err();
        assert!(matches!(err, GaugeError::CollinearPoints { .. }));
    }

    #[test]
    fn rejects_nearly_collinear_points() {
        let err = fit_circle(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0 + 1e-14),
            Point::new(2.0, 2.0),
        )
        .unwrap_err();
        assert!(matches!(err, GaugeError::CollinearPoints { .. }));
    }

    #[test]
    fn rejects_coincident_points() {
        let p = Point::new(3.0, -1.0);
        assert!(matches!(
            fit_circle(p, p, Point::new(0.0, 0.0)),
            Err(GaugeError::CollinearPoints { .. })
        ));
        assert!(matches!(
            fit_circle(p, p, p),
            Err(GaugeError::CollinearPoints { .. })
        ));
    }

    #[test]
    fn radius_tolerance_is_relative_to_center_distance() {
        // center (0.5, 0.0): tolerance is 1e-12 * 0.25
        assert_eq!(radius_from_operand(-1e-13, 0.25).unwrap(), 0.0);
        assert!(matches!(
            radius_from_operand(-1e-12, 0.25),
            Err(GaugeError::DegenerateGeometry { .. })
        ));
        // center at the origin leaves no room for a negative operand
        assert!(radius_from_operand(-1e-30, 0.0).is_err());
        assert_eq!(radius_from_operand(1.5625, 2.25).unwrap(), 1.25);
        assert!(radius_from_operand(f64::NAN, 1.0).is_err());
    }
}
