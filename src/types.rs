//! Numeric primitives for gauge geometry.
//!
//! - `Point` is an immutable 2D vector used for both positions and offsets
//! - `Scaler` is the only way logical gauge units become target (SVG) units

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

use crate::errors::{GaugeError, Result};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Immutable 2D vector.
///
/// Equality compares components exactly; `0.0` and `-0.0` are equal and hash
/// the same. Only `PartialEq` is implemented: a NaN component is unequal to
/// itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.to_dvec2().length()
    }

    /// Angle to the positive x axis, in (−π, π]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn add(self, other: Point) -> Point {
        Point::from(self.to_dvec2() + other.to_dvec2())
    }

    pub fn subtract(self, other: Point) -> Point {
        Point::from(self.to_dvec2() - other.to_dvec2())
    }

    pub fn scale(self, factor: f64) -> Point {
        Point::from(self.to_dvec2() * factor)
    }

    /// Divide both components by `divisor`, rejecting a zero divisor
    pub fn divide(self, divisor: f64) -> Result<Point> {
        if divisor == 0.0 {
            return Err(GaugeError::DivisionByZero);
        }
        Ok(Point::from(self.to_dvec2() / divisor))
    }

    pub fn negate(self) -> Point {
        Point::new(-self.x, -self.y)
    }

    /// Mirror across the x axis (flips between y-up and y-down conventions)
    pub fn flip_y(self) -> Point {
        Point::new(self.x, -self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 normalizes -0.0 so equal points hash equally
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs.scale(self)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

/// Converts logical gauge units into target units.
///
/// Rounding happens here and only here, so no error compounds before
/// emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    factor: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(factor: f64) -> Result<Self, NumericError> {
        if factor.is_nan() {
            Err(NumericError::NaN)
        } else if factor.is_infinite() {
            Err(NumericError::Infinite)
        } else if factor == 0.0 {
            Err(NumericError::Zero)
        } else if factor < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { factor })
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Scale a length and round it to the nearest whole unit
    pub fn len(&self, value: f64) -> f64 {
        (value * self.factor).round()
    }

    /// Scale a point, rounding each component
    pub fn point(&self, p: Point) -> Point {
        Point::new(self.len(p.x()), self.len(p.y()))
    }
}
