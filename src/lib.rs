//! Analog gauge faces as SVG.
//!
//! A [`GaugeGeometry`] fits a circular arc through three fixed anchor points
//! and maps tick values onto it; [`render_gauge`] draws the arc, ticks and
//! rotated labels onto a [`Canvas`], which serializes to SVG.
//!
//! ```
//! use gaugeface::{GaugeGeometry, RenderOptions, gauge_svg};
//!
//! let geometry = GaugeGeometry::from_values(&[0.0, 25.0, 50.0, 75.0, 100.0])?;
//! let svg = gauge_svg(&geometry, &RenderOptions::default())?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), gaugeface::GaugeError>(())
//! ```

pub mod circle;
pub mod errors;
pub mod gauge;
pub mod interval;
mod log;
pub mod render;
pub mod svg;
pub mod types;

pub use circle::{Circle, fit_circle};
pub use errors::{GaugeError, Result};
pub use gauge::{GaugeGeometry, MajorTick};
pub use interval::divide_interval;
pub use render::{RenderOptions, draw_gauge, gauge_svg, render_gauge};
pub use svg::{Canvas, PathAction, Sink, Style, StyleKey, VectorPath};
pub use types::{NumericError, Point, Scaler};
