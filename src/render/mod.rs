//! Gauge rendering
//!
//! This module is organized into submodules:
//! - `defaults`: layout of the unit gauge face
//!
//! Geometry stays in logical units until a value is handed to the canvas;
//! only then is it scaled and rounded.

pub mod defaults;

use std::f64::consts::PI;

use crate::errors::{GaugeError, Result};
use crate::gauge::GaugeGeometry;
use crate::log::debug;
use crate::svg::{Canvas, Sink, Style};
use crate::types::Scaler;

/// Presentation settings that do not affect geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Target units per logical unit
    pub scale: f64,
    /// Stroke and text color
    pub color: String,
    /// Label font family
    pub font_family: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: defaults::SCALE,
            color: defaults::INK.to_string(),
            font_family: defaults::FONT_FAMILY.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn scaler(&self) -> Result<Scaler> {
        Scaler::try_new(self.scale).map_err(|source| GaugeError::InvalidScale {
            value: self.scale,
            source,
        })
    }

    /// Canvas sized to hold the whole gauge face at this scale
    pub fn canvas(&self) -> Result<Canvas> {
        let scaler = self.scaler()?;
        Ok(Canvas::new(
            scaler.len(defaults::FACE_WIDTH),
            scaler.len(defaults::FACE_HEIGHT),
        ))
    }
}

/// Draw the arc, major ticks, minor ticks and labels, in that order.
pub fn render_gauge(
    geometry: &GaugeGeometry,
    canvas: &mut Canvas,
    scaler: &Scaler,
    options: &RenderOptions,
) -> Result<()> {
    debug!(
        scale = scaler.factor(),
        major = geometry.major_ticks().len(),
        minor = geometry.minor_ticks().len(),
        "render gauge"
    );

    draw_arc(geometry, canvas, scaler, options)?;
    for tick in geometry.major_ticks() {
        draw_tick(
            geometry,
            canvas,
            scaler,
            options,
            tick.value,
            defaults::MAJOR_TICK_LENGTH,
            defaults::THICK_LINE,
        )?;
    }
    for &value in geometry.minor_ticks() {
        draw_tick(
            geometry,
            canvas,
            scaler,
            options,
            value,
            defaults::MINOR_TICK_LENGTH,
            defaults::THIN_LINE,
        )?;
    }
    draw_labels(geometry, canvas, scaler, options)
}

/// Arc from the end anchor back to the zero anchor. Drawing it in this
/// direction with sweep 0 keeps the curve convex (bulging upward).
fn draw_arc(
    geometry: &GaugeGeometry,
    canvas: &mut Canvas,
    scaler: &Scaler,
    options: &RenderOptions,
) -> Result<()> {
    let style = Style::new()
        .fill("none")
        .color(options.color.as_str())
        .width(scaler.len(defaults::THICK_LINE));
    canvas
        .draw_path(scaler.point(geometry.end_point()), &style)?
        .arc_to(
            scaler.point(geometry.zero_point()),
            scaler.len(geometry.circle().radius),
            None,
            0.0,
            false,
            false,
        );
    Ok(())
}

fn draw_tick(
    geometry: &GaugeGeometry,
    canvas: &mut Canvas,
    scaler: &Scaler,
    options: &RenderOptions,
    value: f64,
    length: f64,
    thickness: f64,
) -> Result<()> {
    let (start, end) = geometry.tick_segment(value, length)?;
    let style = Style::new()
        .color(options.color.as_str())
        .width(scaler.len(thickness));
    canvas.draw_line(scaler.point(start), scaler.point(end), &style)
}

fn draw_labels(
    geometry: &GaugeGeometry,
    canvas: &mut Canvas,
    scaler: &Scaler,
    options: &RenderOptions,
) -> Result<()> {
    let style = Style::new()
        .size(scaler.len(defaults::TEXT_SIZE))
        .color(options.color.as_str())
        .family(options.font_family.as_str())
        .anchor("middle");
    for tick in geometry.major_ticks() {
        let anchor = geometry.label_anchor(tick.value)?;
        let degrees = geometry.angle_for_value(tick.value) * 180.0 / PI;
        canvas.draw_text(
            scaler.point(anchor),
            tick.label.as_str(),
            &style,
            Some(degrees),
            None,
        )?;
    }
    Ok(())
}

/// Render a gauge onto a canvas sized for the face and save it to `sink`.
pub fn draw_gauge<'a>(
    geometry: &GaugeGeometry,
    options: &RenderOptions,
    sink: impl Into<Sink<'a>>,
) -> Result<()> {
    let mut canvas = options.canvas()?;
    render_gauge(geometry, &mut canvas, &options.scaler()?, options)?;
    canvas.save(sink)
}

/// Render a gauge to an SVG string
pub fn gauge_svg(geometry: &GaugeGeometry, options: &RenderOptions) -> Result<String> {
    let mut canvas = options.canvas()?;
    render_gauge(geometry, &mut canvas, &options.scaler()?, options)?;
    canvas.into_svg_string()
}
