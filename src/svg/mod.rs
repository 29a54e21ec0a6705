//! SVG canvas
//!
//! This module is organized into submodules:
//! - `style`: style keys and their mapping onto SVG properties
//! - `path_builder`: multi-segment paths
//!
//! A [`Canvas`] accumulates elements in drawing order and serializes them
//! once, through [`Canvas::save`].

pub mod path_builder;
pub mod style;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use enum_dispatch::enum_dispatch;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::errors::{GaugeError, Result};
use crate::log::debug;
use crate::types::Point;

pub use path_builder::{PathAction, VectorPath};
pub use style::{Style, StyleKey};

use style::ElementKind;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

type XmlWriter = Writer<Vec<u8>>;

/// Serialization shared by every drawable element
#[enum_dispatch]
pub(crate) trait SvgElement {
    fn write_svg(&self, writer: &mut XmlWriter) -> Result<()>;
}

#[enum_dispatch(SvgElement)]
#[derive(Debug, Clone)]
pub(crate) enum Element {
    Line(LineElement),
    Path(VectorPath),
    Text(TextElement),
}

#[derive(Debug, Clone)]
pub(crate) struct LineElement {
    start: Point,
    end: Point,
    css: String,
}

impl SvgElement for LineElement {
    fn write_svg(&self, writer: &mut XmlWriter) -> Result<()> {
        let mut line = BytesStart::new("line");
        line.push_attribute(("x1", fmt_num(self.start.x()).as_str()));
        line.push_attribute(("y1", fmt_num(self.start.y()).as_str()));
        line.push_attribute(("x2", fmt_num(self.end.x()).as_str()));
        line.push_attribute(("y2", fmt_num(self.end.y()).as_str()));
        push_style(&mut line, &self.css);
        writer.write_event(Event::Empty(line))?;
        Ok(())
    }
}

impl SvgElement for VectorPath {
    fn write_svg(&self, writer: &mut XmlWriter) -> Result<()> {
        let mut path = BytesStart::new("path");
        path.push_attribute(("d", self.data().as_str()));
        push_style(&mut path, &self.css);
        writer.write_event(Event::Empty(path))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TextElement {
    at: Point,
    text: String,
    css: String,
    rotate: Option<(f64, Point)>,
}

impl SvgElement for TextElement {
    fn write_svg(&self, writer: &mut XmlWriter) -> Result<()> {
        let mut text = BytesStart::new("text");
        text.push_attribute(("x", fmt_num(self.at.x()).as_str()));
        text.push_attribute(("y", fmt_num(self.at.y()).as_str()));
        push_style(&mut text, &self.css);
        if let Some((angle, center)) = self.rotate {
            let transform = format!(
                "rotate({} {},{})",
                fmt_num(angle),
                fmt_num(center.x()),
                fmt_num(center.y())
            );
            text.push_attribute(("transform", transform.as_str()));
        }
        writer.write_event(Event::Start(text))?;
        writer.write_event(Event::Text(BytesText::new(&self.text)))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
        Ok(())
    }
}

fn push_style(start: &mut BytesStart<'_>, css: &str) {
    if !css.is_empty() {
        start.push_attribute(("style", css));
    }
}

/// Where a saved document goes
pub enum Sink<'a> {
    /// A file, created or truncated
    Path(&'a Path),
    /// An already open stream
    Writer(&'a mut dyn Write),
}

impl<'a> From<&'a Path> for Sink<'a> {
    fn from(path: &'a Path) -> Self {
        Sink::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Sink<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Sink::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for Sink<'a> {
    fn from(path: &'a str) -> Self {
        Sink::Path(Path::new(path))
    }
}

impl<'a, W: Write> From<&'a mut W> for Sink<'a> {
    fn from(writer: &'a mut W) -> Self {
        Sink::Writer(writer)
    }
}

/// Write-once accumulator of drawable elements
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of elements drawn so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn draw_line(&mut self, start: Point, end: Point, style: &Style) -> Result<()> {
        let css = style.to_css(ElementKind::Line)?;
        self.elements.push(LineElement { start, end, css }.into());
        Ok(())
    }

    /// Start a path at `start`; segments are appended through the returned
    /// builder.
    pub fn draw_path(&mut self, start: Point, style: &Style) -> Result<&mut VectorPath> {
        let css = style.to_css(ElementKind::Path)?;
        self.elements.push(VectorPath::new(start, css).into());
        match self.elements.last_mut() {
            Some(Element::Path(path)) => Ok(path),
            _ => unreachable!("a path was just pushed"),
        }
    }

    /// Draw `text` anchored at `at`, optionally rotated by `rotate_angle`
    /// degrees around `rotate_center` (the anchor when not given).
    pub fn draw_text(
        &mut self,
        at: Point,
        text: impl Into<String>,
        style: &Style,
        rotate_angle: Option<f64>,
        rotate_center: Option<Point>,
    ) -> Result<()> {
        let css = style.to_css(ElementKind::Text)?;
        let rotate = rotate_angle.map(|angle| (angle, rotate_center.unwrap_or(at)));
        self.elements.push(
            TextElement {
                at,
                text: text.into(),
                css,
                rotate,
            }
            .into(),
        );
        Ok(())
    }

    /// Serialize the whole document in memory
    fn to_document(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        let mut root = BytesStart::new("svg");
        root.push_attribute(("xmlns", SVG_NS));
        root.push_attribute(("width", fmt_num(self.width).as_str()));
        root.push_attribute(("height", fmt_num(self.height).as_str()));
        writer.write_event(Event::Start(root))?;

        for element in &self.elements {
            element.write_svg(&mut writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        let mut document = writer.into_inner();
        document.push(b'\n');
        Ok(document)
    }

    /// Serialize into a string, consuming the canvas
    pub fn into_svg_string(self) -> Result<String> {
        let document = self.to_document()?;
        String::from_utf8(document)
            .map_err(|e| GaugeError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Serialize to `sink`, consuming the canvas.
    ///
    /// The document is fully built before the sink is touched. A file sink
    /// is written to a staging file beside the target and renamed into
    /// place, so a failed save never leaves a truncated file at `path`.
    pub fn save<'a>(self, sink: impl Into<Sink<'a>>) -> Result<()> {
        let document = self.to_document()?;
        debug!(
            elements = self.elements.len(),
            bytes = document.len(),
            "saving svg"
        );

        match sink.into() {
            Sink::Path(path) => {
                if path.as_os_str().is_empty() {
                    return Err(invalid_sink(path, "empty path", None));
                }
                if path.is_dir() {
                    return Err(invalid_sink(path, "path is a directory", None));
                }
                write_staged(path, |file| {
                    file.write_all(&document)?;
                    file.flush()
                })?;
            }
            Sink::Writer(writer) => {
                writer.write_all(&document)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

fn invalid_sink(path: &Path, reason: &str, source: Option<io::Error>) -> GaugeError {
    GaugeError::InvalidSink {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        source,
    }
}

/// Staging file used while writing `path`: `.<name>.partial` in the same
/// directory as the target.
fn staging_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".partial");
    Some(path.with_file_name(staged))
}

/// Write `path` through `fill`, replacing it only once `fill` succeeds.
/// On any failure the staging file is removed and `path` is left as it was.
fn write_staged(path: &Path, fill: impl FnOnce(&mut File) -> io::Result<()>) -> Result<()> {
    let staged =
        staging_path(path).ok_or_else(|| invalid_sink(path, "path has no file name", None))?;
    let mut file =
        File::create(&staged).map_err(|e| invalid_sink(path, "cannot create file", Some(e)))?;

    let written = fill(&mut file).and_then(|()| {
        drop(file);
        fs::rename(&staged, path)
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }
    Ok(())
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
/// Values within `1e-9` of zero print as `0`. Integral values, and anything
/// of a million or more, print as whole numbers with every digit kept.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.abs() < 1e-9 {
        return "0".to_string();
    }
    if value.fract() == 0.0 || value.abs() >= 1e6 {
        return format!("{:.0}", value.round());
    }
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
