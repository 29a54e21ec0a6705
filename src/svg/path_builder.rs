//! Multi-segment paths.
//!
//! A `VectorPath` is an append-only list of actions, serialized as a single
//! SVG path-data string.

use crate::types::Point;

use super::fmt_num;

/// One segment command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathAction {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        to: Point,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    },
    Close,
}

impl PathAction {
    fn write_data(&self, out: &mut String) {
        match *self {
            PathAction::MoveTo(p) => {
                out.push('M');
                push_point(out, p);
            }
            PathAction::LineTo(p) => {
                out.push('L');
                push_point(out, p);
            }
            PathAction::ArcTo {
                to,
                radius_x,
                radius_y,
                rotation,
                large_arc,
                sweep,
            } => {
                out.push('A');
                out.push_str(&fmt_num(radius_x));
                out.push(',');
                out.push_str(&fmt_num(radius_y));
                out.push(' ');
                out.push_str(&fmt_num(rotation));
                out.push(' ');
                out.push(if large_arc { '1' } else { '0' });
                out.push(',');
                out.push(if sweep { '1' } else { '0' });
                out.push(' ');
                push_point(out, to);
            }
            PathAction::Close => out.push('Z'),
        }
    }
}

fn push_point(out: &mut String, p: Point) {
    out.push_str(&fmt_num(p.x()));
    out.push(',');
    out.push_str(&fmt_num(p.y()));
}

/// Path under construction on a canvas
#[derive(Debug, Clone)]
pub struct VectorPath {
    actions: Vec<PathAction>,
    /// Validated inline style declarations
    pub(crate) css: String,
}

impl VectorPath {
    pub(crate) fn new(start: Point, css: String) -> Self {
        Self {
            actions: vec![PathAction::MoveTo(start)],
            css,
        }
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.actions.push(PathAction::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.actions.push(PathAction::LineTo(to));
        self
    }

    /// Elliptical arc to `to`. `radius_y` defaults to `radius_x`.
    pub fn arc_to(
        &mut self,
        to: Point,
        radius_x: f64,
        radius_y: Option<f64>,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> &mut Self {
        self.actions.push(PathAction::ArcTo {
            to,
            radius_x,
            radius_y: radius_y.unwrap_or(radius_x),
            rotation,
            large_arc,
            sweep,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.actions.push(PathAction::Close);
        self
    }

    pub fn actions(&self) -> &[PathAction] {
        &self.actions
    }

    /// Path data (`d` attribute), actions separated by spaces
    pub fn data(&self) -> String {
        let mut out = String::new();
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            action.write_data(&mut out);
        }
        out
    }
}
