use crate::config::PREVIEW_ALPHA;
use crate::geometry::{self, Point};
use crate::stroke::{ShapeKind, StrokeStyle};
use crate::surface::{StrokeParams, Surface};

use super::stamp::render_path;

/// Whether a shape is still being dragged or is about to be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Preview,
    Final,
}

impl RenderMode {
    pub fn alpha(&self) -> f32 {
        match self {
            RenderMode::Preview => PREVIEW_ALPHA,
            RenderMode::Final => 1.0,
        }
    }
}

/// Outline a shape spanned by two anchors. Shapes are never filled.
pub fn render_shape<S: Surface + ?Sized>(
    surface: &mut S,
    style: &StrokeStyle,
    kind: ShapeKind,
    start: Point,
    end: Point,
    mode: RenderMode,
) {
    let params = StrokeParams::round(
        style.shape_color(surface.background()),
        style.line_width(),
        mode.alpha(),
    );

    match kind {
        ShapeKind::Line => surface.stroke_line(start, end, params),
        ShapeKind::Rectangle => surface.stroke_rect(geometry::normalized_rect(start, end), params),
        ShapeKind::Circle => {
            surface.stroke_circle(start, geometry::circle_radius(start, end), params)
        }
        ShapeKind::Ellipse => {
            surface.stroke_ellipse(start, geometry::ellipse_radii(start, end), params)
        }
        // Not a shape: draw the anchors as a two-point path
        ShapeKind::Freehand => render_path(surface, style, &[start, end]),
    }
}
