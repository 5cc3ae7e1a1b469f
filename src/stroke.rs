use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::{PENCIL_COLOR, PENCIL_WIDTH_FACTOR};
use crate::geometry::Point;

/// Stamping algorithm used for a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Pen,
    Brush,
    Pencil,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Brush, Tool::Pencil, Tool::Eraser];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Brush => "Brush",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }
}

/// How an action's geometry is captured while the pointer is down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Freehand,
    Line,
    Rectangle,
    Circle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Freehand,
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Freehand => "Freehand",
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
        }
    }

    /// True for the kinds captured as a start/end anchor pair
    pub fn is_shape(&self) -> bool {
        !matches!(self, ShapeKind::Freehand)
    }
}

/// Immutable style captured when an action starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub tool: Tool,
    /// Requested color. The eraser never uses it, the pencil only for shapes.
    pub color: Color32,
    /// Path width for pen and pencil
    pub thickness: f32,
    /// Stamp radius for brush and eraser
    pub radius: f32,
}

impl StrokeStyle {
    pub fn new(tool: Tool, color: Color32, thickness: f32, radius: f32) -> Self {
        Self {
            tool,
            color,
            thickness,
            radius,
        }
    }

    pub fn pen(color: Color32, thickness: f32) -> Self {
        Self::new(Tool::Pen, color, thickness, thickness)
    }

    pub fn brush(color: Color32, radius: f32) -> Self {
        Self::new(Tool::Brush, color, radius, radius)
    }

    pub fn pencil(color: Color32, thickness: f32) -> Self {
        Self::new(Tool::Pencil, color, thickness, thickness)
    }

    pub fn eraser(radius: f32) -> Self {
        Self::new(Tool::Eraser, Color32::TRANSPARENT, radius, radius)
    }

    /// The color a freehand path with this style paints on a surface cleared to `background`.
    pub fn path_color(&self, background: Color32) -> Color32 {
        match self.tool {
            Tool::Eraser => background,
            Tool::Pencil => PENCIL_COLOR,
            Tool::Pen | Tool::Brush => self.color,
        }
    }

    /// The color a shape outline with this style paints. Only the eraser substitutes.
    pub fn shape_color(&self, background: Color32) -> Color32 {
        match self.tool {
            Tool::Eraser => background,
            _ => self.color,
        }
    }

    /// Width of a stroked path drawn with this style
    pub fn path_width(&self) -> f32 {
        match self.tool {
            Tool::Pencil => self.thickness * PENCIL_WIDTH_FACTOR,
            _ => self.thickness,
        }
    }

    /// Outline width used when this style draws a shape
    pub fn line_width(&self) -> f32 {
        match self.tool {
            Tool::Eraser => self.radius,
            _ => self.thickness,
        }
    }
}

/// Freehand path being gathered while the pointer is held down
#[derive(Debug, Clone)]
pub struct FreehandDraft {
    style: StrokeStyle,
    points: Vec<Point>,
}

impl FreehandDraft {
    /// Start a draft seeded with the pointer-down position
    pub fn new(style: StrokeStyle, start: Point) -> Self {
        Self {
            style,
            points: vec![start],
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn into_parts(self) -> (StrokeStyle, Vec<Point>) {
        (self.style, self.points)
    }
}

/// Anchor pair of a shape being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraft {
    pub style: StrokeStyle,
    pub kind: ShapeKind,
    pub start: Point,
    pub end: Point,
}

impl ShapeDraft {
    pub fn new(style: StrokeStyle, kind: ShapeKind, start: Point) -> Self {
        Self {
            style,
            kind,
            start,
            end: start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_eraser_paints_background() {
        let style = StrokeStyle::new(Tool::Eraser, Color32::RED, 20.0, 20.0);
        assert_eq!(style.path_color(Color32::BLACK), Color32::BLACK);
        assert_eq!(style.shape_color(Color32::BLACK), Color32::BLACK);
    }

    #[test]
    fn test_pencil_ignores_requested_color() {
        let style = StrokeStyle::new(Tool::Pencil, Color32::RED, 10.0, 10.0);
        assert_eq!(style.path_color(Color32::BLACK), PENCIL_COLOR);
        assert_eq!(style.shape_color(Color32::BLACK), Color32::RED);
        assert!((style.path_width() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_line_width_per_tool() {
        assert_eq!(StrokeStyle::pen(Color32::WHITE, 3.0).line_width(), 3.0);
        assert_eq!(StrokeStyle::new(Tool::Eraser, Color32::WHITE, 5.0, 30.0).line_width(), 30.0);
    }

    #[test]
    fn test_draft_keeps_seed_point() {
        let mut draft = FreehandDraft::new(StrokeStyle::pen(Color32::WHITE, 2.0), pos2(1.0, 1.0));
        draft.add_point(pos2(2.0, 2.0));
        assert_eq!(draft.points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    }

    #[test]
    fn test_shape_kinds() {
        assert!(!ShapeKind::Freehand.is_shape());
        assert!(ShapeKind::Ellipse.is_shape());
    }
}
