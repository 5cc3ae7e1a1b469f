use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::stroke::{ShapeKind, StrokeStyle};

/// One committed drawing operation. Actions are never modified after they
/// enter the ledger.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// A sampled path. A single point is a tap and renders as one dot.
    Freehand {
        style: StrokeStyle,
        points: Vec<Point>,
    },
    /// A shape defined by two anchor points
    Shape {
        style: StrokeStyle,
        kind: ShapeKind,
        start: Point,
        end: Point,
    },
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Freehand { style, points } => f
                .debug_struct("Freehand")
                .field("tool", &style.tool)
                .field("points", &points.len())
                .finish(),
            Action::Shape {
                style,
                kind,
                start,
                end,
            } => f
                .debug_struct("Shape")
                .field("tool", &style.tool)
                .field("kind", kind)
                .field("start", start)
                .field("end", end)
                .finish(),
        }
    }
}

impl Action {
    /// Build a freehand action. Callers provide at least the pointer-down position.
    pub fn freehand(style: StrokeStyle, points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty(), "freehand action needs at least one point");
        Action::Freehand { style, points }
    }

    /// Build a shape action. `ShapeKind::Freehand` is not a shape; such a request
    /// is captured as a two-point freehand path instead.
    pub fn shape(style: StrokeStyle, kind: ShapeKind, start: Point, end: Point) -> Self {
        if kind.is_shape() {
            Action::Shape {
                style,
                kind,
                start,
                end,
            }
        } else {
            Action::Freehand {
                style,
                points: vec![start, end],
            }
        }
    }

    pub fn style(&self) -> &StrokeStyle {
        match self {
            Action::Freehand { style, .. } | Action::Shape { style, .. } => style,
        }
    }

    /// Short label used by the history panel
    pub fn label(&self) -> String {
        match self {
            Action::Freehand { style, points } if points.len() == 1 => {
                format!("{} dot", style.tool.name())
            }
            Action::Freehand { style, .. } => format!("{} stroke", style.tool.name()),
            Action::Shape { style, kind, .. } => {
                format!("{} {}", style.tool.name(), kind.name().to_lowercase())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    #[test]
    fn test_freehand_shape_request_becomes_path() {
        let style = StrokeStyle::pen(Color32::WHITE, 2.0);
        let action = Action::shape(style, ShapeKind::Freehand, pos2(0.0, 0.0), pos2(5.0, 5.0));
        assert_eq!(
            action,
            Action::Freehand {
                style,
                points: vec![pos2(0.0, 0.0), pos2(5.0, 5.0)],
            }
        );
    }

    #[test]
    fn test_labels() {
        let style = StrokeStyle::brush(Color32::RED, 5.0);
        assert_eq!(Action::freehand(style, vec![pos2(1.0, 1.0)]).label(), "Brush dot");
        let line = Action::shape(style, ShapeKind::Line, pos2(0.0, 0.0), pos2(1.0, 1.0));
        assert_eq!(line.label(), "Brush line");
    }
}
