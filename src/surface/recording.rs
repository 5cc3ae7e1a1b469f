use egui::{Color32, Rect, Vec2};

use super::{StrokeParams, Surface};
use crate::geometry::Point;

/// A single primitive issued against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    StrokePath {
        points: Vec<Point>,
        params: StrokeParams,
    },
    FillDisc {
        center: Point,
        radius: f32,
        color: Color32,
        alpha: f32,
    },
    StrokeLine {
        from: Point,
        to: Point,
        params: StrokeParams,
    },
    StrokeRect {
        rect: Rect,
        params: StrokeParams,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        params: StrokeParams,
    },
    StrokeEllipse {
        center: Point,
        radii: Vec2,
        params: StrokeParams,
    },
}

/// Surface that remembers the primitives drawn since the last clear instead of
/// rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    background: Color32,
    calls: Vec<DrawCall>,
    frames_begun: usize,
    frames_ended: usize,
}

impl RecordingSurface {
    pub fn new(size: Vec2, background: Color32) -> Self {
        Self {
            size,
            background,
            calls: Vec::new(),
            frames_begun: 0,
            frames_ended: 0,
        }
    }

    /// Primitives issued since (and including) the most recent clear
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn frames_begun(&self) -> usize {
        self.frames_begun
    }

    pub fn frames_ended(&self) -> usize {
        self.frames_ended
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn background(&self) -> Color32 {
        self.background
    }

    fn clear(&mut self) {
        // Whatever was drawn before is gone, just like on a pixel buffer
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn stroke_path(&mut self, points: &[Point], params: StrokeParams) {
        self.calls.push(DrawCall::StrokePath {
            points: points.to_vec(),
            params,
        });
    }

    fn fill_disc(&mut self, center: Point, radius: f32, color: Color32, alpha: f32) {
        self.calls.push(DrawCall::FillDisc {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, params: StrokeParams) {
        self.calls.push(DrawCall::StrokeLine { from, to, params });
    }

    fn stroke_rect(&mut self, rect: Rect, params: StrokeParams) {
        self.calls.push(DrawCall::StrokeRect { rect, params });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, params: StrokeParams) {
        self.calls.push(DrawCall::StrokeCircle {
            center,
            radius,
            params,
        });
    }

    fn stroke_ellipse(&mut self, center: Point, radii: Vec2, params: StrokeParams) {
        self.calls.push(DrawCall::StrokeEllipse {
            center,
            radii,
            params,
        });
    }

    fn begin_frame(&mut self) {
        self.frames_begun += 1;
    }

    fn end_frame(&mut self) {
        self.frames_ended += 1;
    }
}
