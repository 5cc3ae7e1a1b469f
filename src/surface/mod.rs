//! The raster surface the renderers draw into.
//!
//! The renderers only ever talk to the [`Surface`] trait, so the same replay
//! runs against a real pixel buffer ([`PixmapSurface`]) in the app and
//! against a draw-call log ([`RecordingSurface`]) in tests.

use egui::{Color32, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

mod pixmap;
mod recording;

pub use pixmap::PixmapSurface;
pub use recording::{DrawCall, RecordingSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Outline parameters shared by every stroke primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeParams {
    pub color: Color32,
    pub width: f32,
    /// Extra opacity multiplied onto `color`
    pub alpha: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeParams {
    /// Rounded caps and joins, which is what every tool draws with
    pub fn round(color: Color32, width: f32, alpha: f32) -> Self {
        Self {
            color,
            width,
            alpha,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// A 2D drawing target exposing the primitive operations the renderers need.
pub trait Surface {
    /// Size of the drawable area in pixels
    fn size(&self) -> Vec2;

    /// The clear color. The eraser paints with it.
    fn background(&self) -> Color32;

    /// Reset every pixel to the background color
    fn clear(&mut self);

    /// Stroke an open polyline through `points`
    fn stroke_path(&mut self, points: &[Point], params: StrokeParams);

    /// Fill a disc of the given radius
    fn fill_disc(&mut self, center: Point, radius: f32, color: Color32, alpha: f32);

    fn stroke_line(&mut self, from: Point, to: Point, params: StrokeParams);

    /// Outline an axis-aligned rectangle. `rect` is always normalized.
    fn stroke_rect(&mut self, rect: Rect, params: StrokeParams);

    fn stroke_circle(&mut self, center: Point, radius: f32, params: StrokeParams);

    fn stroke_ellipse(&mut self, center: Point, radii: Vec2, params: StrokeParams);

    /// Called when a drawing pass acquires the surface.
    fn begin_frame(&mut self) {}

    /// Called when a drawing pass releases the surface.
    fn end_frame(&mut self) {}
}

/// Scoped drawing pass over a surface.
///
/// Creating the frame calls [`Surface::begin_frame`]; dropping it calls
/// [`Surface::end_frame`], including on early return or unwinding.
pub struct SurfaceFrame<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceFrame<'a, S> {
    pub fn begin(surface: &'a mut S) -> Self {
        surface.begin_frame();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> std::ops::Deref for SurfaceFrame<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> std::ops::DerefMut for SurfaceFrame<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceFrame<'_, S> {
    fn drop(&mut self) {
        self.surface.end_frame();
    }
}
