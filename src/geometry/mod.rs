//! Pure geometry used by the renderers. Everything here works in surface pixel
//! coordinates and never touches a surface.

use egui::{Pos2, Rect, Vec2};

mod sampling;
pub use sampling::stamp_centers;

/// A point in surface pixel coordinates, already corrected for the canvas offset.
pub type Point = Pos2;

/// Axis-aligned rectangle spanned by two anchors, in whatever order they were dragged.
pub fn normalized_rect(start: Point, end: Point) -> Rect {
    Rect::from_two_pos(start, end)
}

/// Radius of a circle centered on `start` that passes through `end`.
pub fn circle_radius(start: Point, end: Point) -> f32 {
    start.distance(end)
}

/// Radii of an axis-aligned ellipse centered on `start` whose bounding box corner is `end`.
pub fn ellipse_radii(start: Point, end: Point) -> Vec2 {
    (end - start).abs()
}
