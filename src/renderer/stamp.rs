use crate::config::{BRUSH_SPACING_DIVISOR, CORE_ALPHA, HALO_ALPHA};
use crate::geometry::{Point, stamp_centers};
use crate::stroke::{StrokeStyle, Tool};
use crate::surface::{StrokeParams, Surface};

/// Draw a freehand path with the algorithm selected by `style.tool`.
pub fn render_path<S: Surface + ?Sized>(surface: &mut S, style: &StrokeStyle, points: &[Point]) {
    if points.is_empty() {
        return;
    }
    match style.tool {
        Tool::Pen | Tool::Pencil => render_solid(surface, style, points),
        Tool::Brush | Tool::Eraser => render_stamped(surface, style, points),
    }
}

/// Pen and pencil: one continuous round-capped path, or a dot for a tap
fn render_solid<S: Surface + ?Sized>(surface: &mut S, style: &StrokeStyle, points: &[Point]) {
    let color = style.path_color(surface.background());
    let width = style.path_width();

    if let [point] = points {
        surface.fill_disc(*point, width / 2.0, color, 1.0);
    } else {
        surface.stroke_path(points, StrokeParams::round(color, width, 1.0));
    }
}

/// Brush and eraser: halo then core disc at every stamp center
fn render_stamped<S: Surface + ?Sized>(surface: &mut S, style: &StrokeStyle, points: &[Point]) {
    let color = style.path_color(surface.background());
    let radius = style.radius;

    for center in stamp_centers(points, radius / BRUSH_SPACING_DIVISOR) {
        // Halo has diameter 2r, core has diameter r
        surface.fill_disc(center, radius, color, HALO_ALPHA);
        surface.fill_disc(center, radius / 2.0, color, CORE_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use egui::{Color32, Vec2, pos2};

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Vec2::new(100.0, 100.0), Color32::BLACK)
    }

    #[test]
    fn test_pen_tap_is_disc_of_thickness() {
        let mut surface = surface();
        render_path(&mut surface, &StrokeStyle::pen(Color32::WHITE, 6.0), &[pos2(5.0, 5.0)]);
        assert_eq!(
            surface.calls(),
            &[DrawCall::FillDisc {
                center: pos2(5.0, 5.0),
                radius: 3.0,
                color: Color32::WHITE,
                alpha: 1.0,
            }]
        );
    }

    #[test]
    fn test_pen_path_is_single_stroke() {
        let mut surface = surface();
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        render_path(&mut surface, &StrokeStyle::pen(Color32::RED, 5.0), &points);
        assert_eq!(
            surface.calls(),
            &[DrawCall::StrokePath {
                points: points.to_vec(),
                params: StrokeParams::round(Color32::RED, 5.0, 1.0),
            }]
        );
    }

    #[test]
    fn test_pencil_is_narrow_and_muted() {
        let mut surface = surface();
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0)];
        render_path(&mut surface, &StrokeStyle::pencil(Color32::RED, 10.0), &points);
        match &surface.calls()[0] {
            DrawCall::StrokePath { params, .. } => {
                assert_eq!(params.color, crate::config::PENCIL_COLOR);
                assert!((params.width - 8.0).abs() < 1e-5);
                assert_eq!(params.alpha, 1.0);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_brush_stamps_halo_before_core() {
        let mut surface = surface();
        render_path(&mut surface, &StrokeStyle::brush(Color32::GREEN, 10.0), &[pos2(5.0, 5.0)]);
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::FillDisc {
                    center: pos2(5.0, 5.0),
                    radius: 10.0,
                    color: Color32::GREEN,
                    alpha: HALO_ALPHA,
                },
                DrawCall::FillDisc {
                    center: pos2(5.0, 5.0),
                    radius: 5.0,
                    color: Color32::GREEN,
                    alpha: CORE_ALPHA,
                },
            ]
        );
    }

    #[test]
    fn test_brush_stamp_count_follows_spacing() {
        let mut surface = surface();
        // radius 5 => spacing 2, so 0..=10 along x gives 6 stamps of 2 discs each
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0)];
        render_path(&mut surface, &StrokeStyle::brush(Color32::GREEN, 5.0), &points);
        assert_eq!(surface.calls().len(), 12);
    }

    #[test]
    fn test_eraser_uses_background_color() {
        let mut surface = RecordingSurface::new(Vec2::new(10.0, 10.0), Color32::from_rgb(1, 2, 3));
        let style = StrokeStyle::new(Tool::Eraser, Color32::RED, 20.0, 20.0);
        render_path(&mut surface, &style, &[pos2(0.0, 0.0), pos2(30.0, 0.0)]);
        assert!(!surface.calls().is_empty());
        for call in surface.calls() {
            match call {
                DrawCall::FillDisc { color, .. } => assert_eq!(*color, Color32::from_rgb(1, 2, 3)),
                other => panic!("unexpected call {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        let mut surface = surface();
        render_path(&mut surface, &StrokeStyle::pen(Color32::WHITE, 6.0), &[]);
        assert!(surface.calls().is_empty());
    }
}
