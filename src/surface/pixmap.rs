use egui::{Color32, ColorImage, Rect, Vec2};
use log::trace;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use super::{LineCap, LineJoin, StrokeParams, Surface};
use crate::error::SurfaceError;
use crate::geometry::Point;

/// Control point factor for approximating a quarter ellipse with a cubic bezier
const BEZIER_K: f32 = 0.552_284_8;

/// Pixel surface backed by a tiny-skia pixmap
pub struct PixmapSurface {
    pixmap: Pixmap,
    background: Color32,
    /// Bumped every time a drawing pass ends, so consumers know to re-upload
    version: u64,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("background", &self.background)
            .field("version", &self.version)
            .finish()
    }
}

impl PixmapSurface {
    /// Create a surface cleared to `background`
    pub fn new(width: u32, height: u32, background: Color32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?;
        let mut surface = Self {
            pixmap,
            background,
            version: 0,
        };
        surface.clear();
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Raw premultiplied RGBA bytes
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Unpremultiplied RGBA of one pixel, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // tiny-skia only bounds-checks the flat index, so a large x would wrap
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Snapshot of the pixels in the layout egui textures expect
    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.pixmap.width() as usize, self.pixmap.height() as usize];
        ColorImage::from_rgba_premultiplied(size, self.pixmap.data())
    }

    fn paint(color: Color32, alpha: f32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let a = (a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn stroke(params: &StrokeParams) -> Stroke {
        Stroke {
            width: params.width.max(0.0),
            line_cap: match params.cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match params.join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            ..Default::default()
        }
    }

    fn stroke_built_path(&mut self, path: Option<Path>, params: StrokeParams) {
        let Some(path) = path else {
            trace!("Skipping degenerate path");
            return;
        };
        let paint = Self::paint(params.color, params.alpha);
        self.pixmap.stroke_path(
            &path,
            &paint,
            &Self::stroke(&params),
            Transform::identity(),
            None,
        );
    }

    /// Build an ellipse path out of four cubic bezier quarters
    fn ellipse_path(center: Point, rx: f32, ry: f32) -> Option<Path> {
        let (cx, cy) = (center.x, center.y);
        let kx = rx * BEZIER_K;
        let ky = ry * BEZIER_K;

        let mut pb = PathBuilder::new();
        pb.move_to(cx, cy - ry);
        pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        pb.close();
        pb.finish()
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn background(&self) -> Color32 {
        self.background
    }

    fn clear(&mut self) {
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn stroke_path(&mut self, points: &[Point], params: StrokeParams) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for point in rest {
            pb.line_to(point.x, point.y);
        }
        self.stroke_built_path(pb.finish(), params);
    }

    fn fill_disc(&mut self, center: Point, radius: f32, color: Color32, alpha: f32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            trace!("Skipping disc with radius {}", radius);
            return;
        };
        let paint = Self::paint(color, alpha);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_line(&mut self, from: Point, to: Point, params: StrokeParams) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        self.stroke_built_path(pb.finish(), params);
    }

    fn stroke_rect(&mut self, rect: Rect, params: StrokeParams) {
        // Built by hand so zero-width or zero-height boxes still produce a path
        let mut pb = PathBuilder::new();
        pb.move_to(rect.min.x, rect.min.y);
        pb.line_to(rect.max.x, rect.min.y);
        pb.line_to(rect.max.x, rect.max.y);
        pb.line_to(rect.min.x, rect.max.y);
        pb.close();
        self.stroke_built_path(pb.finish(), params);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, params: StrokeParams) {
        self.stroke_built_path(Self::ellipse_path(center, radius, radius), params);
    }

    fn stroke_ellipse(&mut self, center: Point, radii: Vec2, params: StrokeParams) {
        self.stroke_built_path(Self::ellipse_path(center, radii.x, radii.y), params);
    }

    fn end_frame(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        let result = PixmapSurface::new(0, 10, Color32::BLACK);
        assert_eq!(
            result.unwrap_err(),
            SurfaceError::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_new_surface_is_background() {
        let surface = PixmapSurface::new(4, 4, Color32::from_rgb(10, 20, 30)).unwrap();
        assert_eq!(surface.pixel(2, 2), Some([10, 20, 30, 255]));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }

    #[test]
    fn test_pixel_past_row_end_does_not_wrap() {
        let mut surface = PixmapSurface::new(4, 4, Color32::BLACK).unwrap();
        surface.fill_disc(pos2(0.5, 1.5), 0.5, Color32::WHITE, 1.0);
        // (4, 0) would alias (0, 1) in the flat buffer
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(3, 3), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_size_matches_pixmap() {
        let surface = PixmapSurface::new(8, 3, Color32::BLACK).unwrap();
        assert_eq!(surface.size(), Vec2::new(8.0, 3.0));
    }

    #[test]
    fn test_fill_disc_paints_center() {
        let mut surface = PixmapSurface::new(20, 20, Color32::BLACK).unwrap();
        surface.fill_disc(pos2(10.0, 10.0), 4.0, Color32::RED, 1.0);
        assert_eq!(surface.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut surface = PixmapSurface::new(20, 20, Color32::BLACK).unwrap();
        surface.fill_disc(pos2(10.0, 10.0), 4.0, Color32::RED, 1.0);
        surface.clear();
        assert_eq!(surface.pixel(10, 10), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_end_frame_bumps_version() {
        let mut surface = PixmapSurface::new(2, 2, Color32::BLACK).unwrap();
        assert_eq!(surface.version(), 0);
        surface.end_frame();
        assert_eq!(surface.version(), 1);
    }

    #[test]
    fn test_color_image_matches_size() {
        let surface = PixmapSurface::new(8, 3, Color32::BLACK).unwrap();
        let image = surface.to_color_image();
        assert_eq!(image.size, [8, 3]);
        assert_eq!(image.pixels[0], Color32::BLACK);
    }
}
