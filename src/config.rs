//! Defaults and rendering constants for the drawing canvas.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Muted color every pencil stroke is drawn with, regardless of the selected color.
pub const PENCIL_COLOR: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
/// Pencil width relative to the configured thickness.
pub const PENCIL_WIDTH_FACTOR: f32 = 0.8;
/// Brush stamps are spaced `radius / BRUSH_SPACING_DIVISOR` apart.
pub const BRUSH_SPACING_DIVISOR: f32 = 2.5;
/// Opacity of the soft outer disc of a brush stamp.
pub const HALO_ALPHA: f32 = 0.25;
/// Opacity of the inner disc of a brush stamp.
pub const CORE_ALPHA: f32 = 1.0;
/// Opacity of a shape while it is still being dragged.
pub const PREVIEW_ALPHA: f32 = 0.7;

/// Quick-pick colors shown next to the color picker.
pub const COMMON_COLORS: [Color32; 10] = [
    Color32::from_rgb(0xff, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x00, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xff),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0x00, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x00, 0xff),
    Color32::from_rgb(0x88, 0x88, 0x88),
    Color32::from_rgb(0xff, 0xa5, 0x00),
    Color32::from_rgb(0x80, 0x00, 0x80),
];

/// Static configuration of the drawing surface and the tool controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Clear color of the surface, also painted by the eraser
    pub background: Color32,
    pub default_color: Color32,
    pub default_brush_thickness: f32,
    pub default_eraser_radius: f32,
    pub brush_thickness_range: (f32, f32),
    pub eraser_radius_range: (f32, f32),
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: Color32::BLACK,
            default_color: Color32::WHITE,
            default_brush_thickness: 5.0,
            default_eraser_radius: 20.0,
            brush_thickness_range: (1.0, 50.0),
            eraser_radius_range: (5.0, 80.0),
        }
    }
}
