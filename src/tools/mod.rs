use egui::Color32;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::stroke::{ShapeKind, StrokeStyle, Tool};

/// Immutable copy of the tool configuration, taken when an action starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSnapshot {
    pub style: StrokeStyle,
    pub shape_kind: ShapeKind,
}

/// The mutable "current configuration" owned by the tools panel.
///
/// The canvas only ever reads it through [`ToolSettings::snapshot`], so
/// changing a setting mid-stroke never alters a draft that is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    tool: Tool,
    color: Color32,
    brush_thickness: f32,
    eraser_radius: f32,
    shape_kind: ShapeKind,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&CanvasConfig::default())
    }
}

impl ToolSettings {
    pub fn from_config(config: &CanvasConfig) -> Self {
        Self {
            tool: Tool::Pen,
            color: config.default_color,
            brush_thickness: config.default_brush_thickness,
            eraser_radius: config.default_eraser_radius,
            shape_kind: ShapeKind::Freehand,
        }
    }

    /// Pull sizes back into the configured ranges, e.g. after restoring from storage
    pub fn clamped(mut self, config: &CanvasConfig) -> Self {
        self.set_brush_thickness(self.brush_thickness, config);
        self.set_eraser_radius(self.eraser_radius, config);
        if self.tool == Tool::Eraser {
            self.shape_kind = ShapeKind::Freehand;
        }
        self
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select a tool. The eraser only works freehand, so picking it resets the shape kind.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool selected: {}", tool.name());
        self.tool = tool;
        if tool == Tool::Eraser && self.shape_kind != ShapeKind::Freehand {
            debug!("Eraser forces freehand, was {}", self.shape_kind.name());
            self.shape_kind = ShapeKind::Freehand;
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn brush_thickness(&self) -> f32 {
        self.brush_thickness
    }

    pub fn set_brush_thickness(&mut self, thickness: f32, config: &CanvasConfig) {
        let (min, max) = config.brush_thickness_range;
        self.brush_thickness = thickness.clamp(min, max);
    }

    pub fn eraser_radius(&self) -> f32 {
        self.eraser_radius
    }

    pub fn set_eraser_radius(&mut self, radius: f32, config: &CanvasConfig) {
        let (min, max) = config.eraser_radius_range;
        self.eraser_radius = radius.clamp(min, max);
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    /// Select a shape kind. Ignored while the eraser is active.
    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        if self.tool == Tool::Eraser {
            return;
        }
        self.shape_kind = kind;
    }

    /// Size shown next to the active tool
    pub fn current_size(&self) -> f32 {
        match self.tool {
            Tool::Eraser => self.eraser_radius,
            _ => self.brush_thickness,
        }
    }

    pub fn snapshot(&self) -> ToolSnapshot {
        let style = match self.tool {
            Tool::Pen => StrokeStyle::pen(self.color, self.brush_thickness),
            Tool::Brush => StrokeStyle::brush(self.color, self.brush_thickness),
            Tool::Pencil => StrokeStyle::pencil(self.color, self.brush_thickness),
            Tool::Eraser => StrokeStyle::eraser(self.eraser_radius),
        };
        ToolSnapshot {
            style,
            shape_kind: self.shape_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ToolSettings::default();
        assert_eq!(settings.tool(), Tool::Pen);
        assert_eq!(settings.color(), Color32::WHITE);
        assert_eq!(settings.brush_thickness(), 5.0);
        assert_eq!(settings.eraser_radius(), 20.0);
        assert_eq!(settings.shape_kind(), ShapeKind::Freehand);
    }

    #[test]
    fn test_eraser_forces_freehand() {
        let mut settings = ToolSettings::default();
        settings.set_shape_kind(ShapeKind::Circle);
        settings.set_tool(Tool::Eraser);
        assert_eq!(settings.shape_kind(), ShapeKind::Freehand);

        settings.set_shape_kind(ShapeKind::Line);
        assert_eq!(settings.shape_kind(), ShapeKind::Freehand);
    }

    #[test]
    fn test_sizes_are_clamped() {
        let config = CanvasConfig::default();
        let mut settings = ToolSettings::default();
        settings.set_brush_thickness(500.0, &config);
        settings.set_eraser_radius(1.0, &config);
        assert_eq!(settings.brush_thickness(), 50.0);
        assert_eq!(settings.eraser_radius(), 5.0);
    }

    #[test]
    fn test_snapshot_per_tool() {
        let mut settings = ToolSettings::default();
        settings.set_color(Color32::RED);
        settings.set_brush_thickness(8.0, &CanvasConfig::default());

        settings.set_tool(Tool::Brush);
        let snapshot = settings.snapshot();
        assert_eq!(snapshot.style.tool, Tool::Brush);
        assert_eq!(snapshot.style.radius, 8.0);
        assert_eq!(snapshot.style.color, Color32::RED);

        settings.set_tool(Tool::Eraser);
        let snapshot = settings.snapshot();
        assert_eq!(snapshot.style.tool, Tool::Eraser);
        assert_eq!(snapshot.style.radius, 20.0);
        assert_eq!(settings.current_size(), 20.0);
    }

    #[test]
    fn test_restored_sizes_are_clamped() {
        let config = CanvasConfig::default();
        let json = r#"{"tool": "Eraser", "brush_thickness": 0.0, "eraser_radius": 500.0, "shape_kind": "Circle"}"#;
        let restored: ToolSettings = serde_json::from_str(json).unwrap();
        assert_eq!(restored.eraser_radius(), 500.0);

        let settings = restored.clamped(&config);
        assert_eq!(settings.brush_thickness(), 1.0);
        assert_eq!(settings.eraser_radius(), 80.0);
        assert_eq!(settings.shape_kind(), ShapeKind::Freehand);
    }

    #[test]
    fn test_settings_survive_serialization() {
        let mut settings = ToolSettings::default();
        settings.set_tool(Tool::Pencil);
        settings.set_shape_kind(ShapeKind::Ellipse);
        let json = serde_json::to_string(&settings).unwrap();
        let restored: ToolSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
