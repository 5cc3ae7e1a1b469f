use egui::{Response, TextureHandle, TextureOptions};
use log::{error, info, warn};

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::surface::PixmapSurface;
use crate::tools::ToolSettings;

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
/// The drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: CanvasConfig,
    settings: ToolSettings,
    #[serde(skip)]
    canvas: Option<Canvas>,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    texture: Option<TextureHandle>,
    /// Surface version currently uploaded to `texture`
    #[serde(skip)]
    uploaded_version: Option<u64>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default(), None)
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let restored: Option<Self> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        match restored {
            Some(app) => {
                info!("Restored tool settings from storage");
                Self::with_config(app.config, Some(app.settings))
            }
            None => Self::default(),
        }
    }

    fn with_config(config: CanvasConfig, settings: Option<ToolSettings>) -> Self {
        let canvas = match PixmapSurface::new(config.width, config.height, config.background) {
            Ok(surface) => Some(Canvas::new(surface)),
            Err(e) => {
                error!("Failed to create drawing surface: {}", e);
                None
            }
        };
        let settings = match settings {
            Some(settings) => settings.clamped(&config),
            None => ToolSettings::from_config(&config),
        };

        Self {
            config,
            settings,
            canvas,
            input: InputHandler::default(),
            texture: None,
            uploaded_version: None,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.canvas.as_ref().is_some_and(Canvas::can_undo)
    }

    pub fn can_redo(&self) -> bool {
        self.canvas.as_ref().is_some_and(Canvas::can_redo)
    }

    pub fn undo(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.undo();
        }
    }

    pub fn redo(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.redo();
        }
    }

    pub fn clear_all(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.clear_all();
        }
    }

    /// Feed this frame's input to the canvas
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, response: &Response) {
        self.input.set_canvas_rect(response.rect);
        let events = self.input.process_input(ctx, response.hovered());

        let Some(canvas) = &mut self.canvas else {
            return;
        };
        for event in events {
            match event {
                InputEvent::PointerDown { pos } => {
                    if let Err(e) = canvas.on_pointer_down(pos, &self.settings.snapshot()) {
                        warn!("Ignoring pointer down: {}", e);
                    }
                }
                InputEvent::PointerMove { pos } => canvas.on_pointer_move(pos),
                InputEvent::PointerUp { pos } => canvas.on_pointer_up(pos),
                InputEvent::PointerLeave { last_pos } => canvas.on_pointer_leave(last_pos),
                InputEvent::Shortcut(shortcut) => {
                    canvas.handle_shortcut(shortcut);
                }
            }
        }
    }

    /// Upload the surface if it changed since the last upload
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        let surface = self.canvas.as_ref()?.surface();
        let version = surface.version();

        if self.uploaded_version != Some(version) || self.texture.is_none() {
            let image = surface.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST))
                }
            }
            self.uploaded_version = Some(version);
        }
        self.texture.as_ref()
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_settings_are_clamped_to_config() {
        let settings: ToolSettings =
            serde_json::from_str(r#"{"brush_thickness": -3.0, "eraser_radius": 0.0}"#).unwrap();
        let app = PaintApp::with_config(CanvasConfig::default(), Some(settings));
        assert_eq!(app.settings().brush_thickness(), 1.0);
        assert_eq!(app.settings().eraser_radius(), 5.0);
        assert!(app.canvas().is_some());
    }
}
