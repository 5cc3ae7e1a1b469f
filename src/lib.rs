#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod ledger;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use action::Action;
pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{SurfaceError, TransitionError};
pub use geometry::Point;
pub use input::{InputEvent, InputHandler, Shortcut};
pub use ledger::Ledger;
pub use renderer::{RenderMode, render, render_path, render_shape};
pub use state::EditorState;
pub use stroke::{ShapeKind, StrokeStyle, Tool};
pub use surface::{PixmapSurface, RecordingSurface, Surface};
pub use tools::{ToolSettings, ToolSnapshot};
