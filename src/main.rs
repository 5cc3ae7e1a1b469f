#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = replay_paint::CanvasConfig::default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Replay Paint")
            .with_inner_size([config.width as f32 + 280.0, config.height as f32 + 120.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Replay Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(replay_paint::PaintApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
