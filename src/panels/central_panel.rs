use crate::PaintApp;
use crate::canvas::Canvas;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Replay Paint");

        let size = app.canvas().map(Canvas::size).unwrap_or_else(|| {
            egui::vec2(app.config().width as f32, app.config().height as f32)
        });
        let background = app.config().background;
        let (canvas_rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        // Handle input
        app.handle_input(ctx, &response);

        // Render the canvas
        let painter = ui.painter_at(canvas_rect);
        match app.canvas_texture(ctx) {
            Some(texture) => {
                painter.image(
                    texture.id(),
                    canvas_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                painter.rect_filled(canvas_rect, 0.0, background);
            }
        }
        painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
    });
}
