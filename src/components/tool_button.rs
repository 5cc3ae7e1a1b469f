use crate::stroke::Tool;

/// Square button showing a tool name, highlighted when the tool is active
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(64.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_gray(0x33)
            } else if response.hovered() {
                egui::Color32::from_gray(40)
            } else {
                egui::Color32::from_gray(0x22)
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(0xcc)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.name(),
                egui::FontId::proportional(16.0),
                text_color,
            );

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::WHITE)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(0x44))
            };
            ui.painter().rect_stroke(rect, 6.0, border);
        }

        response.on_hover_text(self.tool.name())
    }
}
