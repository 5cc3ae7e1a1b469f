use egui::Color32;

/// Round quick-pick color button
pub struct ColorSwatch {
    pub color: Color32,
    pub selected: bool,
    pub enabled: bool,
}

impl ColorSwatch {
    pub fn new(color: Color32, selected: bool, enabled: bool) -> Self {
        Self {
            color,
            selected,
            enabled,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let sense = if self.enabled {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), sense);

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0;
            let fill = if self.enabled {
                self.color
            } else {
                self.color.gamma_multiply(0.4)
            };
            ui.painter().circle_filled(rect.center(), radius, fill);

            let border = if self.selected {
                egui::Stroke::new(2.0, Color32::WHITE)
            } else {
                egui::Stroke::new(1.0, Color32::from_gray(0x44))
            };
            ui.painter().circle_stroke(rect.center(), radius, border);
        }

        response
    }
}
