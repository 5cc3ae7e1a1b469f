use crate::PaintApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::config::COMMON_COLORS;
use crate::stroke::{ShapeKind, Tool};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.settings().tool();
            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.settings_mut().set_tool(tool);
                    }
                }
            });
            ui.separator();

            let is_eraser = app.settings().tool() == Tool::Eraser;

            // Color
            ui.add_enabled_ui(!is_eraser, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Color:");
                    let mut color = app.settings().color();
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        app.settings_mut().set_color(color);
                    }
                });
            });
            ui.horizontal_wrapped(|ui| {
                let current = app.settings().color();
                for color in COMMON_COLORS {
                    let swatch = ColorSwatch::new(color, color == current, !is_eraser);
                    if swatch.show(ui).clicked() {
                        app.settings_mut().set_color(color);
                    }
                }
            });
            ui.separator();

            // Size
            ui.horizontal(|ui| {
                let config = app.config().clone();
                if is_eraser {
                    let (min, max) = config.eraser_radius_range;
                    let mut radius = app.settings().eraser_radius();
                    ui.label("Eraser size:");
                    if ui
                        .add(egui::Slider::new(&mut radius, min..=max).suffix("px"))
                        .changed()
                    {
                        app.settings_mut().set_eraser_radius(radius, &config);
                    }
                } else {
                    let (min, max) = config.brush_thickness_range;
                    let mut thickness = app.settings().brush_thickness();
                    ui.label("Size:");
                    if ui
                        .add(egui::Slider::new(&mut thickness, min..=max).suffix("px"))
                        .changed()
                    {
                        app.settings_mut().set_brush_thickness(thickness, &config);
                    }
                }
            });

            // Shape
            ui.add_enabled_ui(!is_eraser, |ui| {
                let mut kind = app.settings().shape_kind();
                egui::ComboBox::from_label("Shape")
                    .selected_text(kind.name())
                    .show_ui(ui, |ui| {
                        for option in ShapeKind::ALL {
                            ui.selectable_value(&mut kind, option, option.name());
                        }
                    });
                if kind != app.settings().shape_kind() {
                    app.settings_mut().set_shape_kind(kind);
                }
            });
            ui.separator();

            // Clear / Undo / Redo section
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear_all();
                }
                if ui.add_enabled(app.can_undo(), egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(app.can_redo(), egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.separator();

            history_list(app, ui);
        });
}

/// Committed actions, with undone ones greyed out
fn history_list(app: &PaintApp, ui: &mut egui::Ui) {
    let Some(canvas) = app.canvas() else {
        ui.colored_label(egui::Color32::RED, "Drawing surface unavailable");
        return;
    };
    let ledger = canvas.ledger();

    ui.horizontal(|ui| {
        ui.label(format!("History: {}/{}", ledger.cursor(), ledger.len()));
        ui.label(format!("(State: {})", canvas.state().name()));
    });

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("action_history_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for (index, action) in ledger.actions().iter().enumerate() {
                    ui.label(format!("{}", index + 1));
                    if index < ledger.cursor() {
                        ui.label(action.label());
                    } else {
                        ui.weak(action.label());
                    }
                    ui.end_row();
                }
            });
    });
}
