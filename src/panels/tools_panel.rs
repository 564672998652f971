use crate::MarkupApp;
use crate::tools::{Tool, ToolKind};

const SWATCH_SIZE: f32 = 22.0;

pub fn tools_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.editor().active_tool().kind();
            for kind in ToolKind::ALL {
                if ui.selectable_label(active == kind, kind.label()).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    app.set_active_tool(kind);
                }
            }
            ui.label(format!(
                "State: {}",
                app.editor().active_tool().current_state_name()
            ));

            if active == ToolKind::Brush {
                let config = &app.editor().config().brush;
                let range = config.min_radius..=config.max_radius;
                let mut radius = app.editor().brush_radius();
                let slider = egui::Slider::new(&mut radius, range).step_by(1.0).text("Radius");
                if ui.add(slider).changed() {
                    app.set_brush_radius(radius);
                }
                ui.small("+ / - to resize");
            }
            ui.separator();

            ui.label("Color");
            let colors = app.palette().colors().to_vec();
            let selected = app.palette().selected_index();
            let mut picked = None;
            egui::Grid::new("palette_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                for (index, color) in colors.iter().enumerate() {
                    let stroke = if index == selected {
                        egui::Stroke::new(2.0, ui.visuals().strong_text_color())
                    } else {
                        egui::Stroke::NONE
                    };
                    let swatch = egui::Button::new("")
                        .fill(*color)
                        .stroke(stroke)
                        .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
                    if ui.add(swatch).clicked() {
                        picked = Some(index);
                    }
                    if index % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
            if let Some(index) = picked {
                app.select_color(index);
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.editor().history().can_undo();
                let can_redo = app.editor().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Save").clicked() {
                    app.save();
                }
            });
            if let Some(status) = app.status() {
                ui.small(status);
            }

            ui.separator();

            let history = app.editor().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("command_history_grid")
                    .num_columns(2)
                    .spacing([40.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Undo Stack");
                        ui.strong("Redo Stack");
                        ui.end_row();

                        let undo_stack = history.undo_stack();
                        let redo_stack = history.redo_stack();
                        let max_len = undo_stack.len().max(redo_stack.len());

                        for i in 0..max_len {
                            ui.label(undo_stack.get(i).map_or("", |cmd| cmd.label()));
                            ui.label(redo_stack.get(i).map_or("", |cmd| cmd.label()));
                            ui.end_row();
                        }
                    });
            });
        });
}
