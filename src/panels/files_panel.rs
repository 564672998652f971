use std::path::Path;

use crate::MarkupApp;

fn dir_label(dir: Option<&Path>) -> String {
    dir.map(|d| d.display().to_string())
        .unwrap_or_else(|| "(none)".to_owned())
}

pub fn files_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::SidePanel::right("files_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Files");

            ui.label("Input directory");
            ui.horizontal(|ui| {
                ui.label(dir_label(app.workspace().input_dir()));
                if ui.button("Change").clicked() {
                    app.select_input_dir(rfd::FileDialog::new().pick_folder());
                }
            });

            ui.label("Output directory");
            ui.horizontal(|ui| {
                ui.label(dir_label(app.workspace().output_dir()));
                if ui.button("Change").clicked() {
                    app.select_output_dir(rfd::FileDialog::new().pick_folder());
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(format!("{} images", app.workspace().files().len()));
                if ui.button("Refresh").clicked() {
                    app.refresh_files();
                }
            });
            if app.workspace().has_unsaved_changes(app.editor()) {
                ui.colored_label(egui::Color32::YELLOW, "Unsaved changes");
            }

            let mut clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                let working = app.workspace().working_image();
                for (index, name) in app.workspace().files().iter().enumerate() {
                    let is_selected = working == Some(name.as_str());
                    if ui.selectable_label(is_selected, name).clicked() {
                        clicked = Some(index);
                    }
                }
            });
            if let Some(index) = clicked {
                log::info!("File selected from UI: {}", index);
                app.open_file(index);
            }
        });
}
