use crate::MarkupApp;

pub fn central_panel(app: &mut MarkupApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

            if app.editor().surface().has_background() {
                app.handle_input(ctx, canvas_rect);
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Open an image from the file list");
                });
            }

            let painter = ui.painter_at(canvas_rect);
            app.paint_canvas(ctx, &painter, response.hover_pos());
        });
}
