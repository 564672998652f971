#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use eframe_markup::{MarkupApp, MarkupConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let input_dir = args.next();
    let output_dir = args.next();
    let config = MarkupConfig::load_or_default(None);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Markup"),
        ..Default::default()
    };
    eframe::run_native(
        "markup",
        native_options,
        Box::new(move |cc| Ok(Box::new(MarkupApp::new(cc, config, input_dir, output_dir)))),
    )
}
