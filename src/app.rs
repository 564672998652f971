use std::path::PathBuf;

use egui::{Color32, CursorIcon, Painter, Pos2, Rect, Stroke};

use crate::config::MarkupConfig;
use crate::editor::Editor;
use crate::input::{InputEvent, InputHandler};
use crate::palette::Palette;
use crate::panels::{central_panel, files_panel, tools_panel};
use crate::texture_manager::{TextureGenerationError, TextureManager, TextureSlot, color_image_from_rgba};
use crate::tools::{CursorHint, Tool, ToolKind};
use crate::view_transform::ViewTransform;
use crate::workspace::Workspace;

/// UI state restored between runs. The undo history is never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct PersistedSettings {
    tool: ToolKind,
    color_index: usize,
    brush_radius: Option<f32>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

pub struct MarkupApp {
    editor: Editor,
    workspace: Workspace,
    palette: Palette,
    view: ViewTransform,
    input_handler: InputHandler,
    textures: TextureManager,
    /// Background generation the view was last fitted to
    fitted_generation: u64,
    status: Option<String>,
}

impl MarkupApp {
    /// Called once before the first frame.
    ///
    /// Directories given here win over persisted ones, which win over the config.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: MarkupConfig,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        let settings: PersistedSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let input_dir = input_dir
            .or(settings.input_dir)
            .or_else(|| config.input_dir.clone());
        let output_dir = output_dir
            .or(settings.output_dir)
            .or_else(|| config.output_dir.clone());

        let mut palette = config.palette();
        let mut editor = Editor::new(config);
        if let Some(color) = palette.select(settings.color_index) {
            editor.set_color(color);
        }
        if let Some(radius) = settings.brush_radius {
            editor.set_brush_radius(radius);
        }
        editor.set_active_tool(settings.tool);

        Self {
            editor,
            workspace: Workspace::new(input_dir, output_dir),
            palette,
            view: ViewTransform::default(),
            input_handler: InputHandler::new(Rect::NOTHING),
            textures: TextureManager::new(4),
            fitted_generation: 0,
            status: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_active_tool(&mut self, kind: ToolKind) {
        self.editor.set_active_tool(kind);
    }

    pub fn select_color(&mut self, index: usize) {
        if let Some(color) = self.palette.select(index) {
            self.editor.set_color(color);
        }
    }

    pub fn set_brush_radius(&mut self, radius: f32) {
        self.editor.set_brush_radius(radius);
    }

    pub fn undo(&mut self) {
        self.editor.undo(1);
    }

    pub fn redo(&mut self) {
        self.editor.redo(1);
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    pub fn select_input_dir(&mut self, dir: Option<PathBuf>) {
        self.workspace.select_input_dir(dir);
    }

    pub fn select_output_dir(&mut self, dir: Option<PathBuf>) {
        self.workspace.select_output_dir(dir);
    }

    pub fn refresh_files(&mut self) {
        if let Err(err) = self.workspace.refresh_files() {
            self.report_error("Failed to list input directory", &err);
        }
    }

    pub fn open_file(&mut self, index: usize) {
        match self.workspace.open(index, &mut self.editor) {
            Ok(()) => self.status = None,
            Err(err) => self.report_error("Failed to open image", &err),
        }
    }

    pub fn save(&mut self) {
        match self.workspace.save(&self.editor) {
            Ok(Some(path)) => self.status = Some(format!("Saved {}", path.display())),
            Ok(None) => self.status = Some("No image opened, nothing saved".to_owned()),
            Err(err) => self.report_error("Failed to save mask", &err),
        }
    }

    fn report_error(&mut self, context: &str, err: &dyn std::fmt::Display) {
        log::error!("{}: {}", context, err);
        self.status = Some(format!("{context}: {err}"));
    }

    /// Feed this frame's canvas input to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.fit_view(canvas_rect);
        self.input_handler.set_canvas_rect(canvas_rect);

        for event in self.input_handler.process_input(ctx, &self.view) {
            self.editor.handle_input(&event);
            if let InputEvent::Zoom { anchor, .. } = event {
                self.view.zoom_around(anchor, self.editor.zoom());
            }
        }
    }

    /// Center a newly loaded background in the canvas
    fn fit_view(&mut self, canvas_rect: Rect) {
        let generation = self.editor.surface().background_generation();
        if generation == self.fitted_generation {
            return;
        }
        if let Some(size) = self.editor.surface().size() {
            let fit = (canvas_rect.width() / size.x).min(canvas_rect.height() / size.y);
            let zoom = self.editor.set_zoom(fit.min(1.0));
            self.view.zoom = zoom;
            self.view.center_in(canvas_rect, size);
        }
        self.fitted_generation = generation;
    }

    /// Draw the background, the shape mask, the tool preview and the cursor
    pub fn paint_canvas(&mut self, ctx: &egui::Context, painter: &Painter, hover: Option<Pos2>) {
        self.textures.begin_frame();
        let config = self.editor.config();
        let surface = self.editor.surface();
        let Some(size) = surface.size() else {
            return;
        };
        let image_rect = self.view.image_rect(size);
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

        let background = self.textures.get_or_create_texture(
            TextureSlot::Background,
            surface.background_generation(),
            || {
                surface
                    .background()
                    .ok_or(TextureGenerationError::NoSource)
                    .and_then(color_image_from_rgba)
            },
            ctx,
        );
        match background {
            Ok(texture) => {
                painter.image(
                    texture,
                    image_rect,
                    uv,
                    Color32::WHITE.gamma_multiply(config.background_opacity),
                );
            }
            Err(err) => log::error!("Failed to upload background: {}", err),
        }

        if !surface.is_empty() {
            let mask = self.textures.get_or_create_texture(
                TextureSlot::Mask,
                surface.revision(),
                || {
                    let mask = surface
                        .flatten_to_mask()
                        .ok_or(TextureGenerationError::NoSource)?;
                    color_image_from_rgba(&mask)
                },
                ctx,
            );
            match mask {
                Ok(texture) => {
                    painter.image(
                        texture,
                        image_rect,
                        uv,
                        Color32::WHITE.gamma_multiply(config.mask_opacity),
                    );
                }
                Err(err) => log::error!("Failed to upload mask: {}", err),
            }
        }

        self.editor.active_tool().draw_preview(painter, &self.view);

        let Some(pos) = hover.filter(|pos| painter.clip_rect().contains(*pos)) else {
            return;
        };
        match self.editor.cursor_hint() {
            hint @ CursorHint::Circle { .. } => {
                ctx.set_cursor_icon(CursorIcon::None);
                painter.circle_stroke(
                    pos,
                    hint.displayed_diameter() / 2.0,
                    Stroke::new(1.0, self.editor.color()),
                );
            }
            CursorHint::Crosshair => ctx.set_cursor_icon(CursorIcon::Crosshair),
        }
    }
}

impl eframe::App for MarkupApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            tool: self.editor.active_tool().kind(),
            color_index: self.palette.selected_index(),
            brush_radius: Some(self.editor.brush_radius()),
            input_dir: self.workspace.input_dir().map(PathBuf::from),
            output_dir: self.workspace.output_dir().map(PathBuf::from),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        files_panel(self, ctx);
        central_panel(self, ctx);
    }
}
