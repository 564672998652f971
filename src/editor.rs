//! The annotation session: one background image, the shapes drawn on it, the undo
//! history of those shapes, and the active tool.
//!
//! All mutation funnels through `Editor` on a single thread. Tools only read the
//! surface; any shape they complete comes back as a `Command` which is executed
//! through the `CommandHistory`, so every visible change can be undone.

use egui::{Color32, Key, Modifiers, PointerButton, Pos2};
use image::RgbaImage;

use crate::command::{Command, CommandHistory};
use crate::config::MarkupConfig;
use crate::input::InputEvent;
use crate::surface::DrawingSurface;
use crate::tools::{CursorHint, Tool, ToolKind, ToolType};

pub struct Editor {
    config: MarkupConfig,
    surface: DrawingSurface,
    history: CommandHistory,
    tool: ToolType,
    color: Color32,
    /// Brush radius remembered while another tool is active
    brush_radius: f32,
    zoom: f32,
}

impl Editor {
    pub fn new(config: MarkupConfig) -> Self {
        let color = config.palette().selected();
        let tool = ToolType::new(ToolKind::Brush, &config, color);
        Self {
            brush_radius: config.brush.default_radius,
            config,
            surface: DrawingSurface::new(),
            history: CommandHistory::new(),
            tool,
            color,
            zoom: 1.0,
        }
    }

    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn brush_radius(&self) -> f32 {
        match self.tool.as_brush() {
            Some(brush) => brush.radius(),
            None => self.brush_radius,
        }
    }

    /// Set the brush radius, clamped, whether or not the brush is active
    pub fn set_brush_radius(&mut self, radius: f32) -> f32 {
        self.brush_radius = self.config.brush.clamp(radius);
        if let Some(brush) = self.tool.as_brush_mut() {
            brush.set_radius(self.brush_radius);
        }
        self.brush_radius
    }

    /// Start a fresh annotation session on a new background
    pub fn load_background(&mut self, image: RgbaImage) {
        self.tool.cancel();
        self.surface.set_background(image);
        self.history.clear();
    }

    /// Remove every shape and forget the history, keeping the background
    pub fn clear(&mut self) {
        log::info!("Clearing {} shapes and history", self.surface.len());
        self.tool.cancel();
        self.surface.clear_shapes();
        self.history.clear();
    }

    pub fn undo(&mut self, levels: usize) -> usize {
        self.history.undo(levels, &mut self.surface)
    }

    pub fn redo(&mut self, levels: usize) -> usize {
        self.history.redo(levels, &mut self.surface)
    }

    /// Swap the active tool, cancelling whatever the outgoing tool had in progress
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        if self.tool.kind() == kind {
            return;
        }
        self.tool.cancel();
        if let Some(brush) = self.tool.as_brush() {
            self.brush_radius = brush.radius();
        }

        let mut tool = ToolType::new(kind, &self.config, self.color);
        tool.set_zoom(self.zoom);
        if let Some(brush) = tool.as_brush_mut() {
            brush.set_radius(self.brush_radius);
        }
        log::info!("Switching tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.tool.set_color(color);
    }

    /// Multiply the zoom by `zoom_factor^steps`, clamped to the configured range
    pub fn zoom_by(&mut self, steps: f32) -> f32 {
        let zoom = self.zoom * self.config.zoom_factor.powf(steps);
        self.set_zoom(zoom)
    }

    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.tool.set_zoom(self.zoom);
        self.zoom
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.tool.cursor_hint()
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        let command = self.tool.on_pointer_down(pos, &self.surface);
        self.commit(command);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        let command = self.tool.on_pointer_move(pos, &self.surface);
        self.commit(command);
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        let command = self.tool.on_pointer_up(pos, &self.surface);
        self.commit(command);
    }

    /// Handle a key press: history shortcuts first, then the active tool
    pub fn key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if modifiers.command {
            match key {
                Key::Z if modifiers.shift => {
                    self.redo(1);
                }
                Key::Z => {
                    self.undo(1);
                }
                Key::Y => {
                    self.redo(1);
                }
                _ => return false,
            }
            return true;
        }
        self.tool.on_key(key)
    }

    /// Route a canvas input event. Only the primary button draws.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } => self.pointer_down(location.position),
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } => self.pointer_up(location.position),
            InputEvent::PointerMove { location } => self.pointer_move(location.position),
            InputEvent::KeyDown { key, modifiers } => {
                self.key(*key, *modifiers);
            }
            InputEvent::Zoom { steps, .. } => {
                self.zoom_by(*steps);
            }
            _ => {}
        }
    }

    fn commit(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.history.execute(command, &mut self.surface);
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(MarkupConfig::default())
    }
}
