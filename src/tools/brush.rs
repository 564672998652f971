use egui::{Color32, Key, Painter, Pos2};

use crate::command::Command;
use crate::config::{BrushConfig, MarkupConfig};
use crate::element::factory;
use crate::surface::DrawingSurface;
use crate::tools::{CursorHint, Tool};
use crate::view_transform::ViewTransform;

/// Drag state of the brush
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushState {
    Idle,
    /// Pointer is held. `anchor` is the last in-bounds position, if any.
    Dragging { anchor: Option<Pos2> },
}

/// Round brush that commits one capsule per pointer movement while dragging
#[derive(Debug, Clone)]
pub struct BrushTool {
    radius: f32,
    limits: BrushConfig,
    color: Color32,
    cursor_icon_size: u32,
    zoom: f32,
    state: BrushState,
}

impl BrushTool {
    pub fn new(config: &MarkupConfig, color: Color32) -> Self {
        Self {
            radius: config.brush.default_radius,
            limits: config.brush.clone(),
            color,
            cursor_icon_size: config.cursor_icon_size,
            zoom: 1.0,
            state: BrushState::Idle,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    /// The current drag anchor, if dragging inside the surface
    pub fn anchor(&self) -> Option<Pos2> {
        match self.state {
            BrushState::Dragging { anchor } => anchor,
            BrushState::Idle => None,
        }
    }

    /// Set the radius, clamped to the configured range, and return the new cursor
    pub fn set_radius(&mut self, radius: f32) -> CursorHint {
        self.radius = self.limits.clamp(radius);
        let hint = self.cursor_hint();
        if hint.is_clipped() {
            log::warn!(
                "Brush cursor diameter {:.1} exceeds the {}px cursor icon",
                hint.diameter(),
                self.cursor_icon_size
            );
        }
        hint
    }
}

impl Tool for BrushTool {
    fn name(&self) -> &'static str {
        "Brush"
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            BrushState::Idle => "Idle",
            BrushState::Dragging { .. } => "Dragging",
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        if !surface.has_background() {
            return None;
        }
        let anchor = surface.contains_point(pos).then_some(pos);
        self.state = BrushState::Dragging { anchor };
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        if !surface.has_background() {
            return None;
        }
        let BrushState::Dragging { anchor } = self.state else {
            return None;
        };

        if !surface.contains_point(pos) {
            if anchor.is_some() {
                log::debug!("Brush left the surface at {:?}, dropping anchor", pos);
            }
            self.state = BrushState::Dragging { anchor: None };
            return None;
        }

        self.state = BrushState::Dragging { anchor: Some(pos) };
        // The first in-bounds position only anchors the next segment
        let begin = anchor?;
        let stroke = factory::create_stroke(begin, pos, self.radius, self.color);
        Some(Command::add_shape(stroke))
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _surface: &DrawingSurface) -> Option<Command> {
        self.state = BrushState::Idle;
        None
    }

    fn on_key(&mut self, key: Key) -> bool {
        let radius = match key {
            Key::Plus | Key::Equals => self.radius + 1.0,
            Key::Minus => self.radius - 1.0,
            _ => return false,
        };
        self.set_radius(radius);
        log::info!("New brush size: {}", self.radius);
        true
    }

    fn cursor_hint(&self) -> CursorHint {
        let diameter = self.radius * self.zoom * 2.0;
        CursorHint::Circle {
            diameter,
            icon_size: self.cursor_icon_size,
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn cancel(&mut self) {
        self.state = BrushState::Idle;
    }

    fn draw_preview(&self, _painter: &Painter, _view: &ViewTransform) {
        // Segments are committed as they are drawn, nothing is pending
    }
}
