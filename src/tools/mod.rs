use egui::{Color32, Key, Painter, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::MarkupConfig;
use crate::surface::DrawingSurface;
use crate::view_transform::ViewTransform;

mod brush;
mod polygon;

pub use brush::{BrushState, BrushTool};
pub use polygon::{MIN_POLYGON_VERTICES, PolygonTool};

/// What the canvas should draw in place of the system cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorHint {
    /// Outline circle of `diameter` screen pixels, drawn into a square icon of
    /// `icon_size` pixels. Larger circles are clipped by the icon.
    Circle { diameter: f32, icon_size: u32 },
    /// Fixed crosshair, independent of zoom
    Crosshair,
}

impl CursorHint {
    pub fn diameter(&self) -> f32 {
        match self {
            CursorHint::Circle { diameter, .. } => *diameter,
            CursorHint::Crosshair => 0.0,
        }
    }

    /// True if the circle does not fit in its icon
    pub fn is_clipped(&self) -> bool {
        match self {
            CursorHint::Circle { diameter, icon_size } => *diameter > *icon_size as f32,
            CursorHint::Crosshair => false,
        }
    }

    /// Diameter actually shown after clipping to the icon
    pub fn displayed_diameter(&self) -> f32 {
        match self {
            CursorHint::Circle { diameter, icon_size } => diameter.min(*icon_size as f32),
            CursorHint::Crosshair => 0.0,
        }
    }
}

/// Tool trait defines the interface for all drawing tools.
///
/// Pointer positions are in image coordinates. Handlers return a `Command` when a
/// shape is complete; the caller records it in the history.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Name of the tool's interaction state, for display
    fn current_state_name(&self) -> &'static str;

    fn on_pointer_down(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command>;

    fn on_pointer_move(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command>;

    fn on_pointer_up(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command>;

    /// Handle a key press. Returns true if the key was used.
    fn on_key(&mut self, key: Key) -> bool;

    fn cursor_hint(&self) -> CursorHint;

    /// Called when the view zoom changes
    fn set_zoom(&mut self, _zoom: f32) {}

    fn set_color(&mut self, color: Color32);

    /// Abandon any in-progress interaction without committing anything
    fn cancel(&mut self);

    /// Draw in-progress state on top of the canvas
    fn draw_preview(&self, painter: &Painter, view: &ViewTransform);
}

/// Identifies a tool without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Brush,
    Polygon,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::Brush, ToolKind::Polygon];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Brush => "Brush",
            ToolKind::Polygon => "Polygon",
        }
    }
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Brush(BrushTool),
    Polygon(PolygonTool),
}

impl ToolType {
    /// Create a fresh tool of the given kind
    pub fn new(kind: ToolKind, config: &MarkupConfig, color: Color32) -> Self {
        match kind {
            ToolKind::Brush => Self::Brush(BrushTool::new(config, color)),
            ToolKind::Polygon => Self::Polygon(PolygonTool::new(config, color)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Brush(_) => ToolKind::Brush,
            Self::Polygon(_) => ToolKind::Polygon,
        }
    }

    pub fn as_brush(&self) -> Option<&BrushTool> {
        match self {
            Self::Brush(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_brush_mut(&mut self) -> Option<&mut BrushTool> {
        match self {
            Self::Brush(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonTool> {
        match self {
            Self::Polygon(tool) => Some(tool),
            _ => None,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Brush(tool) => tool.name(),
            Self::Polygon(tool) => tool.name(),
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self {
            Self::Brush(tool) => tool.current_state_name(),
            Self::Polygon(tool) => tool.current_state_name(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        match self {
            Self::Brush(tool) => tool.on_pointer_down(pos, surface),
            Self::Polygon(tool) => tool.on_pointer_down(pos, surface),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        match self {
            Self::Brush(tool) => tool.on_pointer_move(pos, surface),
            Self::Polygon(tool) => tool.on_pointer_move(pos, surface),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        match self {
            Self::Brush(tool) => tool.on_pointer_up(pos, surface),
            Self::Polygon(tool) => tool.on_pointer_up(pos, surface),
        }
    }

    fn on_key(&mut self, key: Key) -> bool {
        match self {
            Self::Brush(tool) => tool.on_key(key),
            Self::Polygon(tool) => tool.on_key(key),
        }
    }

    fn cursor_hint(&self) -> CursorHint {
        match self {
            Self::Brush(tool) => tool.cursor_hint(),
            Self::Polygon(tool) => tool.cursor_hint(),
        }
    }

    fn set_zoom(&mut self, zoom: f32) {
        match self {
            Self::Brush(tool) => tool.set_zoom(zoom),
            Self::Polygon(tool) => tool.set_zoom(zoom),
        }
    }

    fn set_color(&mut self, color: Color32) {
        match self {
            Self::Brush(tool) => tool.set_color(color),
            Self::Polygon(tool) => tool.set_color(color),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Brush(tool) => tool.cancel(),
            Self::Polygon(tool) => tool.cancel(),
        }
    }

    fn draw_preview(&self, painter: &Painter, view: &ViewTransform) {
        match self {
            Self::Brush(tool) => tool.draw_preview(painter, view),
            Self::Polygon(tool) => tool.draw_preview(painter, view),
        }
    }
}
