use egui::{Color32, Key, Painter, Pos2, Rect, Stroke, Vec2};

use crate::command::Command;
use crate::config::MarkupConfig;
use crate::element::factory;
use crate::surface::DrawingSurface;
use crate::tools::{CursorHint, Tool};
use crate::view_transform::ViewTransform;

/// A polygon needs at least this many vertices before it can be closed
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Places vertices one click at a time and commits a filled polygon when the
/// first vertex is clicked again.
///
/// Vertex markers and the rubber-band line live only in the tool; they are never
/// added to the surface or the history.
#[derive(Debug, Clone)]
pub struct PolygonTool {
    color: Color32,
    marker_side: f32,
    vertices: Vec<Pos2>,
    /// End of the line that follows the pointer from the last placed vertex
    rubber_band: Option<Pos2>,
}

impl PolygonTool {
    pub fn new(config: &MarkupConfig, color: Color32) -> Self {
        Self {
            color,
            marker_side: config.vertex_marker_side,
            vertices: Vec::new(),
            rubber_band: None,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Placed but uncommitted vertices, in placement order
    pub fn vertex_chain(&self) -> &[Pos2] {
        &self.vertices
    }

    /// The rubber-band segment from the last vertex to the pointer
    pub fn rubber_band(&self) -> Option<(Pos2, Pos2)> {
        let last = *self.vertices.last()?;
        self.rubber_band.map(|end| (last, end))
    }

    /// Square marker drawn around a placed vertex
    pub fn marker_rect(&self, vertex: Pos2) -> Rect {
        Rect::from_center_size(vertex, Vec2::splat(self.marker_side))
    }

    fn hit_markers(&self, pos: Pos2) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| self.marker_rect(**v).contains(pos))
            .map(|(i, _)| i)
            .collect()
    }

    fn close(&mut self) -> Option<Command> {
        if self.vertices.len() < MIN_POLYGON_VERTICES {
            log::warn!(
                "Cannot close a polygon with {} vertices (need {})",
                self.vertices.len(),
                MIN_POLYGON_VERTICES
            );
            return None;
        }
        let vertices = std::mem::take(&mut self.vertices);
        self.rubber_band = None;
        log::debug!("Closing polygon with {} vertices", vertices.len());
        Some(Command::add_shape(factory::create_polygon(vertices, self.color)))
    }
}

impl Tool for PolygonTool {
    fn name(&self) -> &'static str {
        "Polygon"
    }

    fn current_state_name(&self) -> &'static str {
        if self.vertices.is_empty() {
            "Empty"
        } else {
            "Placing"
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, surface: &DrawingSurface) -> Option<Command> {
        if !surface.has_background() {
            return None;
        }

        let hits = self.hit_markers(pos);
        if hits.contains(&0) {
            return self.close();
        }
        if !hits.is_empty() {
            // Clicking a later vertex is reserved for vertex editing
            return None;
        }

        self.vertices.push(pos);
        self.rubber_band = Some(pos);
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, _surface: &DrawingSurface) -> Option<Command> {
        if !self.vertices.is_empty() {
            self.rubber_band = Some(pos);
        }
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _surface: &DrawingSurface) -> Option<Command> {
        None
    }

    fn on_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && !self.vertices.is_empty() {
            self.cancel();
            return true;
        }
        false
    }

    fn cursor_hint(&self) -> CursorHint {
        CursorHint::Crosshair
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn cancel(&mut self) {
        if !self.vertices.is_empty() {
            log::debug!("Discarding {} uncommitted polygon vertices", self.vertices.len());
        }
        self.vertices.clear();
        self.rubber_band = None;
    }

    fn draw_preview(&self, painter: &Painter, view: &ViewTransform) {
        let line = Stroke::new(1.0, self.color);

        for pair in self.vertices.windows(2) {
            painter.line_segment([view.to_screen(pair[0]), view.to_screen(pair[1])], line);
        }
        if let Some((from, to)) = self.rubber_band() {
            painter.line_segment([view.to_screen(from), view.to_screen(to)], line);
        }
        for vertex in &self.vertices {
            let rect = self.marker_rect(*vertex);
            let screen = Rect::from_min_max(view.to_screen(rect.min), view.to_screen(rect.max));
            painter.rect_filled(screen, 0.0, self.color);
        }
    }
}
