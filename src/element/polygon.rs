use egui::{Color32, Pos2, Rect};
use image::RgbaImage;

use crate::element::common;

/// Closed, filled polygon committed by the polygon tool
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    vertices: Vec<Pos2>,
    color: Color32,
}

impl PolygonShape {
    /// Vertices are taken in placement order. No self-intersection check is made.
    pub fn new(vertices: Vec<Pos2>, color: Color32) -> Self {
        Self { vertices, color }
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn bounding_box(&self) -> Rect {
        common::calculate_bounds(&self.vertices, 0.0)
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        common::point_in_polygon(pos, &self.vertices)
    }

    pub fn rasterize(&self, mask: &mut RgbaImage) {
        let color = image::Rgba(self.color.to_srgba_unmultiplied());
        common::fill_pixels(mask, self.bounding_box(), color, |p| self.contains(p));
    }
}
