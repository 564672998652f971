use egui::{Color32, Pos2, Rect, Vec2};
use image::RgbaImage;

use crate::element::common;

/// Capsule produced by one brush drag segment: a disc of `radius` at each end
/// joined by the quadrilateral spanning them.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeShape {
    begin: Pos2,
    end: Pos2,
    radius: f32,
    color: Color32,
}

impl StrokeShape {
    /// Create a new capsule. `begin == end` yields a single disc.
    pub fn new(begin: Pos2, end: Pos2, radius: f32, color: Color32) -> Self {
        Self {
            begin,
            end,
            radius,
            color,
        }
    }

    pub fn begin(&self) -> Pos2 {
        self.begin
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// True when the segment has no length and the capsule is a plain disc
    pub fn is_degenerate(&self) -> bool {
        (self.end - self.begin).length() <= common::DEGENERATE_LENGTH
    }

    /// Unit vector from begin to end, or `None` for a zero-length stroke
    pub fn direction(&self) -> Option<Vec2> {
        if self.is_degenerate() {
            return None;
        }
        Some((self.end - self.begin).normalized())
    }

    /// Corners `B+rN, E+rN, E-rN, B-rN` of the body quadrilateral.
    ///
    /// Zero-length strokes have no body and return `None`.
    pub fn quad(&self) -> Option<[Pos2; 4]> {
        let dir = self.direction()?;
        let normal = Vec2::new(-dir.y, dir.x) * self.radius;
        Some([
            self.begin + normal,
            self.end + normal,
            self.end - normal,
            self.begin - normal,
        ])
    }

    pub fn bounding_box(&self) -> Rect {
        common::calculate_bounds(&[self.begin, self.end], self.radius)
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        common::distance_to_line_segment(pos, self.begin, self.end) <= self.radius
    }

    pub fn rasterize(&self, mask: &mut RgbaImage) {
        let color = image::Rgba(self.color.to_srgba_unmultiplied());
        common::fill_pixels(mask, self.bounding_box(), color, |p| self.contains(p));
    }
}
