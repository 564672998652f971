use egui::{Color32, Pos2, Rect};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

mod common;
mod polygon;
mod stroke;

pub use polygon::PolygonShape;
pub use stroke::StrokeShape;

/// Stable identity of a committed shape. Commands refer to shapes by id,
/// the surface owns the shape data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed, immutable drawable
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Stroke(StrokeShape),
    Polygon(PolygonShape),
}

/// Shapes are shared between the command log and the surface
pub type ShapeRef = Arc<Shape>;

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Stroke(_) => "stroke",
            Shape::Polygon(_) => "polygon",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Shape::Stroke(s) => s.color(),
            Shape::Polygon(p) => p.color(),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Stroke(s) => s.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
        }
    }

    /// Test if the shape covers the given position
    pub fn contains(&self, pos: Pos2) -> bool {
        match self {
            Shape::Stroke(s) => s.contains(pos),
            Shape::Polygon(p) => p.contains(pos),
        }
    }

    /// Paint the shape's color into every covered pixel of `mask`
    pub fn rasterize(&self, mask: &mut RgbaImage) {
        match self {
            Shape::Stroke(s) => s.rasterize(mask),
            Shape::Polygon(p) => p.rasterize(mask),
        }
    }

    pub fn as_stroke(&self) -> Option<&StrokeShape> {
        match self {
            Shape::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonShape> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Create a capsule between two brush positions
    pub fn create_stroke(begin: Pos2, end: Pos2, radius: f32, color: Color32) -> Shape {
        Shape::Stroke(StrokeShape::new(begin, end, radius, color))
    }

    /// Create a closed polygon through `vertices` in order
    pub fn create_polygon(vertices: Vec<Pos2>, color: Color32) -> Shape {
        Shape::Polygon(PolygonShape::new(vertices, color))
    }
}
