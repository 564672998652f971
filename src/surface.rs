use egui::{Pos2, Vec2};
use image::RgbaImage;

use crate::command::ShapeStore;
use crate::element::{ShapeId, ShapeRef};

/// A shape that is currently visible on the surface
#[derive(Debug, Clone)]
pub struct CommittedShape {
    pub id: ShapeId,
    pub shape: ShapeRef,
}

/// Owns the background image and the live, ordered set of committed shapes.
///
/// The background is never part of the shape set and survives `clear_shapes`.
#[derive(Debug, Default)]
pub struct DrawingSurface {
    background: Option<RgbaImage>,
    shapes: Vec<CommittedShape>,
    /// Bumped on every visible change
    revision: u64,
    /// Bumped whenever the background is replaced
    background_generation: u64,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the background and drop every committed shape.
    ///
    /// The caller is responsible for clearing any history that targets this surface.
    pub fn set_background(&mut self, image: RgbaImage) {
        log::info!(
            "Loading background {}x{}, discarding {} shapes",
            image.width(),
            image.height(),
            self.shapes.len()
        );
        self.background = Some(image);
        self.shapes.clear();
        self.background_generation += 1;
        self.revision += 1;
    }

    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_ref()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Size of the background in image units
    pub fn size(&self) -> Option<Vec2> {
        self.background
            .as_ref()
            .map(|img| Vec2::new(img.width() as f32, img.height() as f32))
    }

    /// True if `pos` lies on a pixel of the background.
    /// Always false while no background is loaded.
    pub fn contains_point(&self, pos: Pos2) -> bool {
        match self.size() {
            Some(size) => {
                pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= size.x - 1.0 && pos.y <= size.y - 1.0
            }
            None => false,
        }
    }

    /// The live shapes in commit order
    pub fn current_shapes(&self) -> &[CommittedShape] {
        &self.shapes
    }

    pub fn shape_ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(|entry| entry.id).collect()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeRef> {
        self.shapes
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Remove every committed shape, keeping the background
    pub fn clear_shapes(&mut self) {
        if !self.shapes.is_empty() {
            self.shapes.clear();
            self.revision += 1;
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn background_generation(&self) -> u64 {
        self.background_generation
    }

    /// Render only the committed shapes into a transparent buffer the size of the background.
    ///
    /// Returns `None` while no background is loaded.
    pub fn flatten_to_mask(&self) -> Option<RgbaImage> {
        let background = self.background.as_ref()?;
        let mut mask = RgbaImage::new(background.width(), background.height());
        for entry in &self.shapes {
            entry.shape.rasterize(&mut mask);
        }
        Some(mask)
    }
}

impl ShapeStore for DrawingSurface {
    fn add(&mut self, id: ShapeId, shape: ShapeRef) {
        if self.contains(id) {
            log::warn!("Shape {} is already on the surface, ignoring add", id);
            return;
        }
        self.shapes.push(CommittedShape { id, shape });
        self.revision += 1;
    }

    fn remove(&mut self, id: ShapeId) {
        let before = self.shapes.len();
        self.shapes.retain(|entry| entry.id != id);
        if self.shapes.len() != before {
            self.revision += 1;
        }
    }

    fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|entry| entry.id == id)
    }
}
