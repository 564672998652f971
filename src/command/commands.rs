use super::ShapeStore;
use crate::element::{Shape, ShapeId, ShapeRef};
use std::sync::Arc;

/// Represents actions that can be undone/redone on the drawing surface
#[derive(Clone)]
pub enum Command {
    /// Inserts one shape into the surface
    AddShape {
        /// Handle of the shape inside the surface
        id: ShapeId,
        /// The shape to insert
        shape: ShapeRef,
    },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::AddShape { id, shape } => f
                .debug_struct("AddShape")
                .field("id", id)
                .field("kind", &shape.kind())
                .finish(),
        }
    }
}

impl Command {
    /// Wrap a freshly committed shape with a new identity
    pub fn add_shape(shape: Shape) -> Self {
        Command::AddShape {
            id: ShapeId::new(),
            shape: Arc::new(shape),
        }
    }

    /// The id of the shape this command targets
    pub fn shape_id(&self) -> ShapeId {
        match self {
            Command::AddShape { id, .. } => *id,
        }
    }

    pub fn shape(&self) -> &ShapeRef {
        match self {
            Command::AddShape { shape, .. } => shape,
        }
    }

    /// Short label for history listings
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddShape { shape, .. } => match shape.as_ref() {
                Shape::Stroke(_) => "Add Stroke",
                Shape::Polygon(_) => "Add Polygon",
            },
        }
    }

    /// Apply the command to the store
    pub fn execute<S: ShapeStore + ?Sized>(&self, store: &mut S) {
        match self {
            Command::AddShape { id, shape } => store.add(*id, Arc::clone(shape)),
        }
    }

    /// Revert exactly the effect of `execute`
    pub fn undo<S: ShapeStore + ?Sized>(&self, store: &mut S) {
        match self {
            Command::AddShape { id, .. } => store.remove(*id),
        }
    }
}
