mod commands;
mod history;

use crate::element::{ShapeId, ShapeRef};

pub use commands::Command;
pub use history::CommandHistory;

/// A container of drawable shapes that commands can mutate.
///
/// `remove` of an id that is not present must be a no-op so that reverting a
/// command twice never disturbs another shape.
pub trait ShapeStore {
    /// Insert a shape at the top of the stack of visible shapes
    fn add(&mut self, id: ShapeId, shape: ShapeRef);

    /// Erase a shape if it is present
    fn remove(&mut self, id: ShapeId);

    /// Returns true if a shape with this id is currently visible
    fn contains(&self, id: ShapeId) -> bool;
}
