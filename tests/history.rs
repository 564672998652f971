use eframe_markup::command::{Command, CommandHistory, ShapeStore};
use eframe_markup::element::{Shape, ShapeId, ShapeRef, factory};
use eframe_markup::surface::DrawingSurface;
use egui::{Color32, Pos2};
use image::RgbaImage;

// Helper to create a surface with a blank background
fn create_test_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::new();
    surface.set_background(RgbaImage::new(100, 100));
    surface
}

fn stroke(begin: (f32, f32), end: (f32, f32)) -> Shape {
    factory::create_stroke(
        Pos2::new(begin.0, begin.1),
        Pos2::new(end.0, end.1),
        5.0,
        Color32::GREEN,
    )
}

/// Records every call so tests can check what the history asked for
#[derive(Default)]
struct RecordingStore {
    shapes: Vec<ShapeId>,
    adds: usize,
    removes: usize,
}

impl ShapeStore for RecordingStore {
    fn add(&mut self, id: ShapeId, _shape: ShapeRef) {
        self.adds += 1;
        if !self.shapes.contains(&id) {
            self.shapes.push(id);
        }
    }

    fn remove(&mut self, id: ShapeId) {
        self.removes += 1;
        self.shapes.retain(|s| *s != id);
    }

    fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }
}

#[test]
fn test_two_strokes_undo_then_redo() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();

    let first = history.record_and_apply(stroke((0.0, 0.0), (10.0, 0.0)), &mut surface);
    let second = history.record_and_apply(stroke((10.0, 0.0), (10.0, 10.0)), &mut surface);
    assert_eq!(surface.shape_ids(), vec![first, second]);

    assert_eq!(history.undo(1, &mut surface), 1);
    assert_eq!(surface.shape_ids(), vec![first]);

    assert_eq!(history.undo(1, &mut surface), 1);
    assert!(surface.is_empty());

    assert_eq!(history.redo(2, &mut surface), 2);
    assert_eq!(surface.shape_ids(), vec![first, second]);
}

#[test]
fn test_execute_then_undo_restores_shapes() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    history.record_and_apply(stroke((1.0, 1.0), (2.0, 2.0)), &mut surface);
    let before = surface.shape_ids();

    history.record_and_apply(stroke((3.0, 3.0), (4.0, 4.0)), &mut surface);
    history.undo(1, &mut surface);

    assert_eq!(surface.shape_ids(), before);
    assert!(history.can_redo());
}

#[test]
fn test_undo_saturates() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    history.record_and_apply(stroke((0.0, 0.0), (5.0, 5.0)), &mut surface);
    history.record_and_apply(stroke((5.0, 5.0), (9.0, 5.0)), &mut surface);

    assert_eq!(history.undo(10, &mut surface), 2);
    assert!(surface.is_empty());
    assert!(!history.can_undo());
    assert_eq!(history.redo_stack().len(), 2);

    // Nothing left to undo: a no-op, not an error
    assert_eq!(history.undo(1, &mut surface), 0);
    assert_eq!(history.undo(0, &mut surface), 0);
}

#[test]
fn test_redo_saturates() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    history.record_and_apply(stroke((0.0, 0.0), (5.0, 5.0)), &mut surface);
    history.undo(1, &mut surface);

    assert_eq!(history.redo(5, &mut surface), 1);
    assert_eq!(surface.len(), 1);
    assert_eq!(history.redo(1, &mut surface), 0);
}

#[test]
fn test_new_command_discards_redo_branch() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    history.record_and_apply(stroke((0.0, 0.0), (5.0, 5.0)), &mut surface);
    let undone = history.record_and_apply(stroke((5.0, 5.0), (9.0, 5.0)), &mut surface);
    history.undo(1, &mut surface);
    assert!(history.can_redo());

    let replacement = history.record_and_apply(stroke((20.0, 20.0), (30.0, 30.0)), &mut surface);

    assert!(!history.can_redo());
    assert_eq!(history.redo(1, &mut surface), 0);
    assert!(!surface.contains(undone));
    assert!(surface.contains(replacement));
}

#[test]
fn test_redo_keeps_shape_identity() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    let id = history.record_and_apply(stroke((0.0, 0.0), (5.0, 0.0)), &mut surface);
    let original = surface.get(id).cloned().unwrap();

    history.undo(1, &mut surface);
    history.redo(1, &mut surface);

    let restored = surface.get(id).unwrap();
    assert!(std::sync::Arc::ptr_eq(&original, restored));
}

#[test]
fn test_undo_of_removed_shape_is_noop() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    let id = history.record_and_apply(stroke((0.0, 0.0), (5.0, 0.0)), &mut surface);
    let revision = surface.revision();

    // Shape disappears behind the history's back
    surface.remove(id);
    assert!(surface.revision() > revision);
    let revision = surface.revision();

    assert_eq!(history.undo(1, &mut surface), 1);
    assert_eq!(surface.revision(), revision);
    assert!(surface.is_empty());
}

#[test]
fn test_execute_twice_adds_once() {
    let mut surface = create_test_surface();
    let command = Command::add_shape(stroke((0.0, 0.0), (5.0, 0.0)));

    command.execute(&mut surface);
    command.execute(&mut surface);

    assert_eq!(surface.len(), 1);
}

#[test]
fn test_history_drives_any_store() {
    let mut store = RecordingStore::default();
    let mut history = CommandHistory::new();

    let a = history.record_and_apply(stroke((0.0, 0.0), (1.0, 0.0)), &mut store);
    let b = history.record_and_apply(stroke((1.0, 0.0), (2.0, 0.0)), &mut store);
    history.undo(2, &mut store);
    history.redo(1, &mut store);

    assert_eq!(store.adds, 3);
    assert_eq!(store.removes, 2);
    assert!(store.contains(a));
    assert!(!store.contains(b));
}

#[test]
fn test_interleaved_operations_keep_stacks_consistent() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();

    history.record_and_apply(stroke((0.0, 0.0), (1.0, 1.0)), &mut surface);
    history.record_and_apply(stroke((1.0, 1.0), (2.0, 2.0)), &mut surface);
    history.record_and_apply(stroke((2.0, 2.0), (3.0, 3.0)), &mut surface);
    history.undo(2, &mut surface);
    history.redo(1, &mut surface);
    history.record_and_apply(stroke((3.0, 3.0), (4.0, 4.0)), &mut surface);
    history.undo(1, &mut surface);

    // The live shapes are exactly the undo stack's shapes, in order
    let applied: Vec<ShapeId> = history.undo_stack().iter().map(Command::shape_id).collect();
    assert_eq!(surface.shape_ids(), applied);
    for command in history.redo_stack() {
        assert!(!surface.contains(command.shape_id()));
    }
    assert_eq!(history.undo_stack().len() + history.redo_stack().len(), 3);
}

#[test]
fn test_clear_forgets_everything() {
    let mut surface = create_test_surface();
    let mut history = CommandHistory::new();
    history.record_and_apply(stroke((0.0, 0.0), (1.0, 1.0)), &mut surface);
    history.record_and_apply(stroke((1.0, 1.0), (2.0, 2.0)), &mut surface);
    history.undo(1, &mut surface);

    history.clear();

    assert!(!history.can_undo());
    assert!(!history.can_redo());
    // The surface is left alone
    assert_eq!(surface.len(), 1);
}

#[test]
fn test_command_labels() {
    let polygon = factory::create_polygon(
        vec![Pos2::new(0.0, 0.0), Pos2::new(4.0, 0.0), Pos2::new(4.0, 4.0)],
        Color32::RED,
    );
    assert_eq!(Command::add_shape(polygon).label(), "Add Polygon");
    assert_eq!(Command::add_shape(stroke((0.0, 0.0), (1.0, 0.0))).label(), "Add Stroke");
}
