use super::{Command, ShapeStore};
use crate::element::{Shape, ShapeId};

/// Manages the history of executed commands for undo/redo functionality.
///
/// The history is strictly linear: executing a new command drops everything that
/// could have been redone. Neither stack is capped.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Execute a command and push it onto the undo stack
    pub fn execute<S: ShapeStore + ?Sized>(&mut self, command: Command, store: &mut S) {
        command.execute(store);
        log::debug!("Executed {:?}", command);
        self.undo_stack.push(command);
        // Redo lineage is invalid once a new action happens
        self.redo_stack.clear();
    }

    /// Wrap `shape` in a command, apply it, and record it
    pub fn record_and_apply<S: ShapeStore + ?Sized>(&mut self, shape: Shape, store: &mut S) -> ShapeId {
        let command = Command::add_shape(shape);
        let id = command.shape_id();
        self.execute(command, store);
        id
    }

    /// Undo up to `levels` commands, most recent first.
    ///
    /// Stops silently when the undo stack runs out. Returns how many were undone.
    pub fn undo<S: ShapeStore + ?Sized>(&mut self, levels: usize, store: &mut S) -> usize {
        let mut done = 0;
        while done < levels {
            let Some(command) = self.undo_stack.pop() else {
                break;
            };
            command.undo(store);
            self.redo_stack.push(command);
            done += 1;
        }
        if done > 0 {
            log::debug!("Undid {} of {} requested commands", done, levels);
        }
        done
    }

    /// Redo up to `levels` commands, most recently undone first.
    ///
    /// Stops silently when the redo stack runs out. Returns how many were redone.
    pub fn redo<S: ShapeStore + ?Sized>(&mut self, levels: usize, store: &mut S) -> usize {
        let mut done = 0;
        while done < levels {
            let Some(command) = self.redo_stack.pop() else {
                break;
            };
            command.execute(store);
            self.undo_stack.push(command);
            done += 1;
        }
        if done > 0 {
            log::debug!("Redid {} of {} requested commands", done, levels);
        }
        done
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Forget every command without touching the store.
    ///
    /// The caller is expected to have cleared or replaced the store's contents.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
