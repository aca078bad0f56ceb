//! Snapshot-based undo/redo history.
//!
//! Each entry is a full, independent copy of the scene's shape sequence taken
//! *before* a mutation. History is linear: recording a new snapshot discards
//! everything on the redo stack.

use crate::model::Shape;
use crate::scene::Scene;

/// A fully owned copy of a scene's shapes.
///
/// Snapshots never alias live shapes, so later in-place edits of the scene
/// cannot leak into stored history.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    shapes: Vec<Shape>,
}

impl Snapshot {
    pub fn capture(scene: &Scene) -> Self {
        Self {
            shapes: scene.shapes().to_vec(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

/// Manages the undo and redo stacks.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl History {
    /// Create a history with the default depth (100)
    pub fn new() -> Self {
        Self::with_depth(voxsketch_core::constants::DEFAULT_HISTORY_DEPTH)
    }

    /// Create with custom maximum undo depth
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records the pre-mutation state of `scene` and clears the redo stack.
    pub fn snapshot(&mut self, scene: &Scene) {
        self.redo_stack.clear();
        self.undo_stack.push(Snapshot::capture(scene));

        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        tracing::trace!(depth = self.undo_stack.len(), "history snapshot");
    }

    /// Steps back one snapshot. `scene` is the current state, which moves onto
    /// the redo stack. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, scene: &Scene) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(Snapshot::capture(scene));
        Some(previous)
    }

    /// Steps forward one snapshot. `scene` is the current state, which moves
    /// onto the undo stack. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, scene: &Scene) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(Snapshot::capture(scene));
        Some(next)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
