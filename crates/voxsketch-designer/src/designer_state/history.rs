//! Undo, redo and clear for designer state.

use super::DesignerState;

impl DesignerState {
    /// Restores the previous snapshot. Returns `false` (and changes nothing)
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.scene) {
            Some(snapshot) => {
                self.restore(snapshot.into_shapes());
                self.is_modified = true;
                tracing::debug!(
                    undo = self.history.undo_depth(),
                    redo = self.history.redo_depth(),
                    "undo"
                );
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone snapshot. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.scene) {
            Some(snapshot) => {
                self.restore(snapshot.into_shapes());
                self.is_modified = true;
                tracing::debug!(
                    undo = self.history.undo_depth(),
                    redo = self.history.redo_depth(),
                    "redo"
                );
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Removes every shape (undoable) and drops the selection.
    pub fn clear_canvas(&mut self) {
        self.mutate(|scene| scene.clear());
        self.selection = None;
        self.gesture = Default::default();
    }

    /// Clear all undo/redo history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
