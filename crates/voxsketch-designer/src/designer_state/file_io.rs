//! File I/O operations (save, load, new, export) for designer state.

use std::path::Path;

use anyhow::Context;

use super::DesignerState;
use crate::{renderer, serialization};

impl DesignerState {
    /// Save the scene as a JSON array of shapes.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        serialization::save_shapes(self.scene.shapes(), path)
            .with_context(|| format!("Failed to save design to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved {} shapes to {}", self.scene.len(), path.display());
        Ok(())
    }

    /// Load a design, replacing the scene.
    ///
    /// A malformed file is returned as an error and leaves the current scene
    /// and history untouched. A successful load is undoable.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let shapes = serialization::load_shapes(path)
            .with_context(|| format!("Failed to load design from {}", path.display()))?;

        let count = shapes.len();
        self.history.snapshot(&self.scene);
        self.restore(shapes);

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!("Loaded {} shapes from {}", count, path.display());
        Ok(())
    }

    /// Create new design (clear all, including history and view).
    pub fn new_design(&mut self) {
        self.scene.clear();
        self.selection = None;
        self.gesture = Default::default();
        self.viewport.reset();
        self.current_file_path = None;
        self.is_modified = false;
        self.clear_history();
    }

    /// Render the current view to a PNG file.
    pub fn export_png(
        &self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        background: &str,
    ) -> anyhow::Result<()> {
        let path = path.as_ref();
        renderer::export_png(self, path, width, height, background)
            .with_context(|| format!("Failed to export {}", path.display()))
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
