//! Constants shared across the workspace.

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplicative zoom change applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Default number of undo snapshots retained.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Color name applied to shapes produced by spoken commands when none is given.
pub const DEFAULT_COMMAND_COLOR: &str = "black";

/// Default PNG export dimensions in pixels.
pub const DEFAULT_EXPORT_WIDTH: u32 = 800;
pub const DEFAULT_EXPORT_HEIGHT: u32 = 600;
