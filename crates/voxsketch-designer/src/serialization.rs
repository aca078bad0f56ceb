//! Design document format.
//!
//! A design file is a JSON array of shape records written and read verbatim:
//!
//! ```json
//! [
//!   { "type": "rectangle", "x": 10.0, "y": 20.0, "w": -40.0, "h": 30.0 },
//!   { "type": "circle", "x": 150.0, "y": 150.0, "r": 50.0, "color": "red" }
//! ]
//! ```
//!
//! There is no version field and no validation beyond structural parsing.

use std::path::Path;

use voxsketch_core::Result;

use crate::model::Shape;

/// Serialize shapes to a pretty-printed JSON array.
pub fn scene_to_json(shapes: &[Shape]) -> Result<String> {
    Ok(serde_json::to_string_pretty(shapes)?)
}

/// Parse a JSON array of shapes. Malformed input is an error, never an empty scene.
pub fn scene_from_json(json: &str) -> Result<Vec<Shape>> {
    Ok(serde_json::from_str(json)?)
}

/// Write shapes to `path`.
pub fn save_shapes(shapes: &[Shape], path: impl AsRef<Path>) -> Result<()> {
    let json = scene_to_json(shapes)?;
    std::fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Read shapes from `path`.
pub fn load_shapes(path: impl AsRef<Path>) -> Result<Vec<Shape>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    scene_from_json(&content)
}
