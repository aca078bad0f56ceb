//! Designer state: the interaction controller.
//! Owns the scene, its history and the view transform, and turns pointer,
//! wheel and voice input into scene mutations.
//!
//! This module is split into submodules:
//! - `input`: pointer and wheel gestures
//! - `history`: undo, redo and clear
//! - `voice`: spoken command handling
//! - `file_io`: save, load and PNG export
//!
//! Every scene mutation records a history snapshot immediately before it runs.

mod file_io;
mod history;
mod input;
mod voice;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use voxsketch_core::Error;
use voxsketch_settings::Config;

pub use voice::VoiceOutcome;

use crate::history::History;
use crate::model::{Point, Shape, ShapeType};
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Active pointer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pick and drag shapes; drag on empty space pans
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
}

impl Tool {
    /// Shape produced by this tool's drag gesture.
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            Tool::Select => None,
            Tool::Rectangle => Some(ShapeType::Rectangle),
            Tool::Circle => Some(ShapeType::Circle),
            Tool::Line => Some(ShapeType::Line),
        }
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "select" => Ok(Tool::Select),
            "rect" | "rectangle" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            "line" => Ok(Tool::Line),
            other => Err(Error::other(format!("unknown tool '{other}'"))),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Select => write!(f, "select"),
            Tool::Rectangle => write!(f, "rectangle"),
            Tool::Circle => write!(f, "circle"),
            Tool::Line => write!(f, "line"),
        }
    }
}

/// Pointer gesture in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    /// Moving the selected shape; `last` is in logical coordinates
    DraggingShape {
        index: usize,
        last: Point,
        moved: bool,
    },
    /// Panning the view; `last` is in device coordinates
    Panning { last: Point },
    /// Rubber-banding a new shape, both points logical
    Drawing {
        kind: ShapeType,
        start: Point,
        current: Point,
    },
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    scene: Scene,
    history: History,
    viewport: Viewport,
    tool: Tool,
    selection: Option<usize>,
    pub(crate) gesture: Gesture,
    zoom_step: f64,
    /// Color recorded on hand-drawn shapes
    pub draw_color: Option<String>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a designer state using the view, history and drawing settings of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            scene: Scene::new(),
            history: History::with_depth(config.history.max_depth),
            viewport: Viewport::with_limits(config.view.min_zoom, config.view.max_zoom),
            tool: Tool::Select,
            selection: None,
            gesture: Gesture::Idle,
            zoom_step: config.view.zoom_step,
            draw_color: config.drawing.default_color.clone(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools, abandoning any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            tracing::debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.gesture = Gesture::Idle;
    }

    /// Index of the selected shape, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|index| self.scene.get(index))
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Shape being rubber-banded by a draw tool, for the renderer.
    pub fn preview_shape(&self) -> Option<Shape> {
        match &self.gesture {
            Gesture::Drawing {
                kind,
                start,
                current,
            } => Some(Shape::from_drag(
                *kind,
                *start,
                *current,
                self.draw_color.clone(),
            )),
            _ => None,
        }
    }

    /// Snapshot-then-mutate: the only path by which the scene changes.
    pub(crate) fn mutate<R>(&mut self, f: impl FnOnce(&mut Scene) -> R) -> R {
        self.history.snapshot(&self.scene);
        self.is_modified = true;
        f(&mut self.scene)
    }

    /// Replaces the scene with restored shapes. The selection survives only if
    /// the same shape is still at the same position.
    pub(crate) fn restore(&mut self, shapes: Vec<Shape>) {
        let selected = self.selected_shape().cloned();
        self.scene.replace_all(shapes);
        self.selection = match (self.selection, selected) {
            (Some(index), Some(shape)) if self.scene.get(index) == Some(&shape) => Some(index),
            _ => None,
        };
        self.gesture = Gesture::Idle;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
