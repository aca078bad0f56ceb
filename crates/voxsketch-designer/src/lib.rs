//! # VoxSketch Designer
//!
//! The scene model, undo/redo history, spoken-command parser and interaction
//! controller behind the VoxSketch canvas.
//!
//! ## Core Components
//!
//! - **Model**: rectangles, circles and lines as a closed tagged enum
//! - **Scene**: ordered shape list; paint order and hit-test priority
//! - **History**: snapshot-based linear undo/redo
//! - **Command parser**: rule-based text-to-shape extraction
//! - **Viewport**: device/logical coordinate mapping with pan and zoom
//! - **Designer state**: pointer, wheel and voice input driving the above
//! - **Renderer**: tiny-skia rasterization and PNG export
//!
//! ## Architecture
//!
//! ```text
//! input (pointer, wheel, file, speech)
//!   └── DesignerState
//!         ├── Viewport (device -> logical)
//!         ├── History::snapshot (before every mutation)
//!         └── Scene
//!               └── Renderer (consumer)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use voxsketch_designer::DesignerState;
//!
//! let mut state = DesignerState::new();
//! state.handle_voice_command("draw a red circle radius 40 x 10 y 20").unwrap();
//! assert_eq!(state.scene().len(), 1);
//!
//! state.undo();
//! assert!(state.scene().is_empty());
//! ```

pub mod command_parser;
pub mod designer_state;
pub mod history;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod serialization;
pub mod viewport;
pub mod voice;

pub use command_parser::{parse_command, parse_natural_command, Command};
pub use designer_state::{DesignerState, Tool, VoiceOutcome};
pub use history::{History, Snapshot};
pub use model::{
    DesignCircle, DesignLine, DesignRectangle, DesignerShape, Point, Shape, ShapeType,
};
pub use scene::Scene;
pub use viewport::{to_device, to_logical, Viewport};
pub use voice::{RecognitionEvent, ScriptedRecognizer, SpeechRecognizer, VoiceSession};
