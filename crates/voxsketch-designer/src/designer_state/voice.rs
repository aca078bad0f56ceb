//! Spoken command handling for designer state.

use voxsketch_core::{Error, Result};

use super::DesignerState;
use crate::command_parser::{self, Command};
use crate::model::Shape;

/// What a recognized voice command did to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOutcome {
    Cleared,
    /// `false` when the history was empty
    Undone(bool),
    /// `false` when there was nothing to redo
    Redone(bool),
    /// Index of the appended shape
    Added(usize),
}

impl DesignerState {
    /// Applies one finalized transcript.
    ///
    /// Unrecognized text yields [`Error::CommandNotUnderstood`] and leaves both
    /// the scene and the history untouched.
    pub fn handle_voice_command(&mut self, text: &str) -> Result<VoiceOutcome> {
        let Some(command) = command_parser::parse_command(text) else {
            tracing::warn!("Voice command not understood: {}", text);
            return Err(Error::CommandNotUnderstood(text.to_string()));
        };

        let outcome = match command {
            Command::Clear => {
                self.clear_canvas();
                VoiceOutcome::Cleared
            }
            Command::Undo => VoiceOutcome::Undone(self.undo()),
            Command::Redo => VoiceOutcome::Redone(self.redo()),
            Command::Draw(shape) => {
                let kind = shape.shape_type();
                let index = self.mutate(|scene| scene.append(shape));
                tracing::info!("Voice command added {} #{}", kind, index);
                VoiceOutcome::Added(index)
            }
        };
        Ok(outcome)
    }

    /// Parses a shape description without touching the canvas.
    pub fn parse_natural_command(&self, text: &str) -> Option<Shape> {
        command_parser::parse_natural_command(text)
    }
}
