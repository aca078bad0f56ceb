//! Speech recognition boundary.
//!
//! The platform delivers recognition results asynchronously as single-shot
//! events. A [`VoiceSession`] starts one recognition, waits for its events and
//! hands the finalized transcript to [`DesignerState::handle_voice_command`].
//! Platform aborts are reported to the caller and never retried.

use std::collections::VecDeque;

use voxsketch_core::{Error, Result};

use crate::designer_state::{DesignerState, VoiceOutcome};

/// Event delivered by a speech recognition capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// A finalized transcript for one utterance
    Result(String),
    /// The platform aborted the session
    Error(String),
    /// The session ended without a result
    End,
}

/// A platform speech recognition capability.
pub trait SpeechRecognizer {
    /// Whether recognition is available at all.
    fn is_supported(&self) -> bool;

    /// Begins a single-shot recognition.
    fn start(&mut self) -> Result<()>;

    /// Next pending event, if the platform has delivered one.
    fn next_event(&mut self) -> Option<RecognitionEvent>;
}

/// Lifecycle of one recognition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Listening,
}

/// Drives recognition sessions against a [`DesignerState`].
#[derive(Debug, Default)]
pub struct VoiceSession {
    state: SessionState,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Starts listening. Fails with [`Error::VoiceUnsupported`] before any
    /// recognition starts when the platform lacks the capability.
    pub fn start(&mut self, recognizer: &mut dyn SpeechRecognizer) -> Result<()> {
        if !recognizer.is_supported() {
            tracing::warn!("Speech recognition unavailable");
            return Err(Error::VoiceUnsupported);
        }
        recognizer.start()?;
        self.state = SessionState::Listening;
        tracing::debug!("Listening for a voice command");
        Ok(())
    }

    /// Processes one platform event. Returns `Ok(None)` when the session ended
    /// without a transcript.
    pub fn handle_event(
        &mut self,
        designer: &mut DesignerState,
        event: RecognitionEvent,
    ) -> Result<Option<VoiceOutcome>> {
        self.state = SessionState::Idle;
        match event {
            RecognitionEvent::Result(transcript) => {
                let transcript = transcript.to_lowercase();
                tracing::debug!("Heard: {}", transcript);
                designer.handle_voice_command(&transcript).map(Some)
            }
            RecognitionEvent::Error(reason) => {
                tracing::warn!("Speech recognition aborted: {}", reason);
                Err(Error::VoiceAborted(reason))
            }
            RecognitionEvent::End => Ok(None),
        }
    }

    /// Runs one complete recognition: start, wait for the first event, apply it.
    pub fn listen_once(
        &mut self,
        recognizer: &mut dyn SpeechRecognizer,
        designer: &mut DesignerState,
    ) -> Result<Option<VoiceOutcome>> {
        self.start(recognizer)?;
        let event = recognizer.next_event().unwrap_or(RecognitionEvent::End);
        self.handle_event(designer, event)
    }
}

/// Recognizer that replays queued events. Used by the command-line front end
/// (each script line becomes one transcript) and by tests.
#[derive(Debug, Clone)]
pub struct ScriptedRecognizer {
    supported: bool,
    events: VecDeque<RecognitionEvent>,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self {
            supported: true,
            events: VecDeque::new(),
        }
    }

    /// A recognizer standing in for a platform without speech support.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            events: VecDeque::new(),
        }
    }

    pub fn push_transcript(&mut self, text: impl Into<String>) {
        self.events.push_back(RecognitionEvent::Result(text.into()));
    }

    pub fn push_event(&mut self, event: RecognitionEvent) {
        self.events.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl Default for ScriptedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn next_event(&mut self) -> Option<RecognitionEvent> {
        self.events.pop_front()
    }
}
