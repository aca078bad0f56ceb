//! Line-oriented input scripts.
//!
//! Each line is either a host command beginning with `:` or an utterance that
//! is fed through the speech recognition boundary as a finalized transcript.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! :tool rectangle
//! :down 10 10
//! :up 110 60
//! draw a red circle radius 40 x 10 y 20
//! :export sketch.png
//! ```

use anyhow::{bail, Context};
use voxsketch_designer::voice::{ScriptedRecognizer, VoiceSession};
use voxsketch_designer::{DesignerShape, DesignerState, Shape, Tool, VoiceOutcome};
use voxsketch_settings::Config;

/// Replays script lines against a [`DesignerState`].
pub struct ScriptRunner {
    config: Config,
    state: DesignerState,
    session: VoiceSession,
    recognizer: ScriptedRecognizer,
}

impl ScriptRunner {
    pub fn new(config: Config) -> Self {
        let state = DesignerState::from_config(&config);
        Self {
            config,
            state,
            session: VoiceSession::new(),
            recognizer: ScriptedRecognizer::new(),
        }
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    /// Executes one line, returning an optional message for the user.
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        match line.strip_prefix(':') {
            Some(command) => self.run_host_command(command),
            None => self.run_utterance(line),
        }
    }

    fn run_utterance(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        self.recognizer.push_transcript(text);
        let outcome = self
            .session
            .listen_once(&mut self.recognizer, &mut self.state)?;

        let message = match outcome {
            Some(VoiceOutcome::Added(index)) => self
                .state
                .scene()
                .get(index)
                .map(|shape| format!("added #{index}: {}", describe(shape))),
            Some(VoiceOutcome::Cleared) => Some("canvas cleared".to_string()),
            Some(VoiceOutcome::Undone(applied)) => Some(undo_message("undo", applied)),
            Some(VoiceOutcome::Redone(applied)) => Some(undo_message("redo", applied)),
            None => None,
        };
        Ok(message)
    }

    fn run_host_command(&mut self, command: &str) -> anyhow::Result<Option<String>> {
        let mut parts = command.split_whitespace();
        let Some(name) = parts.next() else {
            bail!("empty command");
        };
        let args: Vec<&str> = parts.collect();

        match name {
            "tool" => {
                let tool: Tool = arg(&args, 0)?.parse()?;
                self.state.set_tool(tool);
                Ok(Some(format!("tool: {tool}")))
            }
            "color" => {
                let color = arg(&args, 0)?;
                self.state.draw_color = (color != "none").then(|| color.to_string());
                Ok(None)
            }
            "down" => {
                let (x, y) = (number(&args, 0)?, number(&args, 1)?);
                self.state.pointer_down(x, y);
                Ok(None)
            }
            "move" => {
                let (x, y) = (number(&args, 0)?, number(&args, 1)?);
                self.state.pointer_move(x, y);
                Ok(None)
            }
            "up" => {
                let (x, y) = (number(&args, 0)?, number(&args, 1)?);
                let message = self.state.pointer_up(x, y).and_then(|index| {
                    self.state
                        .scene()
                        .get(index)
                        .map(|shape| format!("drew #{index}: {}", describe(shape)))
                });
                Ok(message)
            }
            "wheel" => {
                let (x, y, dy) = (number(&args, 0)?, number(&args, 1)?, number(&args, 2)?);
                self.state.wheel(x, y, dy);
                Ok(Some(self.state.viewport().to_string()))
            }
            "undo" => Ok(Some(undo_message("undo", self.state.undo()))),
            "redo" => Ok(Some(undo_message("redo", self.state.redo()))),
            "clear" => {
                self.state.clear_canvas();
                Ok(Some("canvas cleared".to_string()))
            }
            "new" => {
                self.state.new_design();
                Ok(Some("new design".to_string()))
            }
            "save" => {
                let path = arg(&args, 0)?;
                self.state.save_to_file(path)?;
                self.config.add_recent_file(path.into());
                Ok(Some(format!("saved {}", self.state.display_name())))
            }
            "load" => {
                let path = arg(&args, 0)?;
                self.state.load_from_file(path)?;
                self.config.add_recent_file(path.into());
                Ok(Some(format!("loaded {} shapes", self.state.scene().len())))
            }
            "export" => {
                let path = arg(&args, 0)?;
                let width = optional_size(&args, 1)?.unwrap_or(self.config.export.width);
                let height = optional_size(&args, 2)?.unwrap_or(self.config.export.height);
                self.state
                    .export_png(path, width, height, &self.config.export.background)?;
                Ok(Some(format!("exported {path}")))
            }
            "list" => Ok(Some(self.listing())),
            other => bail!("unknown command ':{other}'"),
        }
    }

    fn listing(&self) -> String {
        let mut lines = vec![format!(
            "{} | {} shapes | {}",
            self.state.display_name(),
            self.state.scene().len(),
            self.state.viewport()
        )];
        for (index, shape) in self.state.scene().shapes().iter().enumerate() {
            let marker = if self.state.selection() == Some(index) {
                "*"
            } else {
                " "
            };
            lines.push(format!("{marker}#{index}: {}", describe(shape)));
        }
        lines.join("\n")
    }
}

fn describe(shape: &Shape) -> String {
    let (x1, y1, x2, y2) = shape.bounds();
    format!(
        "{} {} [{:.1}, {:.1}] - [{:.1}, {:.1}]",
        shape.color().unwrap_or("default"),
        shape.shape_type(),
        x1,
        y1,
        x2,
        y2
    )
}

fn undo_message(action: &str, applied: bool) -> String {
    if applied {
        action.to_string()
    } else {
        format!("nothing to {action}")
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> anyhow::Result<&'a str> {
    args.get(index)
        .copied()
        .with_context(|| format!("missing argument {}", index + 1))
}

fn number(args: &[&str], index: usize) -> anyhow::Result<f64> {
    let raw = arg(args, index)?;
    raw.parse()
        .with_context(|| format!("argument {} is not a number: '{raw}'", index + 1))
}

fn optional_size(args: &[&str], index: usize) -> anyhow::Result<Option<u32>> {
    args.get(index)
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("argument {} is not a size: '{raw}'", index + 1))
        })
        .transpose()
}
