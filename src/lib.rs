//! # VoxSketch
//!
//! A 2D vector sketch canvas driven by pointer gestures and spoken commands.
//!
//! ## Architecture
//!
//! VoxSketch is organized as a workspace:
//!
//! 1. **voxsketch-core** - Error type and shared constants
//! 2. **voxsketch-settings** - Configuration files
//! 3. **voxsketch-designer** - Scene, history, command parser, renderer
//! 4. **voxsketch** - Command-line front end that replays input scripts

pub mod script;

pub use voxsketch_core::{Error, Result};
pub use voxsketch_designer as designer;
pub use voxsketch_designer::{
    Command, DesignerState, History, Point, Scene, Shape, ShapeType, Tool, Viewport, VoiceOutcome,
};
pub use voxsketch_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
