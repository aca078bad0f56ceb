use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use voxsketch::script::ScriptRunner;
use voxsketch::{init_logging, Config};

fn load_config() -> anyhow::Result<Config> {
    let path = match std::env::var_os("VOXSKETCH_CONFIG") {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(
        "VoxSketch {} (built {})",
        voxsketch::VERSION,
        voxsketch::BUILD_DATE
    );

    let config = load_config()?;
    let mut runner = ScriptRunner::new(config);

    // Script from the first argument, or stdin.
    let input: Box<dyn BufRead> = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    for (number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script line")?;
        match runner.run_line(&line) {
            Ok(Some(message)) => println!("{message}"),
            Ok(None) => {}
            // Failures are reported and the script continues.
            Err(e) => eprintln!("line {}: {:#}", number + 1, e),
        }
    }

    Ok(())
}
