//! navmark - Main Entry Point

use std::path::PathBuf;

use anyhow::Context;
use navmark_engine::{Config, Engine};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: navmark /path/to/bookmarks.html";

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for usage and the summary line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some(source) = std::env::args_os().nth(1).map(PathBuf::from) else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let config = Config::beside_executable()?;
    tracing::debug!("Writing output to {}", config.output_dir.display());

    let summary = Engine::new(config)
        .run(&source)
        .with_context(|| format!("importing bookmarks from {}", source.display()))?;

    println!("{summary}");
    Ok(())
}
