//! # Stylepad - A Minimal Text Editor
//!
//! One window, one document, a File menu and global font/size/color styling.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Run with a file
//! cargo run -- path/to/notes.txt
//!
//! # Use a specific config file
//! cargo run -- --config path/to/config.toml
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stylepad_core::Config;
use stylepad_ui::{run, Flags};

/// Stylepad - a minimal text editor
#[derive(Parser, Debug)]
#[command(name = "stylepad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Stylepad v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags {
        file: args.file,
        config: load_config(args.config.as_deref()),
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Loads the explicit config file if given, else the default one.
///
/// A broken config never stops the editor from starting.
fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        }),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["stylepad"]);
        assert!(args.file.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_file_and_verbosity() {
        let args = Args::parse_from(["stylepad", "-vv", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[style]\nfont_family = \"DejaVu Sans\"\nfont_size = 32\n").unwrap();

        let config = load_config(Some(&path));
        assert_eq!(config.style.font_family, "DejaVu Sans");
        assert_eq!(config.style.font_size.points(), 32);
    }

    #[test]
    fn test_broken_config_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[style]\nfont_size = 13\n").unwrap();

        assert_eq!(load_config(Some(&path)), Config::default());
    }
}
