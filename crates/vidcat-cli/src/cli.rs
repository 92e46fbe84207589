use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure
///
/// There are no subcommands: everything happens in the interactive menu.
/// The flags only tune where the catalog lives and how chatty the logs are.
#[derive(Parser)]
#[command(name = "vidcat")]
#[command(about = "Keep a list of videos in a flat file and edit it from a menu")]
#[command(version)]
pub struct Cli {
    /// Catalog file [default: youtube.txt]
    #[arg(short, long, env = "VIDCAT_FILE")]
    pub file: Option<PathBuf>,

    /// Log debug output to stderr (overrides RUST_LOG default)
    #[arg(short, long)]
    pub verbose: bool,
}
