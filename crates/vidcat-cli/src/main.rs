// crates/vidcat-cli/src/main.rs - CLI Application Entry Point
//
// Startup pipeline:
// 1. Parse command-line arguments (clap)
// 2. Install the tracing subscriber (stderr)
// 3. Resolve configuration into a Context (CLI arg > environment > default)
// 4. Load the catalog; a corrupt or unreadable file stops here
// 5. Hand stdin/stdout to the interactive session until the user exits
//
// The catalog is loaded once and held for the whole session. Every change
// is written back by the store before the menu comes round again.

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::io;
use tracing::debug;

mod cli; // Command-line flags
mod context; // Configuration resolution and the store
mod logging; // Tracing subscriber setup
mod menu; // Menu entries and their parsing
mod render; // Human-readable output
mod session; // Interactive loop
mod stdin; // Prompted line input

use cli::Cli;
use context::Context;
use session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    let ctx = Context::new(cli.file)?;
    debug!(
        path = %ctx.catalog_path().display(),
        pretty = ctx.config().pretty,
        "Resolved catalog configuration"
    );

    let mut catalog = ctx.store.load().with_context(|| {
        format!(
            "Cannot start with catalog file {}",
            ctx.catalog_path().display()
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&ctx.store, &mut catalog, stdin.lock(), stdout.lock()).run()
}
