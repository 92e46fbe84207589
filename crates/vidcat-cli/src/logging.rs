use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Level used when RUST_LOG is unset or unparsable
const DEFAULT_FILTER: &str = "warn";

/// Level used with --verbose
const VERBOSE_FILTER: &str = "debug";

/// Install the global tracing subscriber
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `--verbose` wins over RUST_LOG.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = create_env_filter(verbose, std::env::var("RUST_LOG").ok());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}

fn create_env_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }

    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .unwrap_or_else(|err| {
                eprintln!("Failed to parse RUST_LOG environment variable '{directives}': {err}");
                EnvFilter::new(DEFAULT_FILTER)
            }),
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}
