//! CLI entry point
//!
//! Initializes tracing, hands off to the CLI module, and exits non-zero on
//! failure. No command logic lives here.

use tracing_subscriber::EnvFilter;

use riptide_client::cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
