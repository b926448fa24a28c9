//! CLI command implementations
//!
//! One function per subcommand. Output goes to stdout as JSON so it can be
//! piped into other tools; diagnostics go through tracing to stderr.

use url::Url;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::client::{Options, Transactions};

/// Parse arguments and run the selected command.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command).await
}

/// Dispatch a parsed command.
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::TxInfo { node, api_key, id } => tx_info(node, api_key, &id).await,
        Command::UtxSize { node, api_key } => utx_size(node, api_key).await,
    }
}

/// Fetch one transaction and pretty-print it.
pub async fn tx_info(node: Url, api_key: Option<String>, id: &str) -> CliResult<()> {
    let transactions = Transactions::new(make_options(node, api_key));
    let tx = transactions.info(id).await?;
    println!("{}", serde_json::to_string_pretty(&tx)?);
    Ok(())
}

/// Print the unconfirmed pool size.
pub async fn utx_size(node: Url, api_key: Option<String>) -> CliResult<()> {
    let transactions = Transactions::new(make_options(node, api_key));
    let size = transactions.unconfirmed_size().await?;
    println!("{size}");
    Ok(())
}

fn make_options(node: Url, api_key: Option<String>) -> Options {
    let options = Options::new(node);
    match api_key {
        Some(key) => options.with_api_key(key),
        None => options,
    }
}
