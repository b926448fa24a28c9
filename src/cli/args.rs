//! CLI argument definitions using clap
//!
//! Commands:
//! - riptide-client tx-info --node <url> <id>
//! - riptide-client utx-size --node <url>

use clap::{Parser, Subcommand};
use url::Url;

/// Riptide node client - inspect transactions over a node's REST API
#[derive(Parser, Debug)]
#[command(name = "riptide-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a transaction by id and print it as JSON
    TxInfo {
        /// Base URL of the node REST API
        #[arg(long)]
        node: Url,

        /// API key for protected endpoints
        #[arg(long)]
        api_key: Option<String>,

        /// Transaction id
        id: String,
    },

    /// Print the number of unconfirmed transactions in the node's UTX pool
    UtxSize {
        /// Base URL of the node REST API
        #[arg(long)]
        node: Url,

        /// API key for protected endpoints
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
