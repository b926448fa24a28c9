//! CLI module for the node client
//!
//! Provides the command-line interface:
//! - tx-info: fetch and decode one transaction
//! - utx-size: query the unconfirmed pool size

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, tx_info, utx_size};
pub use errors::{CliError, CliResult};
