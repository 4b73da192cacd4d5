//! Command implementation for the ferris-order CLI
//!
//! Turns parsed arguments into a validated [`SortConfig`] and hands it to
//! the [`SortExecutor`](crate::executors::sort::SortExecutor).

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::config::SortConfig;

/// Execute a run based on CLI input
pub fn execute_command(cli: Cli) -> Result<()> {
    let config =
        SortConfig::try_from(cli).wrap_err("Failed to parse command-line configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::sort::SortExecutor;
    SortExecutor::execute(config)
}
