use vft_config::VftConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to its handler; returns the process exit code.
pub fn dispatch(
    command: &Commands,
    config: &VftConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<i32> {
    match command {
        Commands::Expand(args) => commands::expand::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, config, flags),
        Commands::List(args) => commands::list::handle(args, config, flags),
    }
}
