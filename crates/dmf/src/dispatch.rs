//! Command dispatch for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::{self, config::Config, CommandContext, CommandError, Result};

/// A parsed command, borrowed from the CLI arguments.
pub enum Dispatch<'a> {
    Filter(commands::filter::FilterOptions),
    Check(&'a str),
    Keys,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Creates a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Filter {
                filter,
                records,
                demo_dir,
                limit,
            }) => Self::Filter(commands::filter::FilterOptions {
                filter: filter.clone(),
                records: records.clone(),
                demo_dir: demo_dir.clone(),
                limit: *limit,
            }),
            Some(Commands::Check { filter }) => Self::Check(filter),
            Some(Commands::Keys) => Self::Keys,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }

    /// Returns true if the command cannot run without a readable config.
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::Filter(_) | Self::Config(Some(ConfigCommands::Set { .. })))
    }

    /// Executes the command.
    pub fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::Filter(opts) => commands::filter::execute(ctx, opts, config),
            Self::Check(filter) => commands::check::execute(ctx, filter),
            Self::Keys => commands::keys::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("dmf - Browse and filter demo recordings");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
