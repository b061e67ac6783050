//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the dmf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// dmf - Browse and filter demo recordings
#[derive(Parser, Debug)]
#[command(name = "dmf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List demos matching a filter
    #[command(alias = "f")]
    Filter {
        /// Filter string (e.g., "map: koth_, beststreak: 6..")
        #[arg(default_value = "")]
        filter: String,

        /// JSON file with demo records (default: from config)
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Directory containing the demo files (default: from config)
        #[arg(short, long)]
        demo_dir: Option<PathBuf>,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Parse a filter and show what it compiles to
    #[command(alias = "c")]
    Check {
        /// Filter string
        filter: String,
    },

    /// List available filter keys
    Keys,

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (records, demo_dir, output.color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_command() {
        let cli = Cli::parse_from(["dmf", "filter", "map: koth_", "--records", "demos.json"]);
        if let Some(Commands::Filter {
            filter,
            records,
            demo_dir,
            limit,
        }) = cli.command
        {
            assert_eq!(filter, "map: koth_");
            assert_eq!(records, Some(PathBuf::from("demos.json")));
            assert!(demo_dir.is_none());
            assert!(limit.is_none());
        } else {
            panic!("Expected Filter command");
        }
    }

    #[test]
    fn test_filter_defaults_to_empty_filter() {
        let cli = Cli::parse_from(["dmf", "filter"]);
        if let Some(Commands::Filter { filter, .. }) = cli.command {
            assert_eq!(filter, "");
        } else {
            panic!("Expected Filter command");
        }
    }

    #[test]
    fn test_filter_alias_and_limit() {
        let cli = Cli::parse_from(["dmf", "f", "name: cp", "--limit", "5", "-d", "/demos"]);
        if let Some(Commands::Filter {
            limit, demo_dir, ..
        }) = cli.command
        {
            assert_eq!(limit, Some(5));
            assert_eq!(demo_dir, Some(PathBuf::from("/demos")));
        } else {
            panic!("Expected Filter command");
        }
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from(["dmf", "check", "!bookmarks: 0"]);
        if let Some(Commands::Check { filter }) = cli.command {
            assert_eq!(filter, "!bookmarks: 0");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["dmf", "--json", "--no-color", "keys"]);
        assert!(cli.json);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::Keys)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["dmf", "-v", "-q", "keys"]).is_err());
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::parse_from(["dmf", "config", "set", "demo_dir", "/demos"]);
        if let Some(Commands::Config {
            command: Some(ConfigCommands::Set { key, value }),
        }) = cli.command
        {
            assert_eq!(key, "demo_dir");
            assert_eq!(value, "/demos");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn test_completions() {
        let cli = Cli::parse_from(["dmf", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }
}
