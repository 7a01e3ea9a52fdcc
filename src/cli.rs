//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Configuration checker for multi-locale documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: doclocale.toml, searched upward)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print one locale's effective configuration as TOML
    #[command(visible_alias = "s")]
    Show {
        /// Locale code (`root` for the root locale)
        locale: String,
    },

    /// List configured locales
    #[command(visible_alias = "l")]
    Locales,
}
