//! doclocale - configuration checker for multi-locale documentation sites.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use doclocale::{ROOT_KEY, SiteConfig, init_config, log};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli.config.as_deref())?);

    match &cli.command {
        Commands::Check => {
            log!(
                "check";
                "configuration ok: {} locale(s), base path {}",
                config.locales.len(),
                config.site.base_path
            );
            Ok(())
        }
        Commands::Show { locale } => show_locale(&config, locale),
        Commands::Locales => {
            for entry in config.locales.iter() {
                println!("{:<8} {} ({})", entry.key(), entry.label, entry.lang);
            }
            Ok(())
        }
    }
}

/// Print one locale's effective configuration as TOML.
fn show_locale(config: &SiteConfig, locale: &str) -> Result<()> {
    // The reserved key is accepted as a spelling of the root locale's empty code
    let code = if locale == ROOT_KEY { "" } else { locale };
    let effective = config.resolve(code)?;
    print!("{}", toml::to_string_pretty(&effective)?);
    Ok(())
}
