use anyhow::Result;
use clap::{Parser, Subcommand};
use trivia_core::TriviaConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show default config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run_config(args: ConfigArgs, config: &TriviaConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", TriviaConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let mut shown = config.clone();
            // Connection strings usually carry a password
            if shown.database.url.is_some() {
                shown.database.url = Some("<redacted>".to_string());
            }
            print!("{}", shown.to_toml()?);
        }
    }
    Ok(())
}
