/*
[INPUT]:  Output path and API key from flags or an interactive prompt
[OUTPUT]: Generated YAML configuration file
[POS]:    Command layer - configuration bootstrap
[UPDATE]: When CliConfig schema changes
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::{Term, style};
use dialoguer::{Input, theme::ColorfulTheme};

use crate::config::{CliConfig, default_config_path};

const PLACEHOLDER_API_KEY: &str = "pk_test_replace_me";

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Write a configuration template
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Destination file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Publishable API key; prompted for on a terminal when omitted
    #[arg(long)]
    pub api_key: Option<String>,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init(args) => run_init(args),
    }
}

pub fn run_init(args: InitArgs) -> Result<()> {
    let output = match args.output {
        Some(output) => output,
        None => default_config_path().context("no config directory on this platform; pass --output")?,
    };

    let api_key = match args.api_key {
        Some(api_key) => api_key,
        None if Term::stdout().is_term() => {
            println!("{}", style("MoonPay CLI configuration").bold().cyan());
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Publishable API key")
                .default(PLACEHOLDER_API_KEY.to_string())
                .interact_text()
                .context("read API key")?
        }
        None => PLACEHOLDER_API_KEY.to_string(),
    };

    CliConfig::template(api_key).write_to(&output)?;

    println!(
        "Configuration written to: {}",
        style(output.display()).cyan()
    );
    Ok(())
}
