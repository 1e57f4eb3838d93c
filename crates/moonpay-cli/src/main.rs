/*
[INPUT]:  CLI arguments, YAML configuration file, MOONPAY_* environment variables
[OUTPUT]: MoonPay API results as pretty JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use moonpay_cli::CliConfig;
use moonpay_cli::commands::{
    self, CardsCommand, ConfigCommand, CustomerCommand, LoginArgs, PricesArgs, TokenCommand,
    TransactionsCommand,
};

#[derive(Parser, Debug)]
#[command(name = "moonpay", version, about = "MoonPay API command line client")]
struct Cli {
    /// YAML configuration file (defaults to <config dir>/moonpay/config.yaml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported currencies, or look one up by code
    Currencies {
        #[arg(long)]
        code: Option<String>,
    },
    /// Price of one crypto currency in every fiat currency
    Price { code: String },
    /// Prices of several crypto currencies in several fiat currencies
    Prices(PricesArgs),
    /// List countries and their supported documents
    Countries,
    /// Check whether the caller's IP address is allowed
    Ip,
    /// Log a customer in by email
    Login(LoginArgs),
    /// Customer profile operations
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Card tokenization
    #[command(subcommand)]
    Token(TokenCommand),
    /// Stored cards of the logged-in customer
    #[command(subcommand)]
    Cards(CardsCommand),
    /// Purchases of the logged-in customer
    #[command(subcommand)]
    Transactions(TransactionsCommand),
    /// Configuration file management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let load_config = || -> Result<CliConfig> {
        let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
        debug!(
            base_url = config.base_url.as_deref().unwrap_or(moonpay_adapter::API_BASE_URL),
            has_token = config.token.is_some(),
            "configuration loaded"
        );
        Ok(config)
    };

    match args.command {
        Command::Config(command) => commands::init::run(command),
        Command::Currencies { code } => {
            commands::public::currencies(&load_config()?.client()?, code.as_deref()).await
        }
        Command::Price { code } => commands::public::price(&load_config()?.client()?, &code).await,
        Command::Prices(prices) => {
            commands::public::prices(&load_config()?.client()?, &prices).await
        }
        Command::Countries => commands::public::countries(&load_config()?.client()?).await,
        Command::Ip => commands::public::ip_address(&load_config()?.client()?).await,
        Command::Login(login) => commands::login::run(load_config()?.client()?, &login).await,
        Command::Customer(command) => {
            commands::customer::run(&load_config()?.customer()?, command).await
        }
        Command::Token(command) => {
            commands::payments::run_token(&load_config()?.client()?, command).await
        }
        Command::Cards(command) => {
            commands::payments::run_cards(&load_config()?.customer()?, command).await
        }
        Command::Transactions(command) => {
            commands::payments::run_transactions(&load_config()?.customer()?, command).await
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
