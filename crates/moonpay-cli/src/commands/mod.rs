/*
[INPUT]:  Parsed subcommand arguments and loaded CLI configuration
[OUTPUT]: API calls whose results print as pretty JSON
[POS]:    Command layer - maps subcommands onto adapter operations
[UPDATE]: When adding or changing subcommands
*/

pub mod customer;
pub mod init;
pub mod login;
pub mod payments;
pub mod public;

use anyhow::{Context, Result};
use clap::Args;
use moonpay_adapter::Address;
use serde::Serialize;

pub use customer::CustomerCommand;
pub use init::ConfigCommand;
pub use login::LoginArgs;
pub use payments::{CardsCommand, TokenCommand, TransactionsCommand};
pub use public::PricesArgs;

/// Print a result as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

/// Postal address flags shared by several subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct AddressArgs {
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub sub_street: Option<String>,
    #[arg(long)]
    pub town: Option<String>,
    #[arg(long)]
    pub post_code: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[arg(long)]
    pub country: Option<String>,
}

impl AddressArgs {
    pub fn into_address(self) -> Address {
        Address {
            street: self.street,
            sub_street: self.sub_street,
            town: self.town,
            post_code: self.post_code,
            state: self.state,
            country: self.country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address_flags_give_default_address() {
        assert_eq!(AddressArgs::default().into_address(), Address::default());
    }
}
