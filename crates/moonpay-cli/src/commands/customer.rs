/*
[INPUT]:  Customer token and profile update flags
[OUTPUT]: Customer profile, limits or refreshed session as JSON
[POS]:    Command layer - customer-scoped profile operations
[UPDATE]: When customer endpoints change
*/

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use moonpay_adapter::{CustomerClient, CustomerFields};
use uuid::Uuid;

use super::{AddressArgs, print_json};

#[derive(Subcommand, Debug, Clone)]
pub enum CustomerCommand {
    /// Show the logged-in customer
    Info,
    /// Show purchase limits and verification levels
    Limits,
    /// Exchange the current token for a fresh one
    Refresh,
    /// Update profile fields
    Update(UpdateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    /// ISO-8601 date, e.g. 1990-01-31
    #[arg(long)]
    pub date_of_birth: Option<String>,
    #[arg(long)]
    pub social_security_number: Option<String>,
    #[arg(long)]
    pub default_currency_id: Option<Uuid>,
    #[command(flatten)]
    pub address: AddressArgs,
}

impl UpdateArgs {
    pub fn into_fields(self) -> CustomerFields {
        let address = self.address.into_address();
        CustomerFields {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            social_security_number: self.social_security_number,
            default_currency_id: self.default_currency_id,
            address: (address != Default::default()).then_some(address),
        }
    }
}

pub async fn run(customer: &CustomerClient, command: CustomerCommand) -> Result<()> {
    match command {
        CustomerCommand::Info => {
            let me = customer.info().await.context("fetch customer")?;
            print_json(&me)
        }
        CustomerCommand::Limits => {
            let limits = customer.limits().await.context("fetch limits")?;
            print_json(&limits)
        }
        CustomerCommand::Refresh => {
            let auth = customer.refresh_token().await.context("refresh token")?;
            print_json(&auth)
        }
        CustomerCommand::Update(args) => {
            let fields = args.into_fields();
            if fields.is_empty() {
                bail!("nothing to update: pass at least one field flag");
            }
            let updated = customer.update(&fields).await.context("update customer")?;
            print_json(&updated)
        }
    }
}
