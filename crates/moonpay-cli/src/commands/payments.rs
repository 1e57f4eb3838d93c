/*
[INPUT]:  Card details, card/token identifiers and purchase parameters
[OUTPUT]: Tokens, stored cards and transactions as JSON
[POS]:    Command layer - payment instruments and purchases
[UPDATE]: When card, token or transaction endpoints change
*/

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Subcommand};
use moonpay_adapter::{CustomerClient, MoonpayClient, TokenRequest, TransactionRequest};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{AddressArgs, print_json};

#[derive(Subcommand, Debug, Clone)]
pub enum TokenCommand {
    /// Exchange raw card details for a single-use token
    Create(TokenArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TokenArgs {
    #[arg(long)]
    pub number: String,
    /// MM/YYYY
    #[arg(long)]
    pub expiry_date: String,
    #[arg(long)]
    pub cvc: String,
    #[command(flatten)]
    pub address: AddressArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CardsCommand {
    /// List stored cards
    List,
    /// Store a card from a token
    Create { token_id: Uuid },
    /// Delete a stored card
    Delete { id: Uuid },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TransactionsCommand {
    /// List the customer's transactions
    List,
    /// Show one transaction
    Get { id: Uuid },
    /// Start a purchase
    Create(TransactionArgs),
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("payment").required(true).args(["token_id", "card_id"])))]
pub struct TransactionArgs {
    /// Fiat amount to spend
    #[arg(long)]
    pub base_currency_amount: Decimal,
    #[arg(long, default_value = "0")]
    pub extra_fee_percentage: Decimal,
    #[arg(long)]
    pub fees_included: bool,
    #[arg(long)]
    pub wallet_address: String,
    #[arg(long)]
    pub wallet_address_tag: Option<String>,
    /// Fiat currency code, e.g. usd
    #[arg(long)]
    pub base_currency: String,
    /// Crypto currency code, e.g. eth
    #[arg(long)]
    pub currency: String,
    #[arg(long)]
    pub return_url: String,
    /// Pay with a fresh card token
    #[arg(long)]
    pub token_id: Option<Uuid>,
    /// Pay with a stored card
    #[arg(long)]
    pub card_id: Option<Uuid>,
}

impl TransactionArgs {
    pub fn into_request(self) -> TransactionRequest {
        TransactionRequest {
            base_currency_amount: self.base_currency_amount,
            extra_fee_percentage: self.extra_fee_percentage,
            are_fees_included: self.fees_included,
            wallet_address: self.wallet_address,
            wallet_address_tag: self.wallet_address_tag,
            base_currency_code: self.base_currency.to_lowercase(),
            currency_code: self.currency.to_lowercase(),
            return_url: self.return_url,
            token_id: self.token_id,
            card_id: self.card_id,
        }
    }
}

pub async fn run_token(client: &MoonpayClient, command: TokenCommand) -> Result<()> {
    match command {
        TokenCommand::Create(args) => {
            let request = TokenRequest {
                number: args.number,
                expiry_date: args.expiry_date,
                cvc: args.cvc,
                address: args.address.into_address(),
            };
            let token = client.create_token(&request).await.context("create token")?;
            print_json(&token)
        }
    }
}

pub async fn run_cards(customer: &CustomerClient, command: CardsCommand) -> Result<()> {
    match command {
        CardsCommand::List => {
            let cards = customer.cards().await.context("list cards")?;
            print_json(&cards)
        }
        CardsCommand::Create { token_id } => {
            let card = customer.create_card(token_id).await.context("create card")?;
            print_json(&card)
        }
        CardsCommand::Delete { id } => {
            let card = customer
                .delete_card(id)
                .await
                .with_context(|| format!("delete card {id}"))?;
            print_json(&card)
        }
    }
}

pub async fn run_transactions(customer: &CustomerClient, command: TransactionsCommand) -> Result<()> {
    match command {
        TransactionsCommand::List => {
            let transactions = customer.transactions().await.context("list transactions")?;
            print_json(&transactions)
        }
        TransactionsCommand::Get { id } => {
            let transaction = customer
                .transaction(id)
                .await
                .with_context(|| format!("fetch transaction {id}"))?;
            print_json(&transaction)
        }
        TransactionsCommand::Create(args) => {
            let transaction = customer
                .create_transaction(&args.into_request())
                .await
                .context("create transaction")?;
            print_json(&transaction)
        }
    }
}
