/*
[INPUT]:  Currency codes and the anonymous API client
[OUTPUT]: Currencies, prices, countries and IP checks as JSON
[POS]:    Command layer - endpoints that only need the API key
[UPDATE]: When public endpoints change
*/

use anyhow::{Context, Result, bail};
use clap::Args;
use moonpay_adapter::MoonpayClient;

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct PricesArgs {
    /// Crypto currency codes, comma separated (e.g. btc,eth)
    #[arg(long, value_delimiter = ',', required = true)]
    pub crypto: Vec<String>,
    /// Fiat currency codes, comma separated (e.g. usd,eur)
    #[arg(long, value_delimiter = ',', required = true)]
    pub fiat: Vec<String>,
}

pub async fn currencies(client: &MoonpayClient, code: Option<&str>) -> Result<()> {
    match code {
        Some(code) => {
            let Some(currency) = client.currency(code).await.context("fetch currencies")? else {
                bail!("currency {code} is not supported");
            };
            print_json(&currency)
        }
        None => {
            let currencies = client.currencies().await.context("fetch currencies")?;
            print_json(&currencies)
        }
    }
}

pub async fn price(client: &MoonpayClient, code: &str) -> Result<()> {
    let prices = client
        .currency_price(code)
        .await
        .with_context(|| format!("fetch {code} price"))?;
    print_json(&prices)
}

pub async fn prices(client: &MoonpayClient, args: &PricesArgs) -> Result<()> {
    let prices = client
        .currencies_price(&args.crypto, &args.fiat)
        .await
        .context("fetch prices")?;
    print_json(&prices)
}

pub async fn countries(client: &MoonpayClient) -> Result<()> {
    let countries = client.countries().await.context("fetch countries")?;
    print_json(&countries)
}

pub async fn ip_address(client: &MoonpayClient) -> Result<()> {
    let ip = client.ip_address().await.context("check IP address")?;
    print_json(&ip)
}
