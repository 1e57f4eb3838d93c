/*
[INPUT]:  Publishable API key from MOONPAY_API_KEY
[OUTPUT]: Currencies, prices and geo checks printed to stdout
[POS]:    Examples - public MoonPay queries
[UPDATE]: When adding new public endpoints
*/

use moonpay_adapter::*;

/// Example: Query public data (no customer session required)
///
/// These endpoints only need the publishable API key.
#[tokio::main]
async fn main() {
    println!("=== MoonPay Public Data Example ===\n");

    let api_key = std::env::var("MOONPAY_API_KEY").unwrap_or_else(|_| "pk_test_123".to_string());
    let client = match MoonpayClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    println!("Looking up ETH...");
    match client.currency("eth").await {
        Ok(Some(currency)) => println!("✓ Currency: {} ({})", currency.name, currency.code),
        Ok(None) => println!("✗ ETH is not listed"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ETH price...");
    match client.currency_price("eth").await {
        Ok(prices) => println!("✓ Prices: {:?}", prices),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying BTC/ETH against USD/EUR...");
    match client.currencies_price(&["btc", "eth"], &["usd", "eur"]).await {
        Ok(prices) => println!("✓ Prices: {:?}", prices),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nChecking caller IP...");
    match client.ip_address().await {
        Ok(ip) => println!("✓ {} allowed={}", ip.alpha3, ip.is_allowed),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Public data example complete");
}
