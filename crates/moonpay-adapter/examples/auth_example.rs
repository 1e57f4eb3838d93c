/*
[INPUT]:  MOONPAY_API_KEY, MOONPAY_EMAIL and a security code typed on stdin
[OUTPUT]: Authenticated customer session
[POS]:    Examples - email login flow demonstration
[UPDATE]: When auth flow changes
*/

use std::io::{self, BufRead, Write};

use moonpay_adapter::*;

/// Example: Email login flow
///
/// 1. Request a security code for the email
/// 2. Read the code from stdin
/// 3. Confirm it and open a customer session
/// 4. Use the session for customer calls
#[tokio::main]
async fn main() {
    println!("=== MoonPay Email Login Example ===\n");

    let api_key = std::env::var("MOONPAY_API_KEY").unwrap_or_else(|_| "pk_test_123".to_string());
    let email = match std::env::var("MOONPAY_EMAIL") {
        Ok(email) => email,
        Err(_) => {
            eprintln!("Set MOONPAY_EMAIL to run this example");
            return;
        }
    };

    let client = match MoonpayClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let mut login = EmailLogin::new(client);

    let pre_authenticated = match login.send_code(&email).await {
        Ok(flag) => flag,
        Err(e) => {
            eprintln!("✗ Could not request a security code: {}", e);
            return;
        }
    };
    println!("✓ Security code requested (pre-authenticated: {})", pre_authenticated);

    let code = if pre_authenticated {
        None
    } else {
        print!("Security code: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            eprintln!("✗ Could not read the code");
            return;
        }
        Some(line.trim().to_string())
    };

    match login.confirm(code.as_deref(), "example-customer").await {
        Ok(auth) => println!("✓ Logged in as {}", auth.customer.id),
        Err(e) => {
            eprintln!("✗ Login failed: {}", e);
            return;
        }
    }

    if let Some(customer) = login.customer() {
        match customer.limits().await {
            Ok(limits) => println!("✓ Limits: {:?}", limits),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Login example complete");
}
