/*
[INPUT]:  Customer email, optional security code from flags or a prompt
[OUTPUT]: Customer session (token, CSRF token, customer) as JSON
[POS]:    Command layer - email login flow
[UPDATE]: When the login flow changes
*/

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use moonpay_adapter::{EmailLogin, MoonpayClient};

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    /// Your own identifier for this customer
    #[arg(long, default_value = "")]
    pub external_id: String,
    /// Emailed security code; prompted for when omitted
    #[arg(long)]
    pub code: Option<String>,
}

pub async fn run(client: MoonpayClient, args: &LoginArgs) -> Result<()> {
    let mut login = EmailLogin::new(client);

    let pre_authenticated = login
        .send_code(&args.email)
        .await
        .context("request security code")?;

    let code = match (&args.code, pre_authenticated) {
        (Some(code), _) => Some(code.clone()),
        (None, true) => None,
        (None, false) => {
            eprintln!(
                "{}",
                style(format!("A security code was sent to {}", args.email)).dim()
            );
            let code: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Security code")
                .interact_text()
                .context("read security code")?;
            Some(code)
        }
    };

    let auth = login
        .confirm(code.as_deref(), &args.external_id)
        .await
        .context("confirm security code")?;

    print_json(&auth)?;
    eprintln!(
        "{} export MOONPAY_TOKEN={}",
        style("Logged in.").bold().green(),
        auth.token
    );
    Ok(())
}
