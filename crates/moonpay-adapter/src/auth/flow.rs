/*
[INPUT]:  HTTP client, customer email, emailed security code
[OUTPUT]: Authenticated customer client (bearer session)
[POS]:    Auth layer - orchestrates the two-step email login
[UPDATE]: When login steps or state transitions change
*/

use tracing::info;

use crate::http::{CustomerClient, MoonpayClient, MoonpayError, Result};
use crate::types::CustomerAuth;

/// Where a login currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Unauthenticated,
    CodeSent {
        email: String,
        pre_authenticated: bool,
    },
    Authenticated {
        email: String,
    },
}

/// Drives `Unauthenticated -> CodeSent -> Authenticated`
#[derive(Debug)]
pub struct EmailLogin {
    client: MoonpayClient,
    state: LoginState,
    customer: Option<CustomerClient>,
}

impl EmailLogin {
    pub fn new(client: MoonpayClient) -> Self {
        Self {
            client,
            state: LoginState::Unauthenticated,
            customer: None,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Customer client of the authenticated session
    pub fn customer(&self) -> Option<&CustomerClient> {
        self.customer.as_ref()
    }

    /// Step 1: request a security code for `email`.
    ///
    /// Allowed from any state; a new email restarts the flow. On error the
    /// previous state is kept.
    pub async fn send_code(&mut self, email: &str) -> Result<bool> {
        let email = email.trim();
        if email.is_empty() {
            return Err(MoonpayError::authentication("email must not be empty"));
        }

        let pre_authenticated = self.client.security_code(email).await?;
        info!(pre_authenticated, "security code requested");

        self.customer = None;
        self.state = LoginState::CodeSent {
            email: email.to_string(),
            pre_authenticated,
        };
        Ok(pre_authenticated)
    }

    /// Step 2: confirm the code and open the session.
    ///
    /// `code` may be omitted only when step 1 reported pre-authentication.
    /// A rejected code keeps the `CodeSent` state so the caller can retry.
    pub async fn confirm(
        &mut self,
        code: Option<&str>,
        external_customer_id: &str,
    ) -> Result<CustomerAuth> {
        let (email, pre_authenticated) = match &self.state {
            LoginState::CodeSent {
                email,
                pre_authenticated,
            } => (email.clone(), *pre_authenticated),
            LoginState::Unauthenticated => {
                return Err(MoonpayError::authentication(
                    "no security code has been requested",
                ));
            }
            LoginState::Authenticated { .. } => {
                return Err(MoonpayError::authentication("login already completed"));
            }
        };

        let code = code.map(str::trim).filter(|code| !code.is_empty());
        if code.is_none() && !pre_authenticated {
            return Err(MoonpayError::authentication(
                "security code is required for this customer",
            ));
        }

        let auth = self
            .client
            .email_login(&email, code, Some(external_customer_id))
            .await?;
        info!(customer_id = %auth.customer.id, "customer authenticated");

        self.customer = Some(self.client.customer_from_auth(&auth));
        self.state = LoginState::Authenticated { email };
        Ok(auth)
    }

    /// Forget the session and start over
    pub fn reset(&mut self) {
        self.customer = None;
        self.state = LoginState::Unauthenticated;
    }
}
