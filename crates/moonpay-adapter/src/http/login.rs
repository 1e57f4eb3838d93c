/*
[INPUT]:  Customer email, one-time security code, external customer id
[OUTPUT]: Pre-authentication flag and customer session (JWT + CSRF token)
[POS]:    HTTP layer - email login endpoints (public key only)
[UPDATE]: When login endpoints or payloads change
*/

use reqwest::Method;

use crate::http::{MoonpayClient, Result};
use crate::types::{CustomerAuth, EmailLoginRequest, SecurityCodeResponse};

const EMAIL_LOGIN_ENDPOINT: &str = "/customers/email_login";

impl MoonpayClient {
    /// Step 1: ask MoonPay to email a one-time security code.
    ///
    /// Returns `true` when the customer is pre-authenticated and the code step
    /// can be skipped.
    ///
    /// POST /v3/customers/email_login?apiKey={key}
    pub async fn security_code(&self, email: &str) -> Result<bool> {
        let body = EmailLoginRequest {
            email: email.to_string(),
            security_code: None,
            external_customer_id: None,
        };
        let builder = self
            .keyed_request(Method::POST, EMAIL_LOGIN_ENDPOINT)
            .json(&body);
        let response: SecurityCodeResponse = self.send_json(builder).await?;
        Ok(response.pre_authenticated)
    }

    /// Step 2: confirm the emailed code and open a customer session
    ///
    /// POST /v3/customers/email_login?apiKey={key}
    pub async fn confirm_registration(
        &self,
        email: &str,
        code: &str,
        external_customer_id: &str,
    ) -> Result<CustomerAuth> {
        self.email_login(email, Some(code), Some(external_customer_id))
            .await
    }

    pub(crate) async fn email_login(
        &self,
        email: &str,
        code: Option<&str>,
        external_customer_id: Option<&str>,
    ) -> Result<CustomerAuth> {
        let body = EmailLoginRequest {
            email: email.to_string(),
            security_code: code.map(str::to_string),
            external_customer_id: external_customer_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        };
        let builder = self
            .keyed_request(Method::POST, EMAIL_LOGIN_ENDPOINT)
            .json(&body);
        self.send_json(builder).await
    }
}
