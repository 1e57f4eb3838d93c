/*
[INPUT]:  Bearer token of a logged-in customer
[OUTPUT]: Customer profile, limits, refreshed sessions
[POS]:    HTTP layer - customer endpoints (require bearer auth)
[UPDATE]: When adding new customer endpoints or changing auth headers
*/

use reqwest::{Method, RequestBuilder};
use tracing::info;

use crate::auth::Session;
use crate::http::{MoonpayClient, MoonpayError, Result};
use crate::types::{Customer, CustomerAuth, CustomerFields, Limits};

/// Client scoped to one customer. Clones share the same session.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    client: MoonpayClient,
    session: Session,
}

impl MoonpayClient {
    /// Derive a client that authenticates as the customer owning `token`
    pub fn customer(&self, token: impl Into<String>) -> CustomerClient {
        CustomerClient::with_session(self.clone(), Session::new(token))
    }

    /// Derive a customer client from a login response
    pub fn customer_from_auth(&self, auth: &CustomerAuth) -> CustomerClient {
        CustomerClient::with_session(self.clone(), Session::from_auth(auth))
    }
}

impl CustomerClient {
    pub fn with_session(client: MoonpayClient, session: Session) -> Self {
        Self { client, session }
    }

    /// Current bearer token
    pub fn token(&self) -> String {
        self.session.token()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The anonymous-tier client this one was derived from
    pub fn client(&self) -> &MoonpayClient {
        &self.client
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, path)
            .bearer_auth(self.session.token())
    }

    pub(crate) fn keyed_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .keyed_request(method, path)
            .bearer_auth(self.session.token())
    }

    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.client.send_json(builder).await
    }

    /// Re-issue the session. The held token is replaced only when the new
    /// session decodes successfully.
    ///
    /// GET /v3/customers/refresh_token?apiKey={key}
    pub async fn refresh_token(&self) -> Result<CustomerAuth> {
        let builder = self.keyed_request(Method::GET, "/customers/refresh_token");
        let auth: CustomerAuth = self.send_json(builder).await?;
        if auth.token.is_empty() {
            return Err(MoonpayError::authentication(
                "refresh returned an empty token",
            ));
        }

        self.session.replace(&auth);
        info!(customer_id = %auth.customer.id, "customer token refreshed");
        Ok(auth)
    }

    /// Details of the logged-in customer
    ///
    /// GET /v3/customers/me
    pub async fn info(&self) -> Result<Customer> {
        let builder = self.request(Method::GET, "/customers/me");
        self.send_json(builder).await
    }

    /// Verification levels and limits of the logged-in customer
    ///
    /// GET /v3/customers/me/limits
    pub async fn limits(&self) -> Result<Limits> {
        let builder = self.request(Method::GET, "/customers/me/limits");
        self.send_json(builder).await
    }

    /// Update the profile with every field set in `fields`
    ///
    /// PATCH /v3/customers/me?apiKey={key}
    pub async fn update(&self, fields: &CustomerFields) -> Result<Customer> {
        let builder = self
            .keyed_request(Method::PATCH, "/customers/me")
            .json(fields);
        self.send_json(builder).await
    }
}
