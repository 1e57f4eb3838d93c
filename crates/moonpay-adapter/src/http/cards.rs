/*
[INPUT]:  Card tokens and card ids, bearer auth
[OUTPUT]: Stored cards of the logged-in customer
[POS]:    HTTP layer - card endpoints (require bearer auth)
[UPDATE]: When card endpoints change
*/

use reqwest::Method;
use uuid::Uuid;

use crate::http::{CustomerClient, Result};
use crate::types::{Card, CreateCardRequest};

impl CustomerClient {
    /// Store a card from a token. The customer's personal details must be
    /// filled in first.
    ///
    /// POST /v3/cards
    pub async fn create_card(&self, token_id: Uuid) -> Result<Card> {
        let builder = self
            .request(Method::POST, "/cards")
            .json(&CreateCardRequest { token_id });
        self.send_json(builder).await
    }

    /// Cards stored for the logged-in customer
    ///
    /// GET /v3/cards
    pub async fn cards(&self) -> Result<Vec<Card>> {
        let builder = self.request(Method::GET, "/cards");
        self.send_json(builder).await
    }

    /// Permanently delete a card
    ///
    /// DELETE /v3/cards/{id}
    pub async fn delete_card(&self, id: Uuid) -> Result<Card> {
        let builder = self.request(Method::DELETE, &format!("/cards/{id}"));
        self.send_json(builder).await
    }
}
