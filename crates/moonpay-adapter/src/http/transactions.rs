/*
[INPUT]:  Transaction requests and ids, bearer auth
[OUTPUT]: Purchases of the logged-in customer and their server-side status
[POS]:    HTTP layer - transaction endpoints (require bearer auth)
[UPDATE]: When transaction endpoints or payloads change
*/

use reqwest::Method;
use uuid::Uuid;

use crate::http::{CustomerClient, Result};
use crate::types::{Transaction, TransactionRequest};

impl CustomerClient {
    /// Create a purchase paid with a token or a stored card
    ///
    /// POST /v3/transactions
    pub async fn create_transaction(&self, req: &TransactionRequest) -> Result<Transaction> {
        let builder = self.request(Method::POST, "/transactions").json(req);
        self.send_json(builder).await
    }

    /// GET /v3/transactions/{id}
    pub async fn transaction(&self, id: Uuid) -> Result<Transaction> {
        let builder = self.request(Method::GET, &format!("/transactions/{id}"));
        self.send_json(builder).await
    }

    /// Transactions of the logged-in customer
    ///
    /// GET /v3/transactions
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let builder = self.request(Method::GET, "/transactions");
        self.send_json(builder).await
    }
}
