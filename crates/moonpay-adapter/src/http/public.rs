/*
[INPUT]:  Currency codes and the public API key
[OUTPUT]: Reference data (currencies, prices, countries, IP eligibility, card tokens)
[POS]:    HTTP layer - anonymous tier endpoints (no customer session)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{MoonpayClient, Result};
use crate::types::{
    Country, Currency, CurrencyPrices, IpAddress, MultiCurrencyPrices, Token, TokenRequest,
};

impl MoonpayClient {
    /// List all supported currencies
    ///
    /// GET /v3/currencies
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        let builder = self.request(Method::GET, "/currencies");
        self.send_json(builder).await
    }

    /// Find one currency by code, case-insensitively
    pub async fn currency(&self, code: &str) -> Result<Option<Currency>> {
        let currencies = self.currencies().await?;
        Ok(currencies
            .into_iter()
            .find(|currency| currency.has_code(code)))
    }

    /// Current exchange rates of one currency against fiat currencies
    ///
    /// GET /v3/currencies/{code}/price?apiKey={key}
    pub async fn currency_price(&self, code: &str) -> Result<CurrencyPrices> {
        let endpoint = format!("/currencies/{}/price", code.trim().to_lowercase());
        let builder = self.keyed_request(Method::GET, &endpoint);
        self.send_json(builder).await
    }

    /// Exchange rates of several cryptocurrencies against several fiat currencies
    ///
    /// GET /v3/currencies/price?apiKey={key}&cryptoCurrencies={a,b}&fiatCurrencies={x,y}
    pub async fn currencies_price<C, F>(&self, crypto: &[C], fiat: &[F]) -> Result<MultiCurrencyPrices>
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        let crypto = join_codes(crypto);
        let fiat = join_codes(fiat);
        let builder = self.keyed_request(Method::GET, "/currencies/price").query(&[
            ("cryptoCurrencies", crypto.as_str()),
            ("fiatCurrencies", fiat.as_str()),
        ]);
        self.send_json(builder).await
    }

    /// List all supported countries
    ///
    /// GET /v3/countries
    pub async fn countries(&self) -> Result<Vec<Country>> {
        let builder = self.request(Method::GET, "/countries");
        self.send_json(builder).await
    }

    /// Eligibility of the caller's IP address
    ///
    /// GET /v3/ip_address?apiKey={key}
    pub async fn ip_address(&self) -> Result<IpAddress> {
        let builder = self.keyed_request(Method::GET, "/ip_address");
        self.send_json(builder).await
    }

    /// Exchange raw card details for a single-use token
    ///
    /// POST /v3/tokens?apiKey={key}
    pub async fn create_token(&self, req: &TokenRequest) -> Result<Token> {
        let builder = self.keyed_request(Method::POST, "/tokens").json(req);
        self.send_json(builder).await
    }
}

fn join_codes<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(|code| code.as_ref().trim())
        .filter(|code| !code.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
