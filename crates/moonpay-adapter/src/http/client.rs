/*
[INPUT]:  HTTP configuration (base URL, timeouts) and the public API key
[OUTPUT]: Configured reqwest client, versioned URLs, decoded JSON results
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{ApiError, MoonpayError, Result};

/// Base URL for the MoonPay API
pub const API_BASE_URL: &str = "https://api.moonpay.io";
/// Every endpoint lives under this path prefix
pub const API_VERSION: &str = "v3";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the MoonPay API (anonymous tier)
#[derive(Debug, Clone)]
pub struct MoonpayClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl MoonpayClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MoonpayError::Config("API key must not be empty".to_string()));
        }

        let mut base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(MoonpayError::Config(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    /// Public API key sent as `apiKey`
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for an endpoint path.
    ///
    /// The path is joined under `/v3` like a filesystem path join: empty and
    /// `.` segments are dropped, `..` pops a segment (never the version
    /// prefix). Existing percent-escapes are kept as they are.
    pub fn url(&self, path: &str) -> Url {
        let mut segments = vec![API_VERSION];
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.len() > 1 {
                        segments.pop();
                    }
                }
                segment => segments.push(segment),
            }
        }

        let mut url = self.base_url.clone();
        url.set_path(&format!("/{}", segments.join("/")));
        url
    }

    /// Request without credentials
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.url(path))
    }

    /// Request carrying the public key as `apiKey`
    pub(crate) fn keyed_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request(method, path)
            .query(&[("apiKey", self.api_key.as_str())])
    }

    /// Send a request and decode the JSON body.
    ///
    /// Status >= 400 is decoded into [`ApiError`]; transport failures are
    /// returned unchanged.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(method = %method, path = %path, "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() >= 400 {
            let err = ApiError::from_body(status, &body);
            debug!(method = %method, path = %path, status = %status, error = %err, "api error");
            return Err(err.into());
        }

        debug!(method = %method, path = %path, status = %status, bytes = body.len(), "response received");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn client() -> MoonpayClient {
        MoonpayClient::new("pk_test_123").expect("client init")
    }

    #[rstest]
    #[case("/x/y")]
    #[case("x/y")]
    #[case("/x/y/")]
    #[case("//x//y//")]
    #[case("./x/./y")]
    #[case("/x/z/../y")]
    fn test_url_ends_with_versioned_path(#[case] path: &str) {
        let url = client().url(path);
        assert!(url.path().ends_with("/v3/x/y"), "got {}", url.path());
        assert_eq!(url.as_str(), "https://api.moonpay.io/v3/x/y");
    }

    #[test]
    fn test_url_with_formatted_argument() {
        let url = client().url(&format!("/currencies/{}/price", "btc"));
        assert_eq!(url.as_str(), "https://api.moonpay.io/v3/currencies/btc/price");
    }

    #[test]
    fn test_url_does_not_double_encode() {
        let url = client().url("/cards/a%20b");
        assert_eq!(url.path(), "/v3/cards/a%20b");
    }

    #[test]
    fn test_url_keeps_version_prefix() {
        let url = client().url("/../../x");
        assert_eq!(url.path(), "/v3/x");
        assert_eq!(client().url("").path(), "/v3");
    }

    #[test]
    fn test_url_ignores_base_path_and_query() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:8080/v3/?debug=1".to_string(),
            ..ClientConfig::default()
        };
        let client = MoonpayClient::with_config("pk_test_123", config).unwrap();

        assert_eq!(client.url("/countries").as_str(), "http://127.0.0.1:8080/v3/countries");
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = MoonpayClient::new("  ").unwrap_err();
        assert!(matches!(err, MoonpayError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let err = MoonpayClient::with_config("pk_test_123", config).unwrap_err();
        assert!(matches!(err, MoonpayError::UrlParse(_)));

        let config = ClientConfig {
            base_url: "mailto:ops@example.com".to_string(),
            ..ClientConfig::default()
        };
        let err = MoonpayClient::with_config("pk_test_123", config).unwrap_err();
        assert!(matches!(err, MoonpayError::Config(_)));
    }
}
