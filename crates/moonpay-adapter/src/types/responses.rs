/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;
use std::ops::Deref;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::serde_helpers;

/// Fiat code -> exchange rate, e.g. `{"EUR": 7412.5, "USD": 8251.3}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPrices(
    #[serde(
        serialize_with = "serde_helpers::serialize_decimal_map",
        deserialize_with = "serde_helpers::deserialize_decimal_map"
    )]
    pub BTreeMap<String, Decimal>,
);

impl Deref for CurrencyPrices {
    type Target = BTreeMap<String, Decimal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Crypto code (upper case) -> fiat code (upper case) -> exchange rate
pub type MultiCurrencyPrices = BTreeMap<String, CurrencyPrices>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCodeResponse {
    #[serde(default)]
    pub pre_authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prices_encode_rates_as_numbers() {
        let prices: CurrencyPrices =
            serde_json::from_value(json!({"EUR": 7412.5, "USD": "8251.32"})).unwrap();
        assert_eq!(prices["USD"], Decimal::new(825132, 2));

        let encoded = serde_json::to_value(&prices).unwrap();
        assert!(encoded["EUR"].is_number());
        assert!(encoded["USD"].is_number());
        assert_eq!(encoded["EUR"], json!(7412.5));
    }

    #[test]
    fn nested_prices_encode_rates_as_numbers() {
        let prices: MultiCurrencyPrices = serde_json::from_value(json!({
            "BTC": {"EUR": 7412.5, "GBP": 6300.1},
            "ETH": {"EUR": 160.2, "GBP": null}
        }))
        .unwrap();
        assert_eq!(prices["ETH"]["GBP"], Decimal::ZERO);

        let encoded = serde_json::to_value(&prices).unwrap();
        assert!(encoded["BTC"]["GBP"].is_number());
    }
}
