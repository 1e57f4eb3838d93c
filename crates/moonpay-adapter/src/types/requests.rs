/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::{serde_helpers, Address};

/// Body of `POST /customers/email_login`, used for both login steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailLoginRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
}

/// Profile fields that can be updated; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// ISO-8601 date, e.g. `1990-01-31`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_security_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl CustomerFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw card details exchanged for a single-use token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub number: String,
    /// `MM/YYYY`
    pub expiry_date: String,
    pub cvc: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub token_id: Uuid,
}

/// Body of a new purchase. Pay with either a fresh token or a stored card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub base_currency_amount: Decimal,
    #[serde(
        rename = "extraFeePercentage",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub extra_fee_percentage: Decimal,
    #[serde(default)]
    pub are_fees_included: bool,
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address_tag: Option<String>,
    pub base_currency_code: String,
    pub currency_code: String,
    pub return_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_login_request_omits_unset_fields() {
        let first_step = EmailLoginRequest {
            email: "someone@example.com".to_string(),
            security_code: None,
            external_customer_id: None,
        };
        assert_eq!(
            serde_json::to_value(&first_step).unwrap(),
            json!({"email": "someone@example.com"})
        );

        let second_step = EmailLoginRequest {
            email: "someone@example.com".to_string(),
            security_code: Some("123456".to_string()),
            external_customer_id: Some("ext-1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&second_step).unwrap(),
            json!({
                "email": "someone@example.com",
                "securityCode": "123456",
                "externalCustomerId": "ext-1"
            })
        );
    }

    #[test]
    fn customer_fields_only_sends_what_is_set() {
        let fields = CustomerFields {
            first_name: Some("Ada".to_string()),
            address: Some(Address {
                town: Some("London".to_string()),
                ..Address::default()
            }),
            ..CustomerFields::default()
        };

        assert!(!fields.is_empty());
        assert!(CustomerFields::default().is_empty());
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"firstName": "Ada", "address": {"town": "London"}})
        );
    }

    #[test]
    fn transaction_request_sends_amounts_as_numbers() {
        let request = TransactionRequest {
            base_currency_amount: Decimal::new(5000, 2),
            extra_fee_percentage: Decimal::new(15, 1),
            are_fees_included: true,
            wallet_address: "2N3oefVeg6stiTb5Kh3ozCSkaqmx91FDbsm".to_string(),
            wallet_address_tag: None,
            base_currency_code: "eur".to_string(),
            currency_code: "btc".to_string(),
            return_url: "https://example.com/done".to_string(),
            token_id: None,
            card_id: Some(Uuid::nil()),
        };

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["baseCurrencyAmount"], json!(50.0));
        assert_eq!(encoded["extraFeePercentage"], json!(1.5));
        assert_eq!(encoded["cardId"], json!(Uuid::nil().to_string()));
        assert!(encoded.get("tokenId").is_none());
        assert!(encoded.get("walletAddressTag").is_none());
    }
}
