/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{CurrencyType, DocumentType, TransactionStatus};

/// A cryptocurrency or fiat currency supported by MoonPay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub currency_type: CurrencyType,
    pub name: String,
    pub code: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub precision: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testnet_address_regex: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub supports_address_tag: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_tag_regex: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub supports_test_mode: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub is_suspended: bool,
    #[serde(
        rename = "isSupportedInUS",
        default,
        deserialize_with = "serde_helpers::null_as_default"
    )]
    pub is_supported_in_us: bool,
}

impl Currency {
    /// Currency codes compare case-insensitively ("BTC" == "btc")
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

/// Country objects. `is_allowed == false` means citizens are accepted but not residents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub alpha2: String,
    pub alpha3: String,
    #[serde(default)]
    pub is_allowed: bool,
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub supported_documents: Vec<DocumentType>,
}

/// Geo and eligibility details for the caller's IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddress {
    pub alpha2: String,
    pub alpha3: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub ip_address: String,
    #[serde(default)]
    pub is_allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// An end user. Profile fields stay `None` until the customer fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub is_phone_number_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_security_number: Option<String>,
    /// `true` for live mode objects, `false` for test mode
    #[serde(default)]
    pub live_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency_id: Option<Uuid>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_customer_id: Option<String>,
}

/// Session issued by a successful email login or token refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAuth {
    #[serde(default)]
    pub csrf_token: String,
    pub token: String,
    pub customer: Customer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitEntry {
    #[serde(rename = "type")]
    pub limit_type: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub daily_limit: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub daily_limit_remaining: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub monthly_limit: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub monthly_limit_remaining: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub completed: bool,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationLevel {
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub requirements: Vec<Requirement>,
}

/// Verification levels and spending limits of the logged-in customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub limits: Vec<LimitEntry>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub verification_levels: Vec<VerificationLevel>,
    #[serde(default)]
    pub limit_increase_eligible: bool,
}

/// A tokenized card. Single use, expires one hour after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub expiry_month: u32,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub expiry_year: u32,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub bin: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub last_digits: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub billing_address: Address,
}

impl Token {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A card stored on a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub expiry_month: u32,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub expiry_year: u32,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub bin: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub last_digits: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub billing_address: Address,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub customer_id: Uuid,
}

/// A cryptocurrency purchase. Status changes happen asynchronously on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub base_currency_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub quote_currency_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee_amount: Decimal,
    #[serde(
        rename = "extraFeePercentage",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub extra_fee_percentage: Decimal,
    #[serde(default)]
    pub are_fees_included: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub wallet_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub base_currency_id: Uuid,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub currency_id: Uuid,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub customer_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub eur_rate: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub usd_rate: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub gbp_rate: Decimal,
}

pub(crate) mod serde_helpers {
    use super::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    /// Amounts arrive as JSON numbers, occasionally as strings or null
    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            let raw = value.to_string();
            return Decimal::from_str(&raw)
                .or_else(|_| Decimal::from_scientific(&raw))
                .map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.to_f64() {
            Some(number) => serializer.serialize_f64(number),
            None => Err(serde::ser::Error::custom(format!(
                "decimal {value} is not representable as a JSON number"
            ))),
        }
    }

    struct AsNumber<'a>(&'a Decimal);

    impl Serialize for AsNumber<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serialize_decimal(self.0, serializer)
        }
    }

    /// Code -> rate maps, rates written as JSON numbers
    pub fn serialize_decimal_map<S>(
        map: &BTreeMap<String, Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (code, rate) in map {
            out.serialize_entry(code, &AsNumber(rate))?;
        }
        out.end()
    }

    pub fn deserialize_decimal_map<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Value>::deserialize(deserializer)?
            .into_iter()
            .map(|(code, rate)| {
                deserialize_decimal_or_zero(rate)
                    .map(|rate| (code, rate))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
