/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Crypto,
    Fiat,
    #[serde(other)]
    Unknown,
}

/// Identity documents accepted for verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    NationalIdentityCard,
    DrivingLicence,
    Selfie,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSide {
    Front,
    Back,
}

/// Transaction lifecycle as reported by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "waitingPayment")]
    WaitingPayment,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "waitingAuthorization")]
    WaitingAuthorization,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "completed")]
    Completed,
    #[serde(other)]
    #[default]
    Unknown,
}

impl TransactionStatus {
    /// No further transitions happen after a final status
    pub fn is_final(self) -> bool {
        matches!(self, TransactionStatus::Failed | TransactionStatus::Completed)
    }
}
