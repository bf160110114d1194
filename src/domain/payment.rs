use crate::domain::account::Balance;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a payment is initiated.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Transfer,
    Pix,
    Nfc,
}

impl PaymentMethod {
    /// Transfers and PIX are addressed to someone; contactless is not.
    pub fn requires_recipient(&self) -> bool {
        matches!(self, Self::Transfer | Self::Pix)
    }

    /// Placeholder used when the request carries no description.
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Transfer => "Bank transfer",
            Self::Pix => "PIX transfer",
            Self::Nfc => "Contactless payment",
        }
    }
}

/// A payment attempt as collected from the user, unvalidated.
///
/// Validation lives in [`crate::domain::authorizer::authorize`] so the decline
/// ordering stays explicit in one place.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    /// Deserialized from the field text so currency amounts keep their scale
    /// and never pass through floating point.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Transfer,
    Pix,
    NfcPayment,
    /// Credits to the account. No operation in this crate creates one; the
    /// variant exists so statements can represent incoming funds.
    Deposit,
}

impl From<PaymentMethod> for TransactionType {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Transfer => Self::Transfer,
            PaymentMethod::Pix => Self::Pix,
            PaymentMethod::Nfc => Self::NfcPayment,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

/// The immutable record of a successful payment.
///
/// Created exactly once per successful authorization and prepended to the
/// account's reverse-chronological ledger.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Transaction {
    pub r#type: TransactionType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub recipient: Option<String>,
    pub description: String,
    pub status: TransactionStatus,
    /// Account balance snapshot after this transaction settled.
    pub balance_after: Balance,
    pub created_at: DateTime<Utc>,
}
