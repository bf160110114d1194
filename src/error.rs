use thiserror::Error;

/// Reasons a payment request can be declined.
///
/// Every decline is an expected, user-correctable condition. The `Display`
/// messages are the user-facing wording; callers render them directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    #[error("only contactless (NFC) payments are allowed in offline mode")]
    OfflineRestriction,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("recipient is required for this payment method")]
    MissingRecipient,
    #[error("insufficient balance")]
    InsufficientFunds,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(#[from] DeclineReason),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
