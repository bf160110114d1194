use crate::domain::account::Account;
use crate::domain::payment::{PaymentMethod, PaymentRequest, Transaction, TransactionStatus};
use crate::error::DeclineReason;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// The outcome of a successful authorization: the mutated account snapshot and
/// the settled transaction to prepend to the ledger.
#[derive(Debug, PartialEq, Clone)]
pub struct Authorization {
    pub account: Account,
    pub transaction: Transaction,
}

/// Validates a payment request against the account and computes the resulting
/// mutation.
///
/// Checks run in a fixed order and short-circuit on the first failure, so a
/// decline never has partial side effects:
/// 1. offline mode permits only contactless payments
/// 2. the amount must be positive
/// 3. transfers and PIX require a recipient
/// 4. the amount must not exceed the balance
///
/// On success the returned account carries the new balance and the transaction
/// records a snapshot of it, so the two can never disagree.
pub fn authorize(
    account: &Account,
    request: &PaymentRequest,
    at: DateTime<Utc>,
) -> Result<Authorization, DeclineReason> {
    if account.offline_mode && request.method != PaymentMethod::Nfc {
        return Err(DeclineReason::OfflineRestriction);
    }

    if request.amount <= Decimal::ZERO {
        return Err(DeclineReason::InvalidAmount);
    }

    if request.method.requires_recipient()
        && request.recipient.as_deref().is_none_or(str::is_empty)
    {
        return Err(DeclineReason::MissingRecipient);
    }

    let mut account = account.clone();
    account.debit(request.amount)?;

    let transaction = Transaction {
        r#type: request.method.into(),
        amount: request.amount,
        recipient: request.recipient.clone().filter(|r| !r.is_empty()),
        description: request
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| request.method.default_description().to_string()),
        status: TransactionStatus::Completed,
        balance_after: account.balance,
        created_at: at,
    };

    Ok(Authorization {
        account,
        transaction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use crate::domain::payment::{PaymentMethod, TransactionType};
    use rust_decimal_macros::dec;

    fn account(balance: Decimal, offline: bool) -> Account {
        Account::new(Balance::new(balance), offline)
    }

    fn request(method: PaymentMethod, amount: Decimal, recipient: Option<&str>) -> PaymentRequest {
        PaymentRequest {
            method,
            amount,
            recipient: recipient.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_successful_pix_payment() {
        let result = authorize(
            &account(dec!(12345.67), false),
            &request(PaymentMethod::Pix, dec!(50.00), Some("x@y.com")),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(result.account.balance, Balance::new(dec!(12295.67)));
        assert_eq!(result.transaction.r#type, TransactionType::Pix);
        assert_eq!(result.transaction.balance_after, Balance::new(dec!(12295.67)));
        assert_eq!(result.transaction.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_insufficient_funds() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Transfer, dec!(150.00), Some("acct-1")),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::InsufficientFunds));
    }

    #[test]
    fn test_offline_mode_blocks_pix() {
        let result = authorize(
            &account(dec!(100.00), true),
            &request(PaymentMethod::Pix, dec!(10.00), Some("x")),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::OfflineRestriction));
    }

    #[test]
    fn test_offline_mode_allows_nfc() {
        let result = authorize(
            &account(dec!(100.00), true),
            &request(PaymentMethod::Nfc, dec!(10.00), None),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(result.account.balance, Balance::new(dec!(90.00)));
        assert_eq!(result.transaction.r#type, TransactionType::NfcPayment);
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Pix, dec!(0), Some("x")),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::InvalidAmount));
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Transfer, dec!(-5.00), Some("acct-1")),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::InvalidAmount));
    }

    #[test]
    fn test_transfer_requires_recipient() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Transfer, dec!(10.00), Some("")),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::MissingRecipient));

        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Transfer, dec!(10.00), None),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::MissingRecipient));
    }

    #[test]
    fn test_nfc_skips_recipient_check() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Nfc, dec!(10.00), None),
            Utc::now(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_offline_check_runs_before_amount_check() {
        // An offline transfer with a bogus amount reports the offline
        // restriction, not the amount.
        let result = authorize(
            &account(dec!(100.00), true),
            &request(PaymentMethod::Transfer, dec!(-1.00), None),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::OfflineRestriction));
    }

    #[test]
    fn test_recipient_check_runs_before_funds_check() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Pix, dec!(500.00), None),
            Utc::now(),
        );
        assert_eq!(result, Err(DeclineReason::MissingRecipient));
    }

    #[test]
    fn test_description_defaults_per_method() {
        let result = authorize(
            &account(dec!(100.00), false),
            &request(PaymentMethod::Nfc, dec!(10.00), None),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(result.transaction.description, "Contactless payment");
    }

    #[test]
    fn test_balance_never_negative() {
        // Spending the exact balance is the boundary; one cent more declines.
        let acct = account(dec!(100.00), false);
        let ok = authorize(
            &acct,
            &request(PaymentMethod::Pix, dec!(100.00), Some("x")),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(ok.account.balance, Balance::ZERO);

        let err = authorize(
            &acct,
            &request(PaymentMethod::Pix, dec!(100.01), Some("x")),
            Utc::now(),
        );
        assert_eq!(err, Err(DeclineReason::InsufficientFunds));
    }
}
