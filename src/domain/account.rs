use crate::error::DeclineReason;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary value with cents precision.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

// Implement basic arithmetic for Balance to make it a usable Value Object
impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The state of the session account.
///
/// Created once per session, mutated only by successful payment authorization
/// or by toggling offline mode. The balance never goes negative.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Funds available for payments.
    pub balance: Balance,
    /// When set, only contactless (NFC) payments are permitted.
    pub offline_mode: bool,
}

impl Account {
    pub fn new(balance: Balance, offline_mode: bool) -> Self {
        Self {
            balance,
            offline_mode,
        }
    }

    /// Subtracts `amount` from the balance if sufficient funds are available.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), DeclineReason> {
        if self.balance.value() >= amount {
            self.balance -= Balance::new(amount);
            Ok(())
        } else {
            Err(DeclineReason::InsufficientFunds)
        }
    }
}
