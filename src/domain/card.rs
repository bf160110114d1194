use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MASK_CHAR: char = '*';

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Debit,
    Credit,
}

/// A virtual card held by the session account.
///
/// `limit` and `used_limit` are populated for credit cards only.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Card {
    pub card_number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: String,
    pub card_type: CardType,
    pub limit: Option<Decimal>,
    pub used_limit: Option<Decimal>,
    pub is_blocked: bool,
}

impl Card {
    /// Flips the block flag. The flag persists across offline-mode changes.
    pub fn toggle_block(mut self) -> Self {
        self.is_blocked = !self.is_blocked;
        self
    }

    /// Derived display state: a card cannot be used for online purchases when
    /// it is blocked or while the account is in offline mode. Contactless
    /// payments are unaffected by either flag.
    pub fn blocked_for_online(&self, offline_mode: bool) -> bool {
        self.is_blocked || offline_mode
    }
}

/// Projection of a [`Card`] safe to hand to the presentation layer.
///
/// The CVV is only present when the card was revealed.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DisplayCard {
    pub card_number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: Option<String>,
    pub card_type: CardType,
    pub is_blocked: bool,
}

/// Produces the display projection of a card.
///
/// When `reveal` is false, every digit of the card number except the last four
/// is replaced with the mask character, the holder name is fully masked, and
/// the CVV is omitted. Masking is pure and idempotent: masked characters are
/// no longer digits, so masking an already-masked projection changes nothing.
pub fn mask_card(card: &Card, reveal: bool) -> DisplayCard {
    if reveal {
        return DisplayCard {
            card_number: card.card_number.clone(),
            holder: card.holder.clone(),
            expiry: card.expiry.clone(),
            cvv: Some(card.cvv.clone()),
            card_type: card.card_type,
            is_blocked: card.is_blocked,
        };
    }

    DisplayCard {
        card_number: mask_digits_except_last_four(&card.card_number),
        holder: card
            .holder
            .chars()
            .map(|c| if c.is_whitespace() { c } else { MASK_CHAR })
            .collect(),
        expiry: card.expiry.clone(),
        cvv: None,
        card_type: card.card_type,
        is_blocked: card.is_blocked,
    }
}

fn mask_digits_except_last_four(number: &str) -> String {
    let digit_count = number.chars().filter(|c| c.is_ascii_digit()).count();
    let to_mask = digit_count.saturating_sub(4);

    let mut masked = 0;
    number
        .chars()
        .map(|c| {
            if c.is_ascii_digit() && masked < to_mask {
                masked += 1;
                MASK_CHAR
            } else {
                c
            }
        })
        .collect()
}
