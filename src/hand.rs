//! Bet-bearing hands of cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::rules::MIN_CARD_TO_SPLIT;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandStatus {
    /// No action taken yet.
    #[default]
    Open,
    /// The hand has drawn at least one card.
    Hitting,
    /// The hand has stood and takes no more cards.
    Stand,
}

/// One bettable collection of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            status: HandStatus::Open,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
            status: HandStatus::Open,
        }
    }

    /// Adds a card without touching the status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Draws one card from `draw` into the hand.
    ///
    /// Returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandStood`] if the hand has stood, or whatever
    /// error the card source reports.
    pub fn hit<F, E>(&mut self, draw: F) -> Result<Card, ActionError>
    where
        F: FnOnce() -> Result<Card, E>,
        ActionError: From<E>,
    {
        if self.is_stand() {
            return Err(ActionError::HandStood);
        }

        let card = draw()?;
        self.cards.push(card);
        self.status = HandStatus::Hitting;
        Ok(card)
    }

    /// Stands on the hand. Standing twice is a no-op.
    pub const fn stand(&mut self) {
        self.status = HandStatus::Stand;
    }

    /// Returns whether the hand has stood.
    #[must_use]
    pub const fn is_stand(&self) -> bool {
        matches!(self.status, HandStatus::Stand)
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand can be split.
    ///
    /// Card values are compared, not ranks, so a ten and a king qualify.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2
            && self
                .cards
                .iter()
                .all(|card| card.value() >= MIN_CARD_TO_SPLIT)
    }

    /// Splits off the second card into a new hand.
    ///
    /// Both hands keep half of the bet, rounded toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] unless [`Hand::can_split`] holds.
    pub fn split(&mut self) -> Result<Self, ActionError> {
        if !self.can_split() {
            return Err(ActionError::CannotSplit);
        }

        let card = self.cards.pop().ok_or(ActionError::CannotSplit)?;
        self.bet /= 2;
        Ok(Self::from_split(card, self.bet))
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.set_hidden(false);
        }
    }

    /// Sum of the visible card values.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0, |total: u8, card| total.saturating_add(card.value()))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently added card.
    pub fn last_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Zeroes the bet once it has been paid out.
    pub const fn reset_bet(&mut self) {
        self.bet = 0;
    }
}
