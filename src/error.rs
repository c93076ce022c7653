//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is larger than the player's money.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during participant actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The participant holds no active hand.
    #[error("no active hand")]
    NoActiveHand,
    /// The hand has already stood.
    #[error("hand has already stood")]
    HandStood,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The decision provider picked an action outside the offered list.
    #[error("action choice {choice} is out of range ({available} offered)")]
    InvalidChoice {
        /// Index returned by the decision provider.
        choice: usize,
        /// Number of actions that were offered.
        available: usize,
    },
    /// No cards left in the deck.
    #[error(transparent)]
    NoCards(#[from] DeckError),
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A participant action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The deck ran out while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// No player is seated at the given index.
    #[error("player not found")]
    PlayerNotFound,
    /// The player has no money left to bet.
    #[error("player is bankrupt")]
    Bankrupt,
}
