//! The fixed table rules.

/// The dealer hits below this score and stands at or above it.
pub const DEALER_MIN_SCORE: u8 = 17;

/// Best possible score; anything above busts.
pub const BLACKJACK: u8 = 21;

/// Number of cards that make a natural blackjack.
pub const CARDS_FOR_BLACKJACK: usize = 2;

/// Both cards of a pair must be worth at least this much to split.
pub const MIN_CARD_TO_SPLIT: u8 = 10;

/// Multiplier applied to a winning bet.
pub const WIN_MULTIPLIER: usize = 2;

/// Starting stake for a new player.
pub const PLAYER_CHIPS: usize = 100;

/// Dealer stake, large enough that the house never runs dry.
pub const DEALER_CHIPS: usize = 100_000;

/// Default dealer name.
pub const DEALER_NAME: &str = "Dealer";
