//! Card types and the fixed rank table.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the label used when the suit is shown to a player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spades => "\u{2660} (black)",
            Self::Hearts => "\u{2665} (red)",
            Self::Diamonds => "\u{2666} (red)",
            Self::Clubs => "\u{2663} (black)",
        }
    }
}

/// Rank representation paired with its scoring value.
///
/// Aces always count 11; there is no soft total.
pub const RANKS: [(&str, u8); 13] = [
    ("A", 11),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 10),
    ("Q", 10),
    ("K", 10),
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// A hidden card keeps its value but scores zero until it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// How the card face is written (`"A"`, `"7"`, `"K"`, ...).
    pub representation: &'static str,
    value: u8,
    hidden: bool,
}

impl Card {
    /// Creates a new, face-up card.
    ///
    /// Note: This function does not check `value` against the rank table.
    #[must_use]
    pub const fn new(suit: Suit, representation: &'static str, value: u8) -> Self {
        Self {
            suit,
            representation,
            value,
            hidden: false,
        }
    }

    /// Returns the scoring value, or 0 while the card is hidden.
    #[must_use]
    pub const fn value(&self) -> u8 {
        if self.hidden { 0 } else { self.value }
    }

    /// Returns the value printed on the card regardless of visibility.
    #[must_use]
    pub const fn base_value(&self) -> u8 {
        self.value
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the card face down (`true`) or face up (`false`).
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
