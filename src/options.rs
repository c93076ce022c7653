//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use crate::rules::{DEALER_CHIPS, DEALER_NAME, PLAYER_CHIPS};

/// Configuration options for a blackjack table.
///
/// The rules themselves are fixed (see [`crate::rules`]); these options only
/// cover who sits at the table and with how much money.
///
/// ```
/// use blackjack_table::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_name("House")
///     .with_starting_money(250);
/// assert_eq!(options.dealer_name, "House");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name shown for the dealer.
    pub dealer_name: String,
    /// Dealer's stake.
    pub dealer_money: usize,
    /// Money each player starts the session with.
    pub starting_money: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_name: String::from(DEALER_NAME),
            dealer_money: DEALER_CHIPS,
            starting_money: PLAYER_CHIPS,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name("Croupier");
    /// assert_eq!(options.dealer_name, "Croupier");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the dealer's stake.
    #[must_use]
    pub fn with_dealer_money(mut self, money: usize) -> Self {
        self.dealer_money = money;
        self
    }

    /// Sets the money each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_money(500);
    /// assert_eq!(options.starting_money, 500);
    /// ```
    #[must_use]
    pub fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }
}
