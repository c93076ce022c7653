//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::decision::DecisionProvider;
use crate::deck::Deck;
use crate::error::GameError;
use crate::observer::GameObserver;
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant, Player};

mod actions;
mod bet;
mod dealer;
pub mod state;
pub mod variant;

pub use state::{GameState, Side, Snapshot};
pub use variant::{SingleDeck, Variant};

/// A blackjack table that sequences turns between players and the dealer.
///
/// The game owns the deck, the players, and the dealer. Decisions come from a
/// [`DecisionProvider`]; every state transition is reported to a
/// [`GameObserver`]. The [`Variant`] decides which deck each round uses.
pub struct Game<D, O, V = SingleDeck> {
    players: Vec<Player>,
    dealer: Dealer,
    deck: Deck,
    variant: V,
    rng: ChaCha8Rng,
    decisions: D,
    observer: O,
    current_player: Option<usize>,
    winner: Option<Side>,
    state: Option<GameState>,
}

impl<D, O> Game<D, O, SingleDeck>
where
    D: DecisionProvider,
    O: GameObserver,
{
    /// Creates a single-deck game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blackjack_table::{Game, GameOptions, NullObserver, Player, ScriptedDecisions};
    ///
    /// let players = vec![Player::new("Ada", 100)];
    /// let mut game = Game::new(
    ///     players,
    ///     &GameOptions::default(),
    ///     ScriptedDecisions::default(),
    ///     NullObserver,
    ///     42,
    /// );
    /// game.play_round().unwrap();
    /// ```
    #[must_use]
    pub fn new(
        players: Vec<Player>,
        options: &GameOptions,
        decisions: D,
        observer: O,
        seed: u64,
    ) -> Self {
        Self::with_variant(players, options, decisions, observer, SingleDeck, seed)
    }
}

impl<D, O, V> Game<D, O, V>
where
    D: DecisionProvider,
    O: GameObserver,
    V: Variant,
{
    /// Creates a game whose decks come from `variant`.
    #[must_use]
    pub fn with_variant(
        players: Vec<Player>,
        options: &GameOptions,
        decisions: D,
        observer: O,
        variant: V,
        seed: u64,
    ) -> Self {
        Self {
            players,
            dealer: Dealer::new(options.dealer_name.clone(), options.dealer_money),
            deck: Deck::default(),
            variant,
            rng: ChaCha8Rng::seed_from_u64(seed),
            decisions,
            observer,
            current_player: None,
            winner: None,
            state: None,
        }
    }

    /// Returns whether every player has run out of money.
    pub fn is_over(&self) -> bool {
        self.players.iter().all(Player::is_bankrupt)
    }

    /// Returns the players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a player by index.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns a player by index, mutably.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealer, mutably.
    pub const fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// Returns the deck of the current round.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the last state entered, if any.
    pub const fn state(&self) -> Option<GameState> {
        self.state
    }

    /// Returns the winner of the last resolution check.
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Returns the index of the player whose hands are being played.
    pub const fn current_player_index(&self) -> Option<usize> {
        self.current_player
    }

    /// Returns the player whose hands are being played.
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.and_then(|index| self.players.get(index))
    }

    /// Selects the player whose hands [`Game::process_hand`] plays.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player sits at `index`.
    pub fn set_current_player(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.players.len() {
            return Err(GameError::PlayerNotFound);
        }
        self.current_player = Some(index);
        Ok(())
    }

    /// Returns the decision provider.
    pub const fn decisions(&self) -> &D {
        &self.decisions
    }

    /// Returns the observer.
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Plays one full round: bets, deal, then every player's hands in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or a decision is out of range.
    pub fn play_round(&mut self) -> Result<(), GameError> {
        self.init_game()?;
        for index in 0..self.players.len() {
            self.set_current_player(index)?;
            self.process_hand()?;
        }
        Ok(())
    }

    fn current_index(&self) -> Result<usize, GameError> {
        self.current_player
            .filter(|index| *index < self.players.len())
            .ok_or(GameError::PlayerNotFound)
    }

    fn player_at(&self, index: usize) -> Result<&Player, GameError> {
        self.players.get(index).ok_or(GameError::PlayerNotFound)
    }

    fn player_at_mut(&mut self, index: usize) -> Result<&mut Player, GameError> {
        self.players.get_mut(index).ok_or(GameError::PlayerNotFound)
    }

    fn participant(&self, side: Side) -> Option<&dyn Participant> {
        match side {
            Side::Player(index) => self
                .players
                .get(index)
                .map(|player| player as &dyn Participant),
            Side::Dealer => Some(&self.dealer as &dyn Participant),
        }
    }

    /// Enters `state` and notifies the observer.
    fn set_state(&mut self, state: GameState) {
        self.state = Some(state);
        debug!(?state, winner = ?self.winner, "state");

        let snapshot = Snapshot {
            state,
            current_index: self.current_player,
            current_player: self.current_player.and_then(|index| self.players.get(index)),
            dealer: &self.dealer,
            winner: self.winner,
        };
        self.observer.on_state(&snapshot);
    }
}
