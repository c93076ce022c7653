//! A full session: seat the players, then play rounds until everyone is broke.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::info;

use crate::decision::DecisionProvider;
use crate::error::GameError;
use crate::game::{Game, SingleDeck};
use crate::observer::GameObserver;
use crate::options::GameOptions;
use crate::participant::Player;

/// A single-deck game together with its round counter.
pub struct Session<D, O> {
    game: Game<D, O, SingleDeck>,
    rounds: u32,
}

impl<D, O> Session<D, O>
where
    D: DecisionProvider,
    O: GameObserver,
{
    /// Seats one player per name, each with the configured starting money.
    #[must_use]
    pub fn new<I, S>(names: I, options: &GameOptions, decisions: D, observer: O, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::new(name, options.starting_money))
            .collect();
        info!(players = players.len(), seed, "session created");

        Self {
            game: Game::new(players, options, decisions, observer, seed),
            rounds: 0,
        }
    }

    /// Plays rounds until every player is bankrupt or `max_rounds` is reached.
    ///
    /// Returns the number of rounds played by this call.
    ///
    /// # Errors
    ///
    /// Returns the first error that aborts a round.
    pub fn run(&mut self, max_rounds: Option<u32>) -> Result<u32, GameError> {
        let mut played = 0;
        while !self.game.is_over() && max_rounds.is_none_or(|max| played < max) {
            self.rounds += 1;
            info!(round = self.rounds, "new game");
            self.game.play_round()?;
            played += 1;
        }

        if self.game.is_over() {
            info!(rounds = self.rounds, "all players are bankrupt");
        }
        Ok(played)
    }

    /// Total rounds started over the session.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game<D, O, SingleDeck> {
        &self.game
    }

    /// Consumes the session and returns the game.
    #[must_use]
    pub fn into_game(self) -> Game<D, O, SingleDeck> {
        self.game
    }
}
