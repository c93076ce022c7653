use tracing::{info, warn};

use crate::decision::DecisionProvider;
use crate::error::GameError;
use crate::observer::GameObserver;
use crate::participant::{Participant, Player};

use super::{Game, Variant};

impl<D, O, V> Game<D, O, V>
where
    D: DecisionProvider,
    O: GameObserver,
    V: Variant,
{
    /// Starts a round: fresh deck, cleared hands, bets, and the initial deal.
    ///
    /// Every player with money is asked for a bet until a valid one arrives,
    /// then dealt two cards. Bankrupt players sit the round out. The dealer
    /// gets two cards last, the second one face down.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while dealing.
    pub fn init_game(&mut self) -> Result<(), GameError> {
        self.deck = self.variant.new_deck(&mut self.rng);
        self.current_player = None;
        self.winner = None;

        for player in &mut self.players {
            player.seat_mut().clean_hands(None);
        }
        self.dealer.seat_mut().clean_hands(None);

        self.observer.on_round_start();
        info!(
            players = self.players.len(),
            cards = self.deck.len(),
            "round started"
        );

        for index in 0..self.players.len() {
            if self.players.get(index).is_none_or(Player::is_bankrupt) {
                info!(player = index, "bankrupt player sits out");
                continue;
            }

            self.ask_bet(index)?;
            let player = self
                .players
                .get_mut(index)
                .ok_or(GameError::PlayerNotFound)?;
            player.hit(&mut self.deck)?;
            player.hit(&mut self.deck)?;
        }

        self.dealer.seat_mut().new_hand(0);
        self.dealer.hit(&mut self.deck)?;
        self.dealer.hit(&mut self.deck)?;

        Ok(())
    }

    /// Asks one player for a bet until it is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player sits at `index`,
    /// or [`GameError::Bankrupt`] if that player has no money to bet.
    pub fn ask_bet(&mut self, index: usize) -> Result<usize, GameError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::PlayerNotFound)?;
        if player.is_bankrupt() {
            return Err(GameError::Bankrupt);
        }

        loop {
            let amount = self.decisions.request_bet(player);
            match player.make_bet(amount) {
                Ok(()) => return Ok(amount),
                Err(error) => {
                    warn!(player = player.name(), amount, %error, "bet rejected");
                    self.observer.on_bet_rejected(player, amount, error);
                }
            }
        }
    }
}
