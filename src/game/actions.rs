extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::decision::DecisionProvider;
use crate::error::GameError;
use crate::observer::GameObserver;
use crate::participant::{Action, Participant};

use super::{Game, GameState, Side, Variant};

impl<D, O, V> Game<D, O, V>
where
    D: DecisionProvider,
    O: GameObserver,
    V: Variant,
{
    /// Lets one side take a single turn, announcing it before and after.
    ///
    /// # Errors
    ///
    /// Returns an error if the participant cannot act.
    pub fn process_turn(&mut self, side: Side) -> Result<Action, GameError> {
        self.set_state(match side {
            Side::Player(_) => GameState::PlayerTurn,
            Side::Dealer => GameState::DealerTurn,
        });

        let action = match side {
            Side::Player(index) => self
                .players
                .get_mut(index)
                .ok_or(GameError::PlayerNotFound)?
                .turn(&mut self.deck, &mut self.decisions)?,
            Side::Dealer => self.dealer.turn(&mut self.deck, &mut self.decisions)?,
        };
        debug!(?side, %action, "turn taken");

        self.set_state(GameState::NextTurn);
        Ok(action)
    }

    /// Makes one of the current player's hands active.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] without a current player.
    pub fn set_active_hand(&mut self, hand: usize) -> Result<(), GameError> {
        let index = self.current_index()?;
        self.player_at_mut(index)?.seat_mut().set_active_hand(hand);
        self.set_state(GameState::ActiveHand);
        Ok(())
    }

    /// Plays every hand of the current player to the end.
    ///
    /// A natural blackjack (or bust) on the dealt cards ends the player's
    /// round at once. Otherwise each hand, including hands created by
    /// splitting along the way, is played until it stands or resolves; the
    /// dealer then plays and the surviving hands are settled.
    ///
    /// # Errors
    ///
    /// Returns an error without a current player, if the deck runs out, or if
    /// a decision is out of range.
    pub fn process_hand(&mut self) -> Result<(), GameError> {
        let index = self.current_index()?;
        if !self.player_at(index)?.has_active_hand() {
            return Ok(());
        }
        let side = Side::Player(index);

        if self.blackjack_or_busted(side, Side::Dealer, None).is_some() {
            self.player_at_mut(index)?.seat_mut().clean_hands(None);
            return Ok(());
        }

        // Removals wait until every hand has been played so indices stay put.
        let mut finished = Vec::new();
        let mut hand = 0;
        while hand < self.player_at(index)?.hands().len() {
            self.set_active_hand(hand)?;
            while !self.player_at(index)?.is_stand() {
                self.process_turn(side)?;
                if self.blackjack_or_busted(side, Side::Dealer, Some(hand)).is_some() {
                    finished.push(hand);
                    break;
                }
            }
            hand += 1;
        }
        if !finished.is_empty() {
            self.player_at_mut(index)?
                .seat_mut()
                .clean_hands(Some(finished.as_slice()));
        }

        self.play_dealer(index)
    }
}
