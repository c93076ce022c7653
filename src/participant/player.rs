extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::decision::DecisionProvider;
use crate::deck::Deck;
use crate::error::{ActionError, BetError};
use crate::hand::Hand;
use crate::rules::WIN_MULTIPLIER;

use super::{Action, Participant, Seat};

/// A human seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
}

impl Player {
    /// Creates a player with the given starting money.
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self {
            seat: Seat::new(name, money),
        }
    }

    /// Returns whether `amount` could be bet right now.
    #[must_use]
    pub const fn is_valid_bet(&self, amount: usize) -> bool {
        amount > 0 && amount <= self.seat.money()
    }

    /// Places a bet and opens a hand for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the player's money.
    /// Nothing changes on error.
    pub fn make_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.seat.money() {
            return Err(BetError::InsufficientFunds);
        }

        self.seat.take_money(amount);
        self.seat.new_hand(amount);
        debug!(player = self.seat.name(), amount, "bet placed");
        Ok(())
    }

    /// Splits the active hand and draws a card onto the hand that stays active.
    ///
    /// The split-off hand is appended to the player's hands and played later.
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active hand, it cannot be split, or the
    /// deck is empty.
    pub fn split(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        let hand = self
            .seat
            .active_hand_mut()
            .ok_or(ActionError::NoActiveHand)?;
        let new_hand = hand.split()?;
        debug!(
            player = self.seat.name(),
            bet = new_hand.bet(),
            "hand split"
        );
        self.seat.push_hand(new_hand);
        self.hit(deck)
    }

    /// Pays out `hand`, or every hand when `None`, and returns the total paid.
    ///
    /// Each paid hand's bet is zeroed, so paying the same hand again adds
    /// nothing.
    pub fn win_bet(&mut self, hand: Option<usize>) -> usize {
        let indices: Vec<usize> = match hand {
            Some(index) => alloc::vec![index],
            None => (0..self.seat.hands().len()).collect(),
        };

        let mut paid: usize = 0;
        for index in indices {
            if let Some(hand) = self.seat.hand_mut(index) {
                paid = paid.saturating_add(hand.bet().saturating_mul(WIN_MULTIPLIER));
                hand.reset_bet();
            }
        }
        self.seat.add_money(paid);
        paid
    }

    /// Returns whether the player has run out of money.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.seat.money() == 0
    }
}

impl Participant for Player {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn allowed_actions(&self) -> Vec<Action> {
        let mut actions = alloc::vec![Action::Hit, Action::Stand];
        if self.seat.active_hand().is_some_and(Hand::can_split) {
            actions.push(Action::Split);
        }
        actions
    }

    fn turn(
        &mut self,
        deck: &mut Deck,
        decisions: &mut dyn DecisionProvider,
    ) -> Result<Action, ActionError> {
        let actions = self.allowed_actions();
        let choice = decisions.request_action(self, &actions);
        let action = *actions.get(choice).ok_or(ActionError::InvalidChoice {
            choice,
            available: actions.len(),
        })?;

        match action {
            Action::Hit => {
                self.hit(deck)?;
            }
            Action::Stand => self.stand()?,
            Action::Split => {
                self.split(deck)?;
            }
        }
        Ok(action)
    }

    fn is_paying(&self) -> bool {
        true
    }
}
