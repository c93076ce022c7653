extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::decision::DecisionProvider;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::rules::DEALER_MIN_SCORE;

use super::{Action, Participant, Seat};

/// The house. Plays by fixed rules and never bets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    seat: Seat,
}

impl Dealer {
    /// Creates a dealer with the given stake.
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self {
            seat: Seat::new(name, money),
        }
    }
}

impl Participant for Dealer {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn allowed_actions(&self) -> Vec<Action> {
        alloc::vec![Action::Hit, Action::Stand]
    }

    /// Reveals the hole card, then hits below 17 and stands otherwise.
    fn turn(
        &mut self,
        deck: &mut Deck,
        _decisions: &mut dyn DecisionProvider,
    ) -> Result<Action, ActionError> {
        self.seat
            .active_hand_mut()
            .ok_or(ActionError::NoActiveHand)?
            .reveal();

        if self.score() < DEALER_MIN_SCORE {
            self.hit(deck)?;
            Ok(Action::Hit)
        } else {
            self.stand()?;
            Ok(Action::Stand)
        }
    }

    /// Draws into the active hand; the second card is dealt face down.
    fn hit(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        let hand = self
            .seat
            .active_hand_mut()
            .ok_or(ActionError::NoActiveHand)?;
        let mut card = hand.hit(|| deck.draw())?;

        if hand.len() == 2 {
            if let Some(hole) = hand.last_mut() {
                hole.set_hidden(true);
                card = *hole;
            }
            debug!(dealer = self.seat.name(), "hole card dealt");
        } else {
            let score = hand.score();
            debug!(
                dealer = self.seat.name(),
                card = card.representation,
                score,
                "hit"
            );
        }
        Ok(card)
    }

    fn is_paying(&self) -> bool {
        false
    }
}
