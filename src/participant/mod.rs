//! Participants: the players and the dealer.
//!
//! Both kinds share a [`Seat`] (name, money, hands) and differ in how they
//! take a turn, which the [`Participant`] trait captures.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::decision::DecisionProvider;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;

mod dealer;
mod player;

pub use dealer::Dealer;
pub use player::Player;

/// An action a participant can take on its active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Returns the lowercase action name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Split => "split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State shared by every participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    name: String,
    money: usize,
    hands: Vec<Hand>,
    /// Index into `hands`; always in bounds when set.
    active: Option<usize>,
}

impl Seat {
    /// Creates a seat with no hands.
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self {
            name: name.into(),
            money,
            hands: Vec::new(),
            active: None,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the money not currently at stake.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Adds money to the seat.
    pub const fn add_money(&mut self, amount: usize) {
        self.money = self.money.saturating_add(amount);
    }

    pub(crate) const fn take_money(&mut self, amount: usize) {
        self.money = self.money.saturating_sub(amount);
    }

    /// Returns all hands, in the order they were opened.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns a hand by index.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the index of the active hand.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the active hand.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.active.and_then(|index| self.hands.get(index))
    }

    /// Returns the active hand mutably.
    pub fn active_hand_mut(&mut self) -> Option<&mut Hand> {
        self.active.and_then(|index| self.hands.get_mut(index))
    }

    /// Makes the hand at `index` active. Out-of-range indices are ignored.
    pub fn set_active_hand(&mut self, index: usize) {
        if index < self.hands.len() {
            self.active = Some(index);
        }
    }

    /// Opens a new empty hand with the given bet.
    ///
    /// The new hand becomes active if no hand was.
    pub fn new_hand(&mut self, bet: usize) {
        self.push_hand(Hand::new(bet));
    }

    /// Appends an existing hand, activating it if no hand was active.
    pub fn push_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
        if self.active.is_none() {
            self.active = Some(self.hands.len() - 1);
        }
    }

    /// Removes one hand and returns it.
    ///
    /// If the active hand is removed the first remaining hand takes over.
    pub fn clean_hand(&mut self, index: usize) -> Option<Hand> {
        if index >= self.hands.len() {
            return None;
        }

        let hand = self.hands.remove(index);
        self.active = match self.active {
            _ if self.hands.is_empty() => None,
            Some(active) if active == index => Some(0),
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Some(hand)
    }

    /// Removes the hands at `indices`, or every hand when `None`.
    pub fn clean_hands(&mut self, indices: Option<&[usize]>) {
        let Some(indices) = indices else {
            self.hands.clear();
            self.active = None;
            return;
        };

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        // Highest first so the remaining indices stay valid.
        for index in sorted.into_iter().rev() {
            self.clean_hand(index);
        }
    }
}

/// Behavior shared by players and the dealer.
pub trait Participant {
    /// Returns the shared seat state.
    fn seat(&self) -> &Seat;

    /// Returns the shared seat state mutably.
    fn seat_mut(&mut self) -> &mut Seat;

    /// Actions currently available on the active hand.
    fn allowed_actions(&self) -> Vec<Action>;

    /// Takes one turn on the active hand and returns the action performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot be carried out.
    fn turn(
        &mut self,
        deck: &mut Deck,
        decisions: &mut dyn DecisionProvider,
    ) -> Result<Action, ActionError>;

    /// Whether this participant collects winnings.
    fn is_paying(&self) -> bool;

    /// Draws a card from `deck` into the active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active hand, it has stood, or the deck
    /// is empty.
    fn hit(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        let seat = self.seat_mut();
        let hand = seat.active_hand_mut().ok_or(ActionError::NoActiveHand)?;
        let card = hand.hit(|| deck.draw())?;
        let score = hand.score();
        debug!(participant = seat.name(), card = card.representation, score, "hit");
        Ok(card)
    }

    /// Stands on the active hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoActiveHand`] if there is no active hand.
    fn stand(&mut self) -> Result<(), ActionError> {
        let seat = self.seat_mut();
        let hand = seat.active_hand_mut().ok_or(ActionError::NoActiveHand)?;
        hand.stand();
        let score = hand.score();
        debug!(participant = seat.name(), score, "stand");
        Ok(())
    }

    /// Returns the participant's name.
    fn name(&self) -> &str {
        self.seat().name()
    }

    /// Returns the money not currently at stake.
    fn money(&self) -> usize {
        self.seat().money()
    }

    /// Returns all hands.
    fn hands(&self) -> &[Hand] {
        self.seat().hands()
    }

    /// Returns the active hand.
    fn active_hand(&self) -> Option<&Hand> {
        self.seat().active_hand()
    }

    /// Returns whether any hand is active.
    fn has_active_hand(&self) -> bool {
        self.active_hand().is_some()
    }

    /// Returns whether the active hand has stood.
    fn is_stand(&self) -> bool {
        self.active_hand().is_some_and(Hand::is_stand)
    }

    /// Score of the active hand, 0 without one.
    fn score(&self) -> u8 {
        self.active_hand().map_or(0, Hand::score)
    }

    /// Number of cards in the active hand, 0 without one.
    fn card_count(&self) -> usize {
        self.active_hand().map_or(0, Hand::len)
    }
}
