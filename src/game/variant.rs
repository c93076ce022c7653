//! How each round's deck is prepared.

use rand::RngCore;

use crate::deck::Deck;

/// Supplies the deck a round is played from.
pub trait Variant {
    /// Builds the deck for a new round.
    fn new_deck(&mut self, rng: &mut dyn RngCore) -> Deck;
}

/// One fresh, shuffled 52-card deck every round.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleDeck;

impl Variant for SingleDeck {
    fn new_deck(&mut self, rng: &mut dyn RngCore) -> Deck {
        let mut deck = Deck::create(1);
        deck.shuffle(rng);
        deck
    }
}
