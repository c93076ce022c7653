//! Game state types.

use crate::participant::{Dealer, Participant, Player};

/// Round-phase markers reported to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// A hand was resolved by comparing scores against the dealer.
    WinnerBiggerScore,
    /// A participant hit blackjack.
    Blackjack,
    /// A participant went over 21.
    Busted,
    /// A new hand of the current player became active.
    ActiveHand,
    /// A turn finished.
    NextTurn,
    /// The current player is about to act.
    PlayerTurn,
    /// The dealer is about to act.
    DealerTurn,
}

/// One side of a player-versus-dealer contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player at this index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// A view of the game handed to the observer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The state just entered.
    pub state: GameState,
    /// Index of the player whose hands are being played.
    pub current_index: Option<usize>,
    /// The player whose hands are being played.
    pub current_player: Option<&'a Player>,
    /// The dealer.
    pub dealer: &'a Dealer,
    /// Winner of the last resolution check, if any.
    pub winner: Option<Side>,
}

impl<'a> Snapshot<'a> {
    /// Resolves [`Snapshot::winner`] to the participant it names.
    #[must_use]
    pub fn winner_participant(&self) -> Option<&'a dyn Participant> {
        match self.winner? {
            Side::Dealer => Some(self.dealer as &dyn Participant),
            Side::Player(index) if self.current_index == Some(index) => {
                self.current_player.map(|player| player as &dyn Participant)
            }
            Side::Player(_) => None,
        }
    }

    /// The participant who lost the last resolution check, if any.
    #[must_use]
    pub fn loser_participant(&self) -> Option<&'a dyn Participant> {
        match self.winner? {
            Side::Dealer => self.current_player.map(|player| player as &dyn Participant),
            Side::Player(_) => Some(self.dealer as &dyn Participant),
        }
    }
}
