//! Plain-text rendering of the table.
//!
//! [`TextRenderer`] writes to any [`core::fmt::Write`], so it works the same
//! over a `String` buffer or a terminal adapter.

extern crate alloc;

use core::fmt::{self, Write};

use tracing::warn;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::BetError;
use crate::game::{GameState, Snapshot};
use crate::hand::Hand;
use crate::observer::GameObserver;
use crate::participant::{Action, Participant, Player};

const BANNER_WIDTH: usize = 30;

/// Observer that prints the table as text.
#[derive(Debug, Default)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one card line; hidden cards show only a placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_card(&mut self, card: &Card) -> fmt::Result {
        if card.is_hidden() {
            writeln!(self.out, "     [X] - hidden")
        } else {
            writeln!(
                self.out,
                "     {} - {}",
                card.representation,
                card.suit.label()
            )
        }
    }

    /// Writes every card of a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_hand(&mut self, hand: &Hand) -> fmt::Result {
        for card in hand.cards() {
            self.render_card(card)?;
        }
        Ok(())
    }

    /// Writes every card left in a deck, bottom first.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_deck(&mut self, deck: &Deck) -> fmt::Result {
        for card in deck.cards() {
            self.render_card(card)?;
        }
        Ok(())
    }

    /// Writes a participant's active hand and score.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_participant(&mut self, participant: &dyn Participant) -> fmt::Result {
        writeln!(self.out, "{} cards:", participant.name())?;
        if let Some(hand) = participant.active_hand() {
            self.render_hand(hand)?;
        }
        writeln!(self.out, "Score {}", participant.score())
    }

    /// Writes the index of the participant's active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_active_hand(&mut self, participant: &dyn Participant) -> fmt::Result {
        match participant.seat().active_index() {
            Some(index) => writeln!(self.out, "Hand: {index}"),
            None => Ok(()),
        }
    }

    /// Writes the numbered list of actions a player can choose from.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn render_options(&mut self, actions: &[Action]) -> fmt::Result {
        writeln!(self.out, "What do you want to do?")?;
        for (index, action) in actions.iter().enumerate() {
            writeln!(self.out, " {index} - {action}")?;
        }
        Ok(())
    }

    fn render_turn(&mut self, participant: &dyn Participant) -> fmt::Result {
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.out, " {} is playing", participant.name())?;
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))
    }

    fn render_status(&mut self, snapshot: &Snapshot<'_>) -> fmt::Result {
        if let Some(player) = snapshot.current_player {
            self.render_participant(player)?;
        }
        self.render_participant(snapshot.dealer)
    }

    fn render_banner(&mut self, title: &str, participant: &dyn Participant) -> fmt::Result {
        writeln!(self.out, "{}", "-".repeat(BANNER_WIDTH))?;
        writeln!(self.out, "{title}\n")?;
        self.render_participant(participant)?;
        writeln!(self.out, "{}", "-".repeat(BANNER_WIDTH))
    }

    fn render_state(&mut self, snapshot: &Snapshot<'_>) -> fmt::Result {
        match snapshot.state {
            GameState::WinnerBiggerScore => match snapshot.winner_participant() {
                Some(winner) => {
                    let title = alloc::format!("Winner => {}", winner.name());
                    self.render_banner(&title, winner)
                }
                None => Ok(()),
            },
            GameState::Blackjack => match snapshot.winner_participant() {
                Some(winner) => {
                    let title = alloc::format!("Blackjack for {}!!", winner.name());
                    self.render_banner(&title, winner)
                }
                None => Ok(()),
            },
            GameState::Busted => match snapshot.loser_participant() {
                Some(busted) => {
                    let title = alloc::format!("Sorry {} you're Busted!", busted.name());
                    self.render_banner(&title, busted)
                }
                None => Ok(()),
            },
            GameState::ActiveHand => {
                if let Some(player) = snapshot.current_player {
                    self.render_active_hand(player)?;
                }
                self.render_status(snapshot)
            }
            GameState::NextTurn => self.render_status(snapshot),
            GameState::PlayerTurn => match snapshot.current_player {
                Some(player) => self.render_turn(player),
                None => Ok(()),
            },
            GameState::DealerTurn => self.render_turn(snapshot.dealer),
        }
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_round_start(&mut self) {
        if let Err(error) = writeln!(self.out, "\n ======= New Game ======= \n") {
            warn!(%error, "failed to render round start");
        }
    }

    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        if let Err(error) = self.render_state(snapshot) {
            warn!(%error, state = ?snapshot.state, "failed to render state");
        }
    }

    fn on_bet_rejected(&mut self, player: &Player, amount: usize, error: BetError) {
        let result = writeln!(
            self.out,
            "Invalid bet of {amount} ({error}); {} has {} chips",
            player.name(),
            player.money()
        );
        if let Err(error) = result {
            warn!(%error, "failed to render rejected bet");
        }
    }
}
