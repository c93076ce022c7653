use tracing::info;

use crate::decision::DecisionProvider;
use crate::error::GameError;
use crate::observer::GameObserver;
use crate::participant::Participant;
use crate::rules::{BLACKJACK, CARDS_FOR_BLACKJACK};

use super::{Game, GameState, Side, Variant};

/// Returns whether the participant's active hand is over 21.
fn is_busted(participant: &dyn Participant) -> bool {
    participant.score() > BLACKJACK
}

/// Returns whether the participant's active hand is 21 on exactly two cards.
fn is_blackjack(participant: &dyn Participant) -> bool {
    participant.score() == BLACKJACK && participant.card_count() == CARDS_FOR_BLACKJACK
}

impl<D, O, V> Game<D, O, V>
where
    D: DecisionProvider,
    O: GameObserver,
    V: Variant,
{
    /// Checks `opponent`'s active hand for a bust or a blackjack.
    ///
    /// A bust makes `opponent_two` the winner; a blackjack makes `opponent` the
    /// winner. Bust is checked first. A winning player is paid for `hand`, or
    /// for every hand when `None`. Returns the winner, clearing any previous
    /// one when neither condition holds.
    pub fn blackjack_or_busted(
        &mut self,
        opponent: Side,
        opponent_two: Side,
        hand: Option<usize>,
    ) -> Option<Side> {
        self.winner = None;

        let (busted, blackjack) = self
            .participant(opponent)
            .map_or((false, false), |participant| {
                (is_busted(participant), is_blackjack(participant))
            });

        if busted {
            self.winner = Some(opponent_two);
            self.set_state(GameState::Busted);
        } else if blackjack {
            self.winner = Some(opponent);
            self.set_state(GameState::Blackjack);
        }

        let paying = self
            .winner
            .and_then(|side| self.participant(side))
            .is_some_and(|winner| winner.is_paying());

        match self.winner {
            Some(Side::Player(index)) if paying => {
                if let Some(player) = self.players.get_mut(index) {
                    let paid = player.win_bet(hand);
                    info!(
                        player = player.name(),
                        paid,
                        money = player.money(),
                        blackjack,
                        "player wins"
                    );
                }
            }
            Some(Side::Dealer) => info!(?opponent, blackjack, "dealer wins"),
            _ => {}
        }

        self.winner
    }

    /// Compares every remaining hand of the player against the dealer.
    ///
    /// A hand scoring at least the dealer's score wins and is paid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player sits at `index`.
    pub fn check_winner(&mut self, index: usize) -> Result<(), GameError> {
        let dealer_score = self.dealer.score();

        for hand in 0..self.player_at(index)?.hands().len() {
            let player = self.player_at_mut(index)?;
            player.seat_mut().set_active_hand(hand);
            let score = player.score();

            if score >= dealer_score {
                let paid = player.win_bet(Some(hand));
                info!(
                    player = player.name(),
                    hand,
                    score,
                    dealer_score,
                    paid,
                    "hand beats dealer"
                );
                self.set_winner_bigger_score(Side::Player(index));
            } else {
                info!(hand, score, dealer_score, "dealer beats hand");
                self.set_winner_bigger_score(Side::Dealer);
            }
        }
        Ok(())
    }

    fn set_winner_bigger_score(&mut self, side: Side) {
        self.winner = Some(side);
        self.set_state(GameState::WinnerBiggerScore);
    }

    /// Lets the dealer play against player `index` and settles the outcome.
    pub(super) fn play_dealer(&mut self, index: usize) -> Result<(), GameError> {
        let side = Side::Player(index);
        let mut resolved = false;

        while !self.dealer.is_stand() && self.player_at(index)?.has_active_hand() {
            self.process_turn(Side::Dealer)?;
            if self.blackjack_or_busted(Side::Dealer, side, None).is_some() {
                resolved = true;
                break;
            }
        }

        if !resolved && self.dealer.is_stand() && self.player_at(index)?.has_active_hand() {
            // The dealer may have finished against an earlier player.
            resolved = self.blackjack_or_busted(Side::Dealer, side, None).is_some();
            if !resolved {
                self.check_winner(index)?;
                resolved = true;
            }
        }

        if resolved {
            self.player_at_mut(index)?.seat_mut().clean_hands(None);
        }
        Ok(())
    }
}
