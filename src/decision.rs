//! Sources of player decisions.

extern crate alloc;

use alloc::collections::VecDeque;

use crate::participant::{Action, Participant, Player};

/// Supplies the choices a human would make at the table.
///
/// Calls block until an answer is available; there is no timeout.
pub trait DecisionProvider {
    /// Asks `player` how much to bet. Invalid amounts are asked again.
    fn request_bet(&mut self, player: &Player) -> usize;

    /// Asks `player` to pick one of `actions` and returns its index.
    fn request_action(&mut self, player: &Player, actions: &[Action]) -> usize;
}

/// Replays a fixed sequence of bets and action indices.
///
/// When the bet script runs out the player bets 1; when the action script
/// runs out the player stands.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    bets: VecDeque<usize>,
    actions: VecDeque<usize>,
}

impl ScriptedDecisions {
    /// Creates a script from bet amounts and action indices.
    #[must_use]
    pub fn new(
        bets: impl IntoIterator<Item = usize>,
        actions: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            bets: bets.into_iter().collect(),
            actions: actions.into_iter().collect(),
        }
    }

    /// Returns whether every scripted answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.bets.is_empty() && self.actions.is_empty()
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn request_bet(&mut self, player: &Player) -> usize {
        self.bets
            .pop_front()
            .unwrap_or_else(|| player.money().min(1))
    }

    fn request_action(&mut self, _player: &Player, actions: &[Action]) -> usize {
        self.actions.pop_front().unwrap_or_else(|| {
            actions
                .iter()
                .position(|action| *action == Action::Stand)
                .unwrap_or(0)
        })
    }
}
