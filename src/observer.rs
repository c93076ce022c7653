//! Notification sink for game progress.

use crate::error::BetError;
use crate::game::Snapshot;
use crate::participant::Player;

/// Receives a snapshot every time the game changes state.
pub trait GameObserver {
    /// Called when a new round starts, before any bet is taken.
    fn on_round_start(&mut self) {}

    /// Called on every state transition.
    fn on_state(&mut self, snapshot: &Snapshot<'_>);

    /// Called when a bet is refused and the player will be asked again.
    fn on_bet_rejected(&mut self, _player: &Player, _amount: usize, _error: BetError) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_state(&mut self, _snapshot: &Snapshot<'_>) {}
}
