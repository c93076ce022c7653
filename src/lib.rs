//! A turn-based blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: betting,
//! the deal, each player's hands (including splits), the dealer's play, and
//! settlement. Human input comes through a [`DecisionProvider`] and progress
//! is reported to a [`GameObserver`], so the engine runs the same against a
//! console, a script, or a test.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_table::{GameOptions, NullObserver, ScriptedDecisions, Session};
//!
//! let decisions = ScriptedDecisions::new([40], [1]);
//! let mut session = Session::new(["Ada"], &GameOptions::default(), decisions, NullObserver, 7);
//! let rounds = session.run(Some(1)).unwrap();
//! assert_eq!(rounds, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod participant;
pub mod render;
pub mod rules;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use decision::{DecisionProvider, ScriptedDecisions};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, GameError};
pub use game::{Game, GameState, Side, SingleDeck, Snapshot, Variant};
pub use hand::{Hand, HandStatus};
pub use observer::{GameObserver, NullObserver};
pub use options::GameOptions;
pub use participant::{Action, Dealer, Participant, Player, Seat};
pub use render::TextRenderer;
pub use session::Session;
