//! A round engine for Sniper Hold'em with optional `no_std` support.
//!
//! Players bet over shared community cards in two betting phases, then each
//! predicts ("snipes") a hand category. Every hand whose category was
//! predicted is disqualified, and the best remaining hand takes the pot.
//!
//! [`Room`] holds the state machine for a single room. [`Dealer`] runs each
//! request against a [`RoomStore`] as one versioned read-modify-write, so two
//! clients acting on the same stale snapshot cannot both win.
//!
//! # Example
//!
//! ```
//! use sniper_holdem::{Action, Dealer, MemoryStore, TableOptions};
//!
//! let dealer = Dealer::new(MemoryStore::new(), 42);
//! dealer.create_room("lobby", TableOptions::default()).unwrap();
//! dealer.join("lobby", 1).unwrap();
//! dealer.join("lobby", 2).unwrap();
//! dealer.start_game("lobby").unwrap();
//!
//! let room = dealer.snapshot("lobby").unwrap().room;
//! let first = room.current_player().unwrap();
//! dealer.submit_bet("lobby", first, Action::Raise(10)).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod store;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Deck};
pub use dealer::{Dealer, Progress};
pub use error::{ActionError, GameError, SetupError, StoreError};
pub use game::{Action, Phase, Room, Table, Transition};
pub use hand::{HandCategory, HandEvaluation, evaluate};
pub use options::{MAX_SEATS, TableOptions, TieBreak};
pub use player::{LastAction, Player, PlayerId};
pub use result::{RoundResult, Showdown, SnipeRecord, Winner, WinningHand};
pub use store::{MemoryStore, RoomStore, Snapshot};
