//! The room aggregate and its round state machine.
//!
//! A [`Room`] is the whole per-room document: seated players, the running
//! round's [`Table`], and the history of resolved rounds. Every mutating
//! method validates its preconditions against the room it is given before
//! touching anything, so a rejected call leaves the room exactly as it was.
//!
//! The room never resolves or restarts a round on its own. Mutations return a
//! [`Transition`], and the caller (normally the [`Dealer`](crate::Dealer))
//! runs [`Room::resolve`] and [`Room::start_round`] when asked to.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{GameError, SetupError};
use crate::options::{COMMUNITY_CARDS, HAND_SIZE, MAX_SEATS, TableOptions};
use crate::player::{Player, PlayerId};
use crate::result::RoundResult;

mod betting;
mod phase;
mod resolution;
pub mod state;
pub mod turn;

pub use betting::Action;
pub use state::{Phase, Table, Transition};

/// A room: seated players, the running round, and past results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room options.
    pub options: TableOptions,
    /// Seated players (`player_id` -> player).
    pub players: HashMap<PlayerId, Player>,
    /// Player IDs in the order they joined.
    pub seats: Vec<PlayerId>,
    /// The running round, if any.
    pub table: Option<Table>,
    /// Number of the most recently started round.
    pub round_number: u32,
    /// Resolved rounds, oldest first.
    pub history: Vec<RoundResult>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        Self {
            options,
            players: HashMap::new(),
            seats: Vec::new(),
            table: None,
            round_number: 0,
            history: Vec::new(),
        }
    }

    /// Seats a player with the starting chip count.
    ///
    /// Joining again is a no-op and never touches the player's chips.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is running or every seat is taken. Seats are
    /// capped at [`MAX_SEATS`] whatever `max_players` says.
    pub fn join(&mut self, player_id: PlayerId) -> Result<(), SetupError> {
        if self.players.contains_key(&player_id) {
            return Ok(());
        }
        if self.table.is_some() {
            return Err(SetupError::RoundInProgress);
        }
        if self.seats.len() >= self.options.max_players.min(MAX_SEATS) {
            return Err(SetupError::TableFull);
        }

        let player = Player::new(player_id, self.options.starting_chips);
        self.players.insert(player_id, player);
        self.seats.push(player_id);
        Ok(())
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(&player_id)
    }

    /// Returns the current phase, or `None` when no round is running.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.table.as_ref().map(|table| table.phase)
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.table.as_ref().and_then(Table::current_player)
    }

    /// Returns the current pot, zero between rounds.
    #[must_use]
    pub fn pot(&self) -> usize {
        self.table.as_ref().map_or(0, |table| table.pot)
    }

    /// Returns all chips in play: every stack plus the pot.
    #[must_use]
    pub fn total_chips(&self) -> usize {
        self.players.values().map(|p| p.chips).sum::<usize>() + self.pot()
    }

    /// Returns the number of players still holding cards this round.
    #[must_use]
    pub fn players_in_hand(&self) -> usize {
        self.table.as_ref().map_or(0, |table| {
            table
                .turn_order
                .iter()
                .filter(|id| self.players.get(id).is_some_and(|p| !p.folded))
                .count()
        })
    }

    /// Checks that the room is structurally sound.
    ///
    /// Stores hand back whatever they hold; this guards against a document
    /// that lost players or table fields before any action is applied to it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StateCorruption`] describing the first problem
    /// found.
    pub fn check_integrity(&self) -> Result<(), GameError> {
        if self.seats.len() != self.players.len()
            || self.seats.iter().any(|id| !self.players.contains_key(id))
        {
            return Err(GameError::StateCorruption("seats and players disagree"));
        }

        let Some(table) = &self.table else {
            return Ok(());
        };

        if table.turn_order.is_empty() {
            return Err(GameError::StateCorruption("empty turn order"));
        }
        if table
            .turn_order
            .iter()
            .any(|id| !self.players.contains_key(id))
        {
            return Err(GameError::StateCorruption("unknown player in turn order"));
        }
        if table.current_turn_index >= table.turn_order.len() {
            return Err(GameError::StateCorruption("turn index out of range"));
        }
        if table.community_cards.len() > COMMUNITY_CARDS {
            return Err(GameError::StateCorruption("too many community cards"));
        }
        if table
            .turn_order
            .iter()
            .filter_map(|id| self.players.get(id))
            .any(|p| p.hand.len() != HAND_SIZE)
        {
            return Err(GameError::StateCorruption("player hand missing cards"));
        }
        if table.round_number != self.round_number {
            return Err(GameError::StateCorruption("round number mismatch"));
        }

        Ok(())
    }
}
