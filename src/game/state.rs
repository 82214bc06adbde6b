//! Round state types.

use alloc::vec::Vec;

use crate::card::{Card, Deck};
use crate::player::PlayerId;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First betting phase, two community cards showing.
    Bet1,
    /// Second betting phase, four community cards showing.
    Bet2,
    /// Each remaining player predicts one hand category.
    Snipe,
}

impl Phase {
    /// Returns whether betting actions are accepted in this phase.
    #[must_use]
    pub const fn is_betting(self) -> bool {
        matches!(self, Self::Bet1 | Self::Bet2)
    }
}

/// What an accepted action did to the round.
///
/// The driver reacts to [`Transition::ResolutionPending`] by resolving the
/// round and setting up the next one; the room never does that by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same phase, the turn moved on.
    Continued,
    /// The phase completed and the round moved into the given phase.
    PhaseAdvanced(Phase),
    /// The round is over and must be resolved.
    ResolutionPending,
}

/// Per-round table state, rebuilt at the start of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Current phase.
    pub phase: Phase,
    /// Seating order for the whole round.
    pub turn_order: Vec<PlayerId>,
    /// Index into `turn_order` of the player to act.
    pub current_turn_index: usize,
    /// Shared cards, two at round start and four from `Bet2` on.
    pub community_cards: Vec<Card>,
    /// Chips committed this round.
    pub pot: usize,
    /// Highest bet in the current betting phase.
    pub current_bet: usize,
    /// Players who matched the current bet or folded this phase.
    pub acted: Vec<PlayerId>,
    /// The round number, starting at 1.
    pub round_number: u32,
    /// Cards not dealt yet.
    pub deck: Deck,
    /// Chip counts when the round started.
    pub chips_at_start: Vec<(PlayerId, usize)>,
}

impl Table {
    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turn_order.get(self.current_turn_index).copied()
    }

    /// Returns whether the player has acted this phase.
    #[must_use]
    pub fn has_acted(&self, player_id: PlayerId) -> bool {
        self.acted.contains(&player_id)
    }

    pub(crate) fn mark_acted(&mut self, player_id: PlayerId) {
        if !self.has_acted(player_id) {
            self.acted.push(player_id);
        }
    }
}
