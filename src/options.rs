//! Table configuration options.

use crate::card::DECK_SIZE;

/// Community cards on the table once fully revealed.
pub const COMMUNITY_CARDS: usize = 4;

/// Private cards dealt to each player.
pub const HAND_SIZE: usize = 2;

/// Most players a single 40-card deck can serve.
pub const MAX_SEATS: usize = (DECK_SIZE - COMMUNITY_CARDS) / HAND_SIZE;

/// How equal winning scores are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieBreak {
    /// The first tied player in turn order takes the whole pot.
    #[default]
    FirstInTurnOrder,
    /// Tied players share the pot; the odd chips go to the first of them in
    /// turn order.
    Split,
}

/// Configuration options for a Sniper Hold'em room.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use sniper_holdem::{TableOptions, TieBreak};
///
/// let options = TableOptions::default()
///     .with_starting_chips(100)
///     .with_max_players(6)
///     .with_tie_break(TieBreak::Split);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips given to a player when they first join.
    pub starting_chips: usize,
    /// Funded players needed to start a round.
    pub min_players: usize,
    /// Seats in the room, at most [`MAX_SEATS`].
    pub max_players: usize,
    /// How equal winning scores are settled.
    pub tie_break: TieBreak,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 60,
            min_players: 2,
            max_players: 8,
            tie_break: TieBreak::FirstInTurnOrder,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip count.
    ///
    /// # Example
    ///
    /// ```
    /// use sniper_holdem::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(200);
    /// assert_eq!(options.starting_chips, 200);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the minimum number of funded players, never below two.
    ///
    /// # Example
    ///
    /// ```
    /// use sniper_holdem::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, players: usize) -> Self {
        self.min_players = if players < 2 { 2 } else { players };
        self
    }

    /// Sets the number of seats, capped at [`MAX_SEATS`].
    ///
    /// # Example
    ///
    /// ```
    /// use sniper_holdem::{TableOptions, MAX_SEATS};
    ///
    /// let options = TableOptions::default().with_max_players(40);
    /// assert_eq!(options.max_players, MAX_SEATS);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, players: usize) -> Self {
        self.max_players = if players > MAX_SEATS {
            MAX_SEATS
        } else {
            players
        };
        self
    }

    /// Sets the tie-break policy.
    ///
    /// # Example
    ///
    /// ```
    /// use sniper_holdem::{TableOptions, TieBreak};
    ///
    /// let options = TableOptions::default().with_tie_break(TieBreak::Split);
    /// assert_eq!(options.tie_break, TieBreak::Split);
    /// ```
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
