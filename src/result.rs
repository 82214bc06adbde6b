//! Round result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandCategory;
use crate::player::PlayerId;

/// Who took the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// A single player won the pot.
    Player(PlayerId),
    /// Every remaining hand was sniped; the pot was divided among all seats.
    Split,
    /// Tied players shared the pot under [`TieBreak::Split`](crate::TieBreak::Split).
    Shared(Vec<PlayerId>),
}

/// The hand that won the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningHand {
    /// The hand category.
    pub category: HandCategory,
    /// The comparable score.
    pub score: u8,
    /// Private cards followed by the community cards.
    pub cards: Vec<Card>,
}

/// One snipe prediction and whether it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnipeRecord {
    /// The predicting player.
    pub sniper: PlayerId,
    /// The predicted category.
    pub predicted: HandCategory,
    /// Whether any remaining hand had that category.
    pub success: bool,
}

/// A revealed hand at resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    /// The player ID.
    pub player_id: PlayerId,
    /// The hand category.
    pub category: HandCategory,
    /// The comparable score.
    pub score: u8,
    /// Whether someone predicted this category.
    pub sniped: bool,
}

/// Result of a resolved round, appended to the room history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number.
    pub round_number: u32,
    /// Who took the pot.
    pub winner: Winner,
    /// The winning hand, absent on a split.
    pub winning_hand: Option<WinningHand>,
    /// Pot size at resolution.
    pub pot: usize,
    /// Every prediction made this round.
    pub snipes: Vec<SnipeRecord>,
    /// Hands that reached resolution, in turn order.
    pub showdown: Vec<Showdown>,
    /// Chip counts when the round started.
    pub chips_before: Vec<(PlayerId, usize)>,
    /// Chip change per player over the round.
    pub chip_deltas: Vec<(PlayerId, isize)>,
    /// Chips lost to integer division on a split.
    pub forfeited: usize,
}
