//! Seated player state.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandCategory;

/// Identifier assigned to a player by the session layer.
pub type PlayerId = u32;

/// The last thing a player did this phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastAction {
    /// Folded.
    Fold,
    /// Checked.
    Check,
    /// Called the current bet.
    Call,
    /// Raised to a new total bet.
    Raise,
    /// Submitted a snipe prediction.
    Snipe,
}

/// A player seated in a room.
///
/// Chips persist across rounds; every other field is reset when a round
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player ID.
    pub id: PlayerId,
    /// Chips not committed to the pot.
    pub chips: usize,
    /// Private cards, two once dealt.
    pub hand: Vec<Card>,
    /// Amount committed during the current betting phase.
    pub bet: usize,
    /// Whether the player folded this round.
    pub folded: bool,
    /// The category predicted during the snipe phase.
    pub snipe_prediction: Option<HandCategory>,
    /// The last accepted action.
    pub last_action: Option<LastAction>,
    /// Chips moved by the last accepted action.
    pub last_action_amount: usize,
}

impl Player {
    /// Creates a player holding `chips`.
    #[must_use]
    pub const fn new(id: PlayerId, chips: usize) -> Self {
        Self {
            id,
            chips,
            hand: Vec::new(),
            bet: 0,
            folded: false,
            snipe_prediction: None,
            last_action: None,
            last_action_amount: 0,
        }
    }

    /// Clears everything except the chip count.
    pub fn reset_for_round(&mut self) {
        self.hand.clear();
        self.bet = 0;
        self.folded = false;
        self.snipe_prediction = None;
        self.clear_last_action();
    }

    /// Clears the last action fields.
    pub const fn clear_last_action(&mut self) {
        self.last_action = None;
        self.last_action_amount = 0;
    }

    pub(crate) const fn record(&mut self, action: LastAction, amount: usize) {
        self.last_action = Some(action);
        self.last_action_amount = amount;
    }
}
