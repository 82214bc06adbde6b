//! Error types for room operations.

use thiserror::Error;

/// Errors that reject a player's betting action or snipe.
///
/// A rejected action leaves the room unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The action does not belong to the current phase.
    #[error("invalid phase for this action")]
    InvalidPhaseForAction,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player has already folded this round.
    #[error("player has already folded")]
    AlreadyFolded,
    /// The player already submitted a prediction.
    #[error("player has already acted")]
    AlreadyActed,
    /// Insufficient chips for this action.
    #[error("insufficient chips for this action")]
    InsufficientChips,
    /// Raise is not above the current bet.
    #[error("invalid raise amount")]
    InvalidRaiseAmount,
    /// Prediction names no hand category.
    #[error("invalid prediction")]
    InvalidPrediction,
    /// Cannot check while facing a bet.
    #[error("cannot check, there is a bet to call")]
    CannotCheck,
    /// Cannot call with nothing to call.
    #[error("nothing to call")]
    NothingToCall,
}

/// Errors that can occur while seating players or starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Too few players with chips.
    #[error("not enough players with chips")]
    NotEnoughPlayers,
    /// Not enough cards in the deck to deal every seat.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Every seat is taken.
    #[error("table is full")]
    TableFull,
    /// Players cannot be seated while a round is running.
    #[error("a round is in progress")]
    RoundInProgress,
}

/// Errors raised by the room store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Room not found.
    #[error("room not found")]
    RoomNotFound,
    /// Room already exists.
    #[error("room already exists")]
    RoomExists,
    /// The stored version moved on since it was read.
    #[error("version conflict: expected {expected}, found {found}")]
    Conflict {
        /// Version the writer read.
        expected: u64,
        /// Version currently stored.
        found: u64,
    },
}

/// Any failure surfaced by the [`Dealer`](crate::Dealer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The round could not be set up.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// The store refused the read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The stored room is structurally broken.
    #[error("state corruption: {0}")]
    StateCorruption(&'static str),
}
