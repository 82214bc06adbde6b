//! The room service: runs every request as one read, validate, apply, write
//! transaction against a [`RoomStore`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

use crate::error::{GameError, SetupError, StoreError};
use crate::game::{Action, Phase, Room, Transition};
use crate::hand::HandCategory;
use crate::options::TableOptions;
use crate::player::PlayerId;
use crate::result::RoundResult;
use crate::store::{RoomStore, Snapshot};
use crate::sync::Mutex;

/// What an accepted request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The turn moved on within the same phase.
    Continued,
    /// The round moved into the given phase.
    PhaseAdvanced(Phase),
    /// The round was resolved. The next round has already been dealt unless
    /// fewer than two players still hold chips.
    RoundResolved(RoundResult),
}

/// Drives rooms stored in `S`.
///
/// The dealer owns the random source. Every operation loads the room, checks
/// it for corruption, applies the request to a copy, and writes the copy back
/// with a compare-and-swap on the version it read. A rejected request writes
/// nothing; a lost race surfaces as [`StoreError::Conflict`] and may be
/// retried by the caller.
pub struct Dealer<S> {
    store: S,
    rng: Mutex<ChaCha8Rng>,
}

impl<S: RoomStore> Dealer<S> {
    /// Creates a dealer over `store` with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use sniper_holdem::{Dealer, MemoryStore};
    ///
    /// let dealer = Dealer::new(MemoryStore::new(), 42);
    /// let _ = dealer;
    /// ```
    #[must_use]
    pub fn new(store: S, seed: u64) -> Self {
        Self {
            store,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Creates an empty room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room already exists.
    pub fn create_room(&self, room_id: &str, options: TableOptions) -> Result<(), GameError> {
        self.store.insert(room_id, Room::new(options))?;
        info!(room_id, "room created");
        Ok(())
    }

    /// Seats a player in a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is missing or corrupt, a round is running,
    /// or the table is full.
    pub fn join(&self, room_id: &str, player_id: PlayerId) -> Result<(), GameError> {
        self.transact(room_id, |room, _| Ok(room.join(player_id)?))
    }

    /// Starts the game, returning the running round number.
    ///
    /// Calling this while a round is running changes nothing. Chip counts are
    /// never reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is missing or corrupt, or fewer than the
    /// configured minimum of players hold chips.
    #[instrument(level = "debug", skip(self))]
    pub fn start_game(&self, room_id: &str) -> Result<u32, GameError> {
        self.transact(room_id, |room, rng| {
            if room.table.is_none() {
                room.start_round(rng)?;
            }
            Ok(room.round_number)
        })
    }

    /// Applies a betting action.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is missing or corrupt, the action is
    /// rejected, or the write loses a race.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_bet(
        &self,
        room_id: &str,
        player_id: PlayerId,
        action: Action,
    ) -> Result<Progress, GameError> {
        self.transact(room_id, |room, rng| {
            let transition = room.apply_action(player_id, action, rng)?;
            Self::drive(room, transition, rng)
        })
    }

    /// Submits a snipe prediction.
    ///
    /// The last prediction of a round resolves it and deals the next round in
    /// the same write.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is missing or corrupt, the prediction is
    /// rejected, or the write loses a race.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_snipe(
        &self,
        room_id: &str,
        player_id: PlayerId,
        category: HandCategory,
    ) -> Result<Progress, GameError> {
        self.transact(room_id, |room, rng| {
            let transition = room.submit_snipe(player_id, category)?;
            Self::drive(room, transition, rng)
        })
    }

    /// Folds a player; shorthand for [`Action::Fold`].
    ///
    /// # Errors
    ///
    /// Same as [`Dealer::submit_bet`].
    pub fn fold_player(&self, room_id: &str, player_id: PlayerId) -> Result<Progress, GameError> {
        self.submit_bet(room_id, player_id, Action::Fold)
    }

    /// Returns the current snapshot of a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room does not exist.
    pub fn snapshot(&self, room_id: &str) -> Result<Snapshot, GameError> {
        Ok(self.store.load(room_id)?.ok_or(StoreError::RoomNotFound)?)
    }

    /// Carries out what a transition asks for: resolution followed by the
    /// next round's setup.
    fn drive(
        room: &mut Room,
        transition: Transition,
        rng: &mut ChaCha8Rng,
    ) -> Result<Progress, GameError> {
        match transition {
            Transition::Continued => Ok(Progress::Continued),
            Transition::PhaseAdvanced(phase) => Ok(Progress::PhaseAdvanced(phase)),
            Transition::ResolutionPending => {
                let result = room.resolve(rng)?;
                match room.start_round(rng) {
                    Ok(()) => {}
                    Err(SetupError::NotEnoughPlayers) => {
                        info!(
                            round = result.round_number,
                            "not enough funded players, game over"
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
                Ok(Progress::RoundResolved(result))
            }
        }
    }

    fn transact<T>(
        &self,
        room_id: &str,
        apply: impl FnOnce(&mut Room, &mut ChaCha8Rng) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let snapshot = self.store.load(room_id)?.ok_or(StoreError::RoomNotFound)?;
        if let Err(err) = snapshot.room.check_integrity() {
            warn!(room_id, version = snapshot.version, %err, "refusing corrupt room");
            return Err(err);
        }

        let mut room = snapshot.room.clone();
        let value = {
            let mut rng = self.rng.lock();
            apply(&mut room, &mut rng)
        };
        let value = match value {
            Ok(value) => value,
            Err(err) => {
                debug!(room_id, %err, "request rejected");
                return Err(err);
            }
        };

        if room != snapshot.room {
            let version = self
                .store
                .compare_and_swap(room_id, snapshot.version, room)
                .inspect_err(|err| warn!(room_id, %err, "write rejected"))?;
            debug!(room_id, version, "room written");
        }

        Ok(value)
    }
}
