#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::error::ActionError;
use crate::player::{LastAction, Player, PlayerId};

use super::turn::next_active;
use super::{Room, Table, Transition};

/// A betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Give up the round.
    Fold,
    /// Pass without betting; only allowed with nothing to call.
    Check,
    /// Match the current bet.
    Call,
    /// Raise to a new total bet for this phase (not an increment).
    Raise(usize),
}

/// Whether the seat at `index` can still act in the current betting phase.
pub(super) fn can_bet(table: &Table, players: &HashMap<PlayerId, Player>, index: usize) -> bool {
    let Some(id) = table.turn_order.get(index) else {
        return false;
    };
    !table.has_acted(*id) && players.get(id).is_some_and(|p| !p.folded && p.chips > 0)
}

/// A betting phase is over once a single player holds cards, or everyone
/// still holding cards and chips has acted and matched the current bet.
fn betting_complete(table: &Table, players: &HashMap<PlayerId, Player>) -> bool {
    let in_hand = table
        .turn_order
        .iter()
        .filter_map(|id| players.get(id))
        .filter(|p| !p.folded);

    let mut remaining = 0;
    let mut settled = true;
    for player in in_hand {
        remaining += 1;
        if player.chips > 0 && (!table.has_acted(player.id) || player.bet != table.current_bet) {
            settled = false;
        }
    }

    remaining <= 1 || settled
}

impl Room {
    /// Applies a betting action for the given player.
    ///
    /// `rng` deals the community cards when the action completes the first
    /// betting phase.
    ///
    /// # Errors
    ///
    /// Returns an error if no betting phase is running, the player is not
    /// seated, has folded, or is not the player to act, or if the action is
    /// not valid against the current bet and the player's chips. A rejected
    /// action changes nothing.
    pub fn apply_action<R: Rng>(
        &mut self,
        player_id: PlayerId,
        action: Action,
        rng: &mut R,
    ) -> Result<Transition, ActionError> {
        let Self { table, players, .. } = &mut *self;
        let table = table
            .as_mut()
            .filter(|table| table.phase.is_betting())
            .ok_or(ActionError::InvalidPhaseForAction)?;
        let player = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;

        if player.folded {
            return Err(ActionError::AlreadyFolded);
        }
        if table.current_player() != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        let to_call = table.current_bet.saturating_sub(player.bet);

        match action {
            Action::Fold => {
                player.folded = true;
                player.record(LastAction::Fold, 0);
            }
            Action::Check => {
                if to_call > 0 {
                    return Err(ActionError::CannotCheck);
                }
                player.record(LastAction::Check, 0);
            }
            Action::Call => {
                if to_call == 0 {
                    return Err(ActionError::NothingToCall);
                }
                if player.chips < to_call {
                    return Err(ActionError::InsufficientChips);
                }
                player.chips -= to_call;
                player.bet += to_call;
                table.pot += to_call;
                player.record(LastAction::Call, to_call);
            }
            Action::Raise(amount) => {
                if amount <= table.current_bet {
                    return Err(ActionError::InvalidRaiseAmount);
                }
                let delta = amount - player.bet;
                if delta <= to_call {
                    return Err(ActionError::InvalidRaiseAmount);
                }
                if player.chips < delta {
                    return Err(ActionError::InsufficientChips);
                }
                player.chips -= delta;
                player.bet = amount;
                table.pot += delta;
                table.current_bet = amount;
                // Everyone else has to respond to the raise.
                table.acted.clear();
                player.record(LastAction::Raise, delta);
            }
        }

        table.mark_acted(player_id);
        debug!(
            player_id,
            ?action,
            pot = table.pot,
            current_bet = table.current_bet,
            "action accepted"
        );

        Ok(self.settle_betting_turn(rng))
    }

    /// Convenience for [`Action::Fold`].
    ///
    /// # Errors
    ///
    /// Same as [`Room::apply_action`].
    pub fn fold<R: Rng>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> Result<Transition, ActionError> {
        self.apply_action(player_id, Action::Fold, rng)
    }

    /// Completes the phase if the last action settled it, otherwise passes the
    /// turn to the next seat that still has to act.
    fn settle_betting_turn<R: Rng>(&mut self, rng: &mut R) -> Transition {
        let Some(table) = self.table.as_mut() else {
            return Transition::ResolutionPending;
        };

        if !betting_complete(table, &self.players) {
            let next = next_active(table.turn_order.len(), table.current_turn_index, |index| {
                can_bet(table, &self.players, index)
            });
            if let Some(index) = next {
                table.current_turn_index = index;
                return Transition::Continued;
            }
        }

        self.complete_phase(rng)
    }
}
