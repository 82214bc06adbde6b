use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::card::Deck;
use crate::error::{ActionError, SetupError};
use crate::hand::HandCategory;
use crate::options::{COMMUNITY_CARDS, HAND_SIZE};
use crate::player::{LastAction, Player, PlayerId};

use super::betting::can_bet;
use super::turn::{first_active, next_active};
use super::{Phase, Room, Table, Transition};

/// Community cards shown during the first betting phase.
const OPENING_COMMUNITY_CARDS: usize = 2;

impl Room {
    /// Starts a new round.
    ///
    /// Every seated player with chips takes part. Transient player fields are
    /// reset while chip counts carry over. The turn order comes from a random
    /// draw per seat, and each player is dealt two cards before the first two
    /// community cards are turned.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, fewer than
    /// `min_players` players hold chips, or the deck cannot serve every seat.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) -> Result<(), SetupError> {
        if self.table.is_some() {
            return Err(SetupError::RoundInProgress);
        }

        let funded: Vec<PlayerId> = self
            .seats
            .iter()
            .copied()
            .filter(|id| self.players.get(id).is_some_and(|p| p.chips > 0))
            .collect();
        if funded.len() < self.options.min_players {
            return Err(SetupError::NotEnoughPlayers);
        }

        let mut deck = Deck::new();
        if deck.len() < funded.len() * HAND_SIZE + COMMUNITY_CARDS {
            return Err(SetupError::NotEnoughCards);
        }

        let mut keys: Vec<(u32, PlayerId)> = funded.iter().map(|&id| (rng.random(), id)).collect();
        keys.sort_unstable();
        let turn_order: Vec<PlayerId> = keys.into_iter().map(|(_, id)| id).collect();

        for player in self.players.values_mut() {
            player.reset_for_round();
        }
        let chips_at_start = self
            .seats
            .iter()
            .filter_map(|id| self.players.get(id))
            .map(|p| (p.id, p.chips))
            .collect();

        for id in &turn_order {
            let Some(player) = self.players.get_mut(id) else {
                continue;
            };
            for _ in 0..HAND_SIZE {
                let card = deck.draw(rng).ok_or(SetupError::NotEnoughCards)?;
                player.hand.push(card);
            }
        }

        let mut community_cards = Vec::with_capacity(COMMUNITY_CARDS);
        for _ in 0..OPENING_COMMUNITY_CARDS {
            community_cards.push(deck.draw(rng).ok_or(SetupError::NotEnoughCards)?);
        }

        self.round_number += 1;
        info!(
            round = self.round_number,
            players = turn_order.len(),
            "round started"
        );

        self.table = Some(Table {
            phase: Phase::Bet1,
            turn_order,
            current_turn_index: 0,
            community_cards,
            pot: 0,
            current_bet: 0,
            acted: Vec::new(),
            round_number: self.round_number,
            deck,
            chips_at_start,
        });

        Ok(())
    }

    /// Records a snipe prediction for the given player.
    ///
    /// Returns [`Transition::ResolutionPending`] once every player still
    /// holding cards has predicted.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the snipe phase, the player is
    /// not seated, has folded, already predicted, or is not the player to act.
    pub fn submit_snipe(
        &mut self,
        player_id: PlayerId,
        category: HandCategory,
    ) -> Result<Transition, ActionError> {
        let Self { table, players, .. } = &mut *self;
        let table = table
            .as_mut()
            .filter(|table| table.phase == Phase::Snipe)
            .ok_or(ActionError::InvalidPhaseForAction)?;
        let player = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;

        if player.folded {
            return Err(ActionError::AlreadyFolded);
        }
        if player.snipe_prediction.is_some() {
            return Err(ActionError::AlreadyActed);
        }
        if table.current_player() != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        player.snipe_prediction = Some(category);
        player.record(LastAction::Snipe, 0);
        table.mark_acted(player_id);
        debug!(player_id, %category, "snipe accepted");

        let players = &*players;
        let next = next_active(table.turn_order.len(), table.current_turn_index, |index| {
            can_snipe(table, players, index)
        });
        match next {
            Some(index) => {
                table.current_turn_index = index;
                Ok(Transition::Continued)
            }
            None => Ok(Transition::ResolutionPending),
        }
    }

    /// Closes the current phase and opens the next one.
    ///
    /// Bets are phase-local: they are zeroed here and only the pot carries the
    /// round's contributions forward. A phase nobody can act in is skipped.
    pub(super) fn complete_phase<R: Rng>(&mut self, rng: &mut R) -> Transition {
        loop {
            let Self { table, players, .. } = &mut *self;
            let Some(table) = table.as_mut() else {
                return Transition::ResolutionPending;
            };

            for id in &table.turn_order {
                if let Some(player) = players.get_mut(id) {
                    player.bet = 0;
                }
            }
            table.current_bet = 0;
            table.acted.clear();

            let in_hand = table
                .turn_order
                .iter()
                .filter(|id| players.get(id).is_some_and(|p| !p.folded))
                .count();
            if in_hand <= 1 {
                debug!(round = table.round_number, "one player left");
                return Transition::ResolutionPending;
            }

            match table.phase {
                Phase::Bet1 => {
                    while table.community_cards.len() < COMMUNITY_CARDS {
                        let Some(card) = table.deck.draw(rng) else {
                            warn!(round = table.round_number, "deck ran out dealing the turn");
                            break;
                        };
                        table.community_cards.push(card);
                    }
                    open_phase(table, players, Phase::Bet2);

                    let first = first_active(table.turn_order.len(), |index| {
                        can_bet(table, players, index)
                    });
                    if let Some(index) = first {
                        table.current_turn_index = index;
                        return Transition::PhaseAdvanced(Phase::Bet2);
                    }
                }
                Phase::Bet2 => {
                    open_phase(table, players, Phase::Snipe);

                    let first = first_active(table.turn_order.len(), |index| {
                        can_snipe(table, players, index)
                    });
                    table.current_turn_index = first.unwrap_or(0);
                    return Transition::PhaseAdvanced(Phase::Snipe);
                }
                Phase::Snipe => return Transition::ResolutionPending,
            }
        }
    }
}

fn open_phase(table: &mut Table, players: &mut HashMap<PlayerId, Player>, phase: Phase) {
    table.phase = phase;
    for id in &table.turn_order {
        if let Some(player) = players.get_mut(id) {
            player.clear_last_action();
        }
    }
    debug!(round = table.round_number, ?phase, "phase opened");
}

/// Whether the seat at `index` still owes a prediction.
fn can_snipe(table: &Table, players: &HashMap<PlayerId, Player>, index: usize) -> bool {
    let Some(id) = table.turn_order.get(index) else {
        return false;
    };
    players
        .get(id)
        .is_some_and(|p| !p.folded && p.snipe_prediction.is_none())
}
