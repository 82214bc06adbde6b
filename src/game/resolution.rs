use alloc::vec::Vec;

use rand::Rng;
use tracing::{info, warn};

use crate::card::Card;
use crate::error::GameError;
use crate::hand::{HandCategory, HandEvaluation, evaluate};
use crate::options::{COMMUNITY_CARDS, TieBreak};
use crate::player::PlayerId;
use crate::result::{RoundResult, Showdown, SnipeRecord, Winner, WinningHand};

use super::Room;

/// A hand that reached resolution.
struct Contender {
    player_id: PlayerId,
    cards: Vec<Card>,
    evaluation: HandEvaluation,
    sniped: bool,
}

impl Room {
    /// Resolves the running round and pays out the pot.
    ///
    /// The board is completed to four community cards, every hand still in is
    /// evaluated, and any hand whose category someone predicted is sniped out.
    /// The best remaining score takes the pot. If every hand was sniped the
    /// pot is divided evenly across all seated players and the remainder is
    /// forfeited.
    ///
    /// The result is appended to the history and the table is cleared; the
    /// next round has to be started separately.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StateCorruption`] if no round is running or the
    /// deck cannot complete the board.
    pub fn resolve<R: Rng>(&mut self, rng: &mut R) -> Result<RoundResult, GameError> {
        let Some(table) = self.table.as_mut() else {
            return Err(GameError::StateCorruption("no round to resolve"));
        };
        if self.seats.is_empty() {
            return Err(GameError::StateCorruption("no seated players"));
        }

        let missing = COMMUNITY_CARDS.saturating_sub(table.community_cards.len());
        if table.deck.len() < missing {
            warn!(
                round = table.round_number,
                missing,
                "deck cannot complete the board"
            );
            return Err(GameError::StateCorruption("deck cannot complete the board"));
        }
        for _ in 0..missing {
            if let Some(card) = table.deck.draw(rng) {
                table.community_cards.push(card);
            }
        }

        let predictions: Vec<(PlayerId, HandCategory)> = table
            .turn_order
            .iter()
            .filter_map(|id| self.players.get(id))
            .filter_map(|p| p.snipe_prediction.map(|category| (p.id, category)))
            .collect();

        let contenders: Vec<Contender> = table
            .turn_order
            .iter()
            .filter_map(|id| self.players.get(id))
            .filter(|p| !p.folded)
            .map(|p| {
                let mut cards = p.hand.clone();
                cards.extend_from_slice(&table.community_cards);
                let evaluation = evaluate(&cards);
                let sniped = predictions
                    .iter()
                    .any(|&(_, predicted)| predicted == evaluation.category);
                Contender {
                    player_id: p.id,
                    cards,
                    evaluation,
                    sniped,
                }
            })
            .collect();

        let snipes = predictions
            .iter()
            .map(|&(sniper, predicted)| SnipeRecord {
                sniper,
                predicted,
                success: contenders
                    .iter()
                    .any(|c| c.evaluation.category == predicted),
            })
            .collect();

        let pot = table.pot;
        table.pot = 0;
        let mut forfeited = 0;

        let mut eligible = contenders.iter().filter(|c| !c.sniped);
        let (winner, winning_hand) = match eligible.next() {
            None => {
                let share = pot / self.seats.len();
                forfeited = pot - share * self.seats.len();
                for id in &self.seats {
                    if let Some(player) = self.players.get_mut(id) {
                        player.chips += share;
                    }
                }
                (Winner::Split, None)
            }
            Some(first) => {
                // Strictly greater, so the earliest seat keeps a tie.
                let best = eligible.fold(first, |best, c| {
                    if c.evaluation.score > best.evaluation.score {
                        c
                    } else {
                        best
                    }
                });
                let tied: Vec<PlayerId> = contenders
                    .iter()
                    .filter(|c| !c.sniped && c.evaluation.score == best.evaluation.score)
                    .map(|c| c.player_id)
                    .collect();

                let winner = if self.options.tie_break == TieBreak::Split && tied.len() > 1 {
                    let share = pot / tied.len();
                    let odd = pot - share * tied.len();
                    for (i, id) in tied.iter().enumerate() {
                        if let Some(player) = self.players.get_mut(id) {
                            player.chips += if i == 0 { share + odd } else { share };
                        }
                    }
                    Winner::Shared(tied)
                } else {
                    if let Some(player) = self.players.get_mut(&best.player_id) {
                        player.chips += pot;
                    }
                    Winner::Player(best.player_id)
                };

                let hand = WinningHand {
                    category: best.evaluation.category,
                    score: best.evaluation.score,
                    cards: best.cards.clone(),
                };
                (winner, Some(hand))
            }
        };

        let chip_deltas = table
            .chips_at_start
            .iter()
            .map(|&(id, before)| {
                let after = self.players.get(&id).map_or(0, |p| p.chips);
                #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
                let delta = after as isize - before as isize;
                (id, delta)
            })
            .collect();

        let showdown = contenders
            .iter()
            .map(|c| Showdown {
                player_id: c.player_id,
                category: c.evaluation.category,
                score: c.evaluation.score,
                sniped: c.sniped,
            })
            .collect();

        let result = RoundResult {
            round_number: table.round_number,
            winner,
            winning_hand,
            pot,
            snipes,
            showdown,
            chips_before: table.chips_at_start.clone(),
            chip_deltas,
            forfeited,
        };

        info!(
            round = result.round_number,
            pot,
            winner = ?result.winner,
            forfeited,
            "round resolved"
        );

        self.table = None;
        self.history.push(result.clone());
        Ok(result)
    }
}
