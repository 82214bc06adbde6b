//! Card types and the draw pool.

use alloc::vec::Vec;

use rand::Rng;

/// Lowest card rank.
pub const MIN_RANK: u8 = 1;

/// Highest card rank.
pub const MAX_RANK: u8 = 10;

/// Copies of each rank in a fresh deck.
pub const COPIES_PER_RANK: usize = 4;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = MAX_RANK as usize * COPIES_PER_RANK;

/// A playing card. Cards carry a rank only; there are no suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card, from 1 to 10.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=10
    /// are accepted but never appear in a [`Deck`].
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }
}

/// The pool of cards not yet dealt this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 40-card pool, four copies of every rank.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in MIN_RANK..=MAX_RANK {
            for _ in 0..COPIES_PER_RANK {
                cards.push(Card::new(rank));
            }
        }
        Self { cards }
    }

    /// Creates a pool holding exactly the given cards.
    ///
    /// Useful for stacking the remaining cards in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns a uniformly random card.
    ///
    /// Returns `None` when the pool is empty.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(index))
    }

    /// Returns the cards left in the pool.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
