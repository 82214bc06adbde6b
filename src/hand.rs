//! Hand categories and the hand evaluator.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::{Card, MAX_RANK};
use crate::error::ActionError;

/// Width of a straight.
const STRAIGHT_LEN: usize = 5;

/// Hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No matching values.
    HighCard,
    /// Two cards of one value.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of one value.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Three of one value and two of another.
    FullHouse,
    /// Four cards of one value.
    FourOfAKind,
}

impl HandCategory {
    /// Every category, weakest first.
    pub const ALL: [Self; 7] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::FullHouse,
        Self::FourOfAKind,
    ];

    /// Returns the comparable strength of the category (1 for high card up to
    /// 7 for four of a kind).
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::HighCard => 1,
            Self::Pair => 2,
            Self::TwoPair => 3,
            Self::ThreeOfAKind => 4,
            Self::Straight => 5,
            Self::FullHouse => 6,
            Self::FourOfAKind => 7,
        }
    }

    /// Returns the canonical name used at the input boundary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high-card",
            Self::Pair => "pair",
            Self::TwoPair => "two-pair",
            Self::ThreeOfAKind => "three-of-a-kind",
            Self::Straight => "straight",
            Self::FullHouse => "full-house",
            Self::FourOfAKind => "four-of-a-kind",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandCategory {
    type Err = ActionError;

    /// Parses a category name. Hyphens and underscores are interchangeable
    /// and case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or(ActionError::InvalidPrediction)
    }
}

/// The evaluated strength of a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandEvaluation {
    /// The hand category.
    pub category: HandCategory,
    /// Comparable score; only this value decides winners.
    pub score: u8,
    /// Card values sorted high to low. Informational only.
    pub tiebreak: Vec<u8>,
}

/// Evaluates a set of cards (a player's two plus up to four community cards).
///
/// Categories are checked strongest first, so a hand holding both a pair and
/// three of a kind of different values is a full house, and a hand with
/// three of a kind and no pair is never reported as a pair.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    let mut counts = [0usize; MAX_RANK as usize + 1];
    for card in cards {
        if let Some(count) = counts.get_mut(usize::from(card.rank)) {
            *count += 1;
        }
    }

    let has_count = |n: usize| counts.contains(&n);
    let pairs = counts.iter().filter(|&&c| c == 2).count();

    let category = if has_count(4) {
        HandCategory::FourOfAKind
    } else if has_count(3) && has_count(2) {
        HandCategory::FullHouse
    } else if has_straight(&counts) {
        HandCategory::Straight
    } else if has_count(3) {
        HandCategory::ThreeOfAKind
    } else if pairs == 2 {
        HandCategory::TwoPair
    } else if pairs > 0 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    let mut tiebreak: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    tiebreak.sort_unstable();
    tiebreak.reverse();

    HandEvaluation {
        category,
        score: category.score(),
        tiebreak,
    }
}

/// Slides a five-wide window over the distinct values present.
fn has_straight(counts: &[usize]) -> bool {
    let distinct: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(value, _)| value)
        .collect();

    distinct
        .windows(STRAIGHT_LEN)
        .any(|window| window[STRAIGHT_LEN - 1] - window[0] == STRAIGHT_LEN - 1)
}
