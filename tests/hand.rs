//! Hand evaluator, deck, and turn sequencer tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sniper_holdem::game::turn::{first_active, next_active};
use sniper_holdem::{ActionError, Card, DECK_SIZE, Deck, HandCategory, evaluate};

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| Card::new(rank)).collect()
}

fn category(ranks: &[u8]) -> HandCategory {
    evaluate(&cards(ranks)).category
}

#[test]
fn evaluates_every_category() {
    assert_eq!(category(&[5, 5, 5, 5, 2]), HandCategory::FourOfAKind);
    assert_eq!(category(&[3, 3, 3, 7, 7]), HandCategory::FullHouse);
    assert_eq!(category(&[1, 2, 3, 4, 5]), HandCategory::Straight);
    assert_eq!(category(&[4, 4, 4, 8, 9, 1]), HandCategory::ThreeOfAKind);
    assert_eq!(category(&[2, 2, 7, 7, 9]), HandCategory::TwoPair);
    assert_eq!(category(&[1, 1, 9, 4, 6]), HandCategory::Pair);
    assert_eq!(category(&[1, 3, 5, 7, 9]), HandCategory::HighCard);
}

#[test]
fn stronger_categories_are_checked_first() {
    // Four of a kind beats the leftover pair.
    assert_eq!(category(&[6, 6, 6, 6, 2, 2]), HandCategory::FourOfAKind);
    // A straight with a pair inside it is still a straight.
    assert_eq!(category(&[3, 4, 5, 6, 7, 7]), HandCategory::Straight);
    // Four distinct values in a row are not enough.
    assert_eq!(category(&[5, 5, 5, 6, 7, 8]), HandCategory::ThreeOfAKind);
}

#[test]
fn straight_needs_five_consecutive_distinct_values() {
    assert_eq!(category(&[2, 3, 4, 5, 6, 9]), HandCategory::Straight);
    assert_eq!(category(&[6, 7, 8, 9, 10, 10]), HandCategory::Straight);
    assert_eq!(category(&[1, 2, 3, 4, 6, 7]), HandCategory::HighCard);
    // No wrap-around from 10 to 1.
    assert_eq!(category(&[7, 8, 9, 10, 1, 3]), HandCategory::HighCard);
}

#[test]
fn two_pair_means_exactly_two_pairs() {
    assert_eq!(category(&[2, 2, 5, 5, 9, 10]), HandCategory::TwoPair);
    // Three pairs fall through to a single pair.
    assert_eq!(category(&[2, 2, 5, 5, 9, 9]), HandCategory::Pair);
}

#[test]
fn evaluation_scores_and_tiebreak() {
    let evaluation = evaluate(&cards(&[3, 9, 3, 1, 7, 2]));
    assert_eq!(evaluation.category, HandCategory::Pair);
    assert_eq!(evaluation.score, 2);
    assert_eq!(evaluation.tiebreak, vec![9, 7, 3, 3, 2, 1]);

    let scores: Vec<u8> = HandCategory::ALL.iter().map(|c| c.score()).collect();
    assert_eq!(scores, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(HandCategory::Straight > HandCategory::ThreeOfAKind);
}

#[test]
fn category_names_parse() {
    assert_eq!(
        "two-pair".parse::<HandCategory>(),
        Ok(HandCategory::TwoPair)
    );
    assert_eq!(
        "Full_House".parse::<HandCategory>(),
        Ok(HandCategory::FullHouse)
    );
    assert_eq!(
        " straight ".parse::<HandCategory>(),
        Ok(HandCategory::Straight)
    );
    assert_eq!(
        "royal-flush".parse::<HandCategory>(),
        Err(ActionError::InvalidPrediction)
    );
    assert_eq!(HandCategory::ThreeOfAKind.to_string(), "three-of-a-kind");
}

#[test]
fn deck_holds_four_of_each_rank() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    for rank in 1..=10 {
        let copies = deck.cards().iter().filter(|c| c.rank == rank).count();
        assert_eq!(copies, 4, "rank {rank}");
    }
}

#[test]
fn deck_draws_without_replacement() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    let mut drawn = Vec::new();
    while let Some(card) = deck.draw(&mut rng) {
        drawn.push(card);
    }
    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(&mut rng), None);

    drawn.sort();
    let mut full = Deck::new().cards().to_vec();
    full.sort();
    assert_eq!(drawn, full);
}

#[test]
fn deck_draws_are_reproducible_with_a_seed() {
    let draw_five = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        (0..5).map(|_| deck.draw(&mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(draw_five(11), draw_five(11));
}

#[test]
fn sequencer_wraps_and_skips() {
    assert_eq!(next_active(4, 1, |i| i != 2), Some(3));
    assert_eq!(next_active(4, 3, |i| i == 0), Some(0));
    // The starting seat is tried last.
    assert_eq!(next_active(3, 1, |i| i == 1), Some(1));
    assert_eq!(next_active(3, 0, |_| false), None);
    assert_eq!(next_active(0, 0, |_| true), None);

    assert_eq!(first_active(3, |i| i >= 1), Some(1));
    assert_eq!(first_active(3, |_| true), Some(0));
    assert_eq!(first_active(0, |_| true), None);
}
