//! Store-backed room service tests.

use sniper_holdem::{
    Action, ActionError, Card, Dealer, Deck, GameError, HandCategory, MemoryStore, Phase, Progress,
    Room, RoomStore, SetupError, StoreError, TableOptions, Winner,
};

const ROOM: &str = "lobby";

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| Card::new(rank)).collect()
}

fn version(dealer: &Dealer<MemoryStore>) -> u64 {
    dealer.snapshot(ROOM).unwrap().version
}

/// Edits the stored room behind the dealer's back.
fn tamper(dealer: &Dealer<MemoryStore>, edit: impl FnOnce(&mut Room)) {
    let snapshot = dealer.snapshot(ROOM).unwrap();
    let mut room = snapshot.room;
    edit(&mut room);
    dealer
        .store()
        .compare_and_swap(ROOM, snapshot.version, room)
        .unwrap();
}

/// Gives the first seat a pair of ones and the second nothing.
fn stack_hands(room: &mut Room) -> (u32, u32) {
    let table = room.table.as_mut().unwrap();
    let (first, second) = (table.turn_order[0], table.turn_order[1]);
    table.community_cards = cards(&[2, 7]);
    table.deck = Deck::from_cards(cards(&[3, 8]));
    room.players.get_mut(&first).unwrap().hand = cards(&[1, 1]);
    room.players.get_mut(&second).unwrap().hand = cards(&[5, 9]);
    (first, second)
}

fn started_dealer(options: TableOptions) -> Dealer<MemoryStore> {
    let dealer = Dealer::new(MemoryStore::new(), 7);
    dealer.create_room(ROOM, options).unwrap();
    dealer.join(ROOM, 1).unwrap();
    dealer.join(ROOM, 2).unwrap();
    assert_eq!(dealer.start_game(ROOM), Ok(1));
    dealer
}

#[test_log::test]
fn every_write_bumps_the_version() {
    let dealer = Dealer::new(MemoryStore::new(), 1);
    dealer.create_room(ROOM, TableOptions::default()).unwrap();
    assert_eq!(version(&dealer), 1);
    assert_eq!(
        dealer.create_room(ROOM, TableOptions::default()),
        Err(GameError::Store(StoreError::RoomExists))
    );

    dealer.join(ROOM, 1).unwrap();
    dealer.join(ROOM, 2).unwrap();
    assert_eq!(version(&dealer), 3);

    // Nothing changed, nothing written.
    dealer.join(ROOM, 1).unwrap();
    assert_eq!(version(&dealer), 3);

    assert_eq!(dealer.start_game(ROOM), Ok(1));
    assert_eq!(version(&dealer), 4);
    assert_eq!(dealer.store().len(), 1);
}

#[test_log::test]
fn missing_room_is_reported() {
    let dealer = Dealer::new(MemoryStore::new(), 1);
    assert_eq!(
        dealer.join("nowhere", 1),
        Err(GameError::Store(StoreError::RoomNotFound))
    );
    assert_eq!(
        dealer.snapshot("nowhere"),
        Err(GameError::Store(StoreError::RoomNotFound))
    );
    assert!(dealer.store().is_empty());
}

#[test_log::test]
fn start_game_is_idempotent() {
    let dealer = started_dealer(TableOptions::default());
    let room = dealer.snapshot(ROOM).unwrap().room;
    let first = room.current_player().unwrap();
    dealer.submit_bet(ROOM, first, Action::Raise(10)).unwrap();
    let before = dealer.snapshot(ROOM).unwrap();

    assert_eq!(dealer.start_game(ROOM), Ok(1));

    let after = dealer.snapshot(ROOM).unwrap();
    assert_eq!(after, before);
    assert_eq!(after.room.pot(), 10);
    assert_eq!(after.room.player(first).unwrap().chips, 50);
}

#[test_log::test]
fn rejected_request_writes_nothing() {
    let dealer = started_dealer(TableOptions::default());
    let room = dealer.snapshot(ROOM).unwrap().room;
    let waiting = room.table.as_ref().unwrap().turn_order[1];
    let before = version(&dealer);

    assert_eq!(
        dealer.submit_bet(ROOM, waiting, Action::Check),
        Err(GameError::Action(ActionError::NotYourTurn))
    );
    assert_eq!(
        dealer.submit_snipe(ROOM, waiting, HandCategory::Pair),
        Err(GameError::Action(ActionError::InvalidPhaseForAction))
    );
    assert_eq!(
        dealer.join(ROOM, 3),
        Err(GameError::Setup(SetupError::RoundInProgress))
    );
    assert_eq!(version(&dealer), before);
}

#[test_log::test]
fn stale_writes_conflict() {
    let dealer = started_dealer(TableOptions::default());
    let stale = dealer.snapshot(ROOM).unwrap();

    let first = stale.room.current_player().unwrap();
    dealer.submit_bet(ROOM, first, Action::Check).unwrap();

    assert_eq!(
        dealer
            .store()
            .compare_and_swap(ROOM, stale.version, stale.room),
        Err(StoreError::Conflict {
            expected: stale.version,
            found: stale.version + 1,
        })
    );
}

#[test_log::test]
fn corrupt_room_is_refused() {
    let dealer = started_dealer(TableOptions::default());
    let mut first = 0;
    tamper(&dealer, |room| {
        first = room.current_player().unwrap();
        room.players.remove(&first);
    });
    let before = version(&dealer);

    assert!(matches!(
        dealer.submit_bet(ROOM, first, Action::Check),
        Err(GameError::StateCorruption(_))
    ));
    assert_eq!(version(&dealer), before);
}

#[test_log::test]
fn last_snipe_resolves_and_deals_the_next_round() {
    let dealer = started_dealer(TableOptions::default());
    let mut seats = (0, 0);
    tamper(&dealer, |room| seats = stack_hands(room));
    let (a, b) = seats;

    assert_eq!(
        dealer.submit_bet(ROOM, a, Action::Raise(10)),
        Ok(Progress::Continued)
    );
    assert_eq!(
        dealer.submit_bet(ROOM, b, Action::Call),
        Ok(Progress::PhaseAdvanced(Phase::Bet2))
    );
    dealer.submit_bet(ROOM, a, Action::Check).unwrap();
    assert_eq!(
        dealer.submit_bet(ROOM, b, Action::Check),
        Ok(Progress::PhaseAdvanced(Phase::Snipe))
    );
    assert_eq!(
        dealer.submit_snipe(ROOM, a, HandCategory::Pair),
        Ok(Progress::Continued)
    );

    let before = version(&dealer);
    let progress = dealer.submit_snipe(ROOM, b, HandCategory::Straight);
    let Ok(Progress::RoundResolved(result)) = progress else {
        panic!("round should resolve on the last snipe");
    };
    assert_eq!(version(&dealer), before + 1);

    assert_eq!(result.round_number, 1);
    assert_eq!(result.winner, Winner::Player(b));
    assert_eq!(result.pot, 20);

    let room = dealer.snapshot(ROOM).unwrap().room;
    assert_eq!(room.round_number, 2);
    assert_eq!(room.phase(), Some(Phase::Bet1));
    assert_eq!(room.history, vec![result]);
    assert_eq!(room.player(a).unwrap().chips, 50);
    assert_eq!(room.player(b).unwrap().chips, 70);
    assert_eq!(room.total_chips(), 120);
}

#[test_log::test]
fn game_ends_when_one_player_holds_every_chip() {
    let dealer = started_dealer(TableOptions::default().with_starting_chips(10));
    let mut seats = (0, 0);
    tamper(&dealer, |room| seats = stack_hands(room));
    let (a, b) = seats;

    // Both all in, so the second betting phase is skipped.
    dealer.submit_bet(ROOM, a, Action::Raise(10)).unwrap();
    assert_eq!(
        dealer.submit_bet(ROOM, b, Action::Call),
        Ok(Progress::PhaseAdvanced(Phase::Snipe))
    );
    dealer
        .submit_snipe(ROOM, a, HandCategory::Straight)
        .unwrap();
    let progress = dealer.submit_snipe(ROOM, b, HandCategory::FourOfAKind);
    let Ok(Progress::RoundResolved(result)) = progress else {
        panic!("round should resolve on the last snipe");
    };
    assert_eq!(result.winner, Winner::Player(a));

    let room = dealer.snapshot(ROOM).unwrap().room;
    assert!(room.table.is_none());
    assert_eq!(room.player(a).unwrap().chips, 20);
    assert_eq!(room.player(b).unwrap().chips, 0);
    assert_eq!(
        dealer.start_game(ROOM),
        Err(GameError::Setup(SetupError::NotEnoughPlayers))
    );
}
