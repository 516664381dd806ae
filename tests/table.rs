//! Table registry tests.

use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjtable::Rank::{Eight, Five, Four, King, Nine, Seven, Six, Ten, Three, Two};
use bjtable::{
    ActionError, DECK_SIZE, DealError, Deck, Game, GameStatus, PlayerId, RANKS, Rank, Table,
    TableError, TableOptions,
};

fn table() -> Table {
    Table::new(TableOptions::default(), 42)
}

fn stacked(ranks: &[Rank]) -> Deck {
    Deck::from_ranks(ranks.iter().copied())
}

#[test]
fn start_deals_a_hand_for_the_player() {
    let table = table();
    let player = PlayerId(1);

    let view = table.start(player).unwrap();
    assert_eq!(view.player_id, player);
    assert_eq!(view.player.len(), 2);
    assert_eq!(view.dealer.len(), 2);
    assert!(view.dealer[0].is_some());
    assert!(view.dealer[1].is_none());
    assert_eq!(view.status, GameStatus::Playing);

    assert!(table.contains(player));
    assert_eq!(table.len(), 1);
    assert_eq!(table.game(player).unwrap().cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn actions_without_a_hand_are_rejected() {
    let table = table();
    let player = PlayerId(9);

    assert_eq!(table.hit(player).unwrap_err(), TableError::NoActiveGame);
    assert_eq!(table.stay(player).unwrap_err(), TableError::NoActiveGame);
    assert!(table.view(player).is_none());
    assert!(table.is_empty());
}

#[test]
fn short_deck_is_reported() {
    let table = table();
    assert_eq!(
        table.start_with_deck(PlayerId(1), stacked(&[Ten])).unwrap_err(),
        TableError::Deal(DealError::NotEnoughCards)
    );
    assert!(table.is_empty());
}

#[test]
fn starting_again_replaces_the_hand() {
    let table = table();
    let player = PlayerId(3);

    table
        .start_with_deck(player, stacked(&[Ten, Six, Two, Three, Five]))
        .unwrap();
    table.hit(player).unwrap();

    let view = table
        .start_with_deck(player, stacked(&[King, Seven, Nine, Eight]))
        .unwrap();
    assert_eq!(view.player, vec![Nine, Eight]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.view(player), Some(view));
}

#[test]
fn hit_and_stay_route_to_the_players_hand() {
    let table = table();
    let player = PlayerId(4);
    table
        .start_with_deck(player, stacked(&[Ten, Seven, Five, Four, Nine]))
        .unwrap();

    let view = table.hit(player).unwrap();
    assert_eq!(view.player, vec![Five, Four, Nine]);
    assert_eq!(view.player_score, 18);
    assert_eq!(view.status, GameStatus::Playing);

    let view = table.stay(player).unwrap();
    assert_eq!(view.status, GameStatus::PlayerWin);
    assert_eq!(view.dealer, vec![Some(Ten), Some(Seven)]);
    assert_eq!(view.dealer_score, 17);

    assert_eq!(
        table.hit(player).unwrap_err(),
        TableError::Action(ActionError::RoundOver)
    );
}

#[test]
fn evict_finished_keeps_hands_in_progress() {
    let table = table();
    let done = PlayerId(1);
    let playing = PlayerId(2);

    table
        .start_with_deck(done, stacked(&[Ten, Eight, Nine, Nine]))
        .unwrap();
    assert_eq!(table.stay(done).unwrap().status, GameStatus::Push);
    table.start(playing).unwrap();

    assert_eq!(table.evict_finished(), 1);
    assert!(!table.contains(done));
    assert!(table.contains(playing));
    assert_eq!(table.evict_finished(), 0);

    assert!(table.remove(playing).is_some());
    assert!(table.remove(playing).is_none());
    assert!(table.is_empty());
}

#[test]
fn same_seed_deals_the_same_hands() {
    let first = Table::new(TableOptions::default(), 8);
    let second = Table::new(TableOptions::default(), 8);

    for id in 0..5 {
        assert_eq!(
            first.start(PlayerId(id)).unwrap(),
            second.start(PlayerId(id)).unwrap()
        );
    }
}

#[test]
fn start_deals_from_the_tables_seeded_rng() {
    let table = Table::new(TableOptions::default(), 21);
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for id in 0..3 {
        let player = PlayerId(id);
        let expected = Game::shuffled(player, TableOptions::default(), &mut rng).unwrap();
        assert_eq!(table.start(player).unwrap(), expected.view());
        assert_eq!(table.game(player).unwrap().deck(), expected.deck());
    }
}

#[test]
fn concurrent_players_keep_separate_hands() {
    let table = Arc::new(table());

    let handles: Vec<_> = (0..8)
        .map(|id| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let player = PlayerId(id);
                for _ in 0..25 {
                    table.start(player).unwrap();
                    while let Some(view) = table.view(player) {
                        if view.status.is_terminal() {
                            break;
                        }
                        if view.player_score < 15 {
                            table.hit(player).unwrap();
                        } else {
                            table.stay(player).unwrap();
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), 8);
    for id in 0..8 {
        let game = table.game(PlayerId(id)).unwrap();
        assert_eq!(game.player_id(), PlayerId(id));
        assert!(game.status().is_terminal());

        let held = game.player_hand().len() + game.dealer_hand().len();
        assert_eq!(game.cards_remaining() + held, DECK_SIZE);

        for rank in RANKS {
            let in_hands = game
                .player_hand()
                .ranks()
                .iter()
                .chain(game.dealer_hand().ranks())
                .filter(|&&r| r == rank)
                .count();
            assert_eq!(in_hands + game.deck().count(rank), 4);
        }
    }
}
