//! Property tests over whole random games.

use proptest::prelude::*;

use dominion_engine::core::{CardSet, GameConfig, GameEvent, PlayerId};
use dominion_engine::rules::Game;
use dominion_engine::zones::HAND_SIZE;

fn card_set() -> impl Strategy<Value = CardSet> {
    prop_oneof![Just(CardSet::Base), Just(CardSet::Random)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Cards only move: players + supply + trash is constant after every turn.
    #[test]
    fn cards_are_conserved(seed in any::<u64>(), players in 2usize..=4, set in card_set()) {
        let config = GameConfig::new(players)
            .with_card_set(set)
            .with_seed(seed)
            .with_turn_limit(60);
        let mut game = Game::new(config, Vec::new()).unwrap();
        let total = game.state().total_cards();

        let mut player = PlayerId::new(0);
        while !game.is_over() {
            game.take_turn(player).unwrap();
            prop_assert_eq!(game.state().total_cards(), total);
            player = player.next(players);
        }
    }

    /// A player's card count moves by exactly +1 per gain or buy and -1 per
    /// trash recorded against them, so no card ever lands with the wrong player.
    #[test]
    fn owned_cards_follow_gains_and_trashes(seed in any::<u64>(), players in 2usize..=4, set in card_set()) {
        let config = GameConfig::new(players)
            .with_card_set(set)
            .with_seed(seed)
            .with_turn_limit(60);
        let mut game = Game::new(config, Vec::new()).unwrap();

        let mut player = PlayerId::new(0);
        while !game.is_over() {
            let before: Vec<i64> = PlayerId::all(players)
                .map(|id| game.state().zones(id).card_count() as i64)
                .collect();
            let seen = game.state().history.len();

            game.take_turn(player).unwrap();

            let mut expected = before;
            for record in game.state().history.iter().skip(seen) {
                match record.event {
                    GameEvent::Bought(_) | GameEvent::Gained { .. } => expected[record.player.index()] += 1,
                    GameEvent::Trashed(_) => expected[record.player.index()] -= 1,
                    _ => {}
                }
            }
            for id in PlayerId::all(players) {
                prop_assert_eq!(game.state().zones(id).card_count() as i64, expected[id.index()]);
            }
            player = player.next(players);
        }
    }

    /// Cleanup always leaves a full hand, or every owned card when fewer than 5.
    #[test]
    fn cleanup_draws_full_hand(seed in any::<u64>(), players in 2usize..=4) {
        let config = GameConfig::new(players).with_seed(seed).with_turn_limit(40);
        let mut game = Game::new(config, Vec::new()).unwrap();

        let mut player = PlayerId::new(0);
        while !game.is_over() {
            game.take_turn(player).unwrap();
            let zones = game.state().zones(player);
            prop_assert_eq!(zones.hand.len(), zones.card_count().min(HAND_SIZE));
            player = player.next(players);
        }
    }

    /// Random games finish without errors and score every seat.
    #[test]
    fn random_games_complete(seed in any::<u64>(), players in 2usize..=4) {
        let config = GameConfig::new(players).with_seed(seed).with_turn_limit(400);
        let mut game = Game::new(config, Vec::new()).unwrap();

        let scores = game.play_game().unwrap();
        prop_assert_eq!(scores.len(), players);
        prop_assert!(!scores.winners().is_empty());
    }
}
