//! Property tests for secret draws and try accounting.

use proptest::prelude::*;
use strictly_guessing::{GameConfiguration, GameEngine, Outcome, StdRandom};

fn configuration() -> impl Strategy<Value = GameConfiguration> {
    (-1_000i64..1_000, 0i64..500, 1i64..20).prop_map(|(min, span, tries)| {
        GameConfiguration::new(min, min + span, tries).expect("generated configuration is valid")
    })
}

proptest! {
    #[test]
    fn test_secret_always_within_range(config in configuration(), seed in any::<u64>()) {
        let mut game = GameEngine::new(config, StdRandom::seeded(seed));
        for _ in 0..20 {
            prop_assert!(config.contains(*game.round().secret()));
            game.new_round();
        }
    }

    #[test]
    fn test_tries_left_tracks_tries_used(
        config in configuration(),
        seed in any::<u64>(),
        guesses in prop::collection::vec(any::<i64>(), 1..60),
    ) {
        let mut game = GameEngine::new(config, StdRandom::seeded(seed));
        for value in guesses {
            let before = game.score().games();
            let outcome = game.guess(value);
            if outcome.ends_round() {
                prop_assert_eq!(game.score().games(), before + 1);
                prop_assert_eq!(game.tries_left(), *config.max_tries());
            } else {
                prop_assert_eq!(
                    game.tries_left(),
                    *config.max_tries() - *game.round().tries_used()
                );
                prop_assert!(game.tries_left() >= 1);
            }
        }
    }

    #[test]
    fn test_out_of_range_never_spends_a_try(
        config in configuration(),
        seed in any::<u64>(),
        offset in 1i64..1_000,
    ) {
        let mut game = GameEngine::new(config, StdRandom::seeded(seed));
        prop_assert!(game.guess_validated(*config.minimum() - offset).is_err());
        prop_assert!(game.guess_validated(*config.maximum() + offset).is_err());
        prop_assert_eq!(*game.round().tries_used(), 0);
    }

    #[test]
    fn test_secret_guess_wins(config in configuration(), seed in any::<u64>()) {
        let mut game = GameEngine::new(config, StdRandom::seeded(seed));
        let secret = *game.round().secret();
        prop_assert_eq!(game.guess(secret), Outcome::Win);
        prop_assert_eq!(game.wins(), 1);
    }
}
