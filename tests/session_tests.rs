use battleship_solo::{
    Cell, ConfigError, Fleet, GameConfig, GameError, GameSession, GameStatus, GuessResult,
    Position,
};
use rand::{rngs::SmallRng, SeedableRng};

fn session(config: GameConfig, ships: &[(usize, usize)]) -> GameSession {
    let fleet = Fleet::from_positions(
        ships.iter().map(|&(r, c)| Position::new(r, c)),
        config.rows,
        config.cols,
    )
    .unwrap();
    GameSession::with_fleet(&config, fleet)
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!((config.rows, config.cols, config.ships), (6, 10, 6));
    assert_eq!(config.guess_budget(), 22);
    assert_eq!(config.with_max_guesses(30).guess_budget(), 30);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_validation() {
    assert_eq!(GameConfig::new(0, 5, 1).validate(), Err(ConfigError::NoRows));
    assert_eq!(GameConfig::new(5, 0, 1).validate(), Err(ConfigError::NoColumns));
    assert_eq!(GameConfig::new(5, 5, 0).validate(), Err(ConfigError::NoShips));
    assert_eq!(GameConfig::new(1, 1, 1).validate(), Err(ConfigError::NoGuesses));
    assert_eq!(GameConfig::new(1, 10, 1).validate(), Err(ConfigError::NoGuesses));
    assert_eq!(GameConfig::new(1, 10, 1).with_max_guesses(5).validate(), Ok(()));
    assert_eq!(
        GameConfig::new(3, 3, 10).validate(),
        Err(ConfigError::TooManyShips { ships: 10, capacity: 9 })
    );
    assert_eq!(GameConfig::new(1, 1, 1).with_max_guesses(1).validate(), Ok(()));
}

#[test]
fn test_derived_budget_follows_interior_arithmetic() {
    assert_eq!(GameConfig::new(6, 10, 6).guess_budget(), 5 * 9 / 2);
    assert_eq!(GameConfig::new(3, 3, 1).guess_budget(), 2);
    assert_eq!(GameConfig::new(4, 7, 1).guess_budget(), 9);
    assert_eq!(GameConfig::new(1, 1, 1).guess_budget(), 0);
}

#[test]
fn test_oversized_board_is_rejected() {
    assert_eq!(
        GameConfig::new(usize::MAX, 2, 1).validate(),
        Err(ConfigError::TooLarge { rows: usize::MAX, cols: 2 })
    );
    assert_eq!(
        GameConfig::new(5_000_000_000, 5_000_000_000, 1).validate(),
        Err(ConfigError::TooLarge { rows: 5_000_000_000, cols: 5_000_000_000 })
    );
    assert_eq!(
        GameConfig::new(2_000, 2_000, 1).validate(),
        Err(ConfigError::TooLarge { rows: 2_000, cols: 2_000 })
    );
    assert_eq!(GameConfig::new(1_024, 1_024, 1).validate(), Ok(()));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "fleet does not fit")]
fn test_fleet_for_another_board_is_caught() {
    let fleet = Fleet::from_positions([Position::new(5, 8)], 6, 10).unwrap();
    let _ = GameSession::with_fleet(&GameConfig::new(3, 3, 1), fleet);
}

#[test]
fn test_new_session_state() {
    let mut rng = SmallRng::seed_from_u64(3);
    let game = GameSession::new(&GameConfig::default(), &mut rng);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.ships_remaining(), 6);
    assert_eq!(game.ships_total(), 6);
    assert_eq!(game.max_guesses(), 22);
    assert_eq!(game.grid().count(Cell::Unknown), 60);
}

#[test]
fn test_single_hit_wins() {
    let mut game = session(GameConfig::new(6, 10, 1), &[(3, 4)]);
    assert_eq!(game.guess(3, 4), Ok(GuessResult::Hit));
    assert_eq!(game.ships_remaining(), 0);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.grid().get(Position::new(3, 4)), Some(Cell::Hit));
}

#[test]
fn test_out_of_bounds_consumes_turn() {
    let mut game = session(GameConfig::new(6, 10, 1), &[(3, 4)]);
    let before = game.grid().clone();
    assert_eq!(game.guess(0, 5), Ok(GuessResult::OutOfBounds));
    assert_eq!(game.grid(), &before);
    assert_eq!(game.turn(), 2);

    assert_eq!(game.guess(7, 1), Ok(GuessResult::OutOfBounds));
    assert_eq!(game.guess(1, 11), Ok(GuessResult::OutOfBounds));
    assert_eq!(game.guess(-3, 2), Ok(GuessResult::OutOfBounds));
    assert_eq!(game.turn(), 5);
    assert_eq!(game.grid(), &before);
}

#[test]
fn test_repeat_miss_is_already_guessed() {
    let mut game = session(GameConfig::new(6, 10, 1), &[(3, 4)]);
    assert_eq!(game.guess(2, 2), Ok(GuessResult::Miss));
    assert_eq!(game.grid().get(Position::new(2, 2)), Some(Cell::Miss));
    let after_miss = game.grid().clone();

    assert_eq!(game.guess(2, 2), Ok(GuessResult::AlreadyGuessed));
    assert_eq!(game.grid(), &after_miss);
    assert_eq!(game.turn(), 3);
}

#[test]
fn test_repeat_hit_is_already_guessed() {
    let mut game = session(GameConfig::new(6, 10, 2), &[(3, 4), (5, 5)]);
    assert_eq!(game.guess(3, 4), Ok(GuessResult::Hit));
    assert_eq!(game.guess(3, 4), Ok(GuessResult::AlreadyGuessed));
    assert_eq!(game.ships_remaining(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_running_out_reveals_unsunk_ships() {
    let config = GameConfig::new(6, 10, 3).with_max_guesses(3);
    let mut game = session(config, &[(1, 1), (6, 10), (4, 7)]);

    assert_eq!(game.guess(1, 1), Ok(GuessResult::Hit));
    assert_eq!(game.guess(2, 2), Ok(GuessResult::Miss));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.guess(3, 3), Ok(GuessResult::Miss));
    assert_eq!(game.status(), GameStatus::Lost);

    let grid = game.grid();
    assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Hit));
    assert_eq!(grid.get(Position::new(6, 10)), Some(Cell::Revealed));
    assert_eq!(grid.get(Position::new(4, 7)), Some(Cell::Revealed));
    assert_eq!(grid.count(Cell::Revealed), 2);

    let rendered = grid.to_string();
    let last = rendered.lines().last().unwrap();
    assert_eq!(last, "6  O  O  O  O  O  O  O  O  O  !");
}

#[test]
fn test_three_misses_lose() {
    let config = GameConfig::new(6, 10, 2).with_max_guesses(3);
    let mut game = session(config, &[(5, 9), (6, 1)]);
    for (r, c) in [(1, 1), (1, 2), (1, 3)] {
        assert_eq!(game.guess(r, c), Ok(GuessResult::Miss));
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.ships_remaining(), 2);
    assert_eq!(game.grid().count(Cell::Revealed), 2);
    assert!(game.grid().to_string().contains('!'));
}

#[test]
fn test_winning_on_last_turn_is_a_win() {
    let config = GameConfig::new(3, 3, 1).with_max_guesses(2);
    let mut game = session(config, &[(2, 2)]);
    assert_eq!(game.guess(1, 1), Ok(GuessResult::Miss));
    assert_eq!(game.guess(2, 2), Ok(GuessResult::Hit));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.grid().count(Cell::Revealed), 0);
}

#[test]
fn test_guess_after_end_is_rejected() {
    let mut game = session(GameConfig::new(3, 3, 1), &[(1, 1)]);
    game.guess(1, 1).unwrap();
    let turn = game.turn();
    assert_eq!(game.guess(2, 2), Err(GameError::GameOver));
    assert_eq!(game.turn(), turn);
}

#[test]
fn test_summary() {
    let config = GameConfig::new(6, 10, 2).with_max_guesses(4);
    let mut game = session(config, &[(1, 1), (2, 2)]);
    game.guess(1, 1).unwrap();
    game.guess(9, 9).unwrap();
    let summary = game.summary();
    assert_eq!(summary.status, GameStatus::InProgress);
    assert_eq!(summary.ships_sunk, 1);
    assert_eq!(summary.ships_total, 2);
    assert_eq!(summary.guesses_used, 2);
    assert_eq!(summary.max_guesses, 4);
}
