use std::fs;

use dodge::core::{FileHighscoreStore, GameConfig, GameState, HighscoreStore, Obstacle, SeededRng};
use dodge::types::{MoveInput, Rect, TICK_MS};

fn crash(game: &mut GameState<FileHighscoreStore, SeededRng>) {
    let p = game.player().rect;
    game.insert_obstacle(Obstacle::new(Rect::new(p.x, p.y - 10, 20, 20), 2));
    while !game.game_over() {
        game.tick(TICK_MS, MoveInput::NONE);
    }
}

#[test]
fn highscore_survives_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dodge_highscore.sav");

    let mut first = GameState::new(
        GameConfig::default(),
        FileHighscoreStore::new(&path),
        SeededRng::new(3),
    );
    assert_eq!(first.highscore(), 0);
    for _ in 0..20 {
        first.tick(TICK_MS, MoveInput::NONE);
    }
    crash(&mut first);
    let best = first.highscore();
    assert_eq!(best, 21);
    assert_eq!(fs::read_to_string(&path).unwrap(), "21");

    let second = GameState::new(
        GameConfig::default(),
        FileHighscoreStore::new(&path),
        SeededRng::new(4),
    );
    assert_eq!(second.highscore(), best);
}

#[test]
fn corrupt_highscore_file_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.sav");
    fs::write(&path, "lots").unwrap();

    let mut store = FileHighscoreStore::new(&path);
    assert!(store.read().is_err());
    assert_eq!(store.load(), 0);

    // The next save overwrites the bad contents.
    store.save(5);
    assert_eq!(store.load(), 5);
}

#[test]
fn unwritable_highscore_path_does_not_stop_the_game() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be written as a file.
    let mut game = GameState::new(
        GameConfig::default(),
        FileHighscoreStore::new(dir.path()),
        SeededRng::new(3),
    );
    assert_eq!(game.highscore(), 0);
    crash(&mut game);
    assert_eq!(game.highscore(), 1);
}
