//! Integration test: session and loop driver
//!
//! Runs the real loop against ratatui's TestBackend with a scripted input
//! source, and exercises the session's highscore persistence contract.

use flapterm::game_loop::{run, GameSession};
use flapterm::highscore::{HighscoreStore, JsonHighscoreStore, MemoryHighscoreStore};
use flapterm::input::KeyAction;
use flapterm::ui::game_scene::GAME_OVER_MESSAGE;
use flapterm::{Config, GameInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::TestBackend, Terminal};
use std::collections::VecDeque;
use std::io;

fn fast_config() -> Config {
    Config {
        frames_per_second: 200,
        ..Config::default()
    }
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

/// Poll function that replays `script` and then quits.
fn scripted(script: Vec<Option<KeyAction>>) -> impl FnMut() -> io::Result<Option<KeyAction>> {
    let mut queue: VecDeque<Option<KeyAction>> = script.into();
    move || Ok(queue.pop_front().unwrap_or(Some(KeyAction::Quit)))
}

#[test]
fn test_loop_runs_until_quit_and_draws_frames() {
    let mut session = GameSession::new(
        fast_config(),
        MemoryHighscoreStore::with_value(3),
        ChaCha8Rng::seed_from_u64(1),
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    run(
        &mut terminal,
        &mut session,
        scripted(vec![None, Some(KeyAction::Action), None]),
    )
    .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("Score: 0"));
    assert!(screen.contains("Highscore: 3"));
    assert!(screen.contains(&session.config().player_glyph));
    assert!(!session.state().game_over);
}

#[test]
fn test_loop_stops_on_poll_error() {
    let mut session = GameSession::new(
        fast_config(),
        MemoryHighscoreStore::default(),
        ChaCha8Rng::seed_from_u64(1),
    );
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    let result = run(&mut terminal, &mut session, || {
        Err(io::Error::new(io::ErrorKind::Other, "input gone"))
    });

    assert!(result.is_err());
}

#[test]
fn test_game_over_banner_then_reset() {
    let mut session = GameSession::new(
        fast_config(),
        MemoryHighscoreStore::default(),
        ChaCha8Rng::seed_from_u64(2),
    );

    // Free fall until the floor
    let mut ticks = 0;
    while !session.state().game_over && ticks < 10_000 {
        session.tick(0.01);
        ticks += 1;
    }
    assert!(session.state().game_over);
    assert!(session.frame().to_string().contains(GAME_OVER_MESSAGE));

    assert_eq!(session.press_action(), GameInput::Reset);
    assert!(!session.state().game_over);
    assert_eq!(session.state().score, 0);
    assert!(!session.frame().to_string().contains(GAME_OVER_MESSAGE));
}

#[test]
fn test_json_store_round_trip_through_session() {
    let path = std::env::temp_dir()
        .join(format!("flapterm-loop-{}", std::process::id()))
        .join("highscore.json");
    std::fs::remove_file(&path).ok();

    let mut session = GameSession::new(
        fast_config(),
        JsonHighscoreStore::new(&path),
        ChaCha8Rng::seed_from_u64(3),
    );
    assert_eq!(session.state().highscore, 0);

    while !session.state().game_over {
        session.tick(0.05);
    }
    // A zero score does not beat the stored zero, so nothing is written
    assert_eq!(session.state().score, 0);
    assert!(!path.exists());

    let mut store = JsonHighscoreStore::new(&path);
    store.save_highscore(12).unwrap();
    let reloaded = GameSession::new(fast_config(), store, ChaCha8Rng::seed_from_u64(4));
    assert_eq!(reloaded.state().highscore, 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_unreadable_highscore_starts_at_zero() {
    let path = std::env::temp_dir()
        .join(format!("flapterm-loop-bad-{}", std::process::id()))
        .join("highscore.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "definitely not json").unwrap();

    let session = GameSession::new(
        fast_config(),
        JsonHighscoreStore::new(&path),
        ChaCha8Rng::seed_from_u64(5),
    );

    assert_eq!(session.state().highscore, 0);
    assert!(!session.state().game_over);

    std::fs::remove_file(&path).ok();
}
