use flapterm::config::Config;
use flapterm::game_loop::{self, GameSession};
use flapterm::highscore::JsonHighscoreStore;
use flapterm::input;
use flapterm::terminal::TerminalGuard;
use flapterm::utils::logging;
use std::io;

fn main() -> io::Result<()> {
    logging::init();
    log::info!("flapterm {} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let store = JsonHighscoreStore::in_data_dir();
    let mut session = GameSession::new(config, store, rand::thread_rng());

    // Raw input mode is required; without it the game cannot run
    let mut guard = match TerminalGuard::acquire() {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("Terminal setup failed: {}", e);
            eprintln!("flapterm: could not prepare the terminal: {}", e);
            std::process::exit(1);
        }
    };

    let result = game_loop::run(guard.terminal_mut(), &mut session, input::poll_action);
    let restored = guard.restore();

    match &result {
        Ok(()) => log::info!("Shutting down, highscore {}", session.state().highscore),
        Err(e) => log::error!("Game loop failed: {}", e),
    }
    result?;
    restored?;

    println!("Highscore: {}", session.state().highscore);
    Ok(())
}
