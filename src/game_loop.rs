//! Game session and the real-time loop driver.
//!
//! [`GameSession`] owns everything the simulation needs (config, state, RNG,
//! highscore store) and is the only place persistence errors are swallowed.
//! [`run`] paces frames: poll input, update with wall-clock `dt`, render, draw,
//! sleep off the rest of the frame.

use crate::config::Config;
use crate::game::{self, GameInput, GameState, TickResult};
use crate::highscore::HighscoreStore;
use crate::input::KeyAction;
use crate::ui::{self, game_scene};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::Instant;

pub struct GameSession<S: HighscoreStore, R: Rng> {
    config: Config,
    state: GameState,
    store: S,
    rng: R,
}

impl<S: HighscoreStore, R: Rng> GameSession<S, R> {
    /// Load the highscore (0 if unavailable) and start a fresh game.
    pub fn new(config: Config, store: S, mut rng: R) -> Self {
        let highscore = match store.load_highscore() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not load highscore, starting from 0: {}", e);
                0
            }
        };
        let state = GameState::new(&config, highscore, &mut rng);
        log::info!(
            "New session: {}x{} field, {} obstacles, highscore {}",
            config.width,
            config.height,
            config.obstacle_count,
            highscore
        );

        Self {
            config,
            state,
            store,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The action key: jump while playing, reset after game over.
    pub fn press_action(&mut self) -> GameInput {
        let input = GameInput::for_phase(self.state.phase());
        if game::process_input(&mut self.state, &self.config, input, &mut self.rng)
            && input == GameInput::Reset
        {
            log::info!("Game reset");
        }
        input
    }

    /// Advance by `dt` seconds and persist a beaten highscore.
    pub fn tick(&mut self, dt: f64) -> TickResult {
        let result = game::update(&mut self.state, &self.config, dt, &mut self.rng);

        if result.died {
            log::info!("Game over with score {}", self.state.score);
        }
        if let Some(highscore) = result.new_highscore {
            log::info!("New highscore: {}", highscore);
            if let Err(e) = self.store.save_highscore(highscore) {
                log::warn!("Could not save highscore {}: {}", highscore, e);
            }
        }

        result
    }

    pub fn frame(&self) -> game_scene::FrameBuffer {
        game_scene::render_game(&self.state, &self.config)
    }
}

/// Run until `poll` reports a quit or an I/O error occurs.
pub fn run<B, S, R, P>(
    terminal: &mut Terminal<B>,
    session: &mut GameSession<S, R>,
    mut poll: P,
) -> io::Result<()>
where
    B: Backend,
    S: HighscoreStore,
    R: Rng,
    P: FnMut() -> io::Result<Option<KeyAction>>,
{
    let frame_interval = session.config().frame_interval();
    let mut last_update = Instant::now();

    loop {
        let frame_start = Instant::now();

        match poll()? {
            Some(KeyAction::Quit) => break,
            Some(KeyAction::Action) => {
                session.press_action();
            }
            None => {}
        }

        let now = Instant::now();
        let dt = now.duration_since(last_update).as_secs_f64();
        last_update = now;
        session.tick(dt);

        let frame = session.frame();
        terminal.draw(|f| ui::draw(f, &frame))?;

        if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    Ok(())
}
