//! flapterm - terminal side-scrolling gap game
//!
//! This module exposes the simulation, renderer and session for testing and
//! for the binary.

pub mod config;
pub mod constants;
pub mod game;
pub mod game_loop;
pub mod glyph;
pub mod highscore;
pub mod input;
pub mod terminal;
pub mod ui;
pub mod utils;

pub use config::{Config, ConfigError};
pub use game::{GameInput, GamePhase, GameState, Obstacle, Player, TickResult};
pub use game_loop::GameSession;
pub use highscore::{HighscoreStore, JsonHighscoreStore, MemoryHighscoreStore};
