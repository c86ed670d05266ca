//! Physics update, obstacle recycling and input handling.

use super::collision;
use super::types::{random_gap, random_spacing, GamePhase, GameState, Obstacle};
use crate::config::Config;
use rand::Rng;

/// Discrete events the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Upward impulse. Ignored after game over.
    Jump,
    /// Start over. Ignored while playing.
    Reset,
}

impl GameInput {
    /// The single action key means "jump" while alive and "reset" when dead.
    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Playing => Self::Jump,
            GamePhase::GameOver => Self::Reset,
        }
    }
}

/// Everything that happened during one update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Points awarded this tick.
    pub points: u32,
    /// Slots recycled this tick, in slot order.
    pub recycled: Vec<usize>,
    /// The game ended on this tick.
    pub died: bool,
    /// Set when this tick's game over beat the previous highscore.
    pub new_highscore: Option<u32>,
}

/// Apply one input event. Returns whether it changed the state.
pub fn process_input<R: Rng>(
    state: &mut GameState,
    config: &Config,
    input: GameInput,
    rng: &mut R,
) -> bool {
    match (input, state.phase()) {
        (GameInput::Jump, GamePhase::Playing) => {
            state.player.vel = config.jump_strength;
            true
        }
        (GameInput::Reset, GamePhase::GameOver) => {
            state.reset(config, rng);
            true
        }
        _ => false,
    }
}

/// Advance the simulation by `dt` seconds. No-op once the game is over.
///
/// Order within a tick: integrate, clamp, scroll, recycle, then
/// collision/scoring, so recycled obstacles are tested at their new position.
pub fn update<R: Rng>(state: &mut GameState, config: &Config, dt: f64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if state.game_over {
        return result;
    }

    // Integrate
    let player = &mut state.player;
    player.vel += config.gravity * dt;
    player.y += player.vel * dt;

    // Floor is fatal, ceiling absorbs velocity
    let floor = config.floor_row();
    if player.y >= floor {
        player.y = floor;
        end_game(state, &mut result);
        return result;
    }
    if player.y < 0.0 {
        player.y = 0.0;
        player.vel = 0.0;
    }

    for obstacle in &mut state.obstacles {
        obstacle.x -= config.scroll_speed * dt;
    }

    recycle_obstacles(state, config, rng, &mut result);

    let evaluation = collision::evaluate(state, config);
    result.points = evaluation.points;
    if evaluation.collided {
        end_game(state, &mut result);
    }

    result
}

/// Move every slot with `x < 0` past the rightmost obstacle with a fresh gap.
fn recycle_obstacles<R: Rng>(
    state: &mut GameState,
    config: &Config,
    rng: &mut R,
    result: &mut TickResult,
) {
    let width = f64::from(config.width);
    for slot in 0..state.obstacles.len() {
        if state.obstacles[slot].x >= 0.0 {
            continue;
        }
        let rightmost = state.rightmost_x();
        let x = (rightmost + random_spacing(config, rng)).max(width);
        state.obstacles[slot] = Obstacle::new(x, random_gap(config, rng));
        state.passed_slots.remove(&slot);
        result.recycled.push(slot);
    }
}

/// The Playing -> GameOver transition. Raises the highscore if beaten.
fn end_game(state: &mut GameState, result: &mut TickResult) {
    state.game_over = true;
    result.died = true;
    if state.score > state.highscore {
        state.highscore = state.score;
        result.new_highscore = Some(state.score);
    }
}
