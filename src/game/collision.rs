//! Collision and scoring against obstacle slots.
//!
//! Obstacles occupy exactly one column, `floor(x)`. Scoring is keyed by slot
//! index and tested only on the tick an obstacle first moves left of the
//! player column.

use super::types::{GameState, Obstacle, Player};
use crate::config::Config;

/// What a single evaluation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Points awarded this pass.
    pub points: u32,
    /// The player overlapped a solid obstacle cell.
    pub collided: bool,
}

/// Whether `player` overlaps a solid cell of `obstacle`.
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle, gap_height: u16) -> bool {
    player.covers(obstacle.column()) && !obstacle.gap_contains(player.row(), gap_height)
}

/// Award points for obstacles crossed this tick and detect collisions.
///
/// Sets `game_over` on collision; the caller owns the game-over transition
/// side effects (highscore).
pub fn evaluate(state: &mut GameState, config: &Config) -> Evaluation {
    let mut result = Evaluation::default();
    let row = state.player.row();
    let player_col = f64::from(state.player.col);

    for (slot, obstacle) in state.obstacles.iter_mut().enumerate() {
        if !obstacle.crossed && obstacle.x < player_col {
            obstacle.crossed = true;
            if obstacle.gap_contains(row, config.gap_height) && state.passed_slots.insert(slot) {
                state.score += 1;
                result.points += 1;
            }
        }

        if hits_obstacle(&state.player, obstacle, config.gap_height) {
            result.collided = true;
        }
    }

    if result.collided {
        state.game_over = true;
    }
    result
}
