//! Game state data structures.

use crate::config::Config;
use rand::Rng;
use std::collections::BTreeSet;

/// Whole-game phase. `GameOver` freezes physics until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// The player. Only the vertical axis moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed column of the leftmost cell.
    pub col: u16,
    /// Vertical position in rows (row 0 = ceiling).
    pub y: f64,
    /// Vertical velocity in rows/second (positive = downward).
    pub vel: f64,
    /// Visible width of the player glyph in columns.
    pub width: u16,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            col: config.player_col,
            y: f64::from(config.height / 2),
            vel: 0.0,
            width: config.player_width(),
        }
    }

    /// Row the player currently occupies.
    pub fn row(&self) -> i64 {
        self.y.floor() as i64
    }

    /// Whether the player's footprint `[col, col + width)` covers `column`.
    pub fn covers(&self, column: i64) -> bool {
        let left = i64::from(self.col);
        column >= left && column < left + i64::from(self.width)
    }
}

/// One obstacle slot: a solid column with a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Horizontal position (float for smooth scrolling).
    pub x: f64,
    /// First row of the gap; the gap spans `[gap, gap + G)`.
    pub gap: u16,
    /// Set on the tick `x` first drops below the player column, whether or
    /// not that crossing scored. Cleared by recycling.
    pub crossed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap: u16) -> Self {
        Self {
            x,
            gap,
            crossed: false,
        }
    }

    /// The single column this obstacle occupies.
    pub fn column(&self) -> i64 {
        self.x.floor() as i64
    }

    pub fn gap_contains(&self, row: i64, gap_height: u16) -> bool {
        let top = i64::from(self.gap);
        row >= top && row < top + i64::from(gap_height)
    }
}

/// Complete mutable simulation state. Replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Exactly `N` obstacles, indexed by slot. Not sorted by `x`.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Slots already credited to `score` since they were last recycled.
    pub passed_slots: BTreeSet<usize>,
    pub game_over: bool,
    /// Best score seen, carried across resets.
    pub highscore: u32,
}

impl GameState {
    /// Fresh game: player mid-screen, obstacles lined up from the right edge.
    pub fn new<R: Rng>(config: &Config, highscore: u32, rng: &mut R) -> Self {
        let mut obstacles = Vec::with_capacity(config.obstacle_count);
        let mut x = f64::from(config.width);
        for _ in 0..config.obstacle_count {
            obstacles.push(Obstacle::new(x, random_gap(config, rng)));
            x += random_spacing(config, rng);
        }

        Self {
            player: Player::new(config),
            obstacles,
            score: 0,
            passed_slots: BTreeSet::new(),
            game_over: false,
            highscore,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// Replace this state with a fresh game, keeping only the highscore.
    pub fn reset<R: Rng>(&mut self, config: &Config, rng: &mut R) {
        *self = Self::new(config, self.highscore, rng);
    }

    /// Largest `x` over all slots.
    pub fn rightmost_x(&self) -> f64 {
        self.obstacles
            .iter()
            .map(|o| o.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Uniform spacing in `[min_spacing, max_spacing]`.
pub fn random_spacing<R: Rng>(config: &Config, rng: &mut R) -> f64 {
    if config.max_spacing > config.min_spacing {
        rng.gen_range(config.min_spacing..=config.max_spacing)
    } else {
        config.min_spacing
    }
}

/// Uniform gap start in `[1, H-G-1]`.
pub fn random_gap<R: Rng>(config: &Config, rng: &mut R) -> u16 {
    rng.gen_range(1..=config.max_gap_start())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let config = Config::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = GameState::new(&config, 12, &mut rng);

        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.highscore, 12);
        assert!(state.passed_slots.is_empty());
        assert_eq!(state.obstacles.len(), config.obstacle_count);
        assert_eq!(state.player.col, config.player_col);
        assert_eq!(state.player.width, 2);
        assert_eq!(state.player.vel, 0.0);
    }

    #[test]
    fn test_initial_obstacles_strictly_increasing_from_width() {
        let config = Config::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let state = GameState::new(&config, 0, &mut rng);

        assert_eq!(state.obstacles[0].x, f64::from(config.width));
        for pair in state.obstacles.windows(2) {
            let spacing = pair[1].x - pair[0].x;
            assert!(spacing >= config.min_spacing && spacing <= config.max_spacing);
        }
        for obstacle in &state.obstacles {
            assert!(obstacle.gap >= 1 && obstacle.gap <= config.max_gap_start());
            assert!(!obstacle.crossed);
        }
    }

    #[test]
    fn test_reset_keeps_only_highscore() {
        let config = Config::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut state = GameState::new(&config, 0, &mut rng);
        state.score = 5;
        state.highscore = 5;
        state.game_over = true;
        state.passed_slots.insert(2);
        state.player.y = 0.0;

        state.reset(&config, &mut rng);

        assert_eq!(state.score, 0);
        assert_eq!(state.highscore, 5);
        assert!(!state.game_over);
        assert!(state.passed_slots.is_empty());
        assert_eq!(state.player, Player::new(&config));
    }

    #[test]
    fn test_player_footprint() {
        let player = Player {
            col: 4,
            y: 2.9,
            vel: 0.0,
            width: 2,
        };
        assert_eq!(player.row(), 2);
        assert!(!player.covers(3));
        assert!(player.covers(4));
        assert!(player.covers(5));
        assert!(!player.covers(6));
    }

    #[test]
    fn test_obstacle_column_and_gap() {
        let obstacle = Obstacle::new(7.99, 3);
        assert_eq!(obstacle.column(), 7);
        assert!(!obstacle.gap_contains(2, 4));
        assert!(obstacle.gap_contains(3, 4));
        assert!(obstacle.gap_contains(6, 4));
        assert!(!obstacle.gap_contains(7, 4));
    }

    #[test]
    fn test_equal_spacing_bounds() {
        let config = Config {
            min_spacing: 10.0,
            max_spacing: 10.0,
            ..Config::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(random_spacing(&config, &mut rng), 10.0);
    }
}
