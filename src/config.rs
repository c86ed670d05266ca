//! Simulation constants, loaded once at startup.
//!
//! Defaults come from [`crate::constants`]. An optional `~/.flapterm/config.json`
//! may override any subset of fields; a file that cannot be parsed or fails
//! validation is logged and ignored.

use crate::constants::*;
use crate::glyph::visible_width;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Reasons a [`Config`] cannot drive the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyPlayfield { width: u16, height: u16 },
    ZeroGapHeight,
    GapTooTall { gap_height: u16, height: u16 },
    NoObstacles,
    InvalidScrollSpeed(f64),
    InvalidSpacing { min: f64, max: f64 },
    InvalidGravity(f64),
    InvalidJumpStrength(f64),
    EmptyPlayerGlyph,
    PlayerOutOfBounds { col: u16, glyph_width: u16, width: u16 },
    ZeroFrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlayfield { width, height } => {
                write!(f, "empty playfield {}x{}", width, height)
            }
            Self::ZeroGapHeight => write!(f, "zero gap height"),
            Self::GapTooTall { gap_height, height } => {
                write!(f, "gap height {} too tall for {} rows", gap_height, height)
            }
            Self::NoObstacles => write!(f, "no obstacles"),
            Self::InvalidScrollSpeed(speed) => write!(f, "invalid scroll speed {}", speed),
            Self::InvalidSpacing { min, max } => {
                write!(f, "invalid obstacle spacing [{}, {}]", min, max)
            }
            Self::InvalidGravity(g) => write!(f, "invalid gravity {}", g),
            Self::InvalidJumpStrength(j) => write!(f, "invalid jump strength {}", j),
            Self::EmptyPlayerGlyph => write!(f, "empty player glyph"),
            Self::PlayerOutOfBounds {
                col,
                glyph_width,
                width,
            } => write!(
                f,
                "player at column {} (width {}) outside {} columns",
                col, glyph_width, width
            ),
            Self::ZeroFrameRate => write!(f, "zero frame rate"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable, process-wide simulation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield columns (`W`).
    pub width: u16,
    /// Playfield rows (`H`). Row 0 is the ceiling, row `H-1` the floor.
    pub height: u16,
    /// Obstacle scroll speed in columns per second.
    pub scroll_speed: f64,
    pub min_spacing: f64,
    pub max_spacing: f64,
    /// Number of obstacle slots (`N`).
    pub obstacle_count: usize,
    /// Rows in each obstacle's gap (`G`).
    pub gap_height: u16,
    /// Downward acceleration in rows per second squared.
    pub gravity: f64,
    /// Velocity assigned on jump, rows per second (negative = upward).
    pub jump_strength: f64,
    /// Fixed column of the player's leftmost cell (`px`).
    pub player_col: u16,
    pub player_glyph: String,
    pub frames_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            scroll_speed: SCROLL_SPEED,
            min_spacing: MIN_OBSTACLE_SPACING,
            max_spacing: MAX_OBSTACLE_SPACING,
            obstacle_count: OBSTACLE_COUNT,
            gap_height: GAP_HEIGHT,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_col: PLAYER_COL,
            player_glyph: PLAYER_GLYPH.to_string(),
            frames_per_second: FRAMES_PER_SECOND,
        }
    }
}

impl Config {
    /// Load `config.json` from the data directory, falling back to defaults
    /// when the file is missing, unparsable, or fails validation.
    pub fn load() -> Self {
        match persistence::save_path(CONFIG_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("No data directory for config ({}), using defaults", e);
                Config::default()
            }
        }
    }

    /// Load and validate a config file. Anything but a missing file is logged.
    pub fn load_from(path: &Path) -> Self {
        let config: Config = match persistence::read_json(path) {
            Ok(config) => config,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
            Err(e) => {
                log::warn!(
                    "Could not read config {} ({}), using defaults",
                    path.display(),
                    e
                );
                return Config::default();
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring invalid config ({}), using defaults", e);
                Config::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.gap_height == 0 {
            return Err(ConfigError::ZeroGapHeight);
        }
        // Gap start range [1, H-G-1] must be non-empty
        if u32::from(self.gap_height) + 2 > u32::from(self.height) {
            return Err(ConfigError::GapTooTall {
                gap_height: self.gap_height,
                height: self.height,
            });
        }
        if self.obstacle_count == 0 {
            return Err(ConfigError::NoObstacles);
        }
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            return Err(ConfigError::InvalidScrollSpeed(self.scroll_speed));
        }
        if !(self.min_spacing.is_finite()
            && self.max_spacing.is_finite()
            && self.min_spacing >= 1.0
            && self.min_spacing <= self.max_spacing)
        {
            return Err(ConfigError::InvalidSpacing {
                min: self.min_spacing,
                max: self.max_spacing,
            });
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.jump_strength.is_finite() && self.jump_strength < 0.0) {
            return Err(ConfigError::InvalidJumpStrength(self.jump_strength));
        }
        let glyph_width = self.player_width();
        if glyph_width == 0 {
            return Err(ConfigError::EmptyPlayerGlyph);
        }
        if u32::from(self.player_col) + u32::from(glyph_width) > u32::from(self.width) {
            return Err(ConfigError::PlayerOutOfBounds {
                col: self.player_col,
                glyph_width,
                width: self.width,
            });
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Visible width of the player glyph (`pw`).
    pub fn player_width(&self) -> u16 {
        visible_width(&self.player_glyph)
    }

    /// Largest valid gap start row (`H-G-1`).
    pub fn max_gap_start(&self) -> u16 {
        self.height.saturating_sub(self.gap_height.saturating_add(1)).max(1)
    }

    /// Lowest row the player can occupy; reaching it is fatal.
    pub fn floor_row(&self) -> f64 {
        f64::from(self.height) - 1.0
    }

    /// Nominal frame interval in seconds.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.frames_per_second.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.dt())
    }
}
