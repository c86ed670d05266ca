// Playfield dimensions (columns x rows, excluding the border)
pub const SCREEN_WIDTH: u16 = 60;
pub const SCREEN_HEIGHT: u16 = 20;

// Obstacle tuning
pub const SCROLL_SPEED: f64 = 14.0; // columns per second
pub const MIN_OBSTACLE_SPACING: f64 = 16.0;
pub const MAX_OBSTACLE_SPACING: f64 = 24.0;
pub const OBSTACLE_COUNT: usize = 4;
pub const GAP_HEIGHT: u16 = 6;

// Player tuning
pub const PLAYER_COL: u16 = 10;
pub const GRAVITY: f64 = 36.0; // rows per second squared
pub const JUMP_STRENGTH: f64 = -13.0; // rows per second, negative = upward
pub const PLAYER_GLYPH: &str = "@>";

// Frame pacing
pub const FRAMES_PER_SECOND: u32 = 30;

// Persistence
pub const DATA_DIR_NAME: &str = ".flapterm";
pub const CONFIG_FILE: &str = "config.json";
pub const HIGHSCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "flapterm.log";
