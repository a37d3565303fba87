//! Coin Dash - a side-scrolling coin platformer
//!
//! Core modules:
//! - `sim`: Simulation (level generation, physics, collisions, session state)
//! - `renderer`: Draw command lists and CPU tessellation for the host renderer
//! - `platform`: Window/input collaborator abstraction and frame pacing
//! - `tuning`: Data-driven world geometry and physics constants
//! - `settings`: Run-time preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Number of level slots generated at startup
    pub const MAX_LEVELS: usize = 10;
    /// Platforms per level (generation always fills to capacity)
    pub const MAX_PLATFORMS: usize = 20;
    /// Obstacles per level
    pub const MAX_OBSTACLES: usize = 20;
    /// Coins per level
    pub const MAX_COINS: usize = 40;

    /// Coin collection/draw radius
    pub const COIN_RADIUS: f32 = 10.0;

    /// Logical window size
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 450;
    pub const WINDOW_TITLE: &str = "Coin Dash";

    /// Simulation ticks per second
    pub const TARGET_TPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TARGET_TPS as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player spawn (top-left corner of the bounding box)
    pub const SPAWN_X: f32 = 400.0;
    pub const SPAWN_Y: f32 = 225.0;
    /// Player bounding box size
    pub const PLAYER_SIZE: f32 = 50.0;

    /// Horizontal speed (units/tick)
    pub const PLAYER_SPEED: i32 = 5;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: i32 = 2;
    /// Upward impulse applied by a jump
    pub const JUMP_FORCE: i32 = 20;
    /// Jumps allowed between landings
    pub const MAX_JUMPS: u8 = 2;

    /// Rejection sampling attempts before falling back to the first candidate
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}
