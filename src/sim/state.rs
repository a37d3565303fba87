//! Session state and core simulation types
//!
//! One `GameState` owns everything the tick mutates: the level slots, the
//! player, coin bookkeeping, the phase and the shared random source.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geom::Rect;
use super::level::{Level, LevelGenerator};
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only restart is accepted. `won` is set when the last
    /// level's goal was reached.
    GameOver { won: bool },
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Jump started; `count` is the jump number since the last landing
    Jumped { count: u8 },
    /// Touched down on a platform or the ground while moving down,
    /// after a jump or a plain fall
    Landed,
    CoinCollected { index: usize },
    /// Obstacle hit; level regenerated in place
    LevelReset { level: usize },
    /// Goal reached; now on `level`
    LevelAdvanced { level: usize },
    /// Last level's goal reached
    Won,
    /// Game restarted from the first level
    Restarted,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (units/tick, positive is down)
    pub vel_y: i32,
    /// Jumps since last landing
    pub jump_count: u8,
    pub jumping: bool,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, size.x, size.y),
            vel_y: 0,
            jump_count: 0,
            jumping: false,
        }
    }

    /// Put back at spawn with no motion
    pub fn respawn(&mut self, spawn: Vec2) {
        self.rect.set_position(spawn);
        self.vel_y = 0;
        self.land();
    }

    /// Clear jump state after touching down
    pub fn land(&mut self) {
        self.jumping = false;
        self.jump_count = 0;
    }

    /// Bottom edge one tick ago, before `applied` was added to y
    pub fn previous_bottom(&self, applied: i32) -> f32 {
        self.rect.bottom() - applied as f32
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// One slot per level, all generated at startup
    pub levels: Vec<Level>,
    /// Current level index (0-based)
    pub current_level: usize,
    pub player: Player,
    /// Collected flag per coin slot of the current level
    pub collected: [bool; MAX_COINS],
    /// Number of set `collected` flags
    pub coin_count: u32,
    pub phase: GamePhase,
    /// World point the camera centers on
    pub camera_target: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session with the default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new session with a custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let levels: Vec<Level> = {
            let generator = LevelGenerator::new(&tuning);
            (0..MAX_LEVELS)
                .map(|i| generator.generate(&mut rng, i))
                .collect()
        };
        let player = Player::new(tuning.spawn, tuning.player_size);
        let camera_target = player.rect.center();

        log::info!("Session seeded with {seed}");

        Self {
            seed,
            tuning,
            levels,
            current_level: 0,
            player,
            collected: [false; MAX_COINS],
            coin_count: 0,
            phase: GamePhase::Playing,
            camera_target,
            time_ticks: 0,
            rng,
        }
    }

    /// Level the player is on
    pub fn level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn is_last_level(&self) -> bool {
        self.current_level + 1 >= self.levels.len()
    }

    /// Replace the current level's content with a fresh layout
    pub fn regenerate_current_level(&mut self) {
        let index = self.current_level;
        let level = LevelGenerator::new(&self.tuning).generate(&mut self.rng, index);
        self.levels[index] = level;
    }

    /// Forget every collected coin
    pub fn clear_coins(&mut self) {
        self.collected = [false; MAX_COINS];
        self.coin_count = 0;
    }

    /// Point the camera at the player's center
    pub fn follow_player(&mut self) {
        self.camera_target = self.player.rect.center();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(5);
        assert_eq!(state.levels.len(), MAX_LEVELS);
        assert_eq!(state.current_level, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.rect, Rect::new(400.0, 225.0, 50.0, 50.0));
        assert_eq!(state.coin_count, 0);
        assert_eq!(state.camera_target, Vec2::new(425.0, 250.0));
        for level in &state.levels {
            assert_eq!(level.check_placement(&state.tuning), Ok(()));
        }
    }

    #[test]
    fn test_same_seed_same_levels() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);
        assert_eq!(a.levels, b.levels);
    }

    #[test]
    fn test_regenerate_replaces_only_current_slot() {
        let mut state = GameState::new(77);
        state.current_level = 2;
        let before = state.levels.clone();
        state.regenerate_current_level();
        assert_ne!(state.levels[2], before[2]);
        assert_eq!(state.levels[1], before[1]);
        assert_eq!(state.levels[3], before[3]);
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let tuning = Tuning {
            coin_count: 0,
            ..Default::default()
        };
        assert!(GameState::with_tuning(1, tuning).is_err());
    }

    #[test]
    fn test_respawn_clears_motion() {
        let mut player = Player::new(Vec2::new(400.0, 225.0), Vec2::splat(50.0));
        player.rect.x = 1000.0;
        player.vel_y = -18;
        player.jump_count = 2;
        player.jumping = true;
        player.respawn(Vec2::new(400.0, 225.0));
        assert_eq!(player.rect.position(), Vec2::new(400.0, 225.0));
        assert_eq!(player.vel_y, 0);
        assert_eq!(player.jump_count, 0);
        assert!(!player.jumping);
    }
}
