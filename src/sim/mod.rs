//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (content is tested in placement order)

pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod level;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{check_collision_circle_rec, check_collision_recs};
pub use geom::Rect;
pub use level::{GenerationStats, Level, LevelError, LevelGenerator, PlacementViolation};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, clamp_to_walls, tick};
