//! Data-driven world geometry and physics constants
//!
//! `Tuning::default()` reproduces the shipped game exactly. Alternate tunings
//! must pass [`Tuning::validate`] so that no placement band is unreachable.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geom::Rect;

/// The three kinds of generated level content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Platform,
    Obstacle,
    Coin,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Platform => "platform",
            ContentKind::Obstacle => "obstacle",
            ContentKind::Coin => "coin",
        }
    }
}

/// Half-open integer range of top-left positions a candidate is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBand {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PlacementBand {
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// A band with a single fixed row
    pub const fn row(min_x: i32, max_x: i32, y: i32) -> Self {
        Self::new(min_x, max_x, y, y + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
}

/// Configuration error in a [`Tuning`]
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Placement band has no positions to draw from
    EmptyBand(ContentKind),
    /// Every position in the band overlaps the goal
    BandBlockedByGoal(ContentKind),
    /// Content or player has a non-positive size
    InvalidSize(&'static str),
    /// Count is zero or exceeds the fixed level capacity
    Capacity {
        kind: ContentKind,
        count: usize,
        max: usize,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::EmptyBand(kind) => write!(f, "{} placement band is empty", kind.as_str()),
            TuningError::BandBlockedByGoal(kind) => {
                write!(f, "every {} position overlaps the goal", kind.as_str())
            }
            TuningError::InvalidSize(what) => write!(f, "{what} must have a positive size"),
            TuningError::Capacity { kind, count, max } => write!(
                f,
                "{} count {count} outside 1..={max}",
                kind.as_str()
            ),
        }
    }
}

impl std::error::Error for TuningError {}

/// World geometry, placement rules and player physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World (identical across levels) ===
    pub ground: Rect,
    pub goal: Rect,
    pub left_wall: Rect,
    pub right_wall: Rect,

    // === Level content ===
    pub platform_band: PlacementBand,
    pub platform_size: Vec2,
    pub platform_count: usize,
    pub obstacle_band: PlacementBand,
    pub obstacle_size: Vec2,
    pub obstacle_count: usize,
    pub coin_band: PlacementBand,
    pub coin_radius: f32,
    pub coin_count: usize,
    /// Rejection sampling attempts before accepting the first candidate
    pub max_placement_attempts: u32,

    // === Player ===
    pub spawn: Vec2,
    pub player_size: Vec2,
    pub player_speed: i32,
    pub gravity: i32,
    pub jump_force: i32,
    pub max_jumps: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Ground extends far enough to meet the right wall
            ground: Rect::new(-500.0, 450.0, 4100.0, 200.0),
            goal: Rect::new(3400.0, 400.0, 50.0, 50.0),
            left_wall: Rect::new(-500.0, -500.0, 500.0, 1200.0),
            right_wall: Rect::new(3600.0, -500.0, 500.0, 1200.0),

            platform_band: PlacementBand::new(100, 3300, 200, 400),
            platform_size: Vec2::new(100.0, 20.0),
            platform_count: MAX_PLATFORMS,
            obstacle_band: PlacementBand::row(100, 3300, 400),
            obstacle_size: Vec2::new(50.0, 50.0),
            obstacle_count: MAX_OBSTACLES,
            coin_band: PlacementBand::new(100, 3300, 200, 350),
            coin_radius: COIN_RADIUS,
            coin_count: MAX_COINS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            player_size: Vec2::splat(PLAYER_SIZE),
            player_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            max_jumps: MAX_JUMPS,
        }
    }
}

impl Tuning {
    /// Top of the unconditional floor
    pub fn ground_level(&self) -> f32 {
        self.ground.top()
    }

    /// Check that every placement band can produce an accepted candidate
    pub fn validate(&self) -> Result<(), TuningError> {
        check_capacity(ContentKind::Platform, self.platform_count, MAX_PLATFORMS)?;
        check_capacity(ContentKind::Obstacle, self.obstacle_count, MAX_OBSTACLES)?;
        check_capacity(ContentKind::Coin, self.coin_count, MAX_COINS)?;

        if self.platform_size.min_element() <= 0.0 {
            return Err(TuningError::InvalidSize("platform"));
        }
        if self.obstacle_size.min_element() <= 0.0 {
            return Err(TuningError::InvalidSize("obstacle"));
        }
        if self.coin_radius <= 0.0 {
            return Err(TuningError::InvalidSize("coin"));
        }
        if self.player_size.min_element() <= 0.0 {
            return Err(TuningError::InvalidSize("player"));
        }

        let bands = [
            (ContentKind::Platform, self.platform_band, self.platform_size),
            (ContentKind::Obstacle, self.obstacle_band, self.obstacle_size),
            // A coin's circle reaches `radius` past its center on every side
            (ContentKind::Coin, self.coin_band, Vec2::ZERO),
        ];
        for (kind, band, size) in bands {
            if band.is_empty() {
                return Err(TuningError::EmptyBand(kind));
            }
            let reach = if kind == ContentKind::Coin {
                Vec2::splat(self.coin_radius)
            } else {
                Vec2::ZERO
            };
            if band_blocked(&band, size, reach, &self.goal) {
                return Err(TuningError::BandBlockedByGoal(kind));
            }
        }

        Ok(())
    }
}

fn check_capacity(kind: ContentKind, count: usize, max: usize) -> Result<(), TuningError> {
    if count == 0 || count > max {
        return Err(TuningError::Capacity { kind, count, max });
    }
    Ok(())
}

/// True when every integer position of `band` puts the content on the goal.
///
/// Conservative for coins: the goal is inflated by the radius on each axis,
/// which over-approximates the rounded corners.
fn band_blocked(band: &PlacementBand, size: Vec2, reach: Vec2, goal: &Rect) -> bool {
    let lo_x = goal.left() - size.x - reach.x;
    let hi_x = goal.right() + reach.x;
    let lo_y = goal.top() - size.y - reach.y;
    let hi_y = goal.bottom() + reach.y;

    let x_blocked = band.min_x as f32 > lo_x && ((band.max_x - 1) as f32) < hi_x;
    let y_blocked = band.min_y as f32 > lo_y && ((band.max_y - 1) as f32) < hi_y;
    x_blocked && y_blocked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_matches_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ground_level(), 450.0);
        assert_eq!(tuning.spawn, Vec2::new(400.0, 225.0));
        assert_eq!(tuning.platform_count, 20);
        assert_eq!(tuning.obstacle_count, 20);
        assert_eq!(tuning.coin_count, 40);
        assert_eq!(tuning.left_wall.right(), 0.0);
        assert_eq!(tuning.right_wall.left(), 3600.0);
    }

    #[test]
    fn test_empty_band_rejected() {
        let tuning = Tuning {
            platform_band: PlacementBand::new(100, 100, 200, 400),
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::EmptyBand(ContentKind::Platform))
        );
    }

    #[test]
    fn test_band_inside_goal_rejected() {
        let tuning = Tuning {
            obstacle_band: PlacementBand::row(3400, 3420, 400),
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::BandBlockedByGoal(ContentKind::Obstacle))
        );

        let tuning = Tuning {
            coin_band: PlacementBand::new(3395, 3455, 395, 455),
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(TuningError::BandBlockedByGoal(ContentKind::Coin))
        );
    }

    #[test]
    fn test_capacity_rejected() {
        let tuning = Tuning {
            coin_count: MAX_COINS + 1,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Capacity {
                kind: ContentKind::Coin,
                ..
            })
        ));
    }

    #[test]
    fn test_json_fills_missing_fields() {
        let tuning: Tuning = serde_json::from_str(r#"{ "player_speed": 7 }"#).unwrap();
        assert_eq!(tuning.player_speed, 7);
        assert_eq!(tuning.goal, Tuning::default().goal);
    }
}
