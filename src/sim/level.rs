//! Level content and procedural placement
//!
//! Every level is filled to capacity by rejection sampling: a candidate is
//! drawn uniformly from its placement band and discarded until it satisfies
//! the overlap rules for its kind.
//!
//! - Platforms avoid the goal and every earlier platform.
//! - Obstacles avoid the goal and every platform. They may overlap each other.
//! - Coins keep their collection circle off the goal. They may sit on
//!   platforms or obstacles.
//!
//! The level index selects a slot only; it does not change the distribution.

use std::fmt;

use glam::Vec2;
use rand::Rng;

use super::collision::{check_collision_circle_rec, check_collision_recs};
use super::geom::Rect;
use crate::consts::{MAX_COINS, MAX_OBSTACLES, MAX_PLATFORMS};
use crate::tuning::{ContentKind, PlacementBand, Tuning};

/// A populated level layout
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Level {
    platforms: Vec<Rect>,
    obstacles: Vec<Rect>,
    coins: Vec<Vec2>,
}

/// Level construction error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    TooMany {
        kind: ContentKind,
        count: usize,
        max: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::TooMany { kind, count, max } => {
                write!(f, "{count} {}s exceed capacity {max}", kind.as_str())
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// A broken placement rule, with the offending indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementViolation {
    PlatformOnGoal(usize),
    PlatformOnPlatform(usize, usize),
    ObstacleOnGoal(usize),
    ObstacleOnPlatform { obstacle: usize, platform: usize },
    CoinOnGoal(usize),
}

impl Level {
    /// Build a level from explicit content, enforcing the fixed capacities
    pub fn from_parts(
        platforms: Vec<Rect>,
        obstacles: Vec<Rect>,
        coins: Vec<Vec2>,
    ) -> Result<Self, LevelError> {
        let checks = [
            (ContentKind::Platform, platforms.len(), MAX_PLATFORMS),
            (ContentKind::Obstacle, obstacles.len(), MAX_OBSTACLES),
            (ContentKind::Coin, coins.len(), MAX_COINS),
        ];
        for (kind, count, max) in checks {
            if count > max {
                return Err(LevelError::TooMany { kind, count, max });
            }
        }
        Ok(Self {
            platforms,
            obstacles,
            coins,
        })
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Vec2] {
        &self.coins
    }

    /// Check the placement rules; returns the first violation found
    pub fn check_placement(&self, tuning: &Tuning) -> Result<(), PlacementViolation> {
        let goal = &tuning.goal;
        for (i, platform) in self.platforms.iter().enumerate() {
            if check_collision_recs(platform, goal) {
                return Err(PlacementViolation::PlatformOnGoal(i));
            }
            for (j, earlier) in self.platforms[..i].iter().enumerate() {
                if check_collision_recs(platform, earlier) {
                    return Err(PlacementViolation::PlatformOnPlatform(j, i));
                }
            }
        }
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if check_collision_recs(obstacle, goal) {
                return Err(PlacementViolation::ObstacleOnGoal(i));
            }
            if let Some(j) = self
                .platforms
                .iter()
                .position(|p| check_collision_recs(obstacle, p))
            {
                return Err(PlacementViolation::ObstacleOnPlatform {
                    obstacle: i,
                    platform: j,
                });
            }
        }
        for (i, &coin) in self.coins.iter().enumerate() {
            if check_collision_circle_rec(coin, tuning.coin_radius, goal) {
                return Err(PlacementViolation::CoinOnGoal(i));
            }
        }
        Ok(())
    }
}

/// Rejection sampling counters for one generated level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub rejected_platforms: u32,
    pub rejected_obstacles: u32,
    pub rejected_coins: u32,
    /// Placements that hit the attempt cap and kept their first candidate
    pub fallbacks: u32,
}

impl GenerationStats {
    fn rejected_mut(&mut self, kind: ContentKind) -> &mut u32 {
        match kind {
            ContentKind::Platform => &mut self.rejected_platforms,
            ContentKind::Obstacle => &mut self.rejected_obstacles,
            ContentKind::Coin => &mut self.rejected_coins,
        }
    }
}

/// Populates levels from a tuning and a shared random source
pub struct LevelGenerator<'a> {
    tuning: &'a Tuning,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(tuning: &'a Tuning) -> Self {
        Self { tuning }
    }

    /// Generate a full level for slot `index`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, index: usize) -> Level {
        self.generate_with_stats(rng, index).0
    }

    pub fn generate_with_stats<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> (Level, GenerationStats) {
        let t = self.tuning;
        let mut stats = GenerationStats::default();

        let mut platforms: Vec<Rect> = Vec::with_capacity(t.platform_count);
        for _ in 0..t.platform_count {
            let platform = self.place(
                rng,
                &mut stats,
                ContentKind::Platform,
                |rng| random_rect(rng, &t.platform_band, t.platform_size),
                |candidate| {
                    !check_collision_recs(candidate, &t.goal)
                        && !platforms.iter().any(|p| check_collision_recs(candidate, p))
                },
            );
            platforms.push(platform);
        }

        let mut obstacles = Vec::with_capacity(t.obstacle_count);
        for _ in 0..t.obstacle_count {
            let obstacle = self.place(
                rng,
                &mut stats,
                ContentKind::Obstacle,
                |rng| random_rect(rng, &t.obstacle_band, t.obstacle_size),
                |candidate| {
                    !check_collision_recs(candidate, &t.goal)
                        && !platforms.iter().any(|p| check_collision_recs(candidate, p))
                },
            );
            obstacles.push(obstacle);
        }

        let mut coins = Vec::with_capacity(t.coin_count);
        for _ in 0..t.coin_count {
            let coin = self.place(
                rng,
                &mut stats,
                ContentKind::Coin,
                |rng| random_point(rng, &t.coin_band),
                |candidate| !check_collision_circle_rec(*candidate, t.coin_radius, &t.goal),
            );
            coins.push(coin);
        }

        log::debug!(
            "Level {} generated: rejected {} platforms, {} obstacles, {} coins ({} fallbacks)",
            index + 1,
            stats.rejected_platforms,
            stats.rejected_obstacles,
            stats.rejected_coins,
            stats.fallbacks
        );

        (
            Level {
                platforms,
                obstacles,
                coins,
            },
            stats,
        )
    }

    /// Draw candidates until one is accepted or the attempt cap is reached.
    /// On the cap the first candidate is kept.
    fn place<T, R, D, A>(
        &self,
        rng: &mut R,
        stats: &mut GenerationStats,
        kind: ContentKind,
        mut draw: D,
        accept: A,
    ) -> T
    where
        T: Copy,
        R: Rng + ?Sized,
        D: FnMut(&mut R) -> T,
        A: Fn(&T) -> bool,
    {
        let first = draw(rng);
        if accept(&first) {
            return first;
        }
        *stats.rejected_mut(kind) += 1;

        for _ in 1..self.tuning.max_placement_attempts {
            let candidate = draw(rng);
            if accept(&candidate) {
                return candidate;
            }
            *stats.rejected_mut(kind) += 1;
        }

        log::warn!(
            "No valid {} position after {} attempts, keeping first candidate",
            kind.as_str(),
            self.tuning.max_placement_attempts
        );
        stats.fallbacks += 1;
        first
    }
}

fn random_rect<R: Rng + ?Sized>(rng: &mut R, band: &PlacementBand, size: Vec2) -> Rect {
    let pos = random_point(rng, band);
    Rect::new(pos.x, pos.y, size.x, size.y)
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, band: &PlacementBand) -> Vec2 {
    let x = rng.random_range(band.min_x..band.max_x);
    let y = rng.random_range(band.min_y..band.max_y);
    Vec2::new(x as f32, y as f32)
}
