//! Fixed timestep simulation tick
//!
//! Advances the session by exactly one step. Order within a step:
//! horizontal move, wall clamp, jump, integration, platform landing, ground,
//! obstacles, goal, coins, camera.

use super::collision::{check_collision_circle_rec, check_collision_recs};
use super::geom::Rect;
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
///
/// `left`/`right` are held state, re-read every tick. `jump`/`restart` are
/// edge-triggered: true only on the tick the key went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let GamePhase::GameOver { .. } = state.phase {
        if input.restart {
            restart(state, &mut events);
        }
        return events;
    }

    state.time_ticks += 1;

    // Horizontal movement
    let speed = state.tuning.player_speed as f32;
    if input.right {
        state.player.rect.x += speed;
    }
    if input.left {
        state.player.rect.x -= speed;
    }

    clamp_to_walls(
        &mut state.player.rect,
        &state.tuning.left_wall,
        &state.tuning.right_wall,
    );

    // Jump (double jump allowed)
    if input.jump && state.player.jump_count < state.tuning.max_jumps {
        state.player.vel_y = -state.tuning.jump_force;
        state.player.jumping = true;
        state.player.jump_count += 1;
        events.push(GameEvent::Jumped {
            count: state.player.jump_count,
        });
    }

    // Semi-implicit: position moves by the pre-gravity velocity
    let applied = state.player.vel_y;
    state.player.rect.y += applied as f32;
    state.player.vel_y += state.tuning.gravity;

    // Platform landing: overlap now, and bottom was at or above the top
    // before this tick's move. Side entries can pass this test too.
    // A touchdown counts as a landing only when it ends downward motion.
    let start_bottom = state.player.previous_bottom(applied);
    let mut landed = false;
    for platform in state.levels[state.current_level].platforms() {
        let player = &mut state.player;
        if check_collision_recs(&player.rect, platform)
            && player.rect.bottom() >= platform.top()
            && player.previous_bottom(applied) <= platform.top()
        {
            player.rect.y = platform.top() - player.rect.height;
            player.vel_y = 0;
            landed |= start_bottom < platform.top();
            player.land();
        }
    }

    // Ground is always beneath every level
    let ground = state.tuning.ground_level();
    if state.player.rect.bottom() >= ground {
        state.player.rect.y = ground - state.player.rect.height;
        state.player.vel_y = 0;
        landed |= start_bottom < ground;
        state.player.land();
    }

    if landed {
        events.push(GameEvent::Landed);
    }

    // Obstacles restart the level in place
    let hit_obstacle = state.levels[state.current_level]
        .obstacles()
        .iter()
        .any(|o| check_collision_recs(&state.player.rect, o));
    if hit_obstacle {
        log::debug!("Obstacle hit on level {}, regenerating", state.current_level + 1);
        state.regenerate_current_level();
        state.player.respawn(state.tuning.spawn);
        state.clear_coins();
        state.follow_player();
        events.push(GameEvent::LevelReset {
            level: state.current_level,
        });
        return events;
    }

    // Goal advances, or wins on the last level
    if check_collision_recs(&state.player.rect, &state.tuning.goal) {
        if state.is_last_level() {
            log::info!("Final goal reached, game won");
            state.phase = GamePhase::GameOver { won: true };
            events.push(GameEvent::Won);
        } else {
            state.current_level += 1;
            state.regenerate_current_level();
            log::info!("Advanced to level {}", state.current_level + 1);
            events.push(GameEvent::LevelAdvanced {
                level: state.current_level,
            });
        }
        // Vertical velocity carries over; only position and coins reset
        state.player.rect.set_position(state.tuning.spawn);
        state.clear_coins();
        state.follow_player();
        return events;
    }

    // Coins
    let radius = state.tuning.coin_radius;
    let level = &state.levels[state.current_level];
    for (i, &coin) in level.coins().iter().enumerate() {
        if !state.collected[i] && check_collision_circle_rec(coin, radius, &state.player.rect) {
            state.collected[i] = true;
            state.coin_count += 1;
            log::trace!("Coin {i} collected ({} total)", state.coin_count);
            events.push(GameEvent::CoinCollected { index: i });
        }
    }

    state.follow_player();
    events
}

/// Keep the player between the walls.
///
/// Any position left of the left wall's right edge (or right of the right
/// wall's left edge) is pulled back, not only positions overlapping a wall.
pub fn clamp_to_walls(rect: &mut Rect, left_wall: &Rect, right_wall: &Rect) {
    if rect.left() < left_wall.right() {
        rect.x = left_wall.right();
    }
    if rect.right() > right_wall.left() {
        rect.x = right_wall.left() - rect.width;
    }
}

/// Reset the whole run to the first level
fn restart(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.current_level = 0;
    state.regenerate_current_level();
    state.player.respawn(state.tuning.spawn);
    state.clear_coins();
    state.phase = GamePhase::Playing;
    state.follow_player();
    log::info!("Game restarted");
    events.push(GameEvent::Restarted);
}
