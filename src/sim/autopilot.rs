//! Idle/demo mode: a simple AI that produces tick input from the state
//!
//! Holds right toward the goal, hops obstacles with a double jump, and
//! presses restart once the run is over.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Horizontal gap (world units) at which a grounded player starts a jump
const JUMP_LEAD: f32 = 15.0;
/// Reach behind and ahead of the player that still counts as "over" an obstacle
const DANGER_BEHIND: f32 = 50.0;
const DANGER_AHEAD: f32 = 60.0;

/// Decide the input for the next tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    if let GamePhase::GameOver { .. } = state.phase {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let rect = &player.rect;
    let obstacles = state.level().obstacles();

    let grounded = player.jump_count == 0 && !player.jumping;
    let jump = if grounded {
        obstacles.iter().any(|o| {
            let gap = o.left() - rect.right();
            (0.0..=JUMP_LEAD).contains(&gap)
        })
    } else {
        // Second jump at the apex while still over danger
        player.jump_count < state.tuning.max_jumps
            && player.vel_y >= 0
            && obstacles.iter().any(|o| {
                o.right() > rect.left() - DANGER_BEHIND && o.left() < rect.right() + DANGER_AHEAD
            })
    };

    TickInput {
        right: true,
        jump,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Rect;
    use crate::sim::level::Level;
    use crate::sim::tick::tick;

    #[test]
    fn test_restarts_when_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver { won: false };
        let input = autopilot_input(&state);
        assert!(input.restart);
        assert!(!input.right);
    }

    #[test]
    fn test_jumps_before_obstacle() {
        let mut state = GameState::new(2);
        state.levels[0] =
            Level::from_parts(vec![], vec![Rect::new(460.0, 400.0, 50.0, 50.0)], vec![]).unwrap();
        state.player.rect = Rect::new(400.0, 400.0, 50.0, 50.0);
        let input = autopilot_input(&state);
        assert!(input.right);
        assert!(input.jump);
    }

    #[test]
    fn test_clears_single_obstacle() {
        let mut state = GameState::new(3);
        state.levels[0] =
            Level::from_parts(vec![], vec![Rect::new(700.0, 400.0, 50.0, 50.0)], vec![]).unwrap();
        state.player.rect = Rect::new(400.0, 400.0, 50.0, 50.0);

        for _ in 0..120 {
            let input = autopilot_input(&state);
            let events = tick(&mut state, &input);
            assert!(
                events.iter().all(|e| !matches!(e, crate::sim::GameEvent::LevelReset { .. })),
                "autopilot ran into the obstacle"
            );
        }
        assert!(state.player.rect.x > 750.0);
    }
}
