//! Draw command lists
//!
//! The simulation never touches a graphics API. Each frame it is described as
//! a list of filled rectangles, circles and text lines, split into a world
//! layer (drawn through the camera) and a screen-space overlay.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState, Rect};

/// HUD font size
pub const FONT_SIZE: f32 = 20.0;

/// 2D camera mapping world coordinates to the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World point shown at `offset`
    pub target: Vec2,
    /// Screen point the target maps to
    pub offset: Vec2,
    pub zoom: f32,
}

impl Camera2D {
    /// Camera centered on `target` in an 800×450 window
    pub fn centered_on(target: Vec2) -> Self {
        Self {
            target,
            offset: Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0),
            zoom: 1.0,
        }
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p - self.target) * self.zoom + self.offset
    }

    /// World position of the screen's top-left corner
    pub fn view_origin(&self) -> Vec2 {
        self.target - self.offset / self.zoom
    }
}

/// A single draw request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

impl DrawCommand {
    fn text(text: impl Into<String>, position: Vec2, color: [f32; 4]) -> Self {
        DrawCommand::Text {
            text: text.into(),
            position,
            size: FONT_SIZE,
            color,
        }
    }
}

/// Everything needed to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: [f32; 4],
    pub camera: Camera2D,
    /// Drawn through `camera`
    pub world: Vec<DrawCommand>,
    /// Drawn in screen space, after `world`
    pub overlay: Vec<DrawCommand>,
}

/// Describe the current state as draw commands
pub fn build_frame(state: &GameState) -> Frame {
    let camera = Camera2D::centered_on(state.camera_target);
    let tuning = &state.tuning;
    let mut world = Vec::new();

    match state.phase {
        GamePhase::Playing => {
            let level = state.level();
            world.push(DrawCommand::Rect {
                rect: state.player.rect,
                color: colors::PLAYER,
            });
            world.extend(level.platforms().iter().map(|&rect| DrawCommand::Rect {
                rect,
                color: colors::PLATFORM,
            }));
            world.extend(level.obstacles().iter().map(|&rect| DrawCommand::Rect {
                rect,
                color: colors::OBSTACLE,
            }));
            for (rect, color) in [
                (tuning.goal, colors::GOAL),
                (tuning.ground, colors::GROUND),
                (tuning.left_wall, colors::WALL),
                (tuning.right_wall, colors::WALL),
            ] {
                world.push(DrawCommand::Rect { rect, color });
            }
            world.extend(
                level
                    .coins()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !state.collected[*i])
                    .map(|(_, &center)| DrawCommand::Circle {
                        center,
                        radius: tuning.coin_radius,
                        color: colors::COIN,
                    }),
            );
        }
        GamePhase::GameOver { won } => {
            let origin = camera.view_origin();
            if won {
                world.push(DrawCommand::text(
                    "Congratulations! You Win!",
                    origin + Vec2::new(200.0, 150.0),
                    colors::WIN_TEXT,
                ));
            } else {
                world.push(DrawCommand::text(
                    "Game Over!",
                    origin + Vec2::new(300.0, 150.0),
                    colors::LOSE_TEXT,
                ));
            }
            world.push(DrawCommand::text(
                "Press R to Restart",
                origin + Vec2::new(300.0, 180.0),
                colors::TEXT,
            ));
        }
    }

    let overlay = vec![
        DrawCommand::text(
            format!("Coins: {}", state.coin_count),
            Vec2::new(10.0, 10.0),
            colors::TEXT,
        ),
        DrawCommand::text(
            format!("Level: {}", state.current_level + 1),
            Vec2::new(10.0, 30.0),
            colors::TEXT,
        ),
    ];

    Frame {
        clear: colors::BACKGROUND,
        camera,
        world,
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn count(commands: &[DrawCommand], pred: impl Fn(&DrawCommand) -> bool) -> usize {
        commands.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_playing_frame_contents() {
        let mut state = GameState::new(11);
        state.collected[0] = true;
        state.collected[5] = true;
        state.coin_count = 2;

        let frame = build_frame(&state);

        let rects = count(&frame.world, |c| matches!(c, DrawCommand::Rect { .. }));
        // player + platforms + obstacles + goal + ground + two walls
        assert_eq!(rects, 1 + MAX_PLATFORMS + MAX_OBSTACLES + 4);
        let circles = count(&frame.world, |c| matches!(c, DrawCommand::Circle { .. }));
        assert_eq!(circles, MAX_COINS - 2);
        assert_eq!(
            frame.world[0],
            DrawCommand::Rect {
                rect: state.player.rect,
                color: colors::PLAYER
            }
        );
        assert_eq!(
            frame.overlay,
            vec![
                DrawCommand::text("Coins: 2", Vec2::new(10.0, 10.0), colors::TEXT),
                DrawCommand::text("Level: 1", Vec2::new(10.0, 30.0), colors::TEXT),
            ]
        );
    }

    #[test]
    fn test_win_frame_has_messages_only() {
        let mut state = GameState::new(12);
        state.current_level = MAX_LEVELS - 1;
        state.phase = GamePhase::GameOver { won: true };

        let frame = build_frame(&state);

        assert_eq!(frame.world.len(), 2);
        let origin = frame.camera.view_origin();
        assert_eq!(
            frame.world[0],
            DrawCommand::text(
                "Congratulations! You Win!",
                origin + Vec2::new(200.0, 150.0),
                colors::WIN_TEXT
            )
        );
        assert!(matches!(
            &frame.overlay[1],
            DrawCommand::Text { text, .. } if text == "Level: 10"
        ));
    }

    #[test]
    fn test_lose_frame_message() {
        let mut state = GameState::new(13);
        state.phase = GamePhase::GameOver { won: false };
        let frame = build_frame(&state);
        assert!(matches!(
            &frame.world[0],
            DrawCommand::Text { text, .. } if text == "Game Over!"
        ));
    }

    #[test]
    fn test_camera_maps_target_to_center() {
        let camera = Camera2D::centered_on(Vec2::new(1425.0, 250.0));
        assert_eq!(
            camera.world_to_screen(Vec2::new(1425.0, 250.0)),
            Vec2::new(400.0, 225.0)
        );
        assert_eq!(camera.view_origin(), Vec2::new(1025.0, 25.0));
        // The view origin lands on the screen's top-left corner
        assert_eq!(camera.world_to_screen(camera.view_origin()), Vec2::ZERO);
    }
}
