//! Platform abstraction layer
//!
//! The window, keyboard and display belong to a host frontend. The game loop
//! only needs a way to ask whether to stop, which keys are held, and where to
//! send each frame.

pub mod headless;
pub mod input;
pub mod time;

pub use headless::HeadlessFrontend;
pub use input::{Key, KeySet, KeyTracker};
pub use time::FramePacer;

use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, autopilot_input, tick};

/// Window/input/display collaborator
pub trait Frontend {
    /// Window close requested; checked between frames
    fn should_close(&self) -> bool;
    /// Keys held right now
    fn poll_keys(&mut self) -> KeySet;
    /// Simulation advanced by `ticks` this frame
    fn ticks_elapsed(&mut self, _ticks: u32) {}
    /// Render one frame
    fn present(&mut self, frame: &Frame);
}

/// What happened over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub frames: u64,
    pub coins_collected: u64,
    pub level_resets: u64,
    pub levels_advanced: u64,
    pub wins: u64,
    pub restarts: u64,
    /// Highest level reached (1-based)
    pub best_level: usize,
}

impl RunSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CoinCollected { .. } => self.coins_collected += 1,
            GameEvent::LevelReset { .. } => self.level_resets += 1,
            GameEvent::LevelAdvanced { level } => {
                self.levels_advanced += 1;
                self.best_level = self.best_level.max(level + 1);
            }
            GameEvent::Won => self.wins += 1,
            GameEvent::Restarted => self.restarts += 1,
            GameEvent::Jumped { .. } | GameEvent::Landed => {}
        }
    }
}

/// Run frames until the frontend asks to close
///
/// With `settings.paced` each frame waits out a real 1/60 s tick; otherwise
/// every frame is exactly one tick and the loop runs as fast as it can.
pub fn run<F: Frontend>(state: &mut GameState, frontend: &mut F, settings: &Settings) -> RunSummary {
    let mut summary = RunSummary {
        best_level: state.current_level + 1,
        ..Default::default()
    };
    let mut keys = KeyTracker::new();
    let mut pacer = FramePacer::new();

    while !frontend.should_close() {
        keys.update(frontend.poll_keys());

        let ticks = if settings.paced {
            pacer.wait();
            pacer.advance_realtime()
        } else {
            1
        };

        for step in 0..ticks {
            let input = if settings.autopilot {
                autopilot_input(state)
            } else if step == 0 {
                keys.tick_input()
            } else {
                // Presses belong to the first tick of the frame only
                TickInput {
                    jump: false,
                    restart: false,
                    ..keys.tick_input()
                }
            };

            for event in tick(state, &input) {
                summary.record(&event);
            }
            summary.ticks += 1;

            if settings.hud_log_interval > 0 && summary.ticks % settings.hud_log_interval == 0 {
                log::debug!(
                    "tick {}: level {}, coins {}, player at ({}, {})",
                    summary.ticks,
                    state.current_level + 1,
                    state.coin_count,
                    state.player.rect.x,
                    state.player.rect.y
                );
            }
        }
        frontend.ticks_elapsed(ticks);

        frontend.present(&build_frame(state));
        summary.frames += 1;
    }

    if let GamePhase::GameOver { won } = state.phase {
        log::info!("Run ended in game over (won: {won})");
    }
    summary
}
