//! Windowless frontend
//!
//! Runs the game without a display: frames are tessellated and counted but
//! never shown, and no keys are ever held. Pair it with the autopilot to get
//! a self-playing demo. The window "closes" once the tick budget is spent.

use super::input::KeySet;
use super::Frontend;
use crate::renderer::{Frame, tessellate};

#[derive(Debug, Clone, Default)]
pub struct HeadlessFrontend {
    /// Ticks to run before reporting close; `None` runs forever
    max_ticks: Option<u64>,
    ticks: u64,
    pub frames_presented: u64,
    pub triangles_presented: u64,
    /// HUD text of the last presented frame
    pub last_hud: Vec<String>,
}

impl HeadlessFrontend {
    pub fn new(max_ticks: Option<u64>) -> Self {
        Self {
            max_ticks,
            ..Default::default()
        }
    }
}

impl Frontend for HeadlessFrontend {
    fn should_close(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    fn poll_keys(&mut self) -> KeySet {
        KeySet::default()
    }

    fn ticks_elapsed(&mut self, ticks: u32) {
        self.ticks += u64::from(ticks);
    }

    fn present(&mut self, frame: &Frame) {
        let mesh = tessellate(frame);
        self.frames_presented += 1;
        self.triangles_presented += mesh.triangle_count() as u64;
        self.last_hud = mesh.labels.into_iter().map(|l| l.text).collect();
    }
}
