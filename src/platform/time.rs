//! Fixed timestep frame pacing
//!
//! Real frame times are accumulated and paid out as whole simulation ticks,
//! capped per frame so a stall cannot snowball.

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame time accepted in one step (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FramePacer {
    accumulator: f32,
    last: Option<Instant>,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last: None,
        }
    }

    /// Add `dt` seconds of frame time and return how many ticks to run
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop whatever is left rather than carrying a backlog
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        ticks
    }

    /// Measure wall time since the previous call and advance by it
    pub fn advance_realtime(&mut self) -> u32 {
        let now = Instant::now();
        let dt = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(SIM_DT);
        self.last = Some(now);
        self.advance(dt)
    }

    /// Sleep out the rest of the current tick
    pub fn wait(&self) {
        let Some(last) = self.last else {
            return;
        };
        let target = Duration::from_secs_f32(SIM_DT);
        if let Some(remaining) = target.checked_sub(last.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_target_rate() {
        let mut pacer = FramePacer::new();
        let total: u32 = (0..60).map(|_| pacer.advance(SIM_DT * 1.0001)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut pacer = FramePacer::new();
        assert_eq!(pacer.advance(SIM_DT * 0.6), 0);
        assert_eq!(pacer.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut pacer = FramePacer::new();
        assert_eq!(pacer.advance(5.0), MAX_SUBSTEPS);
        assert!(pacer.advance(0.0) <= 1);
    }
}
