//! Keyboard state tracking
//!
//! A frontend reports which keys are held each frame. The tracker derives
//! edge-triggered presses (released last frame, held now) from that.

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Restart,
}

/// Snapshot of held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl KeySet {
    pub fn with(mut self, key: Key) -> Self {
        *self.slot(key) = true;
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Jump => self.jump,
            Key::Restart => self.restart,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Jump => &mut self.jump,
            Key::Restart => &mut self.restart,
        }
    }
}

/// Tracks held keys across frames to detect fresh presses
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: KeySet,
    pressed: KeySet,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's held keys. Call once per frame.
    pub fn update(&mut self, held: KeySet) {
        self.pressed = KeySet {
            left: held.left && !self.held.left,
            right: held.right && !self.held.right,
            jump: held.jump && !self.held.jump,
            restart: held.restart && !self.held.restart,
        };
        self.held = held;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.is_held(key)
    }

    /// True only on the frame `key` went down
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.is_held(key)
    }

    /// Input for the first tick of this frame
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.is_down(Key::Left),
            right: self.is_down(Key::Right),
            jump: self.is_pressed(Key::Jump),
            restart: self.is_pressed(Key::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut tracker = KeyTracker::new();
        let jump = KeySet::default().with(Key::Jump);

        tracker.update(jump);
        assert!(tracker.is_pressed(Key::Jump));
        assert!(tracker.tick_input().jump);

        tracker.update(jump);
        assert!(tracker.is_down(Key::Jump));
        assert!(!tracker.is_pressed(Key::Jump));

        tracker.update(KeySet::default());
        tracker.update(jump);
        assert!(tracker.is_pressed(Key::Jump));
    }

    #[test]
    fn test_held_is_level_triggered() {
        let mut tracker = KeyTracker::new();
        let right = KeySet::default().with(Key::Right);
        for _ in 0..3 {
            tracker.update(right);
            let input = tracker.tick_input();
            assert!(input.right);
            assert!(!input.left);
        }
    }
}
