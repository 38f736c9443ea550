//! Keyboard state for the stepping loop
//!
//! The host polls its windowing layer, then hands the set of held keys to
//! `InputState::update` once per frame. The state is owned by the caller and
//! passed into `tick`, so there is no process-wide input singleton.

use serde::{Deserialize, Serialize};

/// Keys the simulation responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    ToggleCollisionCircles,
}

impl Key {
    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Held keys for the current and previous frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    previous: u8,
    current: u8,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with `pressed` as the held keys
    pub fn update<I: IntoIterator<Item = Key>>(&mut self, pressed: I) {
        self.previous = self.current;
        self.current = pressed.into_iter().fold(0, |bits, key| bits | key.bit());
    }

    /// Key is held this frame
    pub fn is_down(&self, key: Key) -> bool {
        self.current & key.bit() != 0
    }

    /// Key went down this frame
    pub fn is_clicked(&self, key: Key) -> bool {
        self.is_down(key) && self.previous & key.bit() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_down() {
        let mut input = InputState::new();
        input.update([Key::Thrust, Key::RotateLeft]);
        assert!(input.is_down(Key::Thrust));
        assert!(input.is_down(Key::RotateLeft));
        assert!(!input.is_down(Key::RotateRight));
    }

    #[test]
    fn test_click_is_edge_triggered() {
        let mut input = InputState::new();
        input.update([Key::ToggleCollisionCircles]);
        assert!(input.is_clicked(Key::ToggleCollisionCircles));

        // Still held: no longer a click
        input.update([Key::ToggleCollisionCircles]);
        assert!(input.is_down(Key::ToggleCollisionCircles));
        assert!(!input.is_clicked(Key::ToggleCollisionCircles));

        input.update([]);
        assert!(!input.is_clicked(Key::ToggleCollisionCircles));

        input.update([Key::ToggleCollisionCircles]);
        assert!(input.is_clicked(Key::ToggleCollisionCircles));
    }
}
