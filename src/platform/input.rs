//! Keyboard state tracking and key bindings
//!
//! Left paddle: W / S. Right paddle: Up / Down.
//! Space serves a fresh ball, Escape quits.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::{Direction, TickInput};

/// One-shot actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Serve,
}

impl KeyAction {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Escape => Some(KeyAction::Quit),
            KeyCode::Space => Some(KeyAction::Serve),
            _ => None,
        }
    }
}

/// Set of keys currently held down
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: KeyCode) {
        self.held.insert(code);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// Forget everything (focus lost, key-ups will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Up wins when both keys of a pair are held
    fn direction(&self, up: KeyCode, down: KeyCode) -> Direction {
        if self.is_held(up) {
            Direction::Up
        } else if self.is_held(down) {
            Direction::Down
        } else {
            Direction::Hold
        }
    }

    /// Build the input for the next tick
    pub fn tick_input(&self, serve: bool) -> TickInput {
        TickInput {
            left: self.direction(KeyCode::KeyW, KeyCode::KeyS),
            right: self.direction(KeyCode::ArrowUp, KeyCode::ArrowDown),
            serve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_holds() {
        let keys = KeyboardState::new();
        assert_eq!(keys.tick_input(false), TickInput::default());
    }

    #[test]
    fn test_paddle_bindings() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::ArrowUp);

        let input = keys.tick_input(true);
        assert_eq!(input.left, Direction::Down);
        assert_eq!(input.right, Direction::Up);
        assert!(input.serve);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowDown);

        let input = keys.tick_input(false);
        assert_eq!(input.left, Direction::Up);
        assert_eq!(input.right, Direction::Up);
    }

    #[test]
    fn test_release_and_clear() {
        let mut keys = KeyboardState::new();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::ArrowDown);
        keys.release(KeyCode::KeyW);
        assert!(!keys.is_held(KeyCode::KeyW));
        assert_eq!(keys.tick_input(false).right, Direction::Down);

        keys.clear();
        assert_eq!(keys.tick_input(false), TickInput::default());
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(KeyAction::from_key(KeyCode::Escape), Some(KeyAction::Quit));
        assert_eq!(KeyAction::from_key(KeyCode::Space), Some(KeyAction::Serve));
        assert_eq!(KeyAction::from_key(KeyCode::KeyW), None);
    }
}
