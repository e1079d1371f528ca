//! Keyboard bindings
//!
//! Keys are matched on `KeyboardEvent.code` (physical position), so movement stays on
//! WASD regardless of keyboard layout.

use crate::sim::Direction;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    TogglePause,
    ToggleMute,
}

/// Key code to action table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(&'static str, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                ("KeyW", Action::Move(Direction::Up)),
                ("KeyS", Action::Move(Direction::Down)),
                ("KeyA", Action::Move(Direction::Left)),
                ("KeyD", Action::Move(Direction::Right)),
                ("Space", Action::TogglePause),
                ("KeyM", Action::ToggleMute),
            ],
        }
    }
}

impl KeyBindings {
    pub fn action(&self, code: &str) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|&(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action("KeyW"), Some(Action::Move(Direction::Up)));
        assert_eq!(keys.action("KeyD"), Some(Action::Move(Direction::Right)));
        assert_eq!(keys.action("Space"), Some(Action::TogglePause));
        assert_eq!(keys.action("KeyM"), Some(Action::ToggleMute));
        assert_eq!(keys.action("ArrowUp"), None);
        // Codes, not characters
        assert_eq!(keys.action("w"), None);
    }
}
