use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::queue::InputEvent;

/// Browser-style key codes used by the default bindings.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const ESCAPE: u32 = 27;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const W: u32 = 87;
}

/// What the player is asking for this tick. Polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub jump: bool,
    pub left: bool,
    pub right: bool,
    pub exit: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }
}

/// Key codes bound to each action. Any bound key held triggers the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub jump: Vec<u32>,
    pub left: Vec<u32>,
    pub right: Vec<u32>,
    pub exit: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: vec![keys::W, keys::UP, keys::SPACE],
            left: vec![keys::A, keys::LEFT],
            right: vec![keys::D, keys::RIGHT],
            exit: vec![keys::ESCAPE],
        }
    }
}

/// Held-key state folded from queued key events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply events in arrival order.
    pub fn apply(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            match event {
                InputEvent::KeyDown { key_code } => {
                    self.held.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
            }
        }
    }

    pub fn is_held(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }

    fn any_held(&self, codes: &[u32]) -> bool {
        codes.iter().any(|code| self.held.contains(code))
    }

    /// Resolve held keys into actions.
    pub fn snapshot(&self, bindings: &KeyBindings) -> InputSnapshot {
        InputSnapshot {
            jump: self.any_held(&bindings.jump),
            left: self.any_held(&bindings.left),
            right: self.any_held(&bindings.right),
            exit: self.any_held(&bindings.exit),
        }
    }

    /// Forget every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
