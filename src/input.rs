//! The fixed key set the core understands
//!
//! Hosts translate their toolkit's key codes into [`Key`] and deliver each
//! press and release to [`crate::Game::handle_key`].

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Shoot (space)
    Fire,
    /// Advance past a prompt (enter)
    Confirm,
}

impl Key {
    /// Map a conventional key name (WASD layout, arrows, space, enter)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "up" => Some(Key::Up),
            "s" | "down" => Some(Key::Down),
            "a" | "left" => Some(Key::Left),
            "d" | "right" => Some(Key::Right),
            "space" | " " => Some(Key::Fire),
            "enter" | "return" => Some(Key::Confirm),
            _ => None,
        }
    }

    /// Unit change this key applies to the (horizontal, vertical) signal
    pub fn direction(&self) -> (i32, i32) {
        match self {
            Key::Up => (0, -1),
            Key::Down => (0, 1),
            Key::Left => (-1, 0),
            Key::Right => (1, 0),
            Key::Fire | Key::Confirm => (0, 0),
        }
    }
}

/// A single key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    /// `true` for key-up, `false` for key-down
    pub release: bool,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            release: false,
        }
    }

    pub fn release(key: Key) -> Self {
        Self { key, release: true }
    }

    /// Key-down of the confirm key
    pub fn is_confirm_press(&self) -> bool {
        self.key == Key::Confirm && !self.release
    }
}
