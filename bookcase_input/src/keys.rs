// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Held direction keys.

/// A horizontal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the start of the list.
    Left,
    /// Toward the end of the list.
    Right,
}

impl Direction {
    /// `-1.0` for [`Left`](Self::Left), `1.0` for [`Right`](Self::Right).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// A key the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// An arrow key.
    Direction(Direction),
    /// The escape key.
    Escape,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`KeyboardEvent.key`) to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::Direction(Direction::Left),
            "ArrowRight" | "Right" => Self::Direction(Direction::Right),
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Which of the two direction keys are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    left: bool,
    right: bool,
}

impl DirectionKeys {
    /// Marks `dir` as held. Returns `true` if it was not held before.
    pub fn press(&mut self, dir: Direction) -> bool {
        !core::mem::replace(self.slot(dir), true)
    }

    /// Marks `dir` as released. Returns `true` if it was held before.
    pub fn release(&mut self, dir: Direction) -> bool {
        core::mem::replace(self.slot(dir), false)
    }

    /// Returns `true` if `dir` is held.
    #[must_use]
    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Returns `true` if either key is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.left || self.right
    }

    /// The held direction, with left winning when both are held.
    #[must_use]
    pub fn dominant(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Sum of the signs of all held keys: `-1`, `0`, or `1`.
    ///
    /// Both keys held cancel out.
    #[must_use]
    pub fn net(&self) -> f64 {
        let mut net = 0.0;
        if self.left {
            net -= 1.0;
        }
        if self.right {
            net += 1.0;
        }
        net
    }

    /// Releases both keys.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_report_changes() {
        let mut keys = DirectionKeys::default();
        assert!(keys.press(Direction::Left));
        assert!(!keys.press(Direction::Left));
        assert!(keys.is_held(Direction::Left));
        assert!(keys.release(Direction::Left));
        assert!(!keys.release(Direction::Left));
        assert!(!keys.any());
    }

    #[test]
    fn left_wins_but_net_cancels() {
        let mut keys = DirectionKeys::default();
        keys.press(Direction::Right);
        keys.press(Direction::Left);
        assert_eq!(keys.dominant(), Some(Direction::Left));
        assert_eq!(keys.net(), 0.0);
        keys.release(Direction::Left);
        assert_eq!(keys.net(), 1.0);
        keys.clear();
        assert_eq!(keys.dominant(), None);
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::Direction(Direction::Left));
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Other);
        assert_eq!(Direction::Left.sign(), -1.0);
    }
}
