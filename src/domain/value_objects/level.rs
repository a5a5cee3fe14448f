//! Display level value object

use std::fmt;

use serde::{Serialize, Serializer};

/// A skill level clamped to `[Level::MIN, Level::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 40;
    pub const MAX: u8 = 95;

    /// Clamp an arbitrary value into the displayable band.
    pub fn clamped(value: i64) -> Self {
        let v = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // within 40..=95 after clamp
        Self(v as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Percentage label, e.g. `"89%"`.
    pub fn percent(self) -> String {
        format!("{}%", self.0)
    }

    /// Filled cells for a bar of `width` cells.
    ///
    /// Rounds to the nearest cell without overflowing for any `width`.
    pub fn fill(self, width: usize) -> usize {
        let level = usize::from(self.0);
        level * (width / 100) + (level * (width % 100) + 50) / 100
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
