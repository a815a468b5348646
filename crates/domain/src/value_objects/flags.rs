//! Roster status flags.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// First flag group shown on a roster entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterFlags(u32);

impl CharacterFlags {
    pub const NONE: Self = Self(0);
    pub const GHOST: Self = Self(0x0000_2000);
    pub const RENAME: Self = Self(0x0000_4000);
    pub const LOCKED_BY_BILLING: Self = Self(0x0100_0000);
    /// Name must be confirmed by the player on first display.
    pub const DECLINED: Self = Self(0x0200_0000);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CharacterFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CharacterFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
