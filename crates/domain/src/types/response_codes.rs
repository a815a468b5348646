//! Response codes sent back for roster mutations.
//!
//! The numeric values are what the client expects on the wire.

use serde::{Deserialize, Serialize};

/// Outcome of a character creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharCreateCode {
    /// Initial state while the request is evaluated; never sent.
    InProgress = 46,
    Success = 47,
    Error = 48,
    Failed = 49,
    NameInUse = 50,
}

impl CharCreateCode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Outcome of a character deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharDeleteCode {
    InProgress = 70,
    Success = 71,
    Failed = 72,
}

impl CharDeleteCode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}
