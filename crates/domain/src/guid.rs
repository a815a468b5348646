//! Smart GUIDs - the tagged 128-bit identity the client decodes.
//!
//! Layout of the two words:
//!
//! ```text
//! high: [63..58 kind][54..42 realm][41..29 map][28..6 entry][5..0 sub-type]
//! low:  [52..40 server][39..0 creation bits]
//! ```
//!
//! The client decodes these bit for bit, so the layout must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;

const KIND_SHIFT: u32 = 58;
const MAP_SHIFT: u32 = 29;

const KIND_MASK: u64 = 0x3F;
const SCOPE_MASK: u64 = 0x1FFF;
const CREATION_BITS_MASK: u64 = 0xFF_FFFF_FFFF;

/// Kind tag stored in the top six bits of the high word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuidType {
    Null = 0,
    Uniq = 1,
    Player = 2,
    Item = 3,
    StaticDoor = 4,
    Transport = 5,
    Conversation = 6,
    Creature = 7,
    Vehicle = 8,
    Pet = 9,
    GameObject = 10,
    DynamicObject = 11,
    AreaTrigger = 12,
    Corpse = 13,
    LootObject = 14,
    SceneObject = 15,
    Guild = 27,
    WowAccount = 28,
    BNetAccount = 29,
}

impl GuidType {
    /// Decode a kind tag. Tags this server never issues come back as `None`.
    pub fn from_tag(tag: u8) -> Option<Self> {
        let kind = match tag {
            0 => Self::Null,
            1 => Self::Uniq,
            2 => Self::Player,
            3 => Self::Item,
            4 => Self::StaticDoor,
            5 => Self::Transport,
            6 => Self::Conversation,
            7 => Self::Creature,
            8 => Self::Vehicle,
            9 => Self::Pet,
            10 => Self::GameObject,
            11 => Self::DynamicObject,
            12 => Self::AreaTrigger,
            13 => Self::Corpse,
            14 => Self::LootObject,
            15 => Self::SceneObject,
            27 => Self::Guild,
            28 => Self::WowAccount,
            29 => Self::BNetAccount,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// A tagged, kind-scoped identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmartGuid {
    low: u64,
    high: u64,
}

impl SmartGuid {
    /// Rebuild a guid from the two words exactly as received.
    pub const fn from_parts(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Identity of a roster character: player kind, scoped to its current map.
    pub fn player(raw_id: u64, map_id: u16) -> Self {
        Self::default()
            .with_kind(GuidType::Player)
            .with_map_id(map_id)
            .with_creation_bits(raw_id)
    }

    /// Identity of a guild. Guilds carry no map scope.
    pub fn guild(raw_id: u64) -> Self {
        Self::default()
            .with_kind(GuidType::Guild)
            .with_creation_bits(raw_id)
    }

    pub fn with_kind(mut self, kind: GuidType) -> Self {
        self.high = (self.high & !(KIND_MASK << KIND_SHIFT)) | (u64::from(kind.tag()) << KIND_SHIFT);
        self
    }

    pub fn with_map_id(mut self, map_id: u16) -> Self {
        self.high = (self.high & !(SCOPE_MASK << MAP_SHIFT))
            | ((u64::from(map_id) & SCOPE_MASK) << MAP_SHIFT);
        self
    }

    pub fn with_creation_bits(mut self, bits: u64) -> Self {
        self.low = (self.low & !CREATION_BITS_MASK) | (bits & CREATION_BITS_MASK);
        self
    }

    pub const fn low(&self) -> u64 {
        self.low
    }

    pub const fn high(&self) -> u64 {
        self.high
    }

    /// The raw payload the store keys rows by.
    pub const fn raw_id(&self) -> u64 {
        self.low
    }

    /// Kind tag bits, undecoded.
    pub const fn kind_tag(&self) -> u8 {
        ((self.high >> KIND_SHIFT) & KIND_MASK) as u8
    }

    pub fn kind(&self) -> Option<GuidType> {
        GuidType::from_tag(self.kind_tag())
    }

    pub fn is_player(&self) -> bool {
        self.kind() == Some(GuidType::Player)
    }

    pub const fn map_id(&self) -> u16 {
        ((self.high >> MAP_SHIFT) & SCOPE_MASK) as u16
    }

    pub const fn creation_bits(&self) -> u64 {
        self.low & CREATION_BITS_MASK
    }

    /// Wire bytes: low word then high word, both little-endian.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.low.to_le_bytes());
        bytes[8..].copy_from_slice(&self.high.to_le_bytes());
        bytes
    }
}

impl fmt::Display for SmartGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.high, self.low)
    }
}
