//! Wire-format DTOs.

use serde::{Deserialize, Serialize};

/// A smart guid as its two raw words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuidData {
    pub low: u64,
    pub high: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One row of the character select screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterListEntry {
    pub guid: GuidData,
    pub name: String,
    pub list_position: u8,
    pub race_id: u8,
    pub class_id: u8,
    pub sex_id: u8,
    pub skin_id: u8,
    pub face_id: u8,
    pub hair_style: u8,
    pub hair_color: u8,
    pub facial_hair_style: u8,
    pub experience_level: u8,
    pub zone_id: i32,
    pub map_id: i32,
    pub preload_pos: Vector3Data,
    pub guild_guid: GuidData,
    pub flags: u32,
    pub flags2: u32,
    pub flags3: u32,
    pub first_login: bool,
    pub pet_creature_display_id: u32,
    pub pet_experience_level: u32,
    pub pet_creature_family_id: u32,
}
