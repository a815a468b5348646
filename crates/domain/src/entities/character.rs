//! Character entity - a persisted roster entry owned by an account.

use serde::{Deserialize, Serialize};

use crate::entities::CreationData;
use crate::guid::SmartGuid;
use crate::ids::{AccountId, CharacterGuid, RealmId};
use crate::value_objects::{Appearance, CharacterFlags, CharacterName};

/// World position with facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub orientation: f32,
}

/// Summary of a bonded pet, shown on the roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSummary {
    pub display_id: u32,
    pub level: u32,
    pub family: u32,
}

/// A brand-new character, built from the creation request and reference data
/// but not yet stored. The store assigns the guid and list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: CharacterName,
    pub account_id: AccountId,
    pub realm_id: RealmId,
    pub race: u8,
    pub class: u8,
    pub sex: u8,
    pub appearance: Appearance,
    pub level: u8,
    pub zone: u32,
    pub map: u32,
    pub position: Position,
    pub flags: CharacterFlags,
    pub first_login: bool,
}

impl NewCharacter {
    /// Level every character starts at.
    pub const STARTING_LEVEL: u8 = 1;

    /// Build a level-1 character placed at the default spawn for its race and class.
    ///
    /// The roster entry is flagged `DECLINED` so the client asks the player to
    /// confirm the name the first time it is listed.
    pub fn at_spawn(
        name: CharacterName,
        account_id: AccountId,
        realm_id: RealmId,
        race: u8,
        class: u8,
        sex: u8,
        appearance: Appearance,
        spawn: &CreationData,
    ) -> Self {
        Self {
            name,
            account_id,
            realm_id,
            race,
            class,
            sex,
            appearance,
            level: Self::STARTING_LEVEL,
            zone: spawn.zone,
            map: spawn.map,
            position: spawn.position,
            flags: CharacterFlags::DECLINED,
            first_login: true,
        }
    }
}

/// A stored roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub guid: CharacterGuid,
    pub name: CharacterName,
    pub account_id: AccountId,
    pub realm_id: RealmId,
    pub race: u8,
    pub class: u8,
    pub sex: u8,
    pub appearance: Appearance,
    pub level: u8,
    pub zone: u32,
    pub map: u32,
    pub position: Position,
    pub guild_id: Option<u64>,
    pub flags: CharacterFlags,
    pub customize_flags: u32,
    pub flags3: u32,
    pub pet: Option<PetSummary>,
    pub list_position: u8,
    pub first_login: bool,
}

impl Character {
    /// Attach the store-assigned identity to a freshly created character.
    pub fn from_new(guid: CharacterGuid, list_position: u8, new: NewCharacter) -> Self {
        Self {
            guid,
            name: new.name,
            account_id: new.account_id,
            realm_id: new.realm_id,
            race: new.race,
            class: new.class,
            sex: new.sex,
            appearance: new.appearance,
            level: new.level,
            zone: new.zone,
            map: new.map,
            position: new.position,
            guild_id: None,
            flags: new.flags,
            customize_flags: 0,
            flags3: 0,
            pet: None,
            list_position,
            first_login: new.first_login,
        }
    }

    /// Player identity as the client sees it, scoped to the current map.
    pub fn player_guid(&self) -> SmartGuid {
        // Map ids are narrowed the same way the client narrows them.
        SmartGuid::player(self.guid.get(), self.map as u16)
    }

    /// Guild identity; a guild-kind guid with empty payload when unguilded.
    pub fn guild_guid(&self) -> SmartGuid {
        SmartGuid::guild(self.guild_id.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::GuidType;

    fn spawn() -> CreationData {
        CreationData {
            race: 1,
            class: 1,
            map: 0,
            zone: 12,
            position: Position {
                x: -8949.95,
                y: -132.493,
                z: 83.5312,
                orientation: 0.0,
            },
            start_abilities: vec![],
        }
    }

    fn new_character() -> NewCharacter {
        NewCharacter::at_spawn(
            CharacterName::new("Anduin").expect("valid name"),
            AccountId::new(7),
            RealmId::new(1),
            1,
            1,
            0,
            Appearance::default(),
            &spawn(),
        )
    }

    #[test]
    fn new_character_starts_at_spawn_level_one_declined() {
        let new = new_character();

        assert_eq!(new.level, 1);
        assert_eq!(new.map, 0);
        assert_eq!(new.zone, 12);
        assert_eq!(new.position, spawn().position);
        assert_eq!(new.flags, CharacterFlags::DECLINED);
        assert!(new.first_login);
    }

    #[test]
    fn stored_character_has_no_guild_or_pet() {
        let character = Character::from_new(CharacterGuid::new(3), 0, new_character());

        assert_eq!(character.guid, CharacterGuid::new(3));
        assert!(character.guild_id.is_none());
        assert!(character.pet.is_none());
        assert_eq!(character.account_id, AccountId::new(7));
    }

    #[test]
    fn guids_use_player_and_guild_kinds() {
        let mut character = Character::from_new(CharacterGuid::new(3), 0, new_character());
        character.map = 1;
        character.guild_id = Some(40);

        let player = character.player_guid();
        assert_eq!(player.kind(), Some(GuidType::Player));
        assert_eq!(player.map_id(), 1);
        assert_eq!(player.creation_bits(), 3);

        let guild = character.guild_guid();
        assert_eq!(guild.kind(), Some(GuidType::Guild));
        assert_eq!(guild.creation_bits(), 40);
        assert_eq!(guild.map_id(), 0);
    }
}
