//! Character roster handlers: enumerate, create and delete.

use charserver_domain::{
    Appearance, CharCreateCode, CharDeleteCode, Character, PetSummary, SmartGuid, TemplateSetId,
};
use charserver_shared::{CharacterListEntry, GuidData, ServerMessage, Vector3Data};

use super::{Outcome, WsState};
use crate::infrastructure::ports::SessionContext;
use crate::use_cases::character::{CharacterError, CreateCharacterInput};

/// Fields of a `CreateCharacter` message.
#[derive(Debug)]
pub(super) struct CreateRequest {
    pub name: String,
    pub race_id: u8,
    pub class_id: u8,
    pub sex_id: u8,
    pub skin_id: u8,
    pub face_id: u8,
    pub hair_style_id: u8,
    pub hair_color_id: u8,
    pub facial_hair_style_id: u8,
    pub template_set_id: u32,
}

impl From<CreateRequest> for CreateCharacterInput {
    fn from(request: CreateRequest) -> Self {
        Self {
            name: request.name,
            race: request.race_id,
            class: request.class_id,
            sex: request.sex_id,
            appearance: Appearance {
                skin: request.skin_id,
                face: request.face_id,
                hair_style: request.hair_style_id,
                hair_color: request.hair_color_id,
                facial_hair_style: request.facial_hair_style_id,
            },
            template_set_id: TemplateSetId::new(request.template_set_id),
        }
    }
}

pub(super) async fn handle_enum_characters(
    state: &WsState,
    session: SessionContext,
) -> ServerMessage {
    match state.app.use_cases.character.enumerate.execute(session).await {
        Ok(roster) => ServerMessage::EnumCharactersResult {
            success: true,
            characters: roster.iter().map(to_list_entry).collect(),
        },
        Err(e) => {
            tracing::error!(
                account_id = %session.account_id,
                error = %e,
                "Failed to enumerate characters"
            );
            ServerMessage::EnumCharactersResult {
                success: false,
                characters: Vec::new(),
            }
        }
    }
}

pub(super) async fn handle_create_character(
    state: &WsState,
    session: SessionContext,
    request: CreateRequest,
) -> ServerMessage {
    let code = match state
        .app
        .use_cases
        .character
        .create
        .execute(session, request.into())
        .await
    {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(
                account_id = %session.account_id,
                error = %e,
                "Character creation aborted by store error"
            );
            CharCreateCode::Failed
        }
    };

    tracing::debug!(account_id = %session.account_id, code = code.code(), "CreateChar outcome");
    ServerMessage::CreateChar { code: code.code() }
}

pub(super) async fn handle_char_delete(
    state: &WsState,
    session: SessionContext,
    guid: GuidData,
) -> Outcome {
    let guid = SmartGuid::from_parts(guid.low, guid.high);

    let code = match state
        .app
        .use_cases
        .character
        .delete
        .execute(session, guid)
        .await
    {
        Ok(code) => code,
        Err(CharacterError::MalformedIdentity(guid)) => {
            tracing::warn!(
                account_id = %session.account_id,
                %guid,
                "CharDelete with malformed guid"
            );
            return Outcome::Disconnect;
        }
        Err(e) => {
            tracing::error!(account_id = %session.account_id, error = %e, "Character deletion failed");
            CharDeleteCode::Failed
        }
    };

    tracing::debug!(account_id = %session.account_id, code = code.code(), "DeleteChar outcome");
    Outcome::Reply(ServerMessage::DeleteChar { code: code.code() })
}

fn guid_data(guid: SmartGuid) -> GuidData {
    GuidData {
        low: guid.low(),
        high: guid.high(),
    }
}

/// Build the character select row for a stored character.
fn to_list_entry(character: &Character) -> CharacterListEntry {
    let pet = character.pet.unwrap_or(PetSummary {
        display_id: 0,
        level: 0,
        family: 0,
    });

    CharacterListEntry {
        guid: guid_data(character.player_guid()),
        name: character.name.to_string(),
        list_position: character.list_position,
        race_id: character.race,
        class_id: character.class,
        sex_id: character.sex,
        skin_id: character.appearance.skin,
        face_id: character.appearance.face,
        hair_style: character.appearance.hair_style,
        hair_color: character.appearance.hair_color,
        facial_hair_style: character.appearance.facial_hair_style,
        experience_level: character.level,
        zone_id: i32::try_from(character.zone).unwrap_or(i32::MAX),
        map_id: i32::try_from(character.map).unwrap_or(i32::MAX),
        preload_pos: Vector3Data {
            x: character.position.x,
            y: character.position.y,
            z: character.position.z,
        },
        guild_guid: guid_data(character.guild_guid()),
        flags: character.flags.bits(),
        flags2: character.customize_flags,
        flags3: character.flags3,
        first_login: character.first_login,
        pet_creature_display_id: pet.display_id,
        pet_experience_level: pet.level,
        pet_creature_family_id: pet.family,
    }
}
