//! WebSocket message types for client-engine communication.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Removing variants requires major version bump
//! - Renaming variants is a breaking change
//! - Unknown enum variants deserialize to `Unknown` variant for forward compatibility

use serde::{Deserialize, Serialize};

use crate::dto::{CharacterListEntry, GuidData};

// =============================================================================
// Client Messages (Client → Engine)
// =============================================================================

/// Messages from the client to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// List every character on the session's account
    EnumCharacters,

    /// Create a character on the session's account and realm
    CreateCharacter {
        name: String,
        race_id: u8,
        class_id: u8,
        sex_id: u8,
        skin_id: u8,
        face_id: u8,
        hair_style_id: u8,
        hair_color_id: u8,
        facial_hair_style_id: u8,
        /// 0 when no template set is used
        #[serde(default)]
        template_set_id: u32,
    },

    /// Delete a character owned by the session's account
    CharDelete { guid: GuidData },

    /// Keep-alive
    Heartbeat,

    /// Unknown message type for forward compatibility
    ///
    /// When deserializing an unknown variant, this variant is used instead of
    /// failing. Allows older engines to ignore newer client requests.
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Server Messages (Engine → Client)
// =============================================================================

/// Messages from the engine to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Roster for the session's account, ordered by list position
    EnumCharactersResult {
        success: bool,
        characters: Vec<CharacterListEntry>,
    },

    /// Outcome of `CreateCharacter`
    CreateChar { code: u8 },

    /// Outcome of `CharDelete`
    DeleteChar { code: u8 },

    /// Reply to `Heartbeat`
    Pong,

    /// Message could not be handled
    Error { code: String, message: String },

    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod serde_tests {
    use super::{ClientMessage, ServerMessage};
    use crate::dto::GuidData;

    #[test]
    fn create_character_without_template_defaults_to_zero() {
        let json = r#"{
            "type": "CreateCharacter",
            "name": "Valeera",
            "race_id": 1,
            "class_id": 4,
            "sex_id": 1,
            "skin_id": 2,
            "face_id": 3,
            "hair_style_id": 4,
            "hair_color_id": 5,
            "facial_hair_style_id": 0
        }"#;

        let decoded: ClientMessage = serde_json::from_str(json).expect("deserialize");
        match decoded {
            ClientMessage::CreateCharacter {
                name,
                template_set_id,
                class_id,
                ..
            } => {
                assert_eq!(name, "Valeera");
                assert_eq!(class_id, 4);
                assert_eq!(template_set_id, 0);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn char_delete_carries_both_guid_words() {
        let json = r#"{"type":"CharDelete","guid":{"low":5,"high":576460752303423488}}"#;

        let decoded: ClientMessage = serde_json::from_str(json).expect("deserialize");
        match decoded {
            ClientMessage::CharDelete { guid } => {
                assert_eq!(
                    guid,
                    GuidData {
                        low: 5,
                        high: 2u64 << 58
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn unknown_client_message_is_tolerated() {
        let decoded: ClientMessage =
            serde_json::from_str(r#"{"type":"GenerateRandomCharacterName"}"#)
                .expect("deserialize");
        assert!(matches!(decoded, ClientMessage::Unknown));
    }

    #[test]
    fn outcome_messages_are_tagged() {
        let json = serde_json::to_string(&ServerMessage::CreateChar { code: 47 }).expect("serialize");
        assert_eq!(json, r#"{"type":"CreateChar","code":47}"#);
    }
}
