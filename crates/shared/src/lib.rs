//! Character server protocol - types exchanged between client and engine.
//!
//! - WebSocket message types (`ClientMessage`, `ServerMessage`)
//! - Wire-format DTOs for roster entries and identities
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - codes are raw `u8`, guids are raw word pairs

pub mod dto;
pub mod messages;

pub use dto::{CharacterListEntry, GuidData, Vector3Data};
pub use messages::{ClientMessage, ServerMessage};
