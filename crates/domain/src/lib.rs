//! Character server domain.
//!
//! Pure data and invariants for the account roster: identities, the
//! character record, creation reference data and the outcome codes
//! returned to clients. No I/O lives here.

pub mod entities;
pub mod error;
pub mod guid;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{Character, CreationData, NewCharacter, PetSummary, Position, TemplateSet};
pub use error::DomainError;
pub use guid::{GuidType, SmartGuid};
pub use ids::{AccountId, CharacterGuid, RealmId, TemplateSetId};
pub use types::{CharCreateCode, CharDeleteCode};
pub use value_objects::{Appearance, CharacterFlags, CharacterName};
