//! Domain entities - Core business objects with identity

mod character;
mod creation_data;
mod template_set;

pub use character::{Character, NewCharacter, PetSummary, Position};
pub use creation_data::CreationData;
pub use template_set::TemplateSet;
