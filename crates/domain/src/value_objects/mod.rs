//! Value objects - immutable, validated building blocks of the roster

mod appearance;
mod flags;
mod names;

pub use appearance::Appearance;
pub use flags::CharacterFlags;
pub use names::CharacterName;
