//! Use cases - user story orchestration over the ports.

pub mod character;

pub use character::CharacterUseCases;
