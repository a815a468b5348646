//! Character name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A character name, kept exactly as the client sent it.
///
/// Comparison is exact: `Thrall` and `thrall` are different names, and so are
/// `Jaina` and `Jaina `.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a name for a new character.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        Ok(Self(name))
    }

    /// Wrap a name read back from the store. Stored rows are not re-validated.
    pub fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}
