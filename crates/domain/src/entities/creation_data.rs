use serde::{Deserialize, Serialize};

use crate::entities::Position;

/// Default spawn for a race/class pair created without a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationData {
    pub race: u8,
    pub class: u8,
    pub map: u32,
    #[serde(default)]
    pub zone: u32,
    pub position: Position,
    /// Abilities granted on creation.
    #[serde(default)]
    pub start_abilities: Vec<u32>,
}
