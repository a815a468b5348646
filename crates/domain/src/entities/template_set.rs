use serde::{Deserialize, Serialize};

use crate::ids::TemplateSetId;

/// A pre-packaged character blueprint offered to an account or a realm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub id: TemplateSetId,
    pub name: String,
    pub description: String,
}
