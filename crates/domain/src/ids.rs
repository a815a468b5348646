use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifiers. The client protocol and the store both key on plain
/// integers, so these wrap the raw value instead of a UUID.
macro_rules! define_id {
    ($name:ident, $raw:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($raw);

        impl $name {
            pub const fn new(value: $raw) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $raw {
                self.0
            }

            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$raw> for $name {
            fn from(value: $raw) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $raw {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Ownership scopes
define_id!(AccountId, u32);
define_id!(RealmId, u32);

// Roster entries
define_id!(CharacterGuid, u64);

// Creation templates (0 means "no template")
define_id!(TemplateSetId, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_template_means_none() {
        assert!(TemplateSetId::new(0).is_zero());
        assert!(!TemplateSetId::new(3).is_zero());
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&CharacterGuid::new(42)).expect("serialize");
        assert_eq!(json, "42");
    }
}
