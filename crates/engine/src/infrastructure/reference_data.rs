//! Static race/class reference tables loaded from a JSON file.
//!
//! The file looks like:
//!
//! ```json
//! {
//!   "races": [1, 2],
//!   "classes": [1, 4],
//!   "race_classes": [{ "race": 1, "class": 1 }],
//!   "creation_data": [
//!     { "race": 1, "class": 1, "map": 0, "zone": 12,
//!       "position": { "x": -8949.95, "y": -132.49, "z": 83.53, "orientation": 0.0 },
//!       "start_abilities": [78, 81] }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use charserver_domain::CreationData;
use serde::Deserialize;

use super::ports::ReferenceDataPort;

#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid reference data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate creation data for race {race} class {class}")]
    DuplicateCreationData { race: u8, class: u8 },
}

#[derive(Debug, Deserialize)]
struct RaceClassPair {
    race: u8,
    class: u8,
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    races: Vec<u8>,
    classes: Vec<u8>,
    #[serde(default)]
    race_classes: Vec<RaceClassPair>,
    #[serde(default)]
    creation_data: Vec<CreationData>,
}

/// In-memory reference tables. Immutable after load.
#[derive(Debug, Default)]
pub struct ReferenceData {
    races: HashSet<u8>,
    classes: HashSet<u8>,
    race_classes: HashSet<(u8, u8)>,
    creation_data: HashMap<(u8, u8), CreationData>,
}

impl ReferenceData {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data = Self::from_json(&raw)?;

        tracing::info!(
            path = %path.display(),
            races = data.races.len(),
            classes = data.classes.len(),
            combinations = data.race_classes.len(),
            "Reference data loaded"
        );
        Ok(data)
    }

    pub fn from_json(raw: &str) -> Result<Self, ReferenceDataError> {
        let file: ReferenceFile = serde_json::from_str(raw)?;

        let mut creation_data = HashMap::with_capacity(file.creation_data.len());
        for entry in file.creation_data {
            let key = (entry.race, entry.class);
            if creation_data.insert(key, entry).is_some() {
                return Err(ReferenceDataError::DuplicateCreationData {
                    race: key.0,
                    class: key.1,
                });
            }
        }

        Ok(Self {
            races: file.races.into_iter().collect(),
            classes: file.classes.into_iter().collect(),
            race_classes: file
                .race_classes
                .into_iter()
                .map(|pair| (pair.race, pair.class))
                .collect(),
            creation_data,
        })
    }
}

impl ReferenceDataPort for ReferenceData {
    fn has_race(&self, race: u8) -> bool {
        self.races.contains(&race)
    }

    fn has_class(&self, class: u8) -> bool {
        self.classes.contains(&class)
    }

    fn has_race_class(&self, race: u8, class: u8) -> bool {
        self.race_classes.contains(&(race, class))
    }

    fn creation_data(&self, race: u8, class: u8) -> Option<CreationData> {
        self.creation_data.get(&(race, class)).cloned()
    }
}
