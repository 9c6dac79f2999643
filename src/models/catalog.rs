//! Catalog models mirrored from the server for offline viewing.
//!
//! Rows are read-only on the device; the store is populated once by the
//! install-time seed and never reconciled against the server afterwards.

use serde::{Deserialize, Serialize};

/// Exercise difficulty level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub id: i64,
    pub name: String,
}

/// Gym machine used by an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Catalog exercise. References a difficulty and a machine by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// When the exercise was added to the catalog (ISO date string)
    #[serde(rename = "dateAdded")]
    pub date_added: String,
    /// FK into `difficulties` (column name as shipped in the store schema)
    pub dificulty_id: i64,
    /// Image URL, if any
    pub image: Option<String>,
    /// FK into `machines`
    pub machine_id: i64,
    /// Video URL, if any
    pub video: Option<String>,
}

/// Everything the offline screen renders, loaded in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineCatalog {
    pub difficulties: Vec<Difficulty>,
    pub machines: Vec<Machine>,
    pub exercises: Vec<Exercise>,
}

impl OfflineCatalog {
    /// True when every table came back empty.
    pub fn is_empty(&self) -> bool {
        self.difficulties.is_empty() && self.machines.is_empty() && self.exercises.is_empty()
    }
}
