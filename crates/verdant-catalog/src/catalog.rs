//! Plant catalog loading

use crate::types::{CatalogFile, PlantRecord};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use verdant_core::{Result, VerdantError};

/// An ordered plant catalog, read once at startup.
#[derive(Debug, Default)]
pub struct PlantCatalog {
    plants: Vec<PlantRecord>,
}

impl PlantCatalog {
    /// Load the catalog from a JSON file.
    ///
    /// The file is an object whose `plant_catalog` key holds the ordered
    /// entry array. Unrelated top-level keys are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content).map_err(|e| {
            VerdantError::CatalogError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Self {
            plants: file.plant_catalog,
        })
    }

    /// Build a catalog from in-memory records
    pub fn from_records(plants: Vec<PlantRecord>) -> Self {
        Self { plants }
    }

    /// Get a plant by id
    pub fn get(&self, id: u32) -> Option<&PlantRecord> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// The entries in catalog order
    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, PlantRecord> {
        self.plants.iter()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Check the catalog for problems a sync run would trip over.
    ///
    /// Returns one message per finding: duplicate ids (two entries would
    /// claim the same bundle directory) and empty common names (no prompt
    /// could be built).
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for plant in &self.plants {
            if !seen.insert(plant.id) {
                problems.push(format!("Duplicate id {}", plant.id));
            }
            if plant.common_name.trim().is_empty() {
                problems.push(format!("Empty common_name for id {}", plant.id));
            }
        }

        problems
    }
}
