//! Plant record definitions

use serde::{Deserialize, Serialize};

/// One entry of the plant taxonomy catalog.
///
/// Catalog files carry more per-plant data (care guides, categories,
/// recognition metadata); only the fields the asset pipeline needs are
/// modeled here, everything else is ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Stable identifier, the sole input to asset path derivation
    pub id: u32,
    pub common_name: String,
    #[serde(default)]
    pub botanical_name: Option<String>,
}

impl PlantRecord {
    /// Name used for prompts and progress output.
    ///
    /// The botanical name wins when present; the common name is the
    /// fallback.
    pub fn display_name(&self) -> &str {
        self.botanical_name.as_deref().unwrap_or(&self.common_name)
    }
}

/// Top-level catalog file shape
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub plant_catalog: Vec<PlantRecord>,
}
