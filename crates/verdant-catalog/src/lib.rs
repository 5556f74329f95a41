//! Verdant Catalog - plant taxonomy input for the asset pipeline
//!
//! Reads the plant catalog JSON (the `plant_catalog` array) into typed
//! records. The pipeline treats the catalog as read-only for the lifetime
//! of one batch run.

mod catalog;
mod types;

pub use catalog::PlantCatalog;
pub use types::{CatalogFile, PlantRecord};
