//! Bundle directory and file writes

use crate::imageset::{ImageSetManifest, ImageSetPlan};
use std::fs;
use std::path::{Path, PathBuf};
use verdant_core::{ContentHash, Result, VerdantError};

/// Writes image-set bundles under a fixed assets root.
///
/// Every write is a full overwrite, so a sync can be re-run from any
/// partial state and converge to the same tree.
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Create a store rooted at the given assets directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The assets root this store writes under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Plan the bundle layout for an id
    pub fn plan(&self, id: u32) -> ImageSetPlan {
        ImageSetPlan::for_id(&self.root, id)
    }

    /// Ensure the bundle directory exists and overwrite its manifest.
    ///
    /// Creating an already-existing directory is a no-op. After this
    /// returns Ok the bundle directory exists regardless of prior state.
    pub fn write_manifest(&self, plan: &ImageSetPlan) -> Result<()> {
        fs::create_dir_all(&plan.dir).map_err(|e| VerdantError::DirectoryCreate {
            path: plan.dir.clone(),
            source: e,
        })?;

        let manifest = ImageSetManifest::for_plan(plan);
        let json = serde_json::to_string_pretty(&manifest).map_err(|e| {
            VerdantError::ManifestWrite {
                path: plan.manifest_path.clone(),
                source: std::io::Error::other(e),
            }
        })?;

        fs::write(&plan.manifest_path, json).map_err(|e| VerdantError::ManifestWrite {
            path: plan.manifest_path.clone(),
            source: e,
        })
    }

    /// Write fetched image bytes to the bundle's image file.
    ///
    /// Fully overwrites any existing file at that path and returns the
    /// hash of the written bytes.
    pub fn write_image(&self, plan: &ImageSetPlan, bytes: &[u8]) -> Result<ContentHash> {
        let path = plan.image_path();
        fs::write(&path, bytes).map_err(|e| VerdantError::ImageWrite {
            path: path.clone(),
            source: e,
        })?;
        Ok(ContentHash::from_bytes(bytes))
    }
}
