//! Image-set bundle planning and the variant manifest model

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest filename inside every bundle directory
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// The planned on-disk layout for one plant's image bundle.
///
/// Derived from the plant id alone. Display names never participate, so
/// renaming a plant cannot orphan its bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSetPlan {
    /// Bundle directory, `<id>_main.imageset/`
    pub dir: PathBuf,
    /// Image filename inside the bundle, `<id>_main.jpg`
    pub image_filename: String,
    /// Manifest path inside the bundle
    pub manifest_path: PathBuf,
}

impl ImageSetPlan {
    /// Derive the bundle layout for an id under an assets root.
    ///
    /// Pure computation, never touches the filesystem.
    pub fn for_id(assets_root: &Path, id: u32) -> Self {
        let asset_name = format!("{}_main", id);
        let dir = assets_root.join(format!("{}.imageset", asset_name));
        let manifest_path = dir.join(MANIFEST_FILENAME);
        Self {
            dir,
            image_filename: format!("{}.jpg", asset_name),
            manifest_path,
        }
    }

    /// Full path of the image file inside the bundle
    pub fn image_path(&self) -> PathBuf {
        self.dir.join(&self.image_filename)
    }
}

/// One display-density variant entry of the bundle manifest.
///
/// A variant without a filename is a placeholder: declared, not yet
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub idiom: String,
    pub scale: String,
}

/// Provenance block of the bundle manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The bundle manifest, serialized as `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSetManifest {
    pub images: Vec<ImageVariant>,
    pub info: ManifestInfo,
}

impl ImageSetManifest {
    /// Manifest declaring universal variants at 1x, 2x and 3x scale.
    ///
    /// Only the 1x entry is backed by a file. The 2x and 3x entries stay
    /// filename-less placeholders; the pipeline never supplies them.
    pub fn universal(filename: &str) -> Self {
        Self {
            images: vec![
                ImageVariant {
                    filename: Some(filename.to_string()),
                    idiom: "universal".to_string(),
                    scale: "1x".to_string(),
                },
                ImageVariant {
                    filename: None,
                    idiom: "universal".to_string(),
                    scale: "2x".to_string(),
                },
                ImageVariant {
                    filename: None,
                    idiom: "universal".to_string(),
                    scale: "3x".to_string(),
                },
            ],
            info: ManifestInfo::default(),
        }
    }

    /// Manifest for a plan, backed by the plan's image filename
    pub fn for_plan(plan: &ImageSetPlan) -> Self {
        Self::universal(&plan.image_filename)
    }

    /// The variant entry that carries a filename, if any
    pub fn backed_variant(&self) -> Option<&ImageVariant> {
        self.images.iter().find(|v| v.filename.is_some())
    }
}
