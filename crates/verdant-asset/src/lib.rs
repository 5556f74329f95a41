//! Verdant Asset - image-set bundle layout and storage
//!
//! Plans the on-disk `.imageset` bundle for each plant id and performs the
//! filesystem side of a sync: bundle directory acquisition, manifest
//! overwrite, image overwrite.

mod imageset;
mod store;

pub use imageset::{
    ImageSetManifest, ImageSetPlan, ImageVariant, ManifestInfo, MANIFEST_FILENAME,
};
pub use store::AssetStore;
