//! Batch catalog synchronization
//!
//! Drives one plant at a time through plan -> manifest -> prompt -> fetch
//! -> write. Failures are caught at the plant boundary and recorded, so a
//! bad entry or a flaky endpoint can never abort the batch.

use crate::prompt::PromptTemplate;
use crate::provider::{FetchRequest, ImageProvider};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use verdant_asset::AssetStore;
use verdant_catalog::{PlantCatalog, PlantRecord};
use verdant_core::Result;

/// Pause after each plant to bound the outbound request rate
pub const INTER_REQUEST_DELAY_MS: u64 = 500;

/// How much of a failure reason makes it into the report
const REASON_MAX_CHARS: usize = 50;

/// Options for one synchronization run.
///
/// The assets root and catalog path arrive as explicit parameters from the
/// CLI; nothing in the pipeline reads ambient global paths.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Root directory the `.imageset` bundles are written under
    pub assets_root: PathBuf,
    /// Requested image width in pixels
    pub width: u32,
    /// Requested image height in pixels
    pub height: u32,
    /// Delay imposed after every plant, success or failure
    pub delay: Duration,
    /// Template the per-plant prompt is rendered from
    pub prompt: PromptTemplate,
}

impl SyncOptions {
    pub fn new<P: Into<PathBuf>>(assets_root: P) -> Self {
        Self {
            assets_root: assets_root.into(),
            width: 1024,
            height: 1024,
            delay: Duration::from_millis(INTER_REQUEST_DELAY_MS),
            prompt: PromptTemplate::default(),
        }
    }
}

/// One recorded failure
#[derive(Debug, Clone)]
pub struct SyncFailure {
    pub id: u32,
    pub reason: String,
}

/// Result of a full batch run
#[derive(Debug, Default)]
pub struct SyncReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// Identifiers that failed, in catalog order
    pub fn failed_ids(&self) -> Vec<u32> {
        self.failures.iter().map(|f| f.id).collect()
    }

    /// True when every plant synced
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Synchronize every catalog entry against the image provider.
///
/// Strictly sequential, one plant at a time. Prints a progress line per
/// plant and returns the aggregate report; the caller renders the final
/// summary.
pub fn sync_catalog(
    catalog: &PlantCatalog,
    provider: &dyn ImageProvider,
    options: &SyncOptions,
) -> SyncReport {
    let total = catalog.len();
    let store = AssetStore::new(&options.assets_root);
    let mut report = SyncReport {
        total,
        ..Default::default()
    };

    for (position, plant) in catalog.iter().enumerate() {
        let index = position + 1;
        print!(
            "[{}/{}] Downloading {} ({})... ",
            index,
            total,
            plant.display_name(),
            plant.id
        );
        let _ = std::io::stdout().flush();

        match sync_one(plant, index as u64, &store, provider, options) {
            Ok(()) => {
                println!("✓");
                report.succeeded += 1;
            }
            Err(e) => {
                let reason = truncate_reason(&e.to_string());
                println!("✗ ({})", reason);
                report.failures.push(SyncFailure {
                    id: plant.id,
                    reason,
                });
            }
        }

        // Be nice to the API
        std::thread::sleep(options.delay);
    }

    report
}

/// One plant's pass through the pipeline; an error here is that plant's
/// alone
fn sync_one(
    plant: &PlantRecord,
    seed: u64,
    store: &AssetStore,
    provider: &dyn ImageProvider,
    options: &SyncOptions,
) -> Result<()> {
    let plan = store.plan(plant.id);
    store.write_manifest(&plan)?;

    let request = FetchRequest {
        prompt: options.prompt.render(plant.display_name()),
        width: options.width,
        height: options.height,
        seed,
    };
    let bytes = provider.fetch(&request)?;
    store.write_image(&plan, &bytes)?;
    Ok(())
}

fn truncate_reason(reason: &str) -> String {
    reason.chars().take(REASON_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use verdant_core::VerdantError;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("verdant_batch_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn three_plants() -> PlantCatalog {
        PlantCatalog::from_records(vec![
            PlantRecord {
                id: 1,
                common_name: "Swiss Cheese Plant".to_string(),
                botanical_name: Some("Monstera Deliciosa".to_string()),
            },
            PlantRecord {
                id: 2,
                common_name: "Golden Pothos".to_string(),
                botanical_name: None,
            },
            PlantRecord {
                id: 3,
                common_name: "Zebra Alocasia".to_string(),
                botanical_name: Some("Alocasia Zebrina".to_string()),
            },
        ])
    }

    fn options(root: &PathBuf) -> SyncOptions {
        SyncOptions {
            delay: Duration::ZERO,
            ..SyncOptions::new(root.clone())
        }
    }

    /// Echoes the prompt back as image bytes and records every request
    #[derive(Debug)]
    struct RecordingProvider {
        requests: Mutex<Vec<FetchRequest>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ImageProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(request.prompt.clone().into_bytes())
        }
    }

    /// Fails with a 500 for one seed, succeeds otherwise
    #[derive(Debug)]
    struct FailingProvider {
        fail_seed: u64,
    }

    impl ImageProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
            if request.seed == self.fail_seed {
                Err(VerdantError::Status(500))
            } else {
                Ok(b"jpeg bytes".to_vec())
            }
        }
    }

    #[test]
    fn test_sync_all_success() {
        let root = temp_dir();
        let catalog = three_plants();
        let provider = RecordingProvider::new();

        let report = sync_catalog(&catalog, &provider, &options(&root));

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 3);
        assert!(report.all_succeeded());

        for plant in catalog.iter() {
            let plan = AssetStore::new(&root).plan(plant.id);
            assert!(plan.manifest_path.is_file());
            let written = std::fs::read(plan.image_path()).unwrap();
            let expected = PromptTemplate::default().render(plant.display_name());
            assert_eq!(written, expected.as_bytes());
        }

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_seed_is_batch_position_and_prompts_carry_names() {
        let root = temp_dir();
        let provider = RecordingProvider::new();

        sync_catalog(&three_plants(), &provider, &options(&root));

        let requests = provider.requests.lock().unwrap();
        let seeds: Vec<u64> = requests.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![1, 2, 3]);
        assert!(requests[0].prompt.contains("Monstera Deliciosa"));
        assert!(requests[1].prompt.contains("Golden Pothos"));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_failure_is_isolated_per_plant() {
        let root = temp_dir();
        let catalog = three_plants();
        let provider = FailingProvider { fail_seed: 2 };

        let report = sync_catalog(&catalog, &provider, &options(&root));

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed_ids(), vec![2]);
        assert_eq!(report.failures[0].reason, "Status 500");
        assert_eq!(report.total, report.succeeded + report.failures.len());

        // All three bundles got manifests, only 1 and 3 got images
        let store = AssetStore::new(&root);
        for id in [1u32, 2, 3] {
            assert!(store.plan(id).manifest_path.is_file());
        }
        assert!(store.plan(1).image_path().is_file());
        assert!(!store.plan(2).image_path().exists());
        assert!(store.plan(3).image_path().is_file());

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_rerun_produces_identical_manifests() {
        let root = temp_dir();
        let catalog = three_plants();
        let provider = RecordingProvider::new();
        let options = options(&root);

        sync_catalog(&catalog, &provider, &options);
        let store = AssetStore::new(&root);
        let first = std::fs::read(store.plan(1).manifest_path).unwrap();

        sync_catalog(&catalog, &provider, &options);
        let second = std::fs::read(store.plan(1).manifest_path).unwrap();
        assert_eq!(first, second);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_empty_catalog() {
        let root = temp_dir();
        let provider = RecordingProvider::new();

        let report = sync_catalog(
            &PlantCatalog::from_records(Vec::new()),
            &provider,
            &options(&root),
        );

        assert_eq!(report.total, 0);
        assert_eq!(report.succeeded, 0);
        assert!(report.failed_ids().is_empty());

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_truncate_reason() {
        let long = "x".repeat(200);
        assert_eq!(truncate_reason(&long).chars().count(), 50);
        assert_eq!(truncate_reason("short"), "short");
    }
}
