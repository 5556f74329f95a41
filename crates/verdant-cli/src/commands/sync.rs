//! Sync command - run the full batch download

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use verdant_catalog::PlantCatalog;
use verdant_gen::{providers, sync_catalog, SyncOptions, VerdantConfig, INTER_REQUEST_DELAY_MS};

#[allow(clippy::too_many_arguments)]
pub fn run(
    catalog_path: &str,
    assets_root: &str,
    provider_name: Option<&str>,
    width: Option<u32>,
    height: Option<u32>,
    delay_ms: Option<u64>,
    insecure: bool,
    config_path: Option<&str>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => VerdantConfig::load_from_file(Path::new(path))?,
        None => VerdantConfig::load()?,
    };
    if insecure {
        config.endpoint.accept_invalid_certs = true;
    }

    println!("Loading plant data from {}...", catalog_path);
    let catalog = PlantCatalog::load_from_file(catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path))?;
    println!("Found {} plants. Starting download...\n", catalog.len());

    let name = provider_name.unwrap_or(&config.generation.provider);
    let provider = providers::create_provider(name, &config)?;

    let options = SyncOptions {
        width: width.unwrap_or(config.generation.width),
        height: height.unwrap_or(config.generation.height),
        delay: Duration::from_millis(delay_ms.unwrap_or(INTER_REQUEST_DELAY_MS)),
        ..SyncOptions::new(assets_root)
    };

    let report = sync_catalog(&catalog, provider.as_ref(), &options);

    println!();
    println!("{}", "=".repeat(60));
    println!("Complete! Success: {}/{}", report.succeeded, report.total);
    if !report.all_succeeded() {
        println!("Failed IDs: {:?}", report.failed_ids());
    }

    Ok(())
}
