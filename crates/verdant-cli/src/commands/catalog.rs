//! Catalog inspection commands

use anyhow::{bail, Result};
use clap::Subcommand;
use verdant_catalog::PlantCatalog;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List catalog entries
    List {
        /// Path to the plant catalog JSON file
        catalog: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Check the catalog for duplicate ids and empty names
    Validate {
        /// Path to the plant catalog JSON file
        catalog: String,
    },
}

pub fn run(cmd: CatalogCommands) -> Result<()> {
    match cmd {
        CatalogCommands::List { catalog, format } => run_list(&catalog, &format),
        CatalogCommands::Validate { catalog } => run_validate(&catalog),
    }
}

fn run_list(path: &str, format: &str) -> Result<()> {
    let catalog = PlantCatalog::load_from_file(path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(catalog.plants())?);
        }
        "text" => {
            for plant in catalog.iter() {
                println!("{:>5}  {}", plant.id, plant.display_name());
            }
            println!("\n{} plants", catalog.len());
        }
        other => bail!("Unknown format '{}'. Available: text, json", other),
    }

    Ok(())
}

fn run_validate(path: &str) -> Result<()> {
    let catalog = PlantCatalog::load_from_file(path)?;
    let problems = catalog.validate();

    if problems.is_empty() {
        println!("Catalog OK: {} plants", catalog.len());
        Ok(())
    } else {
        for problem in &problems {
            println!("  {}", problem);
        }
        bail!("{} problem(s) found", problems.len())
    }
}
