// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for RelCat

use colored::Colorize;
use relcat::{Catalog, CatalogConfig};

use super::commands::{CatalogSource, OutputFormat};
use super::output::CatalogFormatter;

/// Build a catalog from the command-line source and load the descriptor into it
fn open_catalog(source: &CatalogSource) -> Result<Catalog, Box<dyn std::error::Error>> {
    let mut config = match &source.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
            serde_json::from_str::<CatalogConfig>(&text)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
        }
        None => CatalogConfig::default(),
    };

    if let Some(extension) = &source.extension {
        config.data_file_extension = extension.clone();
    }
    log::debug!("Using catalog configuration {:?}", config);

    let catalog = Catalog::with_config(config);
    catalog.load_schema(&source.catalog)?;
    Ok(catalog)
}

/// Handle the tables command
pub fn handle_tables(
    source: CatalogSource,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&source)?;
    print!("{}", CatalogFormatter::tables(&catalog, format));
    Ok(())
}

/// Handle the describe command
pub fn handle_describe(
    source: CatalogSource,
    table: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = open_catalog(&source)?;
    let id = catalog.get_table_id(&table)?;
    print!("{}", CatalogFormatter::describe(&catalog, id, format)?);
    Ok(())
}

/// Handle the check command
pub fn handle_check(source: CatalogSource) -> Result<(), Box<dyn std::error::Error>> {
    match open_catalog(&source) {
        Ok(catalog) => {
            println!(
                "{} {} ({} tables)",
                "OK".bold().green(),
                source.catalog.display(),
                catalog.len()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "INVALID".bold().red(), e);
            Err(e)
        }
    }
}
