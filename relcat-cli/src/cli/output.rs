// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use relcat::{Catalog, CatalogResult, StorageHandle, TableEntry, TableId};

use super::commands::OutputFormat;

/// Catalog formatter for different output formats
pub struct CatalogFormatter;

impl CatalogFormatter {
    /// Format every registered table
    pub fn tables(catalog: &Catalog, format: OutputFormat) -> String {
        let entries = catalog.tables();
        match format {
            OutputFormat::Table => Self::tables_as_table(&entries),
            OutputFormat::Json => Self::tables_as_json(&entries),
        }
    }

    /// Format the fields of one table
    pub fn describe(
        catalog: &Catalog,
        id: TableId,
        format: OutputFormat,
    ) -> CatalogResult<String> {
        let name = catalog.get_table_name(id)?;
        let primary_key = catalog.get_primary_key(id)?;
        let schema = catalog.get_tuple_desc(id)?;

        let output = match format {
            OutputFormat::Table => {
                let mut output = String::new();
                output.push_str(&format!("{}\n", format!("Table {}", name).bold().green()));
                output.push_str(&format!("Table id: {}\n", id));
                output.push_str(&format!("Tuple size: {} bytes\n\n", schema.byte_size()));

                let mut table = Table::new();
                table.load_preset(UTF8_FULL);
                table.set_header(
                    ["#", "Field", "Type", "Bytes", "Key"]
                        .iter()
                        .map(|h| Cell::new(h).fg(Color::Green))
                        .collect::<Vec<_>>(),
                );

                for (i, field) in schema.iter().enumerate() {
                    let field_name = field.name.as_deref().unwrap_or("NULL");
                    let is_key = !primary_key.is_empty()
                        && field.name.as_deref() == Some(primary_key.as_str());
                    let key = if is_key { "PK" } else { "" };
                    table.add_row(vec![
                        i.to_string(),
                        field_name.to_string(),
                        field.field_type.to_string(),
                        field.field_type.encoded_len().to_string(),
                        key.to_string(),
                    ]);
                }

                output.push_str(&table.to_string());
                output.push('\n');
                output
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "id": id,
                    "name": name,
                    "primary_key": primary_key,
                    "byte_size": schema.byte_size(),
                    "fields": schema.iter().collect::<Vec<_>>(),
                });
                Self::pretty(&json)
            }
        };

        Ok(output)
    }

    fn tables_as_table(entries: &[TableEntry]) -> String {
        if entries.is_empty() {
            return format!("{}\n", "No tables found".yellow());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", "Catalog Tables".bold().green()));
        output.push_str(&format!("Tables registered: {}\n\n", entries.len()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            ["Id", "Name", "Primary Key", "Fields", "Tuple Size", "Data File"]
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green))
                .collect::<Vec<_>>(),
        );

        for entry in entries {
            let schema = entry.schema();
            table.add_row(vec![
                entry.id.to_string(),
                entry.name.clone(),
                if entry.has_primary_key() {
                    entry.primary_key.clone()
                } else {
                    "-".to_string()
                },
                schema.to_string(),
                schema.byte_size().to_string(),
                Self::data_file(entry.handle.as_ref()),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn tables_as_json(entries: &[TableEntry]) -> String {
        let json = serde_json::json!({
            "tables": entries.iter().map(|entry| {
                let schema = entry.schema();
                serde_json::json!({
                    "id": entry.id,
                    "name": entry.name,
                    "primary_key": entry.primary_key,
                    "byte_size": schema.byte_size(),
                    "fields": schema.iter().collect::<Vec<_>>(),
                    "data_file": Self::data_file(entry.handle.as_ref()),
                })
            }).collect::<Vec<_>>(),
        });
        Self::pretty(&json)
    }

    fn data_file(handle: &dyn StorageHandle) -> String {
        handle
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn pretty(json: &serde_json::Value) -> String {
        let mut text = serde_json::to_string_pretty(json).unwrap_or_else(|_| {
            "{\"status\": \"error\", \"error\": \"Could not serialize catalog to JSON\"}".to_string()
        });
        text.push('\n');
        text
    }
}
