// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table catalog implementation
//!
//! The catalog maps table names and table ids to storage handles, display
//! names and primary-key field names. It is safe to share between threads
//! behind an `Arc` without any external locking.
//!
//! Two concurrent maps back it: table id to [`TableEntry`], and table name to
//! table id. Every single map operation is atomic. Re-registering a name under
//! a new id takes several such operations and is not atomic as a whole, so
//! concurrent registrations of the same name may interleave.

use super::config::CatalogConfig;
use super::entry::TableEntry;
use super::error::{CatalogError, CatalogResult, LoadError};
use super::loader;
use crate::schema::SchemaDescriptor;
use crate::storage::{HeapFile, StorageHandle, TableId};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Concurrent directory of all live tables
pub struct Catalog {
    /// Table id to everything known about the table
    tables: DashMap<TableId, TableEntry>,
    /// Table name to table id
    names: DashMap<String, TableId>,
    config: CatalogConfig,
}

impl Catalog {
    /// Create a new, empty catalog
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            tables: DashMap::new(),
            names: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Register a table
    ///
    /// The table id is `handle.id()`. `name` and `primary_key` may be empty.
    /// If `name` already belongs to a different id, that id is retired: its
    /// handle and primary key move onto the new id and the name now resolves
    /// to the new id.
    ///
    /// # Returns
    /// * `Ok(TableId)` - the id the table is registered under
    /// * `Err(CatalogError::InvalidArgument)` if `name` uses the reserved anonymous prefix
    pub fn add_table(
        &self,
        handle: Arc<dyn StorageHandle>,
        name: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> CatalogResult<TableId> {
        let name = name.into();
        self.check_caller_name(&name)?;
        Ok(self.register(handle, name, primary_key.into()))
    }

    /// Register a table without a primary key
    pub fn add_named_table(
        &self,
        handle: Arc<dyn StorageHandle>,
        name: impl Into<String>,
    ) -> CatalogResult<TableId> {
        self.add_table(handle, name, "")
    }

    /// Register a table under a generated name
    ///
    /// Generated names carry the reserved anonymous prefix, which caller
    /// supplied names are not allowed to use, so they never collide.
    pub fn add_anonymous_table(&self, handle: Arc<dyn StorageHandle>) -> CatalogResult<TableId> {
        let name = format!("{}{}", self.config.anonymous_prefix, Uuid::new_v4());
        Ok(self.register(handle, name, String::new()))
    }

    fn check_caller_name(&self, name: &str) -> CatalogResult<()> {
        let prefix = &self.config.anonymous_prefix;
        if !prefix.is_empty() && name.starts_with(prefix.as_str()) {
            return Err(CatalogError::InvalidArgument(format!(
                "table name '{}' uses the reserved prefix '{}'",
                name, prefix
            )));
        }
        Ok(())
    }

    fn register(&self, handle: Arc<dyn StorageHandle>, name: String, primary_key: String) -> TableId {
        let id = handle.id();
        let previous = self.names.get(&name).map(|mapped| *mapped.value());

        let entry = match previous {
            Some(previous_id) if previous_id != id => {
                let (handle, primary_key) = match self.tables.remove(&previous_id) {
                    Some((_, retired)) => (retired.handle, retired.primary_key),
                    // Already gone (cleared or migrated concurrently)
                    None => (handle, primary_key),
                };
                log::warn!(
                    "Table '{}' moved from id {} to id {}; id {} retired",
                    name,
                    previous_id,
                    id,
                    previous_id
                );
                TableEntry::new(id, name.clone(), handle, primary_key)
            }
            _ => TableEntry::new(id, name.clone(), handle, primary_key),
        };

        self.insert_entry(entry);
        self.names.insert(name.clone(), id);
        log::debug!("Registered table '{}' with id {}", name, id);
        id
    }

    fn insert_entry(&self, entry: TableEntry) {
        let id = entry.id;
        let name = entry.name.clone();

        if let Some(stale) = self.tables.insert(id, entry) {
            if stale.name != name {
                // One name per id: forget the old name if it still points here
                self.names
                    .remove_if(stale.name.as_str(), |_, mapped| *mapped == id);
                log::warn!(
                    "Table id {} renamed from '{}' to '{}'",
                    id,
                    stale.name,
                    name
                );
            }
        }
    }

    /// Id of the table called `name`
    pub fn get_table_id(&self, name: &str) -> CatalogResult<TableId> {
        self.names
            .get(name)
            .map(|mapped| *mapped.value())
            .ok_or_else(|| CatalogError::NoSuchTable(format!("no table named '{}'", name)))
    }

    /// Schema reported by the table's storage handle
    pub fn get_tuple_desc(&self, table_id: TableId) -> CatalogResult<Arc<SchemaDescriptor>> {
        self.with_entry(table_id, |entry| entry.schema())
    }

    pub fn get_storage_handle(&self, table_id: TableId) -> CatalogResult<Arc<dyn StorageHandle>> {
        self.with_entry(table_id, |entry| entry.handle.clone())
    }

    /// Primary-key field name, empty if the table declares none
    pub fn get_primary_key(&self, table_id: TableId) -> CatalogResult<String> {
        self.with_entry(table_id, |entry| entry.primary_key.clone())
    }

    pub fn get_table_name(&self, table_id: TableId) -> CatalogResult<String> {
        self.with_entry(table_id, |entry| entry.name.clone())
    }

    fn with_entry<T>(&self, table_id: TableId, f: impl FnOnce(&TableEntry) -> T) -> CatalogResult<T> {
        self.tables
            .get(&table_id)
            .map(|entry| f(entry.value()))
            .ok_or_else(|| CatalogError::NoSuchTable(format!("no table with id {}", table_id)))
    }

    /// Ids of all registered tables, copied at call time
    ///
    /// No ordering is guaranteed. Later catalog changes do not affect the
    /// returned iterator.
    pub fn table_ids(&self) -> impl Iterator<Item = TableId> {
        let ids: Vec<TableId> = self.tables.iter().map(|entry| *entry.key()).collect();
        ids.into_iter()
    }

    /// Copies of all live entries, ordered by table name
    pub fn tables(&self) -> Vec<TableEntry> {
        let mut entries: Vec<TableEntry> =
            self.tables.iter().map(|entry| entry.value().clone()).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Remove every table
    pub fn clear(&self) {
        self.names.clear();
        self.tables.clear();
        log::info!("Catalog cleared");
    }

    /// Register every table described in a catalog descriptor file
    ///
    /// Each table's data lives next to the descriptor, in
    /// `<table name>.<data_file_extension>`. The whole file is parsed and every
    /// storage handle built before the first table is registered; any error
    /// leaves the catalog untouched.
    ///
    /// # Returns
    /// * `Ok(Vec<TableId>)` - ids of the loaded tables, in file order
    /// * `Err(CatalogError::Load)` - unreadable file or invalid line
    pub fn load_schema<P: AsRef<Path>>(&self, path: P) -> CatalogResult<Vec<TableId>> {
        let path = path.as_ref();
        let io_error = |e: std::io::Error| LoadError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let contents = std::fs::read_to_string(path).map_err(io_error)?;
        let definitions = loader::parse_descriptor(path, &contents, &self.config)?;

        let base_dir = std::path::absolute(path)
            .map_err(io_error)?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut pending = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let data_path = self.data_file_path(&base_dir, &definition.name);
            let file = HeapFile::new(&data_path, Arc::new(definition.schema)).map_err(io_error)?;
            pending.push((definition.name, definition.primary_key, file));
        }

        let mut ids = Vec::with_capacity(pending.len());
        for (name, primary_key, file) in pending {
            log::info!("Added table : {} with schema {}", name, file.schema());
            ids.push(self.register(Arc::new(file), name, primary_key));
        }

        log::debug!("Loaded {} tables from {}", ids.len(), path.display());
        Ok(ids)
    }

    fn data_file_path(&self, base_dir: &Path, table_name: &str) -> PathBuf {
        let extension = &self.config.data_file_extension;
        if extension.is_empty() {
            base_dir.join(table_name)
        } else {
            base_dir.join(format!("{}.{}", table_name, extension))
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
