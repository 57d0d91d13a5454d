// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog entries

use crate::schema::SchemaDescriptor;
use crate::storage::{StorageHandle, TableId};
use std::sync::Arc;

/// Everything the catalog knows about one live table
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub id: TableId,
    pub name: String,
    pub handle: Arc<dyn StorageHandle>,
    /// Empty when the table declares no primary key
    pub primary_key: String,
}

impl TableEntry {
    pub fn new(
        id: TableId,
        name: String,
        handle: Arc<dyn StorageHandle>,
        primary_key: String,
    ) -> Self {
        Self {
            id,
            name,
            handle,
            primary_key,
        }
    }

    pub fn schema(&self) -> Arc<SchemaDescriptor> {
        self.handle.schema()
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }
}
