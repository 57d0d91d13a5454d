// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! File-backed storage handle
//!
//! A `HeapFile` binds a table's data file to its schema. The handle id is the
//! CRC-32 of the file's absolute path, so every handle opened on the same file
//! reports the same table id.

use super::handle::{StorageHandle, TableId};
use crate::schema::SchemaDescriptor;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HeapFile {
    path: PathBuf,
    schema: Arc<SchemaDescriptor>,
    id: TableId,
}

impl HeapFile {
    /// Bind a handle to `path`
    ///
    /// The file is not opened or created; only the path is resolved.
    pub fn new<P: AsRef<Path>>(path: P, schema: Arc<SchemaDescriptor>) -> io::Result<Self> {
        let path = std::path::absolute(path.as_ref())?;
        let id = TableId(crc32fast::hash(path.to_string_lossy().as_bytes()));
        Ok(Self { path, schema, id })
    }

    /// Number of bytes a single tuple occupies in this file
    pub fn tuple_size(&self) -> usize {
        self.schema.byte_size()
    }
}

impl StorageHandle for HeapFile {
    fn id(&self) -> TableId {
        self.id
    }

    fn schema(&self) -> Arc<SchemaDescriptor> {
        self.schema.clone()
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
