// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage handle trait definition

use crate::schema::SchemaDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Table identifier
///
/// Intrinsic to a storage handle; the catalog keys every table by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId(pub u32);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        TableId(id)
    }
}

/// Core trait that every table storage implementation must implement
pub trait StorageHandle: Send + Sync + fmt::Debug {
    /// Identity of this handle, used as the table id
    ///
    /// Must be stable for the handle's lifetime.
    fn id(&self) -> TableId;

    /// Schema of the tuples stored behind this handle
    fn schema(&self) -> Arc<SchemaDescriptor>;

    /// Backing file, if the handle is file based
    fn path(&self) -> Option<&Path> {
        None
    }
}
